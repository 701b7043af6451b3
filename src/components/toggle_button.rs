use dioxus::prelude::*;

use crate::utils::ThemeState;

/// The one place the theme mode is mutated.
#[component]
pub fn ToggleButton() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();
    let record = theme.read().record();
    let label = theme.read().toggle_label();

    rsx! {
        button {
            aria_label: "Toggle theme",
            style: "padding: 8px 12px; border-radius: 6px; border: none; cursor: pointer; background: {record.accent}; color: #fff; font-weight: 600;",
            onclick: move |_| theme.write().toggle(),
            "{label}"
        }
    }
}
