use dioxus::prelude::*;

use crate::utils::{ThemeMode, ThemeState};

#[component]
pub fn DashboardCard(title: String, children: Element) -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let record = theme.read().record();
    let shadow = card_shadow(theme.read().mode);

    rsx! {
        div {
            style: "background: {record.surface}; color: {record.color}; padding: 12px; border-radius: 8px; box-shadow: {shadow}; margin-bottom: 12px;",
            h3 {
                style: "margin: 0 0 8px 0;",
                "{title}"
            }
            div { {children} }
        }
    }
}

// Dark surfaces need a deeper shadow to read as raised.
pub(crate) fn card_shadow(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "0 1px 3px rgba(0,0,0,0.06)",
        ThemeMode::Dark => "0 1px 8px rgba(0,0,0,0.6)",
    }
}
