use dioxus::prelude::*;

use super::ToggleButton;
use crate::utils::ThemeState;

#[component]
pub fn Header() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let record = theme.read().record();

    rsx! {
        header {
            style: "background: {record.surface}; color: {record.color}; padding: 16px; display: flex; align-items: center; justify-content: space-between; border-radius: 8px; margin-bottom: 16px;",
            h1 {
                style: "margin: 0; font-size: 18px;",
                "KL Student Portal"
            }
            ToggleButton {}
        }
    }
}
