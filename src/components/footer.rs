use chrono::Datelike;
use dioxus::prelude::*;

use crate::utils::ThemeState;

#[component]
pub fn Footer() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let record = theme.read().record();
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            style: "margin-top: 24px; color: {record.color}; text-align: center; opacity: 0.8;",
            "© {year} KL Student Portal"
        }
    }
}
