use dioxus::prelude::*;

use crate::components::{DashboardCard, Footer, Header};
use crate::utils::ThemeState;

/// Portal page: header, announcement card, course/profile grid, footer.
#[component]
pub fn Home() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let record = theme.read().record();

    rsx! {
        div {
            style: "min-height: 100vh; padding: 24px; background: {record.background}; color: {record.color}; transition: background 200ms ease, color 200ms ease;",
            div {
                style: "max-width: 900px; margin: 0 auto;",
                Header {}
                main {
                    DashboardCard {
                        title: "Announcements",
                        p {
                            style: "margin: 0;",
                            "Welcome to the KL Student Portal. The theme you pick here follows you across the whole page."
                        }
                    }
                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                        DashboardCard {
                            title: "Courses",
                            ul {
                                style: "margin: 0; padding-left: 18px;",
                                li { "Algorithms" }
                                li { "Web Development" }
                                li { "Operating Systems" }
                            }
                        }
                        DashboardCard {
                            title: "Profile",
                            p {
                                style: "margin: 0;",
                                "Name: Student 001"
                            }
                            p {
                                style: "margin: 6px 0 0 0;",
                                "Year: 2"
                            }
                        }
                    }
                }
                Footer {}
            }
        }
    }
}
