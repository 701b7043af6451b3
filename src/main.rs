use dioxus::prelude::*;
use student_portal::storage::{theme_store, ThemeStore};
use student_portal::utils::ThemeState;
use student_portal::views::Home;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_signal(ThemeState::load);
    use_context_provider(|| theme);

    // Best-effort write-back on every mode change; failures are dropped.
    use_effect(move || {
        let mode = theme.read().mode;
        let _ = theme_store().save(mode);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Home {}
    }
}
