mod theme_state;

pub use theme_state::{ThemeMode, ThemeRecord, ThemeState};
