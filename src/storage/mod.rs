#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod file;

// Re-export commonly used items
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

use crate::error::StoreError;
use crate::utils::ThemeMode;

/// Key the portal keeps its one persisted value under.
pub const THEME_KEY: &str = "portal-theme";

/// Best-effort persistence for the theme mode. Callers treat both
/// operations as optional: a `None` load falls back to the default mode
/// and a failed save is dropped.
pub trait ThemeStore {
    fn load(&self) -> Option<ThemeMode>;
    fn save(&self, mode: ThemeMode) -> Result<(), StoreError>;
}

/// The store backing the current build target.
#[cfg(target_arch = "wasm32")]
pub fn theme_store() -> BrowserStore {
    BrowserStore
}

#[cfg(not(target_arch = "wasm32"))]
pub fn theme_store() -> FileStore {
    FileStore::new(crate::configs::theme_store_path())
}
