use wasm_bindgen::JsValue;

use super::{ThemeStore, THEME_KEY};
use crate::error::StoreError;
use crate::utils::ThemeMode;

/// `localStorage`-backed store for web builds.
pub struct BrowserStore;

impl ThemeStore for BrowserStore {
    fn load(&self) -> Option<ThemeMode> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(THEME_KEY).ok().flatten()?;
        raw.parse().ok()
    }

    fn save(&self, mode: ThemeMode) -> Result<(), StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(unavailable)?
            .ok_or_else(|| StoreError::Unavailable("local storage disabled".to_string()))?;
        storage.set_item(THEME_KEY, mode.as_str()).map_err(write_failed)
    }
}

fn unavailable(err: JsValue) -> StoreError {
    StoreError::Unavailable(format!("{:?}", err))
}

fn write_failed(err: JsValue) -> StoreError {
    StoreError::Write(format!("{:?}", err))
}
