use std::path::PathBuf;

use crate::storage::THEME_KEY;

/// Where the native builds keep the persisted theme mode.
pub fn theme_store_path() -> PathBuf {
    // Get path from environment or fall back to a dotfile in the home directory
    match std::env::var("PORTAL_THEME_FILE") {
        Ok(path) => PathBuf::from(path),
        Err(_) => {
            log::warn!("PORTAL_THEME_FILE not set, using home directory fallback");
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(format!(".{}", THEME_KEY))
        }
    }
}
