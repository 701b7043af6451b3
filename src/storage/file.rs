use std::fs;
use std::path::PathBuf;

use super::ThemeStore;
use crate::error::StoreError;
use crate::utils::ThemeMode;

/// File-backed store for desktop and native builds. The file holds the bare
/// mode string, mirroring what the web build keeps in `localStorage`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeStore for FileStore {
    fn load(&self) -> Option<ThemeMode> {
        let raw = fs::read_to_string(&self.path).ok()?;
        raw.trim().parse().ok()
    }

    fn save(&self, mode: ThemeMode) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, mode.as_str())?;
        Ok(())
    }
}
