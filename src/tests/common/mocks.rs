use std::cell::{Cell, RefCell};

use crate::error::StoreError;
use crate::storage::ThemeStore;
use crate::utils::ThemeMode;

/// In-memory stand-in for the platform store, with switches to make either
/// operation fail.
pub struct MockThemeStore {
    pub stored: RefCell<Option<ThemeMode>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub writes: Cell<usize>,
}

impl MockThemeStore {
    pub fn empty() -> Self {
        Self {
            stored: RefCell::new(None),
            fail_reads: false,
            fail_writes: false,
            writes: Cell::new(0),
        }
    }

    pub fn holding(mode: ThemeMode) -> Self {
        let store = Self::empty();
        *store.stored.borrow_mut() = Some(mode);
        store
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::holding(ThemeMode::Dark)
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::empty()
        }
    }
}

impl ThemeStore for MockThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        if self.fail_reads {
            return None;
        }
        *self.stored.borrow()
    }

    fn save(&self, mode: ThemeMode) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write("mock write failure".to_string()));
        }
        *self.stored.borrow_mut() = Some(mode);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
