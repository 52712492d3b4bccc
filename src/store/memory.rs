use std::cell::Cell;

use crate::error::FxError;
use crate::store::PreferenceStore;
use crate::utils::Theme;

/// Per-page store for hosts without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Cell<Option<Theme>>,
}

impl MemoryStore {
    pub fn new(initial: Option<Theme>) -> Self {
        Self { value: Cell::new(initial) }
    }
}

impl PreferenceStore for MemoryStore {
    fn get_preference(&self) -> Option<Theme> {
        self.value.get()
    }

    fn set_preference(&self, theme: Theme) -> Result<(), FxError> {
        self.value.set(Some(theme));
        Ok(())
    }
}
