use web_sys::Storage;

use crate::error::FxError;
use crate::store::PreferenceStore;
use crate::utils::Theme;

/// Theme preference kept in `window.localStorage` under a single key.
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn available() -> bool {
        Self::storage().is_some()
    }

    // Storage access throws in sandboxed frames and some private modes.
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get_preference(&self) -> Option<Theme> {
        let raw = Self::storage()?.get_item(&self.key).ok().flatten()?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::debug!("Ignoring stored value under '{}': {}", self.key, e);
                None
            }
        }
    }

    fn set_preference(&self, theme: Theme) -> Result<(), FxError> {
        let storage = Self::storage().ok_or_else(|| {
            FxError::Storage("localStorage unavailable".to_string())
        })?;
        storage
            .set_item(&self.key, theme.as_str())
            .map_err(|e| FxError::Storage(format!("{:?}", e)))
    }
}
