#[cfg(target_arch = "wasm32")]
mod local;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageStore;
pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use crate::error::FxError;
use crate::utils::Theme;

/// Where the single theme preference lives between page loads.
pub trait PreferenceStore {
    /// `None` when nothing usable is stored.
    fn get_preference(&self) -> Option<Theme>;
    fn set_preference(&self, theme: Theme) -> Result<(), FxError>;
}

/// `localStorage` under `key` when the browser allows it, otherwise a store
/// that only lasts for the current page.
#[cfg(target_arch = "wasm32")]
pub fn browser_store(key: &str) -> Rc<dyn PreferenceStore> {
    if LocalStorageStore::available() {
        Rc::new(LocalStorageStore::new(key))
    } else {
        log::warn!("localStorage unavailable, theme will not persist");
        Rc::new(MemoryStore::default())
    }
}
