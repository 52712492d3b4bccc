use dioxus::prelude::*;

use crate::configs::FxConfig;

/// Wires page behaviors to whatever the calling component just rendered.
///
/// Call it from every component that renders sidebar, card, button or reveal
/// markup; repeated installs only bind elements that are new. Listeners of the
/// component's elements are released once it unmounts.
pub fn use_page_fx() {
    let config = use_hook(FxConfig::default);
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        if let Err(e) = crate::dom::install(&config) {
            log::warn!("Page behaviors not installed: {}", e);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &config;
    });
    use_drop(|| {
        // The nodes are still attached while the drop runs.
        #[cfg(target_arch = "wasm32")]
        crate::dom::release_detached_later();
    });
}
