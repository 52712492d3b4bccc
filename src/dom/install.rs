use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, Event, EventTarget, MouseEvent, Window };

use crate::behaviors::{ claim, hover, reveal, ripple, sidebar, theme, Bindings, ClickPoint };
use crate::configs::FxConfig;
use crate::dom::TimeoutScheduler;
use crate::error::FxError;
use crate::store::browser_store;

thread_local! {
    static BINDINGS: RefCell<Bindings<Element, EventListener>> = RefCell::new(Bindings::new());
}

/// Wires every behavior to the current document.
///
/// Safe to call again after the page re-renders: elements that already carry
/// a behavior are skipped, so listeners are never stacked, and listeners of
/// elements that have left the page are released first.
pub fn install(config: &FxConfig) -> Result<(), FxError> {
    let window = web_sys::window().ok_or_else(|| FxError::MissingElement("window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| FxError::MissingElement("document".to_string()))?;

    release_detached();

    install_theme(&document, config)?;
    install_sidebar(&window, &document, config);
    install_reveal(&window, &document, config);
    install_hover(&document, config);
    install_ripple(&document, config);
    log::debug!("{} page listener(s) bound", bound_listeners());
    Ok(())
}

/// Unbinds listeners whose element is no longer in the document.
pub fn release_detached() -> usize {
    let released = BINDINGS.with(|bindings| bindings.borrow_mut().prune());
    if released > 0 {
        log::debug!("Released {} listener(s) of detached elements", released);
    }
    released
}

/// Same as `release_detached`, after the current render has been applied.
pub fn release_detached_later() {
    use crate::behaviors::Scheduler;

    TimeoutScheduler.schedule(0, Box::new(|| {
        release_detached();
    }));
}

pub fn bound_listeners() -> usize {
    BINDINGS.with(|bindings| bindings.borrow().len())
}

pub fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

/// Entry point for server-rendered pages using the stock configuration.
#[wasm_bindgen]
pub fn boot() {
    boot_config(FxConfig::default());
}

/// Entry point taking a JSON `FxConfig`; unspecified fields keep their defaults.
#[wasm_bindgen]
pub fn boot_with_config(json: &str) -> Result<(), JsValue> {
    let config = FxConfig::from_json(json)?;
    boot_config(config);
    Ok(())
}

fn boot_config(config: FxConfig) {
    // A host app may have installed its own logger already.
    let _ = console_log::init_with_level(config.level());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if is_loading(&document) {
        let listener = EventListener::once(&document, "DOMContentLoaded", move |_| run_install(&config));
        keep(None, listener);
    } else {
        run_install(&config);
    }
}

fn run_install(config: &FxConfig) {
    if let Err(e) = install(config) {
        log::error!("Failed to install page behaviors: {}", e);
    }
}

fn keep(owner: Option<&Element>, listener: EventListener) {
    BINDINGS.with(|bindings| bindings.borrow_mut().keep(owner.cloned(), listener));
}

/// Binds `handler` and ties the listener's lifetime to `owner`.
fn listen<F>(owner: Option<&Element>, target: &EventTarget, event: &'static str, handler: F)
    where F: FnMut(&Event) + 'static
{
    keep(owner, EventListener::new(target, event, handler));
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Bad selector '{}': {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn toggle_icons(document: &Document, selector: &str) -> Vec<Element> {
    query_all(document, selector)
        .iter()
        .filter_map(|toggle| toggle.query_selector("i").ok().flatten())
        .collect()
}

fn install_theme(document: &Document, config: &FxConfig) -> Result<(), FxError> {
    let Some(root) = document.document_element() else {
        return Ok(());
    };
    let settings = Rc::new(config.theme.clone());
    let store = browser_store(&settings.storage_key);

    let shown = theme::restore_once(&root, store.as_ref(), &settings)?;
    theme::sync_icons(&toggle_icons(document, &settings.toggle_selector), shown)?;

    for toggle in query_all(document, &settings.toggle_selector) {
        if !claim(&toggle, "theme") {
            continue;
        }
        let document = document.clone();
        let root = root.clone();
        let store = store.clone();
        let settings = settings.clone();
        listen(Some(&toggle), &toggle, "click", move |_| {
            let icons = toggle_icons(&document, &settings.toggle_selector);
            let body = document.body().map(Element::from);
            let result = theme::toggle(&root, store.as_ref(), &icons, body, &TimeoutScheduler, &settings);
            if let Err(e) = result {
                log::warn!("Theme toggle failed: {}", e);
            }
        });
    }
    Ok(())
}

fn install_sidebar(window: &Window, document: &Document, config: &FxConfig) {
    let settings = Rc::new(config.sidebar.clone());
    let panel = query_one(document, &settings.sidebar_selector);
    let overlay = query_one(document, &settings.overlay_selector);

    let close_handler = || {
        let panel = panel.clone();
        let overlay = overlay.clone();
        let settings = settings.clone();
        move |_: &Event| {
            if let Err(e) = sidebar::close(panel.as_ref(), overlay.as_ref(), &settings) {
                log::warn!("Failed to close sidebar: {}", e);
            }
        }
    };

    if let Some(button) = document.get_element_by_id(&settings.open_button_id) {
        if claim(&button, "sidebar-open") {
            let panel = panel.clone();
            let overlay = overlay.clone();
            let settings = settings.clone();
            listen(Some(&button), &button, "click", move |_| {
                if let Err(e) = sidebar::open(panel.as_ref(), overlay.as_ref(), &settings) {
                    log::warn!("Failed to open sidebar: {}", e);
                }
            });
        }
    }

    if let Some(button) = document.get_element_by_id(&settings.close_button_id) {
        if claim(&button, "sidebar-close") {
            listen(Some(&button), &button, "click", close_handler());
        }
    }

    if let Some(overlay_el) = overlay.as_ref() {
        if claim(overlay_el, "sidebar-overlay") {
            listen(Some(overlay_el), overlay_el, "click", close_handler());
        }
    }

    for link in query_all(document, &settings.nav_link_selector) {
        if !claim(&link, "sidebar-nav") {
            continue;
        }
        let window = window.clone();
        let panel = panel.clone();
        let overlay = overlay.clone();
        let settings = settings.clone();
        listen(Some(&link), &link, "click", move |_| {
            let Some(width) = window.inner_width().ok().and_then(|w| w.as_f64()) else {
                return;
            };
            if let Err(e) = sidebar::close_for_nav(width, panel.as_ref(), overlay.as_ref(), &settings) {
                log::warn!("Failed to close sidebar: {}", e);
            }
        });
    }
}

fn install_reveal(window: &Window, document: &Document, config: &FxConfig) {
    let settings = Rc::new(config.reveal.clone());
    let run = {
        let window = window.clone();
        let document = document.clone();
        let settings = settings.clone();
        move || {
            let Some(height) = window.inner_height().ok().and_then(|h| h.as_f64()) else {
                return;
            };
            let elements = query_all(&document, &settings.selector);
            if let Err(e) = reveal::reveal(&elements, height, &settings) {
                log::warn!("Scroll reveal failed: {}", e);
            }
        }
    };

    // Newly rendered targets get checked on every install.
    run();

    // The scroll listener is window-wide, so it is bound once per document
    // and lives as long as the root element.
    let Some(root) = document.document_element() else {
        return;
    };
    if claim(&root, "reveal") {
        listen(Some(&root), window, "scroll", move |_| run());
    }
}

fn install_hover(document: &Document, config: &FxConfig) {
    let settings = Rc::new(config.hover.clone());
    for card in query_all(document, &settings.selector) {
        if !claim(&card, "hover") {
            continue;
        }
        {
            let card_ref = card.clone();
            let settings = settings.clone();
            listen(Some(&card), &card, "mouseenter", move |_| {
                if let Err(e) = hover::enter(&card_ref, &settings) {
                    log::warn!("Hover enter failed: {}", e);
                }
            });
        }
        let card_ref = card.clone();
        let settings = settings.clone();
        listen(Some(&card), &card, "mouseleave", move |_| {
            if let Err(e) = hover::leave(&card_ref, &settings) {
                log::warn!("Hover leave failed: {}", e);
            }
        });
    }
}

fn install_ripple(document: &Document, config: &FxConfig) {
    let settings = Rc::new(config.ripple.clone());
    for button in query_all(document, &settings.selector) {
        if !claim(&button, "ripple") {
            continue;
        }
        let button_ref = button.clone();
        let settings = settings.clone();
        listen(Some(&button), &button, "click", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let click = ClickPoint {
                client_x: f64::from(mouse.client_x()),
                client_y: f64::from(mouse.client_y()),
            };
            if let Err(e) = ripple::spawn(&button_ref, click, &TimeoutScheduler, &settings) {
                log::warn!("Ripple failed: {}", e);
            }
        });
    }
}
