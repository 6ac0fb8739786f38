//! Small DOM helpers shared by the app shell and the theme context.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Storage};

use super::constants::LOADING_ELEMENT_ID;

/// Hide the static loading overlay shipped in `index.html`.
pub fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available, cannot hide loading screen");
        return;
    };

    let Some(loading) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("loading element '{}' not present", LOADING_ELEMENT_ID);
        return;
    };

    if let Some(html_element) = loading.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("failed to add 'hidden' class to loading screen: {:?}", e);
        }
    }

    // Also set display:none in case the stylesheet has not loaded yet
    if let Err(e) = loading.set_attribute("style", "display: none !important;") {
        log::warn!("failed to set loading screen style: {:?}", e);
    }

    log::debug!("loading screen hidden");
}

/// Add or remove `class` on the document's root `<html>` element.
pub fn set_root_class(class: &str, enabled: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let result = if enabled {
        root.class_list().add_1(class)
    } else {
        root.class_list().remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("failed to update root class '{}': {:?}", class, e);
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn read_local(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn write_local(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("failed to persist '{}': {:?}", key, e);
            }
        }
        None => log::debug!("local storage unavailable, '{}' not persisted", key),
    }
}

/// Whether the media query currently matches (false when unsupported).
pub fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}
