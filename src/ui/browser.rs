//! Browser glue
//!
//! localStorage-backed [`KeyValueStore`], color-scheme detection, the
//! document theme class and the wall clock. On the server every call is a
//! harmless no-op so components render the same markup on both sides.

use crate::core::{KeyValueStore, Theme};
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// `window.localStorage` as a [`KeyValueStore`]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(not(feature = "ssr"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage write failed for {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(feature = "ssr")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// Detect system color scheme preference, `None` outside a browser
#[cfg(not(feature = "ssr"))]
pub fn system_prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window.match_media("(prefers-color-scheme: dark)").ok()??;
    Some(query.matches())
}

#[cfg(feature = "ssr")]
pub fn system_prefers_dark() -> Option<bool> {
    None
}

/// Put the theme class on `<html>` and drop the other one
#[cfg(not(feature = "ssr"))]
pub fn apply_document_theme(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let class_list = html.class_list();
    let _ = class_list.add_1(theme.as_str());
    let _ = class_list.remove_1(theme.toggled().as_str());
}

#[cfg(feature = "ssr")]
pub fn apply_document_theme(_theme: Theme) {}

/// Milliseconds since the Unix epoch
#[cfg(not(feature = "ssr"))]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(feature = "ssr")]
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Native confirmation dialog. Declines outside a browser.
#[cfg(not(feature = "ssr"))]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(feature = "ssr")]
pub fn confirm(_message: &str) -> bool {
    false
}
