//! Browser-backed preference storage.

use gamecoach_core::{Language, PreferenceStore, bootstrap_language, persist_language};
use std::fmt::Display;

/// `localStorage` as a [`PreferenceStore`]. Values are stored as plain
/// strings, not JSON, so other scripts on the page can read them.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPreferences;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Storage(String),
}

impl StorageError {
    fn from_js(value: &wasm_bindgen::JsValue) -> Self {
        Self::Storage(crate::dom::js_error_message(value))
    }
}

fn storage() -> Result<web_sys::Storage, StorageError> {
    crate::dom::local_storage().map_err(|e| StorageError::from_js(&e))
}

impl PreferenceStore for BrowserPreferences {
    type Error = StorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        storage()?
            .get_item(key)
            .map_err(|e| StorageError::from_js(&e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::from_js(&e))
    }
}

/// Bootstrap from `store`, logging any failure and falling back to the
/// default language.
pub fn language_or_default<S>(store: &mut S) -> Language
where
    S: PreferenceStore,
    S::Error: Display,
{
    bootstrap_language(store).unwrap_or_else(|err| {
        log::error!("could not read language preference: {err}");
        Language::default()
    })
}

/// Resolve the startup language from browser storage.
///
/// Storage failures (blocked storage, sandboxed frames, quota) are logged and
/// fall back to the default language so the app still renders.
#[must_use]
pub fn startup_language() -> Language {
    language_or_default(&mut BrowserPreferences)
}

/// Persist a language chosen during the session.
pub fn save_language(lang: Language) {
    if let Err(err) = persist_language(&mut BrowserPreferences, lang) {
        log::error!("could not save language preference: {err}");
    }
}
