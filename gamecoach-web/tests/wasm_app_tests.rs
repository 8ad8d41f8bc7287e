#![cfg(target_arch = "wasm32")]

use gamecoach_core::{LANGUAGE_KEY, Language, PreferenceStore};
use gamecoach_web::dom;
use gamecoach_web::storage::{BrowserPreferences, save_language, startup_language};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_language() {
    let storage = dom::local_storage().expect("localStorage");
    let _ = storage.remove_item(LANGUAGE_KEY);
}

#[wasm_bindgen_test]
fn first_visit_writes_english_to_local_storage() {
    clear_language();
    assert_eq!(startup_language(), Language::English);
    assert_eq!(
        BrowserPreferences.get(LANGUAGE_KEY).unwrap().as_deref(),
        Some("en")
    );
}

#[wasm_bindgen_test]
fn stored_arabic_is_restored() {
    clear_language();
    save_language(Language::Arabic);
    assert_eq!(startup_language(), Language::Arabic);
    // Stored raw, not JSON-encoded.
    let raw = dom::local_storage()
        .unwrap()
        .get_item(LANGUAGE_KEY)
        .unwrap();
    assert_eq!(raw.as_deref(), Some("ar"));
    clear_language();
}

#[wasm_bindgen_test]
fn document_language_sets_dir() {
    dom::apply_document_language("ar", "rtl");
    let html = dom::document().document_element().expect("html element");
    assert_eq!(html.get_attribute("dir").as_deref(), Some("rtl"));
    dom::apply_document_language("en", "ltr");
    assert_eq!(html.get_attribute("dir").as_deref(), Some("ltr"));
}
