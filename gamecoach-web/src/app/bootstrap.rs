use gamecoach_core::Language;
use yew::prelude::*;

/// Read the persisted language on first mount. Later renders reuse the value
/// and never go back to storage.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_startup_language() -> Language {
    let language = use_state(crate::storage::startup_language);
    *language
}

/// Keep `<html lang dir>` in step with the active language.
#[hook]
pub fn use_document_language(language: Language) {
    use_effect_with(language, |lang| {
        crate::dom::apply_document_language(lang.code(), lang.dir());
    });
}

/// Callback that switches the in-memory language and hands it to `persist`.
#[must_use]
pub fn language_switcher(
    language: UseStateHandle<Language>,
    persist: Callback<Language>,
) -> Callback<Language> {
    Callback::from(move |next: Language| {
        if next == *language {
            return;
        }
        log::info!("language switched to {next}");
        language.set(next);
        persist.emit(next);
    })
}
