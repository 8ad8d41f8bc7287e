use std::collections::BTreeMap;
use std::convert::Infallible;

/// Storage key holding the persisted language code.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::English, Self::Arabic];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Arabic => "العربية",
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Arabic)
    }

    /// Value for the `dir` attribute.
    #[must_use]
    pub const fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    /// The other supported language, used by the header toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::English => Self::Arabic,
            Self::Arabic => Self::English,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Synchronous string key-value storage for user preferences.
/// Platform-specific implementations should provide this.
pub trait PreferenceStore {
    type Error: std::error::Error + 'static;

    /// Read a stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-process preference store, used by tests and non-browser targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    entries: BTreeMap<String, String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut prefs = Self::new();
        prefs.entries.insert(key.to_string(), value.to_string());
        prefs
    }
}

impl PreferenceStore for MemoryPreferences {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted language once at startup.
///
/// With nothing stored, English is written back so later sessions find a
/// value. A stored code outside the supported set falls back to English in
/// memory and is left in storage as-is.
///
/// # Errors
///
/// Returns an error if the store cannot be read, or if writing the default fails.
pub fn bootstrap_language<S: PreferenceStore>(store: &mut S) -> Result<Language, S::Error> {
    match store.get(LANGUAGE_KEY)? {
        Some(code) => {
            let lang = Language::from_code(&code).unwrap_or_else(|| {
                log::warn!("unsupported stored language {code:?}, using English");
                Language::default()
            });
            log::info!("language restored: {lang}");
            Ok(lang)
        }
        None => {
            let lang = Language::default();
            store.set(LANGUAGE_KEY, lang.code())?;
            log::info!("no stored language, defaulted to {lang}");
            Ok(lang)
        }
    }
}

/// Persist a language picked during the session.
///
/// # Errors
///
/// Returns an error if the store rejects the write.
pub fn persist_language<S: PreferenceStore>(store: &mut S, lang: Language) -> Result<(), S::Error> {
    store.set(LANGUAGE_KEY, lang.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_language_writes_default() {
        let mut store = MemoryPreferences::new();
        let lang = bootstrap_language(&mut store).unwrap();
        assert_eq!(lang, Language::English);
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn stored_language_is_adopted_unchanged() {
        let mut store = MemoryPreferences::with_entry(LANGUAGE_KEY, "ar");
        let lang = bootstrap_language(&mut store).unwrap();
        assert_eq!(lang, Language::Arabic);
        assert_eq!(lang.dir(), "rtl");
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("ar"));
    }

    #[test]
    fn unsupported_code_is_not_overwritten() {
        let mut store = MemoryPreferences::with_entry(LANGUAGE_KEY, "fr");
        assert_eq!(bootstrap_language(&mut store).unwrap(), Language::English);
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("fr"));
    }

    #[test]
    fn codes_round_trip_and_toggle() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(lang.toggled().toggled(), lang);
        }
        assert_eq!(Language::English.dir(), "ltr");
        assert!(Language::from_code("EN").is_none());
    }

    #[test]
    fn persist_overwrites_previous_choice() {
        let mut store = MemoryPreferences::with_entry(LANGUAGE_KEY, "en");
        persist_language(&mut store, Language::Arabic).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("ar"));
    }
}
