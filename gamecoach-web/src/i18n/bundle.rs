use crate::i18n::locales::load_translations;
use crate::i18n::render::{get_nested_value, render_value};
use gamecoach_core::Language;
use serde_json::Value;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Translation table for one language with English as fallback. Cheap to
/// clone, so it is handed down the tree as context.
#[derive(Debug, Clone, PartialEq)]
pub struct I18nBundle {
    pub lang: Language,
    translations: Rc<Value>,
    fallback: Rc<Value>,
}

impl I18nBundle {
    #[must_use]
    pub fn new(lang: Language) -> Self {
        let fallback = Rc::new(
            load_translations(Language::English).unwrap_or(Value::Object(serde_json::Map::new())),
        );
        let translations = if lang == Language::English {
            Rc::clone(&fallback)
        } else {
            load_translations(lang).map_or_else(|| Rc::clone(&fallback), Rc::new)
        };
        Self {
            lang,
            translations,
            fallback,
        }
    }

    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        self.lang.is_rtl()
    }

    /// Translate a key, falling back to English and then to the key itself.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.tr(key, None)
    }

    /// Translate a key with `{name}` placeholders filled from `args`.
    #[must_use]
    pub fn tr(&self, key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
        get_nested_value(&self.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&self.fallback, key).and_then(|v| render_value(v, args)))
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for I18nBundle {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
