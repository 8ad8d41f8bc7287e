use gamecoach_core::Language;
use serde_json::Value;

const LOCALE_TABLE: &[(Language, &str)] = &[
    (Language::English, include_str!("../../i18n/en.json")),
    (Language::Arabic, include_str!("../../i18n/ar.json")),
];

pub(super) fn load_translations(lang: Language) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle)
        .map_err(|err| log::error!("translations for {lang} are malformed: {err}"))
        .ok()
}
