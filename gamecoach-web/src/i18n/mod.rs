mod bundle;
mod locales;
mod render;

pub use bundle::I18nBundle;

use yew::prelude::*;

/// The bundle provided by the app shell, or English when rendered standalone.
#[hook]
pub fn use_i18n() -> I18nBundle {
    use_context::<I18nBundle>().unwrap_or_default()
}
