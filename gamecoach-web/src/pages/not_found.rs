use crate::i18n::use_i18n;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Shown for paths deeper than one segment that match nothing.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let i18n = use_i18n();
    html! {
        <section class="panel not-found" aria-live="assertive" data-testid="not-found">
            <h1>{ i18n.t("not_found.title") }</h1>
            <p>{ i18n.t("not_found.message") }</p>
            <Link<Route> to={Route::Home}>{ i18n.t("ui.back_home") }</Link<Route>>
        </section>
    }
}
