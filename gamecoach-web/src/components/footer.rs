use crate::i18n::use_i18n;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let i18n = use_i18n();
    html! {
        <footer>
            <span>{ i18n.t("footer.copyright") }</span>
            <Link<Route> to={Route::Terms}>{ i18n.t("footer.terms") }</Link<Route>>
        </footer>
    }
}
