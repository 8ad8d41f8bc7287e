use crate::i18n::use_i18n;
use crate::router::Route;
use gamecoach_core::Language;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_toggle_login: Callback<()>,
    pub on_toggle_signup: Callback<()>,
    pub on_language_change: Callback<Language>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let i18n = use_i18n();
    let toggle_login = {
        let cb = p.on_toggle_login.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_signup = {
        let cb = p.on_toggle_signup.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let switch_language = {
        let cb = p.on_language_change.clone();
        let next = i18n.lang.toggled();
        Callback::from(move |_| cb.emit(next))
    };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ i18n.t("ui.skip_to_content") }</a>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>
                    <img src={crate::paths::asset_path("img/logo.svg")} alt="" />
                    { i18n.t("brand") }
                </Link<Route>>
                <nav class="header-nav">
                    <Link<Route> to={Route::Search}>{ i18n.t("nav.search") }</Link<Route>>
                    <Link<Route> to={Route::Join}>{ i18n.t("nav.join") }</Link<Route>>
                    <Link<Route> to={Route::Dashboard}>{ i18n.t("nav.dashboard") }</Link<Route>>
                </nav>
                <div class="header-right">
                    <button
                        type="button"
                        id="lang-toggle"
                        aria-label={i18n.t("nav.language")}
                        lang={i18n.lang.toggled().code()}
                        onclick={switch_language}
                    >
                        { i18n.t("nav.switch_language") }
                    </button>
                    <button type="button" id="login-toggle" onclick={toggle_login}>
                        { i18n.t("nav.login") }
                    </button>
                    <button type="button" id="signup-toggle" class="primary" onclick={toggle_signup}>
                        { i18n.t("nav.signup") }
                    </button>
                </div>
            </div>
        </header>
    }
}
