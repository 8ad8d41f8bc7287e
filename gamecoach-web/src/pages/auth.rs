//! Login and signup forms, used both as popups and as standalone pages.
//!
//! Submitting only logs: the authentication backend lives elsewhere.

use crate::i18n::{I18nBundle, use_i18n};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AuthFormProps {
    /// Present when rendered inside a popup.
    #[prop_or_default]
    pub on_toggle_login: Option<Callback<()>>,
    #[prop_or_default]
    pub on_toggle_signup: Option<Callback<()>>,
}

/// A popup switch button when a callback is given, otherwise a page link.
fn switch_control(i18n: &I18nBundle, label_key: &str, on_toggle: Option<&Callback<()>>, to: Route) -> Html {
    let label = i18n.t(label_key);
    match on_toggle {
        Some(cb) => {
            let cb = cb.clone();
            html! {
                <button type="button" class="link" onclick={Callback::from(move |_| cb.emit(()))}>
                    { label }
                </button>
            }
        }
        None => html! { <Link<Route> to={to}>{ label }</Link<Route>> },
    }
}

fn on_submit(form: &'static str) -> Callback<SubmitEvent> {
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        log::info!("{form} form submitted");
    })
}

#[function_component(LoginForm)]
pub fn login_form(props: &AuthFormProps) -> Html {
    let i18n = use_i18n();
    html! {
        <form class="auth-form login" data-testid="login-form" onsubmit={on_submit("login")}>
            <h2>{ i18n.t("auth.login_title") }</h2>
            <label>
                { i18n.t("auth.email") }
                <input type="email" name="email" autocomplete="email" required={true} />
            </label>
            <label>
                { i18n.t("auth.password") }
                <input type="password" name="password" autocomplete="current-password" required={true} />
            </label>
            <button type="submit" class="primary">{ i18n.t("auth.submit_login") }</button>
            <p class="auth-form__switch">
                { i18n.t("auth.no_account") }
                { " " }
                { switch_control(&i18n, "nav.signup", props.on_toggle_signup.as_ref(), Route::Signup) }
            </p>
        </form>
    }
}

#[function_component(SignupForm)]
pub fn signup_form(props: &AuthFormProps) -> Html {
    let i18n = use_i18n();
    html! {
        <form class="auth-form signup" data-testid="signup-form" onsubmit={on_submit("signup")}>
            <h2>{ i18n.t("auth.signup_title") }</h2>
            <label>
                { i18n.t("auth.username") }
                <input type="text" name="username" autocomplete="username" required={true} />
            </label>
            <label>
                { i18n.t("auth.email") }
                <input type="email" name="email" autocomplete="email" required={true} />
            </label>
            <label>
                { i18n.t("auth.password") }
                <input type="password" name="password" autocomplete="new-password" required={true} />
            </label>
            <button type="submit" class="primary">{ i18n.t("auth.submit_signup") }</button>
            <p class="auth-form__switch">
                { i18n.t("auth.have_account") }
                { " " }
                { switch_control(&i18n, "nav.login", props.on_toggle_login.as_ref(), Route::Login) }
            </p>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthBackgroundProps {
    #[prop_or_default]
    pub children: Children,
}

/// Full-page backdrop for `/login` and `/signup`.
#[function_component(AuthBackground)]
pub fn auth_background(props: &AuthBackgroundProps) -> Html {
    let i18n = use_i18n();
    html! {
        <div class="auth-bg" data-testid="auth-background">
            <Link<Route> to={Route::Home} classes={classes!("brand")}>{ i18n.t("brand") }</Link<Route>>
            <div class="auth-bg__card">
                { for props.children.iter() }
            </div>
        </div>
    }
}
