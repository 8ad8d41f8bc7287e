use crate::components::modal::Modal;
use crate::i18n::use_i18n;
use crate::pages::auth::{LoginForm, SignupForm};
use gamecoach_core::{Popup, PopupAction};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub popup: Popup,
    pub on_popup: Callback<PopupAction>,
}

/// Overlays the login or signup form above the routed page.
#[function_component(PopupHost)]
pub fn popup_host(props: &Props) -> Html {
    let i18n = use_i18n();
    let emit = |action: PopupAction| {
        let cb = props.on_popup.clone();
        Callback::from(move |()| cb.emit(action))
    };
    let on_close = emit(PopupAction::Close);
    let on_toggle_login = emit(PopupAction::ToggleLogin);
    let on_toggle_signup = emit(PopupAction::ToggleSignup);

    match props.popup {
        Popup::None => Html::default(),
        Popup::Login => html! {
            <Modal open={true} {on_close} label={AttrValue::from(i18n.t("auth.login_title"))}>
                <LoginForm on_toggle_login={on_toggle_login} on_toggle_signup={on_toggle_signup} />
            </Modal>
        },
        Popup::Signup => html! {
            <Modal open={true} {on_close} label={AttrValue::from(i18n.t("auth.signup_title"))}>
                <SignupForm on_toggle_login={on_toggle_login} on_toggle_signup={on_toggle_signup} />
            </Modal>
        },
    }
}
