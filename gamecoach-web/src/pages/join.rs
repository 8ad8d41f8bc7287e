use crate::i18n::use_i18n;
use yew::prelude::*;

#[function_component(BecomingACoachPage)]
pub fn becoming_a_coach_page() -> Html {
    let i18n = use_i18n();
    html! {
        <section class="page join" data-testid="join-page">
            <h1>{ i18n.t("join.title") }</h1>
            <p>{ i18n.t("join.subtitle") }</p>
        </section>
    }
}
