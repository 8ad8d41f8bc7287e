use crate::i18n::use_i18n;
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let i18n = use_i18n();
    html! {
        <section class="page home" data-testid="home-page">
            <h1>{ i18n.t("home.title") }</h1>
            <p>{ i18n.t("home.subtitle") }</p>
        </section>
    }
}
