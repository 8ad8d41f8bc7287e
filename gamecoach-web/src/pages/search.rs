use crate::i18n::use_i18n;
use yew::prelude::*;

#[function_component(GameSearchPage)]
pub fn game_search_page() -> Html {
    let i18n = use_i18n();
    html! {
        <section class="page search" data-testid="search-page">
            <h1>{ i18n.t("search.title") }</h1>
            <input type="search" placeholder={i18n.t("search.placeholder")} aria-label={i18n.t("search.placeholder")} />
        </section>
    }
}
