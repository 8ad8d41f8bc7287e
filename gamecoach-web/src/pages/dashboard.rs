use crate::i18n::use_i18n;
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let i18n = use_i18n();
    html! {
        <section class="page dashboard" data-testid="dashboard-page">
            <h1>{ i18n.t("dashboard.title") }</h1>
        </section>
    }
}
