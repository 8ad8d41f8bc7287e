use crate::i18n::use_i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CoachPageProps {
    /// Username without the leading `@`.
    pub coach_username: AttrValue,
}

#[function_component(CoachPage)]
pub fn coach_page(props: &CoachPageProps) -> Html {
    let i18n = use_i18n();
    let mut args = BTreeMap::new();
    args.insert("username", props.coach_username.as_str());
    html! {
        <section class="page coach" data-testid="coach-page" data-username={props.coach_username.clone()}>
            <h1>{ i18n.tr("coach.title", Some(&args)) }</h1>
            <p>{ i18n.tr("coach.subtitle", Some(&args)) }</p>
        </section>
    }
}
