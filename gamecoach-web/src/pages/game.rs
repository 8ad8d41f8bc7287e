use crate::i18n::use_i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GamePageProps {
    /// The game's friendly URL.
    pub slug: AttrValue,
}

#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let i18n = use_i18n();
    let mut args = BTreeMap::new();
    args.insert("slug", props.slug.as_str());
    html! {
        <section class="page game" data-testid="game-page" data-slug={props.slug.clone()}>
            <h1>{ i18n.tr("game.title", Some(&args)) }</h1>
        </section>
    }
}
