use crate::i18n::use_i18n;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegalLayoutProps {
    /// Overrides the translated terms title.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Standalone document layout used by `/terms`.
#[function_component(LegalLayout)]
pub fn legal_layout(props: &LegalLayoutProps) -> Html {
    let i18n = use_i18n();
    let title = props
        .title
        .clone()
        .unwrap_or_else(|| AttrValue::from(i18n.t("legal.terms_title")));
    html! {
        <article class="legal-layout" data-testid="legal-layout">
            <header>
                <Link<Route> to={Route::Home}>{ i18n.t("ui.back_home") }</Link<Route>>
                <h1>{ title }</h1>
            </header>
            <div class="legal-layout__body">
                { for props.children.iter() }
            </div>
        </article>
    }
}
