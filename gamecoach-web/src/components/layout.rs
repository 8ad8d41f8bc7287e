use crate::components::footer::Footer;
use crate::components::header::Header;
use gamecoach_core::Language;
use yew::prelude::*;

/// Shared chrome for the home, search, join, dashboard and slug routes.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_toggle_login: Callback<()>,
    pub on_toggle_signup: Callback<()>,
    pub on_language_change: Callback<Language>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="layout">
            <Header
                on_toggle_login={props.on_toggle_login.clone()}
                on_toggle_signup={props.on_toggle_signup.clone()}
                on_language_change={props.on_language_change.clone()}
            />
            <main id="main" role="main">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
