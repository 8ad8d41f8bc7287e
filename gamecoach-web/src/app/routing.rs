use crate::components::layout::Layout;
use crate::pages::{
    auth::{AuthBackground, LoginForm, SignupForm},
    dashboard::DashboardPage,
    home::HomePage,
    join::BecomingACoachPage,
    legal::LegalLayout,
    not_found::NotFound,
    search::GameSearchPage,
    slug::SlugPage,
};
use crate::router::{Route, Shell};
use gamecoach_core::{Language, PopupAction};
use yew::prelude::*;

/// Callbacks the routed tree needs from the application shell.
#[derive(Clone, PartialEq)]
pub struct RouteCallbacks {
    pub on_popup: Callback<PopupAction>,
    pub on_language_change: Callback<Language>,
}

fn render_page(route: &Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Search => html! { <GameSearchPage /> },
        Route::Join => html! { <BecomingACoachPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Slug { slug } => html! { <SlugPage slug={slug.clone()} /> },
        Route::NotFound => html! { <NotFound /> },
        Route::Terms => html! { <LegalLayout title="Terms and Conditions" /> },
        Route::Login => html! { <LoginForm /> },
        Route::Signup => html! { <SignupForm /> },
    }
}

/// Render `route` inside the chrome its shell calls for.
pub fn render_route(route: &Route, callbacks: &RouteCallbacks) -> Html {
    log::debug!("routing to {route:?}");
    let page = render_page(route);
    match route.shell() {
        Shell::Main => {
            let toggle_login = {
                let cb = callbacks.on_popup.clone();
                Callback::from(move |()| cb.emit(PopupAction::ToggleLogin))
            };
            let toggle_signup = {
                let cb = callbacks.on_popup.clone();
                Callback::from(move |()| cb.emit(PopupAction::ToggleSignup))
            };
            html! {
                <Layout
                    on_toggle_login={toggle_login}
                    on_toggle_signup={toggle_signup}
                    on_language_change={callbacks.on_language_change.clone()}
                >
                    { page }
                </Layout>
            }
        }
        Shell::Legal => page,
        Shell::Auth => html! { <AuthBackground>{ page }</AuthBackground> },
    }
}
