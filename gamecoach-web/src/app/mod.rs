use crate::api::CatalogClient;
use crate::components::popup::PopupHost;
use crate::i18n::I18nBundle;
use crate::router::Route;
use gamecoach_core::Language;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod bootstrap;
pub mod progress;
pub mod routing;
pub mod state;

pub use progress::NavigationProgressWrapper;
pub use routing::{RouteCallbacks, render_route};
pub use state::{AppState, PopupState, use_app_state};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    let initial_language = bootstrap::use_startup_language();
    let persist = Callback::from(crate::storage::save_language);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell {initial_language} on_language_saved={persist} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppShellProps {
    /// Language read from storage at startup.
    pub initial_language: Language,
    /// Called with each language the user switches to.
    pub on_language_saved: Callback<Language>,
    #[prop_or_default]
    pub catalog: Option<CatalogClient>,
}

/// Everything below the router: providers, popups, progress bar and routes.
#[function_component(AppShell)]
pub fn app_shell(props: &AppShellProps) -> Html {
    let app_state = use_app_state(props.initial_language);
    let language = *app_state.language;
    bootstrap::use_document_language(language);

    let bundle = use_memo(language, |lang| I18nBundle::new(*lang));
    let catalog = props.catalog.clone().unwrap_or_default();
    let callbacks = RouteCallbacks {
        on_popup: app_state.popup_dispatcher(),
        on_language_change: bootstrap::language_switcher(
            app_state.language.clone(),
            props.on_language_saved.clone(),
        ),
    };
    let popup = app_state.popup();
    let on_popup = callbacks.on_popup.clone();

    html! {
        <ContextProvider<CatalogClient> context={catalog}>
            <ContextProvider<I18nBundle> context={(*bundle).clone()}>
                <div id="App" dir={language.dir()} lang={language.code()}>
                    <NavigationProgressWrapper>
                        <PopupHost {popup} {on_popup} />
                        <Switch<Route> render={move |route: Route| render_route(&route, &callbacks)} />
                    </NavigationProgressWrapper>
                </div>
            </ContextProvider<I18nBundle>>
        </ContextProvider<CatalogClient>>
    }
}
