use crate::api::CatalogClient;
use crate::i18n::use_i18n;
use crate::pages::{coach::CoachPage, game::GamePage, home::HomePage};
use gamecoach_core::{SlugOutcome, SlugResolver, SlugTarget};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SlugPageProps {
    pub slug: String,
}

/// The catch-all `/:slug` route. Fetches the game and coach lists once per
/// mount, then shows the game, the coach, or the home page.
#[function_component(SlugPage)]
pub fn slug_page(props: &SlugPageProps) -> Html {
    let resolver = use_state(SlugResolver::pending);
    let attempt = use_state(|| 0_u32);
    let client = use_context::<CatalogClient>().unwrap_or_default();

    {
        let resolver = resolver.clone();
        use_effect_with(*attempt, move |_| {
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                resolver.set(client.load_resolver().await);
            });
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (resolver, client);
            }
        });
    }

    let on_retry = {
        let resolver = resolver.clone();
        let attempt = attempt.clone();
        Callback::from(move |()| {
            log::info!("retrying catalog fetch");
            resolver.set(SlugResolver::pending());
            attempt.set(attempt.wrapping_add(1));
        })
    };

    html! {
        <SlugView outcome={resolver.outcome(&props.slug)} {on_retry} />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SlugViewProps {
    pub outcome: SlugOutcome,
    pub on_retry: Callback<()>,
}

#[function_component(SlugView)]
pub fn slug_view(props: &SlugViewProps) -> Html {
    let i18n = use_i18n();
    match &props.outcome {
        SlugOutcome::Loading => html! {
            <div class="loading" role="status" aria-live="polite">{ i18n.t("ui.loading") }</div>
        },
        SlugOutcome::Failed { reason } => {
            let retry = {
                let cb = props.on_retry.clone();
                Callback::from(move |_| cb.emit(()))
            };
            html! {
                <section class="panel slug-error" role="alert" data-testid="slug-error">
                    <h1>{ i18n.t("slug.error_title") }</h1>
                    <p>{ i18n.t("slug.error_message") }</p>
                    <p class="slug-error__detail">{ reason.clone() }</p>
                    <button type="button" onclick={retry}>{ i18n.t("ui.retry") }</button>
                </section>
            }
        }
        SlugOutcome::Resolved(SlugTarget::Game { slug }) => html! {
            <GamePage slug={AttrValue::from(slug.clone())} />
        },
        SlugOutcome::Resolved(SlugTarget::Coach { username }) => html! {
            <CoachPage coach_username={AttrValue::from(username.clone())} />
        },
        SlugOutcome::Resolved(SlugTarget::Home) => html! { <HomePage /> },
    }
}
