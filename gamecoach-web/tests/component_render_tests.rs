use futures::executor::block_on;
use gamecoach_core::{Popup, ProgressBarStyle, ProgressPhase, SlugOutcome, SlugTarget};
use gamecoach_web::components::modal::{Modal, Props as ModalProps};
use gamecoach_web::components::popup::{PopupHost, Props as PopupProps};
use gamecoach_web::components::progress_bar::{ProgressBar, Props as ProgressBarProps};
use gamecoach_web::pages::auth::{AuthFormProps, LoginForm, SignupForm};
use gamecoach_web::pages::slug::{SlugView, SlugViewProps};
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn render_slug(outcome: SlugOutcome) -> String {
    let props = SlugViewProps {
        outcome,
        on_retry: Callback::noop(),
    };
    block_on(LocalServerRenderer::<SlugView>::with_props(props).render())
}

#[test]
fn slug_view_renders_each_outcome() {
    assert!(render_slug(SlugOutcome::Loading).contains("Loading..."));

    let game = render_slug(SlugOutcome::Resolved(SlugTarget::Game {
        slug: "valorant".into(),
    }));
    assert!(game.contains("data-testid=\"game-page\""));
    assert!(game.contains("Coaches for valorant"));

    let coach = render_slug(SlugOutcome::Resolved(SlugTarget::Coach {
        username: "coachsara".into(),
    }));
    assert!(coach.contains("data-testid=\"coach-page\""));
    assert!(coach.contains("data-username=\"coachsara\""));

    let home = render_slug(SlugOutcome::Resolved(SlugTarget::Home));
    assert!(home.contains("data-testid=\"home-page\""));
}

#[test]
fn slug_view_failure_offers_retry() {
    let html = render_slug(SlugOutcome::Failed {
        reason: "HTTP 503 from /api/games".into(),
    });
    assert!(html.contains("data-testid=\"slug-error\""));
    assert!(html.contains("HTTP 503 from /api/games"));
    assert!(html.contains("Try again"));
}

fn render_popup(popup: Popup) -> String {
    let props = PopupProps {
        popup,
        on_popup: Callback::noop(),
    };
    block_on(LocalServerRenderer::<PopupHost>::with_props(props).render())
}

#[test]
fn popup_host_renders_at_most_one_form() {
    assert!(!render_popup(Popup::None).contains("modal-backdrop"));

    let login = render_popup(Popup::Login);
    assert!(login.contains("data-testid=\"login-form\""));
    assert!(!login.contains("data-testid=\"signup-form\""));

    let signup = render_popup(Popup::Signup);
    assert!(signup.contains("data-testid=\"signup-form\""));
    assert!(!signup.contains("data-testid=\"login-form\""));
}

#[test]
fn popup_forms_switch_with_buttons_not_links() {
    let props = AuthFormProps {
        on_toggle_login: Some(Callback::noop()),
        on_toggle_signup: Some(Callback::noop()),
    };
    let html = block_on(LocalServerRenderer::<LoginForm>::with_props(props.clone()).render());
    assert!(html.contains("class=\"link\""));
    assert!(!html.contains("href="));

    let html = block_on(LocalServerRenderer::<SignupForm>::with_props(props).render());
    assert!(html.contains("Already have an account?"));
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    let open = ModalProps {
        open: true,
        on_close: Callback::noop(),
        label: Some(AttrValue::from("Welcome back")),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open).render());
    assert!(html.contains("modal-backdrop"));
    assert!(html.contains("aria-label=\"Welcome back\""));

    let closed = ModalProps {
        open: false,
        on_close: Callback::noop(),
        label: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed).render());
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn progress_bar_reflects_phase() {
    let render = |phase| {
        let props = ProgressBarProps {
            phase,
            style: ProgressBarStyle::default(),
        };
        block_on(LocalServerRenderer::<ProgressBar>::with_props(props).render())
    };
    let visible = render(ProgressPhase::Visible);
    assert!(visible.contains("data-phase=\"visible\""));
    assert!(visible.contains("#FE595E"));
    assert!(visible.contains("height:4px"));
    assert!(visible.contains("aria-hidden=\"false\""));

    let starting = render(ProgressPhase::Starting);
    assert!(starting.contains("aria-hidden=\"true\""));
}
