use crate::components::progress_bar::ProgressBar;
use gamecoach_core::{FINISH_DELAY_MS, NavigationProgress, ProgressBarStyle, ProgressPhase};
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

/// Drives the top progress bar from route path changes.
#[function_component(NavigationProgressWrapper)]
pub fn navigation_progress_wrapper(props: &Props) -> Html {
    let path = use_location()
        .map(|loc| loc.path().to_string())
        .unwrap_or_default();
    let tracker = use_mut_ref(NavigationProgress::new);
    let timers = use_mut_ref(Vec::<Timeout>::new);
    let phase = use_state_eq(|| ProgressPhase::Idle);
    let style = ProgressBarStyle::default();

    {
        let phase = phase.clone();
        let delay_ms = style.delay_ms;
        use_effect_with(path, move |path| {
            let ticket = tracker.borrow_mut().observe(path);
            if let Some(ticket) = ticket {
                crate::dom::scroll_to_top();
                phase.set(ProgressPhase::Starting);

                let reveal = {
                    let tracker = tracker.clone();
                    let phase = phase.clone();
                    Timeout::new(delay_ms, move || {
                        if tracker.borrow_mut().reveal(ticket) {
                            phase.set(ProgressPhase::Visible);
                        }
                    })
                };
                let finish = Timeout::new(FINISH_DELAY_MS, move || {
                    if tracker.borrow_mut().finish(ticket) {
                        phase.set(ProgressPhase::Idle);
                    }
                });
                // Dropping the old handles cancels the previous navigation's timers.
                *timers.borrow_mut() = vec![reveal, finish];
            }
        });
    }

    html! {
        <>
            <ProgressBar phase={*phase} style={style} />
            { for props.children.iter() }
        </>
    }
}
