use gamecoach_core::{ProgressBarStyle, ProgressPhase};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub phase: ProgressPhase,
    #[prop_or_default]
    pub style: ProgressBarStyle,
}

fn phase_name(phase: ProgressPhase) -> &'static str {
    match phase {
        ProgressPhase::Idle => "idle",
        ProgressPhase::Starting => "starting",
        ProgressPhase::Visible => "visible",
    }
}

/// Thin bar pinned to the top of the viewport while a route settles.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &Props) -> Html {
    let style = &props.style;
    let (width, opacity) = match props.phase {
        ProgressPhase::Idle => ("100%", "0"),
        ProgressPhase::Starting => ("0%", "0"),
        ProgressPhase::Visible => ("80%", "1"),
    };
    let css = format!(
        "position:fixed;top:0;left:0;z-index:9999;height:{}px;width:{width};opacity:{opacity};background:{};transition:width 200ms ease-out, opacity 150ms linear;",
        style.size_px, style.color
    );
    html! {
        <div
            class={style.class_name}
            role="progressbar"
            aria-hidden={(props.phase != ProgressPhase::Visible).to_string()}
            data-phase={phase_name(props.phase)}
            style={css}
        />
    }
}
