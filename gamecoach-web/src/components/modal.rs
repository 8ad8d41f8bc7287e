use crate::i18n::use_i18n;
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Backdrop plus dialog frame for the auth popups. Clicking the backdrop or
/// pressing Escape requests a close.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let i18n = use_i18n();
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with(props.open, move |is_open| {
            if *is_open && let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.set_attribute("tabindex", "-1");
                let _ = el.focus();
            }
        });
    }

    if !props.open {
        return Html::default();
    }

    let container_id = format!("modal-{}", *modal_id);
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // Clicks inside the dialog must not reach the backdrop.
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                id={container_id}
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-label={props.label.clone()}
                onclick={swallow_click}
                onkeydown={on_keydown}
                ref={container_ref}
            >
                <button type="button" class="modal__close" aria-label={i18n.t("ui.close")} onclick={on_close}>
                    {"X"}
                </button>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
