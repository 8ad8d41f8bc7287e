use gamecoach_core::{Language, Popup, PopupAction};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer wrapper so popup transitions always apply to the latest value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopupState(pub Popup);

impl Reducible for PopupState {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            return self;
        }
        log::debug!("popup {:?} -> {next:?} via {action:?}", self.0);
        Rc::new(Self(next))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub language: UseStateHandle<Language>,
    pub popup: UseReducerHandle<PopupState>,
}

#[hook]
pub fn use_app_state(initial_language: Language) -> AppState {
    AppState {
        language: use_state_eq(move || initial_language),
        popup: use_reducer_eq(PopupState::default),
    }
}

impl AppState {
    #[must_use]
    pub fn popup(&self) -> Popup {
        self.popup.0
    }

    #[must_use]
    pub fn popup_dispatcher(&self) -> Callback<PopupAction> {
        let popup = self.popup.clone();
        Callback::from(move |action| popup.dispatch(action))
    }
}
