use gamecoach_core::{Popup, PopupAction};

const ACTIONS: [PopupAction; 5] = [
    PopupAction::OpenLogin,
    PopupAction::OpenSignup,
    PopupAction::ToggleLogin,
    PopupAction::ToggleSignup,
    PopupAction::Close,
];

/// Every action sequence up to `depth`, applied from a closed state.
fn walk(state: Popup, depth: usize, visited: &mut usize) {
    assert!(
        !(state.login_visible() && state.signup_visible()),
        "login and signup visible together"
    );
    *visited += 1;
    if depth == 0 {
        return;
    }
    for action in ACTIONS {
        walk(state.apply(action), depth - 1, visited);
    }
}

#[test]
fn no_sequence_shows_both_popups() {
    let mut visited = 0;
    walk(Popup::default(), 6, &mut visited);
    // 1 + 5 + 25 + ... + 5^6
    assert_eq!(visited, 19_531);
}

#[test]
fn each_transition_clears_the_other_popup() {
    for start in [Popup::None, Popup::Login, Popup::Signup] {
        assert!(!start.toggle_login().signup_visible());
        assert!(!start.toggle_signup().login_visible());
        assert!(!start.open_login().signup_visible());
        assert!(!start.open_signup().login_visible());
        assert!(!start.close().is_open());
    }
}

#[test]
fn toggle_mirrors_previous_visibility() {
    assert!(Popup::None.toggle_login().login_visible());
    assert!(!Popup::Login.toggle_login().login_visible());
    assert!(Popup::Signup.toggle_login().login_visible());
    assert!(Popup::Login.toggle_signup().signup_visible());
}
