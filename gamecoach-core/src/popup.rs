/// Which authentication popup is showing. Login and signup can never be
/// open together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Popup {
    #[default]
    None,
    Login,
    Signup,
}

/// The transitions layouts, pages and popups can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupAction {
    OpenLogin,
    OpenSignup,
    ToggleLogin,
    ToggleSignup,
    Close,
}

impl Popup {
    #[must_use]
    pub const fn open_login(self) -> Self {
        Self::Login
    }

    #[must_use]
    pub const fn open_signup(self) -> Self {
        Self::Signup
    }

    #[must_use]
    pub const fn toggle_login(self) -> Self {
        match self {
            Self::Login => Self::None,
            Self::None | Self::Signup => Self::Login,
        }
    }

    #[must_use]
    pub const fn toggle_signup(self) -> Self {
        match self {
            Self::Signup => Self::None,
            Self::None | Self::Login => Self::Signup,
        }
    }

    #[must_use]
    pub const fn close(self) -> Self {
        Self::None
    }

    #[must_use]
    pub const fn apply(self, action: PopupAction) -> Self {
        match action {
            PopupAction::OpenLogin => self.open_login(),
            PopupAction::OpenSignup => self.open_signup(),
            PopupAction::ToggleLogin => self.toggle_login(),
            PopupAction::ToggleSignup => self.toggle_signup(),
            PopupAction::Close => self.close(),
        }
    }

    #[must_use]
    pub const fn login_visible(self) -> bool {
        matches!(self, Self::Login)
    }

    #[must_use]
    pub const fn signup_visible(self) -> bool {
        matches!(self, Self::Signup)
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_switch_between_popups() {
        let p = Popup::None.toggle_login();
        assert_eq!(p, Popup::Login);
        let p = p.toggle_signup();
        assert_eq!(p, Popup::Signup);
        assert!(!p.login_visible());
        let p = p.toggle_signup();
        assert_eq!(p, Popup::None);
    }

    #[test]
    fn open_is_idempotent_and_close_clears() {
        assert_eq!(Popup::Login.open_login(), Popup::Login);
        assert_eq!(Popup::Login.open_signup(), Popup::Signup);
        assert_eq!(Popup::Signup.close(), Popup::None);
        assert!(!Popup::None.is_open());
    }
}
