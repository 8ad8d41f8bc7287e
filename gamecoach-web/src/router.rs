use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/search")]
    Search,
    #[at("/join")]
    Join,
    #[at("/dashboard")]
    Dashboard,
    #[at("/terms")]
    Terms,
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    /// Any other single segment: a game, `@coach`, or unknown.
    #[at("/:slug")]
    Slug { slug: String },
    /// Fallback for deeper paths. Its own path has two segments so no
    /// single segment can reach it ahead of `Slug`.
    #[at("/_/not-found")]
    #[not_found]
    NotFound,
}

/// The chrome a route renders inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    /// Header, footer and the login/signup toggles.
    Main,
    Legal,
    /// Full-page auth background, no header.
    Auth,
}

impl Route {
    #[must_use]
    pub const fn shell(&self) -> Shell {
        match self {
            Self::Home
            | Self::Search
            | Self::Join
            | Self::Dashboard
            | Self::Slug { .. }
            | Self::NotFound => Shell::Main,
            Self::Terms => Shell::Legal,
            Self::Signup | Self::Login => Shell::Auth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_segments_win_over_slug() {
        assert_eq!(Route::recognize("/search"), Some(Route::Search));
        assert_eq!(Route::recognize("/join"), Some(Route::Join));
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/terms"), Some(Route::Terms));
        assert_eq!(Route::recognize("/signup"), Some(Route::Signup));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn single_segments_become_slugs() {
        assert_eq!(
            Route::recognize("/valorant"),
            Some(Route::Slug {
                slug: "valorant".into()
            })
        );
        assert_eq!(
            Route::recognize("/@coachsara"),
            Some(Route::Slug {
                slug: "@coachsara".into()
            })
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            Route::recognize("/Search"),
            Some(Route::Slug {
                slug: "Search".into()
            })
        );
    }

    #[test]
    fn numeric_segments_are_slugs() {
        assert_eq!(
            Route::recognize("/404"),
            Some(Route::Slug { slug: "404".into() })
        );
    }

    #[test]
    fn deeper_paths_are_not_found() {
        assert_eq!(Route::recognize("/valorant/coaches"), Some(Route::NotFound));
    }

    #[test]
    fn shells_follow_layout_nesting() {
        assert_eq!(Route::Home.shell(), Shell::Main);
        assert_eq!(Route::Slug { slug: "x".into() }.shell(), Shell::Main);
        assert_eq!(Route::Terms.shell(), Shell::Legal);
        assert_eq!(Route::Login.shell(), Shell::Auth);
        assert_eq!(Route::Signup.shell(), Shell::Auth);
    }

    #[test]
    fn paths_round_trip() {
        assert_eq!(Route::Join.to_path(), "/join");
        assert_eq!(
            Route::Slug {
                slug: "@coachsara".into()
            }
            .to_path(),
            "/@coachsara"
        );
    }
}
