use crate::catalog::Catalog;

/// Marks a coach profile slug, e.g. `/@coachsara`.
pub const COACH_PREFIX: char = '@';

/// What a single-segment path resolves to once the catalog is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugTarget {
    Game { slug: String },
    Coach { username: String },
    Home,
}

/// Drop one leading `@` if present.
#[must_use]
pub fn strip_coach_prefix(slug: &str) -> &str {
    slug.strip_prefix(COACH_PREFIX).unwrap_or(slug)
}

/// Classify a slug against the catalog.
///
/// Games win over coaches; anything unknown falls back to `Home`.
#[must_use]
pub fn classify(slug: &str, catalog: &Catalog) -> SlugTarget {
    if catalog.has_game(slug) {
        return SlugTarget::Game {
            slug: slug.to_string(),
        };
    }
    let username = strip_coach_prefix(slug);
    if catalog.has_coach(username) {
        return SlugTarget::Coach {
            username: username.to_string(),
        };
    }
    log::debug!("slug {slug:?} matched neither a game nor a coach");
    SlugTarget::Home
}
