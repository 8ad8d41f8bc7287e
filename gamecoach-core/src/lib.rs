//! GameCoach client core
//!
//! Platform-agnostic state for the GameCoach web client: slug classification
//! against the game and coach catalogs, authentication popup state,
//! navigation progress tracking and the persisted language preference.
//! This crate has no browser dependencies; `gamecoach-web` supplies the
//! storage and network implementations.

pub mod catalog;
pub mod locale;
pub mod popup;
pub mod progress;
pub mod resolver;
pub mod slug;

// Re-export commonly used types
pub use catalog::{
    Catalog, CatalogError, CoachRecord, GameRecord, coach_usernames, game_slugs, parse_coaches,
    parse_games,
};
pub use locale::{
    LANGUAGE_KEY, Language, MemoryPreferences, PreferenceStore, bootstrap_language,
    persist_language,
};
pub use popup::{Popup, PopupAction};
pub use progress::{
    FINISH_DELAY_MS, NavigationProgress, ProgressBarStyle, ProgressPhase, ProgressTicket,
};
pub use resolver::{LoadState, SlugOutcome, SlugResolver};
pub use slug::{COACH_PREFIX, SlugTarget, classify, strip_coach_prefix};
