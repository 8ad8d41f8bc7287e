//! Load tracking for the two catalog lists behind the dynamic slug route.

use crate::catalog::Catalog;
use crate::slug::{SlugTarget, classify};

/// Progress of a single catalog request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for LoadState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// What the slug route should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugOutcome {
    Loading,
    Failed { reason: String },
    Resolved(SlugTarget),
}

/// Both catalog lists, fetched once per mount of the slug route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlugResolver {
    pub games: LoadState<Vec<String>>,
    pub coaches: LoadState<Vec<String>>,
}

impl SlugResolver {
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_results(
        games: LoadState<Vec<String>>,
        coaches: LoadState<Vec<String>>,
    ) -> Self {
        Self { games, coaches }
    }

    /// The catalog, once both lists have arrived.
    #[must_use]
    pub fn catalog(&self) -> Option<Catalog> {
        let games = self.games.ready()?;
        let coaches = self.coaches.ready()?;
        Some(Catalog::new(games.clone(), coaches.clone()))
    }

    /// Classify `slug`, or report why it cannot be classified yet.
    ///
    /// A pending list keeps the outcome at `Loading` even if the other list
    /// already failed, so the failure is only shown once every request settled.
    #[must_use]
    pub fn outcome(&self, slug: &str) -> SlugOutcome {
        if self.games.is_pending() || self.coaches.is_pending() {
            return SlugOutcome::Loading;
        }
        if let Some(reason) = self.games.failure().or_else(|| self.coaches.failure()) {
            return SlugOutcome::Failed {
                reason: reason.to_string(),
            };
        }
        self.catalog()
            .map_or(SlugOutcome::Loading, |catalog| {
                SlugOutcome::Resolved(classify(slug, &catalog))
            })
    }
}
