//! Client for the two catalog endpoints behind the slug route.

use gamecoach_core::{CatalogError, LoadState, SlugResolver};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

/// Catalog API root, e.g. `/api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogClient {
    base: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(crate::paths::api_base())
    }
}

impl CatalogClient {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn games_url(&self) -> String {
        crate::paths::games_url(&self.base)
    }

    #[must_use]
    pub fn coaches_url(&self) -> String {
        crate::paths::coaches_url(&self.base)
    }
}

#[cfg(target_arch = "wasm32")]
impl CatalogClient {
    #[allow(clippy::future_not_send)]
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        use crate::dom::{fetch_response, js_error_message, response_text};

        let response = fetch_response(url)
            .await
            .map_err(|e| FetchError::Network(js_error_message(&e)))?;
        if !response.ok() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        response_text(&response)
            .await
            .map_err(|e| FetchError::Network(js_error_message(&e)))
    }

    /// Friendly URLs of every game.
    ///
    /// # Errors
    /// Returns an error if the request fails, the status is not 2xx, or the body is not a record list.
    #[allow(clippy::future_not_send)]
    pub async fn fetch_games(&self) -> Result<Vec<String>, FetchError> {
        let body = self.get_text(&self.games_url()).await?;
        Ok(gamecoach_core::parse_games(&body)?)
    }

    /// Usernames of every coach.
    ///
    /// # Errors
    /// Returns an error if the request fails, the status is not 2xx, or the body is not a record list.
    #[allow(clippy::future_not_send)]
    pub async fn fetch_coaches(&self) -> Result<Vec<String>, FetchError> {
        let body = self.get_text(&self.coaches_url()).await?;
        Ok(gamecoach_core::parse_coaches(&body)?)
    }

    /// Fetch both lists concurrently and settle the resolver state.
    #[allow(clippy::future_not_send)]
    pub async fn load_resolver(&self) -> SlugResolver {
        log::debug!("fetching catalog from {}", self.base);
        let (games, coaches) = futures::join!(self.fetch_games(), self.fetch_coaches());
        settle(games, coaches)
    }
}

/// Turn both request results into resolver state, logging failures.
#[must_use]
pub fn settle(
    games: Result<Vec<String>, FetchError>,
    coaches: Result<Vec<String>, FetchError>,
) -> SlugResolver {
    for err in [games.as_ref().err(), coaches.as_ref().err()]
        .into_iter()
        .flatten()
    {
        log::error!("catalog request failed: {err}");
    }
    if let (Ok(g), Ok(c)) = (&games, &coaches) {
        log::info!("catalog loaded: {} games, {} coaches", g.len(), c.len());
    }
    SlugResolver::with_results(LoadState::from(games), LoadState::from(coaches))
}

impl From<CatalogError> for FetchError {
    fn from(err: CatalogError) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamecoach_core::{SlugOutcome, SlugTarget};

    #[test]
    fn client_builds_endpoint_urls() {
        let client = CatalogClient::new("https://api.example.com/");
        assert_eq!(client.games_url(), "https://api.example.com/games");
        assert_eq!(client.coaches_url(), "https://api.example.com/coaches");
    }

    #[test]
    fn decode_errors_convert() {
        let err: FetchError = gamecoach_core::parse_games("{}").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("Unexpected response body"));
    }

    #[test]
    fn settle_classifies_when_both_succeed() {
        let resolver = settle(Ok(vec!["valorant".into()]), Ok(vec!["coachsara".into()]));
        assert_eq!(
            resolver.outcome("valorant"),
            SlugOutcome::Resolved(SlugTarget::Game {
                slug: "valorant".into()
            })
        );
    }

    #[test]
    fn settle_surfaces_http_failures() {
        let resolver = settle(
            Ok(vec![]),
            Err(FetchError::Status {
                url: "/api/coaches".into(),
                status: 502,
            }),
        );
        assert_eq!(
            resolver.outcome("anything"),
            SlugOutcome::Failed {
                reason: "HTTP 502 from /api/coaches".into()
            }
        );
    }
}
