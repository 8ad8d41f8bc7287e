use serde::{Deserialize, Serialize};

/// A game as returned by the catalog API. Only the slug field is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "friendlyUrl")]
    pub friendly_url: String,
}

/// A coach as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachRecord {
    pub username: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Identifiers used for slug lookups, kept in API order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    pub games: Vec<String>,
    pub coaches: Vec<String>,
}

impl Catalog {
    #[must_use]
    pub fn new(games: Vec<String>, coaches: Vec<String>) -> Self {
        Self { games, coaches }
    }

    #[must_use]
    pub fn from_records(games: &[GameRecord], coaches: &[CoachRecord]) -> Self {
        Self {
            games: game_slugs(games),
            coaches: coach_usernames(coaches),
        }
    }

    #[must_use]
    pub fn has_game(&self, slug: &str) -> bool {
        self.games.iter().any(|g| g == slug)
    }

    #[must_use]
    pub fn has_coach(&self, username: &str) -> bool {
        self.coaches.iter().any(|c| c == username)
    }
}

#[must_use]
pub fn game_slugs(records: &[GameRecord]) -> Vec<String> {
    records.iter().map(|g| g.friendly_url.clone()).collect()
}

#[must_use]
pub fn coach_usernames(records: &[CoachRecord]) -> Vec<String> {
    records.iter().map(|c| c.username.clone()).collect()
}

/// Decode a `GET /games` body into friendly URLs.
///
/// # Errors
///
/// Returns an error if the body is not a JSON array of game records.
pub fn parse_games(json: &str) -> Result<Vec<String>, CatalogError> {
    let records: Vec<GameRecord> = serde_json::from_str(json)?;
    Ok(game_slugs(&records))
}

/// Decode a `GET /coaches` body into usernames.
///
/// # Errors
///
/// Returns an error if the body is not a JSON array of coach records.
pub fn parse_coaches(json: &str) -> Result<Vec<String>, CatalogError> {
    let records: Vec<CoachRecord> = serde_json::from_str(json)?;
    Ok(coach_usernames(&records))
}
