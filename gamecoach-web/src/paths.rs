//! Deployment paths: router base, static assets and the catalog API.

/// Default API root when `API_BASE_URL` is not set at compile time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Build a URL to a static asset that respects the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/app` for a subdirectory
/// deployment), generated URLs are prefixed accordingly. Local builds without
/// `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router (e.g., `/app` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Root of the catalog API, from `API_BASE_URL` or [`DEFAULT_API_BASE`].
#[must_use]
pub fn api_base() -> String {
    api_base_with(option_env!("API_BASE_URL"))
}

/// `GET` endpoint listing every game.
#[must_use]
pub fn games_url(api_base: &str) -> String {
    join(api_base, "games")
}

/// `GET` endpoint listing every coach.
#[must_use]
pub fn coaches_url(api_base: &str) -> String {
    join(api_base, "coaches")
}

fn api_base_with(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

fn join(base: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path_with_base("img/logo.svg", ""), "/img/logo.svg");
        assert_eq!(asset_path_with_base("/img/logo.svg", ""), "/img/logo.svg");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            asset_path_with_base("/img/logo.svg", "/app/"),
            "/app/img/logo.svg"
        );
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(router_base_with_base("/app/"), Some(String::from("/app")));
        assert_eq!(router_base_with_base("  "), None);
    }

    #[test]
    fn api_base_defaults_and_trims() {
        assert_eq!(api_base_with(None), "/api");
        assert_eq!(api_base_with(Some("")), "/api");
        assert_eq!(
            api_base_with(Some("https://api.example.com/v1/")),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn endpoints_join_cleanly() {
        assert_eq!(games_url("/api"), "/api/games");
        assert_eq!(coaches_url("/api/"), "/api/coaches");
    }
}
