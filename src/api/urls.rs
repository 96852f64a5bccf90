//! URL building utilities for the backend endpoints

/// Builds the URL of the identity resolution endpoint.
///
/// # Example
/// ```
/// use sleeper_scout::api::urls::build_resolve_user_url;
///
/// let url = build_resolve_user_url("http://localhost:8000/api/v1");
/// assert_eq!(url, "http://localhost:8000/api/v1/sleeper/resolve-user");
/// ```
pub fn build_resolve_user_url(api_base_url: &str) -> String {
    format!("{api_base_url}/sleeper/resolve-user")
}

/// Builds the URL of the league enumeration endpoint for one user and season.
///
/// # Example
/// ```
/// use sleeper_scout::api::urls::build_user_leagues_url;
///
/// let url = build_user_leagues_url("http://localhost:8000/api/v1", "12345", 2025);
/// assert_eq!(url, "http://localhost:8000/api/v1/sleeper/users/12345/leagues/2025");
/// ```
pub fn build_user_leagues_url(api_base_url: &str, user_id: &str, year: i32) -> String {
    format!("{api_base_url}/sleeper/users/{user_id}/leagues/{year}")
}

/// Builds the URL of the league detail endpoint.
///
/// # Example
/// ```
/// use sleeper_scout::api::urls::build_league_details_url;
///
/// let url = build_league_details_url("http://localhost:8000/api/v1", "998877");
/// assert_eq!(url, "http://localhost:8000/api/v1/sleeper/league/998877/details");
/// ```
pub fn build_league_details_url(api_base_url: &str, league_id: &str) -> String {
    format!("{api_base_url}/sleeper/league/{league_id}/details")
}
