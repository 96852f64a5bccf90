//! HTTP client for the three backend endpoints
//!
//! One [`ScoutClient`] is created per session and shared. Every call is a
//! single attempt: failures surface immediately as stage-scoped errors and
//! the user re-triggers to retry.

use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::api::models::{
    ApiErrorBody, BasicLeague, LeagueDetail, ResolveUserRequest, ResolveUserResponse, ResolvedUser,
};
use crate::api::urls::{build_league_details_url, build_resolve_user_url, build_user_leagues_url};
use crate::config::Config;
use crate::constants;
use crate::error::AppError;

/// Creates a configured HTTP client with connection pooling and a request
/// timeout. The timeout is the only time bound anywhere in the pipeline.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Client for the backend's Sleeper integration endpoints.
#[derive(Debug, Clone)]
pub struct ScoutClient {
    client: Client,
    api_base_url: String,
}

impl ScoutClient {
    /// Builds a client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds a client against an explicit base URL, mainly for tests.
    pub fn with_base_url(api_base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(constants::DEFAULT_HTTP_TIMEOUT_SECONDS)?;
        Ok(Self {
            client,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Resolves a free-text identifier (username or numeric id) into a
    /// canonical user record.
    ///
    /// Blank input fails locally before any network call. The endpoint
    /// reports unresolvable identifiers either through an `error` field in
    /// a 2xx body or through a non-2xx status with a `detail` body; both
    /// become [`AppError::Resolution`].
    #[instrument(skip(self))]
    pub async fn resolve_user(&self, input: &str) -> Result<ResolvedUser, AppError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation(
                "Please enter a Sleeper username or user ID.",
            ));
        }

        let url = build_resolve_user_url(&self.api_base_url);
        info!("Resolving identifier via {url}");

        let response = self
            .client
            .post(&url)
            .json(&ResolveUserRequest {
                input_value: trimmed.to_string(),
            })
            .send()
            .await
            .map_err(|e| transport_error(e, &url))?;

        let status = response.status();
        debug!("Resolve response status: {status}");

        if !status.is_success() {
            let message = read_error_detail(response, status).await;
            return Err(AppError::resolution(message));
        }

        let body: ResolveUserResponse = response.json().await.map_err(|e| {
            warn!("Malformed resolve response from {url}: {e}");
            AppError::resolution(format!("Invalid response from server: {e}"))
        })?;

        if let Some(error) = body.error {
            return Err(AppError::resolution(error));
        }

        match (body.user_id, body.display_name) {
            (Some(user_id), display_name) if !user_id.is_empty() => {
                let user = ResolvedUser {
                    user_id,
                    display_name: display_name.unwrap_or_else(|| "N/A".to_string()),
                };
                info!(
                    "Resolved '{trimmed}' to user {} ({})",
                    user.user_id, user.display_name
                );
                Ok(user)
            }
            _ => Err(AppError::resolution(
                "Server response did not include a user id.",
            )),
        }
    }

    /// Enumerates league memberships for a resolved user and season.
    /// An empty list is a valid outcome, distinct from a failure.
    #[instrument(skip(self))]
    pub async fn fetch_leagues(
        &self,
        user_id: &str,
        year: i32,
    ) -> Result<Vec<BasicLeague>, AppError> {
        if user_id.trim().is_empty() {
            return Err(AppError::validation("User id must not be empty."));
        }

        let url = build_user_leagues_url(&self.api_base_url, user_id, year);
        info!("Fetching leagues from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(e, &url))?;

        let status = response.status();
        debug!("Leagues response status: {status}");

        if !status.is_success() {
            let message = read_error_detail(response, status).await;
            return Err(AppError::enumeration(year, message));
        }

        let leagues: Vec<BasicLeague> = response.json().await.map_err(|e| {
            warn!("Malformed leagues response from {url}: {e}");
            AppError::enumeration(year, format!("Invalid response from server: {e}"))
        })?;

        info!("Found {} league(s) for season {year}", leagues.len());
        Ok(leagues)
    }

    /// Fetches full detail for one league, including rosters and the raw
    /// scoring-settings map.
    #[instrument(skip(self))]
    pub async fn fetch_league_details(&self, league_id: &str) -> Result<LeagueDetail, AppError> {
        if league_id.trim().is_empty() {
            return Err(AppError::validation("League id must not be empty."));
        }

        let url = build_league_details_url(&self.api_base_url, league_id);
        info!("Fetching league detail from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(e, &url))?;

        let status = response.status();
        debug!("Detail response status: {status}");

        if !status.is_success() {
            let message = read_error_detail(response, status).await;
            return Err(AppError::detail(message));
        }

        let detail: LeagueDetail = response.json().await.map_err(|e| {
            warn!("Malformed detail response from {url}: {e}");
            AppError::detail(format!("Invalid response from server: {e}"))
        })?;

        info!(
            "Loaded detail for league {} ({} rosters)",
            detail.league_id, detail.total_rosters
        );
        Ok(detail)
    }
}

/// Maps a send-level reqwest error (no usable response) to the taxonomy.
fn transport_error(e: reqwest::Error, url: &str) -> AppError {
    warn!("Request to {url} failed without a response: {e}");
    if e.is_timeout() {
        AppError::network("request timed out", url)
    } else if e.is_connect() {
        AppError::network("connection failed", url)
    } else {
        AppError::network(e.to_string(), url)
    }
}

/// Extracts the user-facing message from a non-2xx response: the `detail`
/// field of the JSON body when present, otherwise a status-coded fallback.
async fn read_error_detail(response: Response, status: StatusCode) -> String {
    match response.text().await {
        Ok(body) => match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => parsed.detail,
            Err(_) => format!("Server returned status {}", status.as_u16()),
        },
        Err(_) => format!("Server returned status {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ScoutClient {
        ScoutClient::with_base_url(format!("{}/api/v1", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_user_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/sleeper/resolve-user"))
            .and(body_json(serde_json::json!({ "input_value": "beastly" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user_id": "213581055209246720",
                "display_name": "beastly"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let user = client.resolve_user("  beastly  ").await.unwrap();
        assert_eq!(user.user_id, "213581055209246720");
        assert_eq!(user.display_name, "beastly");
    }

    #[tokio::test]
    async fn test_resolve_user_blank_input_is_local_validation_error() {
        let server = MockServer::start().await;
        // No mock mounted: a request would fail loudly if one were made
        let client = client_for(&server).await;
        let err = client.resolve_user("   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_user_error_field_in_2xx_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/sleeper/resolve-user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": "Sleeper user 'ghost' not found."
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.resolve_user("ghost").await.unwrap_err();
        match err {
            AppError::Resolution { message } => {
                assert_eq!(message, "Sleeper user 'ghost' not found.")
            }
            other => panic!("Expected Resolution error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_user_non_2xx_uses_detail_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/sleeper/resolve-user"))
            .respond_with(ResponseTemplate::new(502).set_body_json(serde_json::json!({
                "detail": "Invalid data format received from Sleeper API."
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.resolve_user("someone").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not resolve identifier: Invalid data format received from Sleeper API."
        );
    }

    #[tokio::test]
    async fn test_resolve_user_non_2xx_without_body_falls_back_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/sleeper/resolve-user"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.resolve_user("someone").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not resolve identifier: Server returned status 500"
        );
    }

    #[tokio::test]
    async fn test_fetch_leagues_empty_result_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/sleeper/users/42/leagues/2025"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let leagues = client.fetch_leagues("42", 2025).await.unwrap();
        assert!(leagues.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_leagues_failure_is_enumeration_scoped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/sleeper/users/42/leagues/2025"))
            .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "detail": "Failed to connect to Sleeper API"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.fetch_leagues("42", 2025).await.unwrap_err();
        match err {
            AppError::Enumeration { season, message } => {
                assert_eq!(season, 2025);
                assert_eq!(message, "Failed to connect to Sleeper API");
            }
            other => panic!("Expected Enumeration error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_league_details_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/sleeper/league/998877/details"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "league_id": "998877",
                "name": "The Gauntlet",
                "season": "2025",
                "status": "in_season",
                "total_rosters": 12,
                "scoring_settings": { "rec": 1.0, "pass_yd": 0.04 },
                "roster_positions": ["QB", "RB", "RB", "WR", "WR", "TE", "FLEX", null],
                "settings": { "type": 2, "playoff_week_start": 15 },
                "rosters": [
                    {
                        "roster_id": 1,
                        "owner_id": "42",
                        "owner_display_name": "beastly",
                        "players": ["4034", "6786"],
                        "wins": 8, "losses": 4, "ties": 0, "fpts": 1401.22
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let detail = client.fetch_league_details("998877").await.unwrap();
        assert_eq!(detail.name, "The Gauntlet");
        assert_eq!(detail.league_type_name(), Some("Dynasty"));
        assert_eq!(detail.rosters.len(), 1);
        assert_eq!(detail.rosters[0].fpts, Some(1401.22));
    }

    #[tokio::test]
    async fn test_fetch_league_details_empty_id_skips_network() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;
        let err = client.fetch_league_details("").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        // Point at a closed port so the connection is refused
        let client = ScoutClient::with_base_url("http://127.0.0.1:9/api/v1").unwrap();
        let err = client.fetch_league_details("1").await.unwrap_err();
        assert!(matches!(err, AppError::Network { .. }));
    }
}
