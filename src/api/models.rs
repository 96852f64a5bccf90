//! Wire models for the three backend endpoints

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical user record produced by identity resolution.
/// Immutable once created; only a new resolution attempt replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUser {
    pub user_id: String,
    pub display_name: String,
}

/// Raw response of the resolve-user endpoint. A 2xx body may still carry
/// an `error` field when the identifier could not be resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveUserResponse {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body of the resolve-user endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveUserRequest {
    pub input_value: String,
}

/// Error body convention shared by all endpoints for non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// One league membership as returned by the enumeration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicLeague {
    pub league_id: String,
    pub name: String,
    pub season: String,
}

/// League-level settings subset carried by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSettings {
    #[serde(rename = "type")]
    pub league_type: Option<i64>,
    #[serde(default)]
    pub playoff_week_start: Option<i64>,
}

/// One roster inside a league, with its standings line.
/// `fpts` is used for display ranking only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: i64,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub owner_display_name: Option<String>,
    #[serde(default)]
    pub players: Option<Vec<String>>,
    #[serde(default)]
    pub wins: Option<i64>,
    #[serde(default)]
    pub losses: Option<i64>,
    #[serde(default)]
    pub ties: Option<i64>,
    #[serde(default)]
    pub fpts: Option<f64>,
}

/// Full league detail, a superset of [`BasicLeague`].
///
/// `scoring_settings` is externally versioned and open-ended: values may
/// be numbers, null, or anything else the platform starts emitting, so it
/// is kept as raw JSON values and interpreted only by the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueDetail {
    pub league_id: String,
    pub name: String,
    pub season: String,
    pub status: String,
    pub total_rosters: i64,
    #[serde(default)]
    pub scoring_settings: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub roster_positions: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub settings: Option<LeagueSettings>,
    #[serde(default)]
    pub rosters: Vec<Roster>,
}

impl LeagueDetail {
    /// Rosters sorted by fantasy points scored, best first. Rosters
    /// without a points total sort last.
    pub fn rosters_by_fpts(&self) -> Vec<&Roster> {
        let mut sorted: Vec<&Roster> = self.rosters.iter().collect();
        sorted.sort_by(|a, b| {
            b.fpts
                .unwrap_or(f64::NEG_INFINITY)
                .partial_cmp(&a.fpts.unwrap_or(f64::NEG_INFINITY))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted
    }

    /// Human-readable league type derived from `settings.type`.
    pub fn league_type_name(&self) -> Option<&'static str> {
        match self.settings.as_ref()?.league_type? {
            0 => Some("Redraft"),
            1 => Some("Keeper"),
            2 => Some("Dynasty"),
            _ => None,
        }
    }
}
