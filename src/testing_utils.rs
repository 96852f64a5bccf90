use std::collections::HashMap;

use crate::api::models::{BasicLeague, LeagueDetail, LeagueSettings, ResolvedUser, Roster};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a resolved user record
    pub fn resolved_user(user_id: &str, display_name: &str) -> ResolvedUser {
        ResolvedUser {
            user_id: user_id.to_string(),
            display_name: display_name.to_string(),
        }
    }

    /// Creates a basic league membership
    pub fn basic_league(league_id: &str, name: &str, season: &str) -> BasicLeague {
        BasicLeague {
            league_id: league_id.to_string(),
            name: name.to_string(),
            season: season.to_string(),
        }
    }

    /// Creates a roster with a standings line
    pub fn roster(roster_id: i64, owner: &str, wins: i64, losses: i64, fpts: f64) -> Roster {
        Roster {
            roster_id,
            owner_id: Some(format!("owner_{roster_id}")),
            owner_display_name: Some(owner.to_string()),
            players: Some(vec![]),
            wins: Some(wins),
            losses: Some(losses),
            ties: Some(0),
            fpts: Some(fpts),
        }
    }

    /// Creates a league detail with a PPR-flavored scoring map and two rosters
    pub fn league_detail(league_id: &str, name: &str, season: &str) -> LeagueDetail {
        LeagueDetail {
            league_id: league_id.to_string(),
            name: name.to_string(),
            season: season.to_string(),
            status: "in_season".to_string(),
            total_rosters: 12,
            scoring_settings: Some(Self::scoring_map(&[
                ("rec", 1.0),
                ("pass_td", 4.0),
                ("pass_yd", 0.04),
                ("bonus_rec_te", 0.5),
            ])),
            roster_positions: Some(vec![
                Some("QB".to_string()),
                Some("RB".to_string()),
                Some("WR".to_string()),
                Some("TE".to_string()),
                Some("FLEX".to_string()),
            ]),
            settings: Some(LeagueSettings {
                league_type: Some(0),
                playoff_week_start: Some(15),
            }),
            rosters: vec![
                Self::roster(1, "beastly", 8, 4, 1401.22),
                Self::roster(2, "rival", 7, 5, 1298.6),
            ],
        }
    }

    /// Creates a scoring map from key/value pairs
    pub fn scoring_map(pairs: &[(&str, f64)]) -> HashMap<String, serde_json::Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
            .collect()
    }

    /// JSON form of [`Self::league_detail`] for wiremock response bodies
    pub fn league_detail_json(league_id: &str, name: &str, season: &str) -> serde_json::Value {
        serde_json::to_value(Self::league_detail(league_id, name, season))
            .unwrap_or(serde_json::Value::Null)
    }
}
