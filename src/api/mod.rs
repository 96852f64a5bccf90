//! Network-backed lookup layer: identity resolution, league enumeration
//! and league-detail fetching against the backend service.

pub mod client;
pub mod models;
pub mod urls;

pub use client::ScoutClient;
pub use models::{BasicLeague, LeagueDetail, LeagueSettings, ResolvedUser, Roster};
