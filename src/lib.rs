//! Sleeper League Scout Library
//!
//! This library resolves a Sleeper fantasy-sports identity, enumerates its
//! league memberships for a season, fetches full league detail, and turns
//! the platform's raw, open-ended scoring-settings map into a curated,
//! sorted, human-readable list.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sleeper_scout::api::ScoutClient;
//! use sleeper_scout::config::Config;
//! use sleeper_scout::error::AppError;
//! use sleeper_scout::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = ScoutClient::new(&config)?;
//!     let mut session = Session::new(client, 2025);
//!
//!     session.submit_identifier("beastly").await;
//!     let first_league = session.leagues().first().map(|l| l.league_id.clone());
//!     if let Some(league_id) = first_league {
//!         session.select_league(Some(league_id.as_str())).await;
//!         for setting in session.scoring_summary() {
//!             println!("{}: {}", setting.label, setting.value);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod logging;
pub mod scoring;
pub mod session;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use api::{BasicLeague, LeagueDetail, ResolvedUser, ScoutClient};
pub use config::Config;
pub use error::AppError;
pub use scoring::{DisplayableSetting, normalize_scoring_settings};
pub use session::{Session, SessionPhase};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
