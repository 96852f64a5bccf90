//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and policy constants so that the
//! scoring policy and HTTP tuning live in one place.

#![allow(dead_code)]

/// Default base URL of the backend API, including the version prefix
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Scoring policy constants shared by the catalog and the normalizer
pub mod scoring {
    /// Keys whose settings are always surfaced when present with a nonzero
    /// value, regardless of naming convention. These capture the settings
    /// that define a league's character (reception scoring, turnover
    /// penalties, TE premium) even though most carry no prefix.
    pub const ALWAYS_SURFACED_KEYS: &[&str] = &[
        "rec",
        "pass_td",
        "pass_int",
        "fum_lost",
        "bonus_rec_te",
        "sack",
    ];

    /// Naming-convention prefix marking threshold bonus settings.
    /// Sleeper adds new `bonus_*` keys over time; the prefix rule keeps
    /// them surfaced without a catalog update for every new one.
    pub const BONUS_PREFIX: &str = "bonus_";
}

/// Season selection constants
pub mod season {
    /// Months January and February still belong to the previous NFL
    /// season (playoffs and the Super Bowl run into February).
    pub const ROLLOVER_MONTH: u32 = 3;
}
