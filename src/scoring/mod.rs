//! Scoring-rule catalog and the raw-map normalizer built on top of it.

pub mod catalog;
pub mod normalizer;

pub use catalog::{ScoringRule, active_catalog, label_for};
pub use normalizer::{DisplayableSetting, normalize_scoring_settings};
