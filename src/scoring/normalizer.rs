//! Normalization of raw scoring-settings maps into displayable lists
//!
//! The platform's scoring configuration is versioned independently of this
//! crate and grows over time. The normalizer curates it with two rules:
//! an explicit allow-list of always-surfaced keys, and a `bonus_` prefix
//! convention covering the open-ended family of threshold bonuses. A
//! fallback pass keeps entirely new bonus keys displayable without a
//! catalog update.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::constants::scoring::{ALWAYS_SURFACED_KEYS, BONUS_PREFIX};
use crate::scoring::catalog::{active_catalog, label_for};

/// One curated scoring setting ready for display.
/// `value` is always a nonzero number.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayableSetting {
    pub label: String,
    pub value: f64,
}

/// Transforms a raw scoring-settings mapping into a curated, sorted list.
///
/// A missing or empty mapping yields an empty list. The result is derived
/// fresh on every call; an empty result is a valid outcome, not an error.
///
/// Pass 1 walks the active catalog in order and includes entries whose raw
/// value is numeric and nonzero and whose key is allow-listed or carries
/// the bonus prefix. Pass 2 walks the remaining raw keys and includes
/// nonzero numeric `bonus_*` values, labeling them from the catalog when
/// possible and from the key itself otherwise.
pub fn normalize_scoring_settings(raw: Option<&HashMap<String, Value>>) -> Vec<DisplayableSetting> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut processed: HashSet<&str> = HashSet::new();

    for rule in active_catalog() {
        let Some(value) = raw.get(rule.key).and_then(nonzero_number) else {
            continue;
        };
        if ALWAYS_SURFACED_KEYS.contains(&rule.key) || rule.key.starts_with(BONUS_PREFIX) {
            result.push(DisplayableSetting {
                label: rule.label.to_string(),
                value,
            });
            processed.insert(rule.key);
        }
    }

    for (key, raw_value) in raw {
        if processed.contains(key.as_str()) || !key.starts_with(BONUS_PREFIX) {
            continue;
        }
        let Some(value) = nonzero_number(raw_value) else {
            continue;
        };
        let label = match label_for(key) {
            Some(label) => label.to_string(),
            None => humanize_key(key),
        };
        result.push(DisplayableSetting { label, value });
    }

    result.sort_by(|a, b| compare_labels(&a.label, &b.label));
    result
}

fn nonzero_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| *v != 0.0)
}

/// Synthesizes a label from a raw key: separators become spaces and each
/// word starts with a capital letter.
///
/// # Example
/// ```
/// use sleeper_scout::scoring::normalizer::humanize_key;
///
/// assert_eq!(humanize_key("bonus_unknown_thing"), "Bonus Unknown Thing");
/// ```
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive label ordering with a case-sensitive tiebreak, so the
/// output is stable regardless of raw-map iteration order.
fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
