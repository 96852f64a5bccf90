//! Static registry of known scoring-setting keys and their display labels
//!
//! The registration list mirrors the platform's hand-maintained scoring
//! vocabulary and is not guaranteed unique: the platform reuses some key
//! names across contexts (a defensive `sack` versus a quarterback taking a
//! sack), and later registrations of the same key carry lower-quality or
//! ambiguous labels. The active catalog therefore keeps the first
//! registration of each key and drops the rest, preserving declaration
//! order of first occurrences.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// One entry of the active catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRule {
    pub key: &'static str,
    pub label: &'static str,
}

/// Ordered registration list. Duplicate keys are intentional; see the
/// module docs. Do not "fix" apparent inconsistencies here, the upstream
/// vocabulary owns them.
const REGISTRATIONS: &[(&str, &str)] = &[
    // Passing
    ("pass_yd", "Passing Yards"),
    ("pass_td", "Passing TD"),
    ("pass_int", "Interception Thrown"),
    ("pass_2pt", "Passing 2PT Conversion"),
    ("pass_cmp", "Pass Completion"),
    // Rushing
    ("rush_yd", "Rushing Yards"),
    ("rush_td", "Rushing TD"),
    ("rush_2pt", "Rushing 2PT Conversion"),
    // Receiving
    ("rec", "PPR"),
    ("rec_yd", "Receiving Yards"),
    ("rec_td", "Receiving TD"),
    ("rec_2pt", "Receiving 2PT Conversion"),
    ("bonus_rec_te", "TE Premium"),
    // Turnovers
    ("fum", "Fumble"),
    ("fum_lost", "Fumble Lost"),
    ("fum_rec_td", "Fumble Recovery TD"),
    // Threshold bonuses
    ("bonus_pass_yd_300", "300+ Yard Passing Game"),
    ("bonus_pass_yd_400", "400+ Yard Passing Game"),
    ("bonus_rush_yd_100", "100+ Yard Rushing Game"),
    ("bonus_rush_yd_200", "200+ Yard Rushing Game"),
    ("bonus_rec_yd_100", "100+ Yard Receiving Game"),
    ("bonus_rec_yd_200", "200+ Yard Receiving Game"),
    ("bonus_rush_att_20", "20+ Carry Game"),
    ("bonus_pass_cmp_25", "25+ Completion Game"),
    // Defense / IDP
    ("sack", "Sack"),
    ("int", "Interception (IDP)"),
    ("ff", "Forced Fumble"),
    ("def_td", "Defensive TD"),
    ("st_td", "Special Teams TD"),
    ("blk_kick", "Blocked Kick"),
    ("safe", "Safety"),
    // Kicking
    ("xpm", "Extra Point Made"),
    ("fgm", "Field Goal Made"),
    ("fgm_40_49", "Field Goal 40-49 Yards"),
    ("fgm_50p", "Field Goal 50+ Yards"),
    // Later registrations that collide with earlier keys. These entered
    // the vocabulary with the QB-centric and offense-centric readings;
    // first-registered wins, so they never reach the active catalog.
    ("sack", "Sacks Taken"),
    ("fum", "Fumble (Offense)"),
    ("bonus_rec_te", "Tight End Reception Bonus"),
];

static ACTIVE_CATALOG: Lazy<Vec<ScoringRule>> = Lazy::new(|| dedup_registrations(REGISTRATIONS));

/// Deduplicates a registration list, keeping the first occurrence of each
/// key and the relative order of first occurrences.
fn dedup_registrations(registrations: &[(&'static str, &'static str)]) -> Vec<ScoringRule> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(registrations.len());
    let mut catalog = Vec::with_capacity(registrations.len());
    for &(key, label) in registrations {
        if seen.insert(key) {
            catalog.push(ScoringRule { key, label });
        }
    }
    catalog
}

/// The deduplicated, order-preserving active catalog. Built once on first
/// use and immutable afterward.
pub fn active_catalog() -> &'static [ScoringRule] {
    &ACTIVE_CATALOG
}

/// Looks up the display label for a known key.
pub fn label_for(key: &str) -> Option<&'static str> {
    ACTIVE_CATALOG
        .iter()
        .find(|rule| rule.key == key)
        .map(|rule| rule.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_catalog_has_unique_keys() {
        let mut seen = HashSet::new();
        for rule in active_catalog() {
            assert!(
                seen.insert(rule.key),
                "Duplicate key in active catalog: {}",
                rule.key
            );
        }
    }

    #[test]
    fn test_first_registration_wins_on_duplicates() {
        assert_eq!(label_for("sack"), Some("Sack"));
        assert_eq!(label_for("fum"), Some("Fumble"));
        assert_eq!(label_for("bonus_rec_te"), Some("TE Premium"));
    }

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        let registrations: &[(&str, &str)] = &[
            ("b", "Label B"),
            ("a", "Label A"),
            ("b", "Shadowed B"),
            ("c", "Label C"),
            ("a", "Shadowed A"),
        ];
        let catalog = dedup_registrations(registrations);
        let keys: Vec<&str> = catalog.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(catalog[0].label, "Label B");
        assert_eq!(catalog[1].label, "Label A");
    }

    #[test]
    fn test_label_for_unknown_key() {
        assert_eq!(label_for("bonus_unknown_thing"), None);
    }

    #[test]
    fn test_rec_maps_to_ppr() {
        assert_eq!(label_for("rec"), Some("PPR"));
    }
}
