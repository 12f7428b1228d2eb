//! Server classification rules.
//!
//! A [`ClassificationRule`] scores a final [`TraitVector`] into one of three
//! outcomes. Each axis is measured relative to the server's bounds:
//!
//! | Per-axis delta | Outcome |
//! |----------------|---------|
//! | any `< 0` or `> range` | [`Classification::Noble`] |
//! | all inside `[3, range - 3]` | [`Classification::Primary`] |
//! | otherwise | [`Classification::Secondary`] |
//!
//! The out-of-range check always runs first, so a vector with one axis out of
//! range is noble even when every other axis is in the tight band.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::traits::TraitVector;

/// Label for the out-of-range outcome, shared by every server.
pub const NOBLE: &str = "noble";

/// Width of the edge band on each side of the tight band.
const EDGE_BAND: i32 = 3;

/// Outcome of scoring a trait vector, independent of label strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// At least one axis fell outside `[0, range]`.
    Noble,
    /// In range, but at least one axis touched an edge band.
    Secondary,
    /// Every axis inside the tight band.
    Primary,
}

impl Classification {
    /// Maps this outcome to the label `rule` uses for it.
    #[must_use]
    pub fn label(self, rule: &ClassificationRule) -> &str {
        match self {
            Classification::Noble => NOBLE,
            Classification::Secondary => &rule.secondary,
            Classification::Primary => &rule.primary,
        }
    }
}

/// A server's scoring policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// Per-axis lower bounds.
    pub bounds: TraitVector,
    /// Label for the tight-band outcome.
    pub primary: String,
    /// Label for the edge-band outcome.
    pub secondary: String,
    /// Total weight at which a grunty stops eating.
    #[serde(default = "ClassificationRule::default_size_threshold")]
    pub size_threshold: u32,
    /// Width of the accepted range above `bounds`.
    #[serde(default = "ClassificationRule::default_range")]
    pub range: i32,
}

impl ClassificationRule {
    /// Size threshold used when a server does not override it.
    pub const DEFAULT_SIZE_THRESHOLD: u32 = 40;

    /// Range used when a server does not override it.
    pub const DEFAULT_RANGE: i32 = 20;

    /// Creates a rule with the default size threshold and range.
    #[must_use]
    pub fn new(
        bounds: TraitVector,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        Self {
            bounds,
            primary: primary.into(),
            secondary: secondary.into(),
            size_threshold: Self::DEFAULT_SIZE_THRESHOLD,
            range: Self::DEFAULT_RANGE,
        }
    }

    /// Sets the size threshold.
    #[must_use]
    pub fn with_size_threshold(mut self, size_threshold: u32) -> Self {
        self.size_threshold = size_threshold;
        self
    }

    /// Sets the range.
    #[must_use]
    pub fn with_range(mut self, range: i32) -> Self {
        self.range = range;
        self
    }

    fn default_size_threshold() -> u32 {
        Self::DEFAULT_SIZE_THRESHOLD
    }

    fn default_range() -> i32 {
        Self::DEFAULT_RANGE
    }

    /// Scores `traits` without resolving a label.
    #[must_use]
    pub fn classify(&self, traits: TraitVector) -> Classification {
        let deltas = (traits - self.bounds).to_array();

        if deltas.iter().any(|&d| d < 0 || d > self.range) {
            return Classification::Noble;
        }

        let tight = EDGE_BAND..=self.range - EDGE_BAND;
        if deltas.iter().all(|d| tight.contains(d)) {
            Classification::Primary
        } else {
            Classification::Secondary
        }
    }

    /// Scores `traits` and returns the resulting label.
    #[must_use]
    pub fn evaluate(&self, traits: TraitVector) -> &str {
        self.classify(traits).label(self)
    }

    /// Returns `true` if `label` is one this rule can produce.
    #[must_use]
    pub fn produces(&self, label: &str) -> bool {
        label == NOBLE || label == self.primary || label == self.secondary
    }
}

impl fmt::Display for ClassificationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} bounds={} range={} size={}",
            self.primary, self.secondary, self.bounds, self.range, self.size_threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theta() -> ClassificationRule {
        ClassificationRule::new(TraitVector::new(0, -5, 10, 5, -5), "iron", "poison")
            .with_size_threshold(30)
    }

    fn with_deltas(rule: &ClassificationRule, deltas: [i32; 5]) -> TraitVector {
        rule.bounds + TraitVector::from_array(deltas)
    }

    #[test]
    fn defaults_match_standard_servers() {
        let rule = ClassificationRule::new(TraitVector::ZERO, "a", "b");
        assert_eq!(rule.size_threshold, 40);
        assert_eq!(rule.range, 20);
    }

    #[test]
    fn tight_band_edges_are_primary() {
        let rule = theta();
        assert_eq!(rule.evaluate(with_deltas(&rule, [3; 5])), "iron");
        assert_eq!(rule.evaluate(with_deltas(&rule, [17; 5])), "iron");
    }

    #[test]
    fn edge_band_is_secondary() {
        let rule = theta();
        assert_eq!(rule.evaluate(with_deltas(&rule, [0; 5])), "poison");
        assert_eq!(rule.evaluate(with_deltas(&rule, [20; 5])), "poison");
        assert_eq!(rule.evaluate(with_deltas(&rule, [2, 10, 10, 10, 10])), "poison");
        assert_eq!(rule.evaluate(with_deltas(&rule, [10, 10, 18, 10, 10])), "poison");
    }

    #[test]
    fn out_of_range_is_noble() {
        let rule = theta();
        assert_eq!(rule.evaluate(with_deltas(&rule, [-1, 10, 10, 10, 10])), NOBLE);
        assert_eq!(rule.evaluate(with_deltas(&rule, [10, 10, 10, 10, 21])), NOBLE);
    }

    #[test]
    fn out_of_range_wins_over_tight_band() {
        let rule = theta();
        assert_eq!(
            rule.classify(with_deltas(&rule, [5, 5, 5, 5, -4])),
            Classification::Noble
        );
    }

    #[test]
    fn narrow_range_has_no_primary() {
        let rule = theta().with_range(4);
        assert_eq!(rule.evaluate(with_deltas(&rule, [3; 5])), "poison");
    }

    #[test]
    fn evaluate_is_deterministic() {
        let rule = theta();
        let traits = TraitVector::new(4, 0, 13, 9, -1);
        assert_eq!(rule.evaluate(traits), rule.evaluate(traits));
    }

    #[test]
    fn produces_known_labels_only() {
        let rule = theta();
        assert!(rule.produces("iron"));
        assert!(rule.produces("poison"));
        assert!(rule.produces(NOBLE));
        assert!(!rule.produces("bony"));
    }
}
