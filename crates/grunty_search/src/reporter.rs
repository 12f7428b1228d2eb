//! Sinks for accepted search leaves.
//!
//! The executor hands every matching terminal state to a [`Reporter`]. Plain
//! closures work directly:
//!
//! ```
//! use grunty_search::{
//!     ClassificationRule, Inventory, Resource, SearchExecutor, Slot, TraitVector,
//! };
//!
//! let rule = ClassificationRule::new(TraitVector::splat(-10), "iron", "poison")
//!     .with_size_threshold(2);
//! let pantry = Inventory::new([Slot::new("egg", 1, Resource::new(2, TraitVector::ZERO))])?;
//!
//! let mut found = Vec::new();
//! SearchExecutor::new().search(&pantry, &rule, "iron", &mut |label: &str, _: &Inventory| {
//!     found.push(label.to_string());
//! });
//! assert_eq!(found, ["iron"]);
//! # Ok::<(), grunty_search::InventoryError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;

/// Receives each matching terminal state, in discovery order.
pub trait Reporter {
    /// Called once per accepted leaf with the matched label and the final pantry.
    fn report(&mut self, label: &str, inventory: &Inventory);
}

impl<F> Reporter for F
where
    F: FnMut(&str, &Inventory),
{
    fn report(&mut self, label: &str, inventory: &Inventory) {
        self(label, inventory);
    }
}

/// Owned record of one accepted leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    /// The matched label.
    pub label: String,
    /// `(slot name, consumed)` in inventory order.
    pub counts: Vec<(String, u32)>,
}

impl Solution {
    /// Captures the consumption counts of `inventory`.
    #[must_use]
    pub fn new(label: &str, inventory: &Inventory) -> Self {
        Self {
            label: label.to_string(),
            counts: inventory
                .consumption()
                .map(|(name, consumed)| (name.to_string(), consumed))
                .collect(),
        }
    }

    /// Consumed count for one slot.
    #[must_use]
    pub fn count(&self, name: &str) -> Option<u32> {
        self.counts
            .iter()
            .find(|(slot, _)| slot == name)
            .map(|&(_, consumed)| consumed)
    }
}

/// Reporter that keeps every solution in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    solutions: Vec<Solution>,
}

impl CollectingReporter {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Solutions in discovery order.
    #[must_use]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Consumes the collector, returning its solutions.
    #[must_use]
    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }

    /// Number of solutions collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Returns `true` if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, label: &str, inventory: &Inventory) {
        self.solutions.push(Solution::new(label, inventory));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Resource, Slot};
    use crate::traits::TraitVector;

    fn eaten() -> Inventory {
        Inventory::new([
            Slot::new("golden_egg", 3, Resource::new(2, TraitVector::ZERO)),
            Slot::new("mushroom", 1, Resource::new(1, TraitVector::splat(-3))),
        ])
        .expect("valid inventory")
        .consume("golden_egg")
        .expect("stocked slot")
    }

    #[test]
    fn solution_captures_counts_in_order() {
        let solution = Solution::new("iron", &eaten());
        assert_eq!(solution.label, "iron");
        assert_eq!(
            solution.counts,
            vec![("golden_egg".to_string(), 1), ("mushroom".to_string(), 0)]
        );
        assert_eq!(solution.count("mushroom"), Some(0));
        assert_eq!(solution.count("melon"), None);
    }

    #[test]
    fn closures_are_reporters() {
        let mut labels = Vec::new();
        {
            let mut reporter = |label: &str, _: &Inventory| labels.push(label.to_string());
            reporter.report("poison", &eaten());
            reporter.report("iron", &eaten());
        }
        assert_eq!(labels, ["poison", "iron"]);
    }

    #[test]
    fn collector_keeps_discovery_order() {
        let mut collector = CollectingReporter::new();
        collector.report("b", &eaten());
        collector.report("a", &eaten());

        let labels: Vec<_> = collector.solutions().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["b", "a"]);
        assert_eq!(collector.len(), 2);
    }
}
