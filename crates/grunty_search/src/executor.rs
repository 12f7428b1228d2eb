//! Depth-first search engine.
//!
//! The [`SearchExecutor`] feeds a grunty every food the pantry can still
//! supply, one unit at a time, until its weight reaches the rule's size
//! threshold. Each leaf is classified and, if it matches the target label,
//! handed to a [`Reporter`].
//!
//! # Example
//!
//! ```
//! use grunty_search::{
//!     Accumulator, Branching, ClassificationRule, CollectingReporter, Inventory, Resource,
//!     SearchExecutor, Slot, TraitVector,
//! };
//!
//! let rule = ClassificationRule::new(TraitVector::splat(-10), "iron", "poison")
//!     .with_size_threshold(2);
//! let pantry = Inventory::new([
//!     Slot::new("melon", 1, Resource::new(1, TraitVector::ZERO)),
//!     Slot::new("onion", 1, Resource::new(1, TraitVector::ZERO)),
//! ])?;
//!
//! let mut reporter = CollectingReporter::new();
//! let stats = SearchExecutor::new()
//!     .with_branching(Branching::Multiset)
//!     .explore(Accumulator::EMPTY, &pantry, &rule, "iron", &mut reporter);
//!
//! assert_eq!(stats.matches, 1);
//! # Ok::<(), grunty_search::InventoryError>(())
//! ```

use core::fmt;
use core::time::Duration;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::accumulator::Accumulator;
use crate::cache::{CacheStats, TransitionCache};
use crate::inventory::Inventory;
use crate::reporter::Reporter;
use crate::rule::ClassificationRule;

/// How the executor branches at each non-terminal node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branching {
    /// Every consumption order is its own branch.
    ///
    /// Eating A then B and eating B then A reach the same leaf twice, so a
    /// matching multiset is reported once per distinct ordering.
    #[default]
    Sequence,
    /// Only slots at or after the previously chosen slot are tried.
    ///
    /// Each consumption multiset is visited, and reported, at most once.
    /// Foods are eaten in slot order, so with mixed weights a multiset that
    /// only crosses the threshold when a lighter, later slot is eaten last is
    /// cut short at the earlier crossing instead.
    Multiset,
}

impl fmt::Display for Branching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branching::Sequence => f.write_str("sequence"),
            Branching::Multiset => f.write_str("multiset"),
        }
    }
}

/// Counters describing one finished search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes entered, the root included.
    pub nodes_visited: u64,
    /// Nodes at or past the size threshold.
    pub terminals: u64,
    /// Terminal nodes handed to the reporter.
    pub matches: u64,
    /// Deepest recursion level reached, the root being 0.
    pub max_depth: usize,
    /// Memoization counters.
    pub cache: CacheStats,
    /// Wall-clock duration of the search.
    #[serde(skip)]
    pub duration: Duration,
}

/// Exhaustive depth-first feeding search.
#[derive(Debug, Clone, Copy)]
pub struct SearchExecutor {
    branching: Branching,
    memoize: bool,
}

impl Default for SearchExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchExecutor {
    /// Creates an executor with sequence branching and memoization enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            branching: Branching::Sequence,
            memoize: true,
        }
    }

    /// Sets the branching strategy.
    #[must_use]
    pub fn with_branching(mut self, branching: Branching) -> Self {
        self.branching = branching;
        self
    }

    /// Recomputes every transition instead of memoizing it.
    ///
    /// Results are identical; only speed and memory use change.
    #[must_use]
    pub fn without_memoization(mut self) -> Self {
        self.memoize = false;
        self
    }

    /// The configured branching strategy.
    #[must_use]
    pub fn branching(&self) -> Branching {
        self.branching
    }

    /// Searches from a grunty that has eaten nothing.
    pub fn search<R>(
        &self,
        inventory: &Inventory,
        rule: &ClassificationRule,
        target: &str,
        reporter: &mut R,
    ) -> SearchStats
    where
        R: Reporter + ?Sized,
    {
        self.explore(Accumulator::EMPTY, inventory, rule, target, reporter)
    }

    /// Enumerates every way to finish feeding `accumulator` from `inventory`.
    ///
    /// Each leaf whose weight reaches `rule.size_threshold` is classified; if
    /// its label equals `target` the reporter receives the label and the final
    /// inventory. Leaves are reported depth-first, branching over slots in
    /// inventory order.
    ///
    /// The memo tables live only for this call.
    pub fn explore<R>(
        &self,
        accumulator: Accumulator,
        inventory: &Inventory,
        rule: &ClassificationRule,
        target: &str,
        reporter: &mut R,
    ) -> SearchStats
    where
        R: Reporter + ?Sized,
    {
        let start = Instant::now();

        tracing::debug!(
            target_label = target,
            branching = %self.branching,
            memoize = self.memoize,
            slots = inventory.len(),
            size_threshold = rule.size_threshold,
            depth_bound = ?depth_bound(accumulator, inventory, rule),
            "search starting"
        );

        let cache = if self.memoize {
            TransitionCache::new()
        } else {
            TransitionCache::disabled()
        };

        let mut run = Run {
            rule,
            target,
            branching: self.branching,
            cache,
            stats: SearchStats::default(),
            reporter,
        };
        run.visit(accumulator, inventory, 0, 0);

        let mut stats = run.stats;
        stats.cache = run.cache.stats();
        stats.duration = start.elapsed();

        tracing::debug!(
            nodes_visited = stats.nodes_visited,
            terminals = stats.terminals,
            matches = stats.matches,
            max_depth = stats.max_depth,
            cache_entries = run.cache.len(),
            duration = ?stats.duration,
            "search complete"
        );

        stats
    }
}

/// Upper bound on the recursion depth below `accumulator`.
///
/// This is `ceil(remaining weight / lightest stocked food)`, capped by the
/// number of units left. Returns `Some(0)` when the accumulator is already
/// terminal and `None` when nothing is stocked.
#[must_use]
pub fn depth_bound(
    accumulator: Accumulator,
    inventory: &Inventory,
    rule: &ClassificationRule,
) -> Option<usize> {
    if accumulator.reached(rule.size_threshold) {
        return Some(0);
    }

    let lightest = inventory.lightest_stocked()?;
    let missing = rule.size_threshold - accumulator.total_weight;
    let steps = u64::from(missing.div_ceil(lightest)).min(inventory.remaining_units());
    Some(usize::try_from(steps).unwrap_or(usize::MAX))
}

/// State of one search invocation.
struct Run<'a, R: ?Sized> {
    rule: &'a ClassificationRule,
    target: &'a str,
    branching: Branching,
    cache: TransitionCache,
    stats: SearchStats,
    reporter: &'a mut R,
}

impl<R> Run<'_, R>
where
    R: Reporter + ?Sized,
{
    fn visit(&mut self, accumulator: Accumulator, inventory: &Inventory, from: usize, depth: usize) {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if accumulator.reached(self.rule.size_threshold) {
            self.stats.terminals += 1;
            let label = self
                .cache
                .classify(self.rule, accumulator.traits)
                .label(self.rule);

            if label == self.target {
                self.stats.matches += 1;
                tracing::trace!(depth, %accumulator, "match");
                self.reporter.report(self.target, inventory);
            }
            return;
        }

        let first = match self.branching {
            Branching::Sequence => 0,
            Branching::Multiset => from,
        };

        for (index, slot) in inventory.slots().iter().enumerate().skip(first) {
            if !slot.has_stock() {
                continue;
            }
            let Some(next_inventory) = self.cache.consume(inventory, index) else {
                continue;
            };
            let next = self.cache.apply(accumulator, slot.resource());
            self.visit(next, &next_inventory, index, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Resource, Slot};
    use crate::reporter::CollectingReporter;
    use crate::rule::NOBLE;
    use crate::traits::TraitVector;

    fn permissive(size: u32) -> ClassificationRule {
        ClassificationRule::new(TraitVector::splat(-10), "iron", "poison").with_size_threshold(size)
    }

    fn two_singles() -> Inventory {
        Inventory::new([
            Slot::new("a", 1, Resource::new(1, TraitVector::ZERO)),
            Slot::new("b", 1, Resource::new(1, TraitVector::ZERO)),
        ])
        .expect("valid inventory")
    }

    #[test]
    fn executor_defaults() {
        let executor = SearchExecutor::new();
        assert_eq!(executor.branching(), Branching::Sequence);
        assert!(executor.memoize);
        assert!(!executor.without_memoization().memoize);
    }

    #[test]
    fn terminal_root_reports_once() {
        let mut reporter = CollectingReporter::new();
        let fed = Accumulator::EMPTY.apply(Resource::new(5, TraitVector::ZERO));
        let stats = SearchExecutor::new().explore(fed, &two_singles(), &permissive(5), "iron", &mut reporter);

        assert_eq!(stats.nodes_visited, 1);
        assert_eq!(stats.matches, 1);
        assert_eq!(reporter.solutions()[0].count("a"), Some(0));
        assert_eq!(reporter.solutions()[0].count("b"), Some(0));
    }

    #[test]
    fn permutations_reported_per_order() {
        let mut reporter = CollectingReporter::new();
        let stats = SearchExecutor::new().search(&two_singles(), &permissive(2), "iron", &mut reporter);

        assert_eq!(stats.matches, 2);
        assert_eq!(reporter.solutions()[0], reporter.solutions()[1]);
    }

    #[test]
    fn multiset_branching_collapses_permutations() {
        let mut reporter = CollectingReporter::new();
        let stats = SearchExecutor::new()
            .with_branching(Branching::Multiset)
            .search(&two_singles(), &permissive(2), "iron", &mut reporter);

        assert_eq!(stats.matches, 1);
        assert_eq!(reporter.solutions()[0].count("a"), Some(1));
        assert_eq!(reporter.solutions()[0].count("b"), Some(1));
    }

    #[test]
    fn non_matching_leaves_are_counted_not_reported() {
        let mut reporter = CollectingReporter::new();
        let stats = SearchExecutor::new().search(&two_singles(), &permissive(2), NOBLE, &mut reporter);

        assert_eq!(stats.terminals, 2);
        assert_eq!(stats.matches, 0);
        assert!(reporter.is_empty());
    }

    #[test]
    fn unreachable_threshold_has_no_terminals() {
        let mut reporter = CollectingReporter::new();
        let stats = SearchExecutor::new().search(&two_singles(), &permissive(3), "iron", &mut reporter);

        assert_eq!(stats.terminals, 0);
        assert_eq!(stats.max_depth, 2);
        assert!(reporter.is_empty());
    }

    #[test]
    fn depth_bound_uses_lightest_stocked_food() {
        let pantry = Inventory::new([
            Slot::new("egg", 10, Resource::new(2, TraitVector::ZERO)),
            Slot::new("mint", 0, Resource::new(1, TraitVector::ZERO)),
        ])
        .expect("valid inventory");

        assert_eq!(depth_bound(Accumulator::EMPTY, &pantry, &permissive(7)), Some(4));
        assert_eq!(depth_bound(Accumulator::EMPTY, &pantry, &permissive(40)), Some(10));
        assert_eq!(depth_bound(Accumulator::EMPTY, &two_singles(), &permissive(0)), Some(0));
    }

    #[test]
    fn branching_serde_names() {
        let parsed: Branching = serde_json::from_str("\"multiset\"").expect("known variant");
        assert_eq!(parsed, Branching::Multiset);
        assert_eq!(
            serde_json::to_string(&Branching::Sequence).expect("serialize"),
            "\"sequence\""
        );
    }

    #[test]
    fn stats_serialize_without_duration() {
        let mut reporter = CollectingReporter::new();
        let stats = SearchExecutor::new().search(&two_singles(), &permissive(2), "iron", &mut reporter);
        let json = serde_json::to_value(stats).expect("serialize");

        assert_eq!(json["matches"], 2);
        assert_eq!(json["max_depth"], 2);
        assert!(json.get("duration").is_none());
        assert!(json["cache"]["apply"]["hits"].is_u64());
    }

    #[test]
    fn depth_bound_survives_huge_stock() {
        let pantry = Inventory::new([
            Slot::new("golden_egg", u32::MAX, Resource::new(2, TraitVector::ZERO)),
            Slot::new("mushroom", 1, Resource::new(1, TraitVector::ZERO)),
        ])
        .expect("valid inventory");

        assert_eq!(depth_bound(Accumulator::EMPTY, &pantry, &permissive(4)), Some(4));
    }

    #[test]
    fn depth_bound_none_without_stock() {
        let pantry = Inventory::new([Slot::new("egg", 0, Resource::new(2, TraitVector::ZERO))])
            .expect("valid inventory");
        assert_eq!(depth_bound(Accumulator::EMPTY, &pantry, &permissive(4)), None);
    }
}
