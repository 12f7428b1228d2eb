//! Value-keyed memoization for the search transitions.
//!
//! A [`TransitionCache`] lives for exactly one search run. Keys are full
//! structural values, never identities, so two branches that reach the same
//! state through different orders share the cached result.

use hashbrown::HashMap;
use serde::Serialize;

use crate::accumulator::Accumulator;
use crate::inventory::{Inventory, Resource};
use crate::rule::{Classification, ClassificationRule};
use crate::traits::TraitVector;

/// Hit and miss counters for one cache table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    /// Lookups answered from the table.
    pub hits: u64,
    /// Lookups that had to compute the value.
    pub misses: u64,
}

impl TableStats {
    fn record(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }
}

/// Counters for every table of a [`TransitionCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// `Accumulator::apply` lookups.
    pub apply: TableStats,
    /// `Inventory::consume_at` lookups.
    pub consume: TableStats,
    /// `ClassificationRule::classify` lookups.
    pub classify: TableStats,
}

/// Memo tables for `apply`, `consume`, and `classify`.
///
/// Classification results depend on the rule, so a cache must not be reused
/// across runs with different rules. [`SearchExecutor`](crate::SearchExecutor)
/// creates a fresh one per run.
#[derive(Debug)]
pub struct TransitionCache {
    enabled: bool,
    apply: HashMap<(Accumulator, Resource), Accumulator>,
    consume: HashMap<(Inventory, usize), Inventory>,
    classify: HashMap<TraitVector, Classification>,
    stats: CacheStats,
}

impl Default for TransitionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionCache {
    /// Creates an empty cache that memoizes every transition.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            apply: HashMap::new(),
            consume: HashMap::new(),
            classify: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Creates a pass-through cache that recomputes every transition.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Returns `true` if lookups are memoized.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Memoized [`Accumulator::apply`].
    pub fn apply(&mut self, accumulator: Accumulator, resource: Resource) -> Accumulator {
        if !self.enabled {
            return accumulator.apply(resource);
        }

        let mut hit = true;
        let next = *self
            .apply
            .entry((accumulator, resource))
            .or_insert_with(|| {
                hit = false;
                accumulator.apply(resource)
            });
        self.stats.apply.record(hit);
        next
    }

    /// Memoized [`Inventory::consume_at`].
    pub fn consume(&mut self, inventory: &Inventory, index: usize) -> Option<Inventory> {
        if !self.enabled {
            return inventory.consume_at(index);
        }

        if let Some(next) = self.consume.get(&(inventory.clone(), index)) {
            self.stats.consume.record(true);
            return Some(next.clone());
        }

        let next = inventory.consume_at(index)?;
        self.stats.consume.record(false);
        self.consume.insert((inventory.clone(), index), next.clone());
        Some(next)
    }

    /// Memoized [`ClassificationRule::classify`].
    pub fn classify(&mut self, rule: &ClassificationRule, traits: TraitVector) -> Classification {
        if !self.enabled {
            return rule.classify(traits);
        }

        let mut hit = true;
        let class = *self.classify.entry(traits).or_insert_with(|| {
            hit = false;
            rule.classify(traits)
        });
        self.stats.classify.record(hit);
        class
    }

    /// Counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Number of memoized entries across all tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.apply.len() + self.consume.len() + self.classify.len()
    }

    /// Returns `true` if nothing has been memoized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
