//! Exhaustive feeding-plan search for grunty.
//!
//! `grunty_search` enumerates every way to feed a grunty from a finite pantry
//! until it reaches its server's size threshold, and reports each feeding
//! whose final traits classify as the requested type.
//!
//! # Core Concepts
//!
//! - [`TraitVector`] - Five-axis additive trait values
//! - [`ClassificationRule`] - A server's bounds, range, size threshold, and labels
//! - [`Resource`], [`Slot`], [`Inventory`] - Foods and the immutable pantry snapshot
//! - [`Accumulator`] - The grunty's weight and accumulated traits
//! - [`TransitionCache`] - Value-keyed memo tables scoped to one search
//! - [`SearchExecutor`] - Depth-first enumerator
//! - [`Reporter`] - Sink for matching leaves
//!
//! # Example
//!
//! ```
//! use grunty_search::prelude::*;
//!
//! let theta = ClassificationRule::new(TraitVector::new(0, -5, 10, 5, -5), "iron", "poison")
//!     .with_size_threshold(30);
//! let pantry = Inventory::new([
//!     Slot::new("golden_egg", 20, Resource::new(2, TraitVector::ZERO)),
//! ])?;
//!
//! let mut reporter = CollectingReporter::new();
//! SearchExecutor::new().search(&pantry, &theta, "iron", &mut reporter);
//!
//! // Golden eggs alone leave brutality below theta's bound.
//! assert!(reporter.is_empty());
//! # Ok::<(), InventoryError>(())
//! ```

/// Grunty state and the `apply` transition.
pub mod accumulator;

/// Memo tables for the search transitions.
pub mod cache;

/// Depth-first search engine.
pub mod executor;

/// Foods, slots, and pantry snapshots.
pub mod inventory;

/// Sinks for matching leaves.
pub mod reporter;

/// Server classification rules.
pub mod rule;

/// Five-axis trait vectors.
pub mod traits;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::accumulator::Accumulator;
    pub use crate::cache::{CacheStats, TableStats, TransitionCache};
    pub use crate::executor::{Branching, SearchExecutor, SearchStats, depth_bound};
    pub use crate::inventory::{Inventory, InventoryError, Resource, Slot};
    pub use crate::reporter::{CollectingReporter, Reporter, Solution};
    pub use crate::rule::{Classification, ClassificationRule, NOBLE};
    pub use crate::traits::{Axis, TraitVector};
}

// Re-export key types at crate root for convenience
pub use accumulator::Accumulator;
pub use cache::{CacheStats, TransitionCache};
pub use executor::{Branching, SearchExecutor, SearchStats};
pub use inventory::{Inventory, InventoryError, Resource, Slot};
pub use reporter::{CollectingReporter, Reporter, Solution};
pub use rule::{Classification, ClassificationRule, NOBLE};
pub use traits::{Axis, TraitVector};
