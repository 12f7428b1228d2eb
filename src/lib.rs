//! Exhaustive search for grunty feeding plans.
//!
//! Re-exports the search engine as [`search`] and the YAML configuration
//! layer as [`config`].
//!
//! ```
//! use grunty::prelude::*;
//!
//! let rule = ServerRegistry::builtin().get("theta").cloned().expect("builtin");
//! let pantry = Inventory::new([Slot::new("golden_egg", 20, Resource::new(2, TraitVector::ZERO))])?;
//!
//! let mut found = CollectingReporter::new();
//! SearchExecutor::new().search(&pantry, &rule, "noble", &mut found);
//! assert_eq!(found.solutions()[0].count("golden_egg"), Some(15));
//! # Ok::<(), grunty::search::InventoryError>(())
//! ```

pub use grunty_config as config;
pub use grunty_search as search;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use grunty_config::{Config, ConfigError, FoodCatalog, Plan, ServerRegistry};
    pub use grunty_search::prelude::*;
}
