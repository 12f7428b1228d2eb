//! Configuration boundary for grunty.
//!
//! Turns a YAML document naming a server, a target grunty type, and food
//! counts into the validated inputs [`grunty_search`] runs on.
//!
//! - [`ServerRegistry`] - Classification rules by server name
//! - [`FoodCatalog`] - Food weights and trait deltas, in pantry order
//! - [`Config`] - The document as written
//! - [`Plan`] - The validated rule, target, and pantry

/// Configuration document and validation.
pub mod config;

/// Error types.
pub mod error;

/// Food catalog.
pub mod foods;

/// Server registry.
pub mod servers;

pub use config::{Config, DEFAULT_CONFIG_PATH, Plan};
pub use error::ConfigError;
pub use foods::FoodCatalog;
pub use servers::ServerRegistry;
