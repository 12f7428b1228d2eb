//! Error types for configuration loading and validation.

use std::path::PathBuf;

use grunty_search::InventoryError;

/// Error turning a configuration document into a runnable search.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config '{path}': {source}", path = path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not have the expected shape.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// No server with this name is registered.
    #[error("invalid server {0}")]
    UnknownServer(String),

    /// The goal is not a label any registered server can produce.
    #[error("invalid grunty type {0}")]
    UnknownGoal(String),

    /// The food counts omit a food the catalog requires.
    #[error("missing food count: {0}")]
    MissingFood(String),

    /// The catalog produced an invalid pantry.
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
