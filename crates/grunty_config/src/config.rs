//! Configuration document and its validated form.
//!
//! A [`Config`] is the raw YAML document. [`Config::resolve`] checks it
//! against a [`ServerRegistry`] and a [`FoodCatalog`] and yields a [`Plan`]:
//! a rule, a target label, and a pantry ready for the search.
//!
//! # Example
//!
//! ```
//! use grunty_config::{Config, FoodCatalog, ServerRegistry};
//!
//! let yaml = "
//! server: Theta
//! goal: Iron
//! food:
//!   golden_egg: 20
//!   grunt_mints: 0
//!   twilight_onion: 0
//!   snaky_cactus: 0
//!   oh_no_melon: 0
//!   cordyceps: 0
//!   white_cherry: 0
//!   root_vegetable: 0
//!   la_pumpkin: 0
//!   mushroom: 0
//!   mandragora: 0
//!   piney_apple: 0
//!   immature_egg: 0
//!   bear_cat_egg: 0
//!   invisible_egg: 0
//!   bloody_egg: 0
//! ";
//!
//! let plan = Config::from_yaml_str(yaml)?
//!     .resolve(&ServerRegistry::builtin(), &FoodCatalog::builtin())?;
//! assert_eq!(plan.target, "iron");
//! assert_eq!(plan.rule.size_threshold, 30);
//! # Ok::<(), grunty_config::ConfigError>(())
//! ```

use std::path::Path;

use grunty_search::{Branching, ClassificationRule, Inventory, Reporter, SearchExecutor, SearchStats};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::foods::FoodCatalog;
use crate::servers::ServerRegistry;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// The configuration document as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Server name, any case.
    pub server: String,
    /// Target grunty type, any case.
    pub goal: String,
    /// Branching strategy for the search.
    #[serde(default)]
    pub branching: Branching,
    /// Available units per food name.
    #[serde(default)]
    pub food: IndexMap<String, u32>,
}

impl Config {
    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "config loaded");
        Self::from_yaml_str(&yaml)
    }

    /// Validates the document and builds the search inputs.
    ///
    /// Server and goal names are matched case-insensitively. The goal must be
    /// a label of some registered server, or `"noble"`; it need not be one the
    /// chosen server produces, in which case the search simply finds nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownServer`], [`ConfigError::UnknownGoal`],
    /// or [`ConfigError::MissingFood`] as appropriate.
    pub fn resolve(
        &self,
        servers: &ServerRegistry,
        foods: &FoodCatalog,
    ) -> Result<Plan, ConfigError> {
        let server = self.server.to_lowercase();
        let rule = servers
            .get(&server)
            .ok_or_else(|| ConfigError::UnknownServer(self.server.clone()))?
            .clone();

        let target = self.goal.to_lowercase();
        if !servers.is_known_label(&target) {
            return Err(ConfigError::UnknownGoal(self.goal.clone()));
        }
        if !rule.produces(&target) {
            tracing::warn!(
                server = %server,
                goal = %target,
                "server never produces this grunty type; expect no results"
            );
        }

        let inventory = foods.stock(&self.food)?;

        Ok(Plan {
            server,
            rule,
            target,
            inventory,
            branching: self.branching,
        })
    }
}

/// Validated inputs for one search.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Lowercase server name.
    pub server: String,
    /// The server's classification rule.
    pub rule: ClassificationRule,
    /// Lowercase target label.
    pub target: String,
    /// Starting pantry.
    pub inventory: Inventory,
    /// Branching strategy.
    pub branching: Branching,
}

impl Plan {
    /// An executor configured for this plan.
    #[must_use]
    pub fn executor(&self) -> SearchExecutor {
        SearchExecutor::new().with_branching(self.branching)
    }

    /// Runs the search, sending every match to `reporter`.
    pub fn run<R>(&self, reporter: &mut R) -> SearchStats
    where
        R: Reporter + ?Sized,
    {
        tracing::info!(
            server = %self.server,
            goal = %self.target,
            branching = %self.branching,
            rule = %self.rule,
            "searching"
        );
        self.executor()
            .search(&self.inventory, &self.rule, &self.target, reporter)
    }
}
