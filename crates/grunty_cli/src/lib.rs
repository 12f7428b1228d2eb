//! Command-line front end for the grunty feeding-plan search.
//!
//! The binary loads a YAML config, resolves it against the built-in servers
//! and foods, and streams every matching plan to stdout. This library holds
//! everything but `main` so the pieces can be tested in-process.

pub mod args;
pub mod logging;
pub mod output;

use std::io::{self, BufWriter, Write};

use grunty_config::{Config, ConfigError, FoodCatalog, ServerRegistry};
use grunty_search::{Branching, SearchStats};
use thiserror::Error;

pub use args::{ArgsError, CliArgs, USAGE};
pub use logging::{LogConfig, LogFormat};
pub use output::{OutputFormat, SolutionWriter};

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The config could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Results could not be written.
    #[error("failed to write results: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => 1,
            CliError::Output(_) => 2,
        }
    }
}

/// Runs one search and writes its matches to `out`.
///
/// A write failure (a closed pipe, say) does not stop the search. It runs to
/// completion, later matches are dropped, and the error is returned at the end.
///
/// # Errors
///
/// Returns [`CliError::Config`] if the config is unusable and
/// [`CliError::Output`] if writing fails.
pub fn run_with<W: Write>(args: &CliArgs, out: W) -> Result<(W, SearchStats), CliError> {
    let config = Config::from_path(&args.config_path)?;
    let mut plan = config.resolve(&ServerRegistry::builtin(), &FoodCatalog::builtin())?;
    if args.multiset {
        plan.branching = Branching::Multiset;
    }

    tracing::debug!(
        config = %args.config_path.display(),
        format = %args.format,
        branching = %plan.branching,
        "plan resolved"
    );

    let mut writer = SolutionWriter::new(out, args.format);
    let stats = plan.run(&mut writer);

    tracing::info!(
        matches = stats.matches,
        terminals = stats.terminals,
        nodes = stats.nodes_visited,
        elapsed = ?stats.duration,
        "search complete"
    );

    let out = writer.finish()?;
    Ok((out, stats))
}

/// Runs one search against stdout.
///
/// # Errors
///
/// See [`run_with`].
pub fn run(args: &CliArgs) -> Result<SearchStats, CliError> {
    let stdout = io::stdout().lock();
    let (_, stats) = run_with(args, BufWriter::new(stdout))?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        let config = CliError::from(ConfigError::UnknownServer("delta".to_string()));
        let output = CliError::from(io::Error::from(io::ErrorKind::BrokenPipe));

        assert_eq!(config.exit_code(), 1);
        assert_eq!(output.exit_code(), 2);
    }

    #[test]
    fn missing_config_is_a_config_error() {
        let args = CliArgs {
            config_path: "does/not/exist.yml".into(),
            ..CliArgs::default()
        };
        let err = run_with(&args, Vec::new()).unwrap_err();

        assert!(matches!(err, CliError::Config(ConfigError::Io { .. })));
        assert_eq!(err.exit_code(), 1);
    }
}
