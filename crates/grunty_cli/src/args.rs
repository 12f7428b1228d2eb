//! Command-line argument parsing.

use std::path::PathBuf;

use grunty_config::DEFAULT_CONFIG_PATH;
use thiserror::Error;
use tracing::Level;

use crate::logging::{LogConfig, LogFormat};
use crate::output::OutputFormat;

/// Usage text printed for `--help` and after argument errors.
pub const USAGE: &str = "\
Usage: grunty [CONFIG] [OPTIONS]

Lists every feeding plan that raises a grunty of the configured goal type.

Arguments:
  [CONFIG]                 YAML config file [default: config.yml]

Options:
  --multiset               Report each combination of foods once, ignoring order
  --json                   Print one JSON object per plan
  --log-level LEVEL        trace, debug, info, warn or error [default: warn]
  --log-format FORMAT      pretty, compact or json [default: compact]
  -h, --help               Print this help
";

/// Errors from argument parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// `--help` was requested.
    #[error("help requested")]
    Help,

    /// An option that takes a value was last on the line.
    #[error("missing value for {0}")]
    MissingValue(String),

    /// `--log-level` was not a tracing level.
    #[error("invalid log level {0}")]
    InvalidLevel(String),

    /// `--log-format` was not a known format.
    #[error("invalid log format {0}")]
    InvalidFormat(String),

    /// An option nobody recognizes.
    #[error("unknown option {0}")]
    UnknownOption(String),

    /// More than one config path.
    #[error("unexpected argument {0}")]
    UnexpectedArgument(String),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Config file to load.
    pub config_path: PathBuf,
    /// Force multiset branching regardless of the config.
    pub multiset: bool,
    /// Result format.
    pub format: OutputFormat,
    /// Subscriber settings.
    pub log: LogConfig,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            multiset: false,
            format: OutputFormat::Text,
            log: LogConfig::default(),
        }
    }
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::Help`] for `-h`/`--help` and a descriptive
    /// variant for anything malformed.
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut config_path: Option<PathBuf> = None;
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(ArgsError::Help),
                "--multiset" => parsed.multiset = true,
                "--json" => parsed.format = OutputFormat::Json,
                "--log-level" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                    let level = value
                        .parse::<Level>()
                        .map_err(|_| ArgsError::InvalidLevel(value.clone()))?;
                    parsed.log = parsed.log.with_level(level);
                }
                "--log-format" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                    let format = value.parse::<LogFormat>().map_err(ArgsError::InvalidFormat)?;
                    parsed.log = parsed.log.with_format(format);
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ArgsError::UnknownOption(flag.to_string()));
                }
                other if config_path.is_some() => {
                    return Err(ArgsError::UnexpectedArgument(other.to_string()));
                }
                other => config_path = Some(PathBuf::from(other)),
            }
        }

        if let Some(path) = config_path {
            parsed.config_path = path;
        }
        Ok(parsed)
    }
}
