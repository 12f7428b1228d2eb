//! `grunty` binary.
//!
//! # Usage
//!
//! ```bash
//! grunty [CONFIG] [--multiset] [--json] [--log-level LEVEL] [--log-format FORMAT]
//! ```
//!
//! # Example
//!
//! ```bash
//! grunty config.yml --json --log-level info
//! ```

use std::io::Write;
use std::process::ExitCode;

use grunty_cli::{ArgsError, CliArgs, LogConfig, USAGE};

fn main() -> ExitCode {
    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(ArgsError::Help) => {
            let _ = std::io::stdout().write_all(USAGE.as_bytes());
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            LogConfig::default().init();
            tracing::error!("{err}");
            let _ = std::io::stderr().write_all(USAGE.as_bytes());
            return ExitCode::from(1);
        }
    };

    args.log.init();

    match grunty_cli::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
