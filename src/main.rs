//! secrets-to-env - Export CI job secrets as environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secrets_to_env::cli::output;
use secrets_to_env::cli::{execute, Cli};
use secrets_to_env::core::constants::LOG_ENV;
use secrets_to_env::error::{ConfigError, Error, FilterError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secrets_to_env=debug")
        } else {
            EnvFilter::new("secrets_to_env=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.inputs) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingInput(_)) => {
                Some("pass --secrets or set INPUT_SECRETS")
            }
            Error::Filter(FilterError::InvalidPattern { .. }) => {
                Some("include and exclude take comma-separated regular expressions")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
