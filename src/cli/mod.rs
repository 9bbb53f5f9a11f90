//! Command-line interface.
//!
//! Every step input is available as a flag and, as the runner passes them, as
//! an `INPUT_<NAME>` environment variable.

pub mod output;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Inputs;
use crate::core::host::Actions;
use crate::core::lifecycle::{self, Completed};
use crate::error::Result;

/// secrets-to-env - Export CI job secrets as environment variables.
#[derive(Parser, Debug)]
#[command(
    name = "secrets-to-env",
    about = "Export CI job secrets as environment variables and a .env file",
    version,
    after_help = "Without a subcommand the phase is picked from saved step state:\nthe first call in a job runs `run`, the post step runs `cleanup`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub inputs: InputArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Explicit phases.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Export secrets and write the env file
    Run,
    /// Delete the env file written by `run`
    Cleanup,
}

/// Step inputs.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// JSON object of secrets, e.g. `${{ toJSON(secrets) }}`
    #[arg(long, global = true, env = "INPUT_SECRETS", hide_env_values = true)]
    pub secrets: Option<String>,

    /// Env file to write [default: .env]
    #[arg(long, global = true, env = "INPUT_FILE")]
    pub file: Option<String>,

    /// `true` to only write the file and skip exporting variables
    #[arg(long = "no-env", global = true, env = "INPUT_NO_ENV")]
    pub no_env: Option<String>,

    /// Prefix added to every variable name
    #[arg(long, global = true, env = "INPUT_PREFIX")]
    pub prefix: Option<String>,

    /// Comma-separated patterns; only matching secrets are kept
    #[arg(long, global = true, env = "INPUT_INCLUDE")]
    pub include: Option<String>,

    /// Comma-separated patterns to drop (github_token is always dropped)
    #[arg(long, global = true, env = "INPUT_EXCLUDE")]
    pub exclude: Option<String>,

    /// Case conversion: lower, upper, camel, constant, pascal or snake
    #[arg(long, global = true, env = "INPUT_CONVERT")]
    pub convert: Option<String>,

    /// `false` to leave the prefix out of case conversion
    #[arg(long = "convert-prefix", global = true, env = "INPUT_CONVERT_PREFIX")]
    pub convert_prefix: Option<String>,

    /// `false` to keep variables that already exist
    #[arg(long = "override", global = true, env = "INPUT_OVERRIDE")]
    pub override_existing: Option<String>,

    /// `false` to keep the env file after the job
    #[arg(long, global = true, env = "INPUT_CLEAN")]
    pub clean: Option<String>,
}

impl From<InputArgs> for Inputs {
    fn from(args: InputArgs) -> Self {
        Self {
            secrets: args.secrets,
            file: args.file,
            no_env: args.no_env,
            prefix: args.prefix,
            include: args.include,
            exclude: args.exclude,
            convert: args.convert,
            convert_prefix: args.convert_prefix,
            r#override: args.override_existing,
            clean: args.clean,
        }
    }
}

/// Execute the selected phase against the GitHub Actions runner.
pub fn execute(command: Option<Command>, inputs: InputArgs) -> Result<()> {
    let mut host = Actions::from_env();
    let inputs = Inputs::from(inputs);

    let completed = match command {
        None => lifecycle::dispatch(&mut host, inputs)?,
        Some(Command::Run) => Completed::Main(lifecycle::run_main(&mut host, inputs)?),
        Some(Command::Cleanup) => Completed::Post(lifecycle::run_post(&mut host)),
    };

    tracing::debug!(?completed, "done");
    Ok(())
}
