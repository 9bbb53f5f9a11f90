//! GitHub Actions runner host.
//!
//! Exports and saved state are appended to the runner's command files when
//! `GITHUB_ENV` / `GITHUB_STATE` are set, and issued as workflow commands on
//! stdout otherwise. Saved state comes back in the next phase as
//! `STATE_<name>` environment variables.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use console::style;
use tracing::debug;

use super::{command, Host};
use crate::core::constants::{GITHUB_ACTIONS, GITHUB_ENV, GITHUB_STATE, STATE_PREFIX};
use crate::error::{HostError, Result};

/// Host backed by the GitHub Actions runner.
#[derive(Debug, Clone, Default)]
pub struct Actions {
    env_file: Option<PathBuf>,
    state_file: Option<PathBuf>,
    annotate: bool,
}

impl Actions {
    /// Configure from the runner's environment variables.
    pub fn from_env() -> Self {
        let file = |name: &str| {
            std::env::var_os(name)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };

        let host = Self {
            env_file: file(GITHUB_ENV),
            state_file: file(GITHUB_STATE),
            annotate: std::env::var(GITHUB_ACTIONS).is_ok_and(|v| v == "true"),
        };
        debug!(
            env_file = ?host.env_file,
            state_file = ?host.state_file,
            annotate = host.annotate,
            "actions host"
        );
        host
    }

    /// Use explicit command files.
    pub fn with_files(env_file: Option<PathBuf>, state_file: Option<PathBuf>) -> Self {
        Self {
            env_file,
            state_file,
            annotate: true,
        }
    }
}

/// Whether the process environment can hold `name`.
fn settable(name: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0'])
}

/// Append a heredoc block to a command file that the runner created.
fn append(path: &Path, name: &str, value: &str) -> Result<()> {
    let message = command::key_value_message(name, value)?;

    let write = || -> std::io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(path)?;
        writeln!(file, "{}", message)?;
        file.flush()
    };

    write().map_err(|source| {
        HostError::CommandFile {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

impl Host for Actions {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }

    fn export_var(&mut self, name: &str, value: &str) -> Result<()> {
        if settable(name) {
            std::env::set_var(name, value);
        } else {
            self.warning(&format!(
                "\"{}\" is not a valid environment variable name; it is only passed to the runner.",
                name
            ));
        }

        match &self.env_file {
            Some(path) => append(path, name, value),
            None => {
                println!("{}", command::format("set-env", &[("name", name)], value));
                Ok(())
            }
        }
    }

    fn state(&self, name: &str) -> Option<String> {
        std::env::var(format!("{}{}", STATE_PREFIX, name))
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn save_state(&mut self, name: &str, value: &str) -> Result<()> {
        debug!(name, value, "saving state");

        match &self.state_file {
            Some(path) => append(path, name, value),
            None => {
                println!("{}", command::format("save-state", &[("name", name)], value));
                Ok(())
            }
        }
    }

    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn warning(&mut self, message: &str) {
        if self.annotate {
            println!("{}", command::format("warning", &[], message));
        } else {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }
}
