//! CI host capabilities.
//!
//! Everything the two phases need from the orchestrator goes through the
//! [`Host`] trait: reading and exporting environment variables, saving and
//! reading per-job state, and writing log lines. Keeping these behind a trait
//! lets the pipeline run against an in-memory host in tests.
//!
//! ## Implementations
//!
//! - [`Actions`]: GitHub Actions runner (command files and workflow commands)
//! - [`Memory`]: in-memory host that records every call

use crate::error::Result;

mod actions;
pub mod command;
mod memory;

pub use actions::Actions;
pub use memory::{Log, Memory};

/// Orchestrator capabilities used by the main and post phases.
pub trait Host {
    /// Current value of an environment variable.
    ///
    /// Returns `None` when the variable is unset or empty.
    fn var(&self, name: &str) -> Option<String>;

    /// Export a variable to this process and to later steps of the job.
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the export cannot be recorded.
    fn export_var(&mut self, name: &str, value: &str) -> Result<()>;

    /// Value saved under `name` by an earlier phase of this job.
    ///
    /// Returns `None` when nothing (or an empty string) was saved.
    fn state(&self, name: &str) -> Option<String>;

    /// Save a value for a later phase of this job.
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the state cannot be recorded.
    fn save_state(&mut self, name: &str, value: &str) -> Result<()>;

    /// Write an informational log line.
    fn info(&mut self, message: &str);

    /// Write a warning annotation.
    fn warning(&mut self, message: &str);
}
