//! Error types.
//!
//! One top-level [`Error`] wraps a focused enum per concern so callers can
//! match on the failure class (e.g. to print a hint) without string parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Problems with the step inputs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("Cannot parse JSON secrets.\nMake sure you add with:\n  secrets: ${{{{ toJSON(secrets) }}}}")]
    InvalidSecrets(#[source] serde_json::Error),
}

/// An include or exclude pattern that is not a valid regular expression.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Failures talking to the CI host (command files, workflow commands).
#[derive(Error, Debug)]
pub enum HostError {
    #[error("failed to append to {}: {source}", .path.display())]
    CommandFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected input: {field} should not contain the delimiter \"{delimiter}\"")]
    DelimiterCollision {
        field: &'static str,
        delimiter: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
