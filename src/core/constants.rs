//! Constants used throughout secrets-to-env.
//!
//! Centralizes magic strings and default values.

/// Output file written by the main phase when `file` is not set.
pub const ENV_FILE: &str = ".env";

/// Patterns that are always excluded, ahead of any configured `exclude`.
pub const DEFAULT_EXCLUDES: &[&str] = &["github_token"];

/// Separator for `include` and `exclude` pattern lists.
pub const PATTERN_SEPARATOR: char = ',';

/// Prefix of the environment variables the runner uses to pass saved state.
pub const STATE_PREFIX: &str = "STATE_";

/// Command file receiving exported variables.
pub const GITHUB_ENV: &str = "GITHUB_ENV";

/// Command file receiving saved state.
pub const GITHUB_STATE: &str = "GITHUB_STATE";

/// Set to `true` by the runner for every step.
pub const GITHUB_ACTIONS: &str = "GITHUB_ACTIONS";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "SECRETS_TO_ENV_LOG";

/// Saved-state keys shared by the main and post phases.
pub mod state {
    /// Set to `true` once the main phase has started.
    pub const IS_POST: &str = "isPost";

    /// Path of the file written by the main phase.
    pub const FILE: &str = "file";

    /// Whether the post phase should delete [`FILE`].
    pub const CLEAN: &str = "clean";
}
