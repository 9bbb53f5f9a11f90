//! Top-level output helpers.
//!
//! Under GitHub Actions (`GITHUB_ACTIONS=true`) errors are emitted as
//! `::error::` workflow commands so the runner fails the step with an
//! annotation. Elsewhere they are printed to stderr, colored unless
//! `NO_COLOR` is set.

use console::style;

use crate::core::constants::GITHUB_ACTIONS;
use crate::core::host::command;

/// Whether we are running inside a GitHub Actions step.
pub fn in_actions() -> bool {
    std::env::var(GITHUB_ACTIONS).is_ok_and(|v| v == "true")
}

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message.
///
/// Example: `✗ Input required and not supplied: secrets`
pub fn error(msg: &str) {
    if in_actions() {
        println!("{}", command::format("error", &[], msg));
    } else if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message.
///
/// Example: `→ pass --secrets or set INPUT_SECRETS`
pub fn hint(msg: &str) {
    if in_actions() {
        println!("{}", msg);
    } else if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}
