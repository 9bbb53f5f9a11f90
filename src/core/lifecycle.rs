//! Main/post phase dispatch.
//!
//! The runner invokes the tool twice per job: once as a regular step and once
//! as its post step. The first invocation saves `isPost=true` so the second
//! one knows to clean up. State is scoped to a single job run, so the two
//! phases never overlap.

use std::path::Path;

use tracing::debug;

use crate::core::cleanup::{cleanup, Outcome};
use crate::core::config::{clean_enabled, Inputs, Settings};
use crate::core::constants::{self, state};
use crate::core::host::Host;
use crate::core::inject::{inject, Report};
use crate::error::Result;

/// Which half of the job lifecycle is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Main,
    Post,
}

impl Phase {
    /// Read the phase from saved state. Anything but `isPost=true` is the
    /// main phase.
    pub fn detect<H: Host + ?Sized>(host: &H) -> Self {
        if host.state(state::IS_POST).as_deref() == Some("true") {
            Phase::Post
        } else {
            Phase::Main
        }
    }
}

/// What a completed phase did.
#[derive(Debug)]
pub enum Completed {
    Main(Report),
    Post(Outcome),
}

/// Run whichever phase the saved state selects.
///
/// # Errors
///
/// Returns the main phase's error; the post phase never fails.
pub fn dispatch<H: Host + ?Sized>(host: &mut H, inputs: Inputs) -> Result<Completed> {
    let phase = Phase::detect(host);
    debug!(?phase, "dispatching");

    match phase {
        Phase::Main => run_main(host, inputs).map(Completed::Main),
        Phase::Post => Ok(Completed::Post(run_post(host))),
    }
}

/// Main phase: mark the job as started, inject secrets, then save what the
/// post phase needs.
///
/// # Errors
///
/// Returns any configuration, filter, host or write error.
pub fn run_main<H: Host + ?Sized>(host: &mut H, inputs: Inputs) -> Result<Report> {
    host.save_state(state::IS_POST, "true")?;

    let settings = Settings::from_inputs(inputs)?;
    let report = inject(host, &settings)?;

    host.save_state(state::FILE, &settings.file.to_string_lossy())?;
    host.save_state(state::CLEAN, &settings.clean)?;

    Ok(report)
}

/// Post phase: remove the env file unless `clean` was `false`.
pub fn run_post<H: Host + ?Sized>(host: &mut H) -> Outcome {
    let file = host
        .state(state::FILE)
        .unwrap_or_else(|| constants::ENV_FILE.to_string());
    let clean = clean_enabled(host.state(state::CLEAN).as_deref());
    debug!(file = %file, clean, "post phase");

    cleanup(host, Path::new(&file), clean)
}
