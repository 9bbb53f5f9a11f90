//! Post phase: delete the env file written by the main phase.

use std::path::Path;

use tracing::debug;

use crate::core::host::Host;

/// Result of a cleanup attempt. Cleanup never fails the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `clean` was `false`.
    Disabled,
    /// Nothing at the path.
    Missing,
    Deleted,
    /// The file exists but could not be removed.
    Failed,
}

/// Delete `file` unless cleanup is disabled.
///
/// Relative paths are resolved against the working directory. Problems are
/// reported through the host as warnings.
pub fn cleanup<H: Host + ?Sized>(host: &mut H, file: &Path, clean: bool) -> Outcome {
    let shown = file.display();

    if !clean {
        host.info(&format!(
            "Clean is false. Skipping deletion of file {}",
            shown
        ));
        return Outcome::Disabled;
    }

    if !file.exists() {
        host.warning(&format!("File {} not found. Nothing to delete.", shown));
        return Outcome::Missing;
    }

    debug!(path = %shown, "removing env file");
    match std::fs::remove_file(file) {
        Ok(()) => {
            host.info(&format!("Successfully deleted file {}", shown));
            Outcome::Deleted
        }
        Err(e) => {
            host.warning(&format!("Failed to delete file {}: {}", shown, e));
            Outcome::Failed
        }
    }
}
