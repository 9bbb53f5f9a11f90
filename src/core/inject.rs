//! Main phase: export secrets and write the env file.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::core::config::Settings;
use crate::core::env::EnvFile;
use crate::core::host::Host;
use crate::core::secrets::SecretSet;
use crate::error::Result;

/// What the main phase did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Lines written to the env file.
    pub written: usize,
    /// Variables exported to the environment.
    pub exported: usize,
    /// Variables left alone because they already existed and override is off.
    pub skipped: usize,
    /// Secrets dropped by the include/exclude filter.
    pub filtered: usize,
    /// Env file path.
    pub file: PathBuf,
}

/// Filter, rename, export and write every secret.
///
/// Every surviving secret gets a line in the env file, even when its export
/// is suppressed or skipped. Variables exported before a failure stay
/// exported.
///
/// # Errors
///
/// Returns `ConfigError::InvalidSecrets` for a malformed secrets object,
/// `FilterError` for an invalid pattern, `HostError` if an export cannot be
/// recorded, and `Error::WriteFile` if the env file cannot be written.
pub fn inject<H: Host + ?Sized>(host: &mut H, settings: &Settings) -> Result<Report> {
    let secrets = SecretSet::parse(&settings.secrets)?;
    let pipeline = settings.pipeline()?;
    if secrets.is_empty() {
        debug!("secrets object is empty");
    } else {
        debug!(secrets = secrets.len(), "secrets decoded");
    }

    let mut env_file = EnvFile::new(&settings.file);
    let mut report = Report {
        file: settings.file.clone(),
        ..Report::default()
    };

    for secret in secrets.iter() {
        let key = secret.key;
        let Some(name) = pipeline.apply(key) else {
            report.filtered += 1;
            continue;
        };
        debug!(key = %key, name = %name, "materializing secret");

        if !settings.no_env {
            let exists = host.var(&name).is_some();

            if exists && !settings.override_existing {
                host.info(&format!("Skip overwriting secret {}", name));
                report.skipped += 1;
            } else {
                if exists {
                    host.warning(&format!("Will re-write \"{}\" environment variable.", name));
                }
                host.export_var(&name, secret.exported())?;
                host.info(&format!("Exported secret {}", name));
                report.exported += 1;
            }
        }

        env_file.push(name, secret.value);
    }

    host.info(&format!("Writing to file: {}", settings.file.display()));
    env_file.save()?;
    report.written = env_file.len();

    info!(
        written = report.written,
        exported = report.exported,
        skipped = report.skipped,
        filtered = report.filtered,
        "secrets injected"
    );

    Ok(report)
}
