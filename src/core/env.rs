//! Env file output.
//!
//! Accumulates `NAME='VALUE'` lines during the main phase and writes them to
//! disk in one step.

#[cfg(unix)]
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::core::types::{SecretValue, VarName};
use crate::error::{Error, Result};

/// An env file waiting to be written.
///
/// Values are placed verbatim between single quotes. A value that contains a
/// single quote or a newline therefore produces a line most dotenv parsers
/// will not read back as written.
#[derive(Debug)]
pub struct EnvFile {
    entries: Vec<(VarName, SecretValue)>,
    path: PathBuf,
}

impl EnvFile {
    /// Create an empty env file targeting `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            path: path.into(),
        }
    }

    /// Append an entry. Duplicate names are kept; the last one wins for
    /// shells that source the file.
    pub fn push(&mut self, name: impl Into<VarName>, value: SecretValue) {
        self.entries.push((name.into(), value));
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the file contents.
    pub fn render(&self) -> SecretValue {
        let mut output = String::new();
        for (name, value) in &self.entries {
            output.push_str(name);
            output.push_str("='");
            output.push_str(value);
            output.push_str("'\n");
        }
        SecretValue::new(output)
    }

    /// Write the file, replacing any existing one.
    ///
    /// The contents are flushed before this returns. On Unix the file is
    /// readable by the owner only.
    ///
    /// # Errors
    ///
    /// Returns `Error::WriteFile` if the file cannot be created or written.
    pub fn save(&self) -> Result<()> {
        debug!(path = %self.path.display(), entries = self.len(), "writing env file");

        self.write().map_err(|source| Error::WriteFile {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self) -> std::io::Result<()> {
        let content = self.render();

        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(&self.path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;

            // An existing file keeps its old mode when truncated.
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(&self.path, content.as_bytes())?;
        }

        Ok(())
    }
}
