//! Step configuration.
//!
//! Normalizes the raw step inputs into typed [`Settings`]. Input values are
//! trimmed and an empty value counts as not supplied, matching how the runner
//! hands inputs to a step.

use std::path::PathBuf;

use tracing::debug;

use crate::core::constants;
use crate::core::filter::Filter;
use crate::core::transform::{Pipeline, Transform};
use crate::core::types::SecretValue;
use crate::error::{ConfigError, Result};

/// Raw step inputs, as supplied by flags or `INPUT_*` variables.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub secrets: Option<String>,
    pub file: Option<String>,
    pub no_env: Option<String>,
    pub prefix: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub convert: Option<String>,
    pub convert_prefix: Option<String>,
    pub r#override: Option<String>,
    pub clean: Option<String>,
}

/// Typed main-phase settings.
#[derive(Debug)]
pub struct Settings {
    /// Raw JSON object of secrets.
    pub secrets: SecretValue,
    /// Output env file.
    pub file: PathBuf,
    /// Skip exporting variables; only write the file.
    pub no_env: bool,
    pub prefix: String,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub convert: Option<String>,
    pub convert_prefix: bool,
    /// Overwrite variables that already exist in the environment.
    pub override_existing: bool,
    /// Saved verbatim for the post phase.
    pub clean: String,
}

impl Settings {
    /// Build settings from raw inputs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingInput` if `secrets` is not supplied.
    pub fn from_inputs(inputs: Inputs) -> Result<Self> {
        let secrets = normalize(inputs.secrets).ok_or(ConfigError::MissingInput("secrets"))?;

        let settings = Self {
            secrets: SecretValue::new(secrets),
            file: PathBuf::from(
                normalize(inputs.file).unwrap_or_else(|| constants::ENV_FILE.to_string()),
            ),
            no_env: normalize(inputs.no_env).as_deref() == Some("true"),
            prefix: normalize(inputs.prefix).unwrap_or_default(),
            include: normalize(inputs.include),
            exclude: normalize(inputs.exclude),
            convert: normalize(inputs.convert),
            convert_prefix: flag(inputs.convert_prefix),
            override_existing: flag(inputs.r#override),
            clean: normalize(inputs.clean).unwrap_or_else(|| "true".to_string()),
        };

        debug!(
            file = %settings.file.display(),
            no_env = settings.no_env,
            prefix = %settings.prefix,
            include = ?settings.include,
            exclude = ?settings.exclude,
            convert = ?settings.convert,
            convert_prefix = settings.convert_prefix,
            override_existing = settings.override_existing,
            clean = %settings.clean,
            "settings loaded"
        );

        Ok(settings)
    }

    /// Compile the name pipeline.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidPattern` for an invalid include or
    /// exclude pattern.
    pub fn pipeline(&self) -> Result<Pipeline> {
        let filter = Filter::new(self.include.as_deref(), self.exclude.as_deref())?;
        let transform = Transform::new(
            self.prefix.clone(),
            self.convert.as_deref(),
            self.convert_prefix,
        );
        Ok(Pipeline::new(filter, transform))
    }
}

/// Whether the saved `clean` value enables cleanup.
pub fn clean_enabled(value: Option<&str>) -> bool {
    value != Some("false")
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Boolean input that defaults to true; only the exact string `false` disables it.
fn flag(value: Option<String>) -> bool {
    normalize(value).as_deref() != Some("false")
}
