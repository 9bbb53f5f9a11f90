//! Secret set decoding.
//!
//! The `secrets` input is a JSON object of name → value, normally produced by
//! `${{ toJSON(secrets) }}` in the workflow.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::types::{SecretKey, SecretValue};
use crate::error::{ConfigError, Result};

/// Decoded secrets, in the order they appear in the JSON object.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct SecretSet {
    entries: Map<String, Value>,
}

impl SecretSet {
    /// Parse a JSON object of secrets.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSecrets` if the input is not valid JSON or
    /// not a JSON object.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidSecrets(e).into())
    }

    /// Number of secrets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the secrets in source order.
    pub fn iter(&self) -> impl Iterator<Item = Secret<'_>> + '_ {
        self.entries.iter().map(|(key, value)| Secret {
            key,
            value: SecretValue::new(match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            null: value.is_null(),
        })
    }
}

/// One decoded secret.
///
/// String values are kept as-is; other JSON values become their compact JSON
/// text, so `null` is written to the env file as `null`.
#[derive(Debug)]
pub struct Secret<'a> {
    pub key: &'a SecretKey,
    pub value: SecretValue,
    null: bool,
}

impl Secret<'_> {
    /// Value handed to the environment. A JSON `null` exports as empty.
    pub fn exported(&self) -> &str {
        if self.null {
            ""
        } else {
            self.value.as_str()
        }
    }
}
