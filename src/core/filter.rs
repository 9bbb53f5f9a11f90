//! Include/exclude filtering of secret names.

use regex::Regex;
use tracing::trace;

use crate::core::constants::{DEFAULT_EXCLUDES, PATTERN_SEPARATOR};
use crate::error::{FilterError, Result};

/// Decides which secrets are materialized.
///
/// A key is kept when there is no include list or it matches at least one
/// include pattern, and it matches none of the exclude patterns. Matching is
/// an unanchored, case-sensitive search.
#[derive(Debug, Clone)]
pub struct Filter {
    include: Option<Vec<Regex>>,
    exclude: Vec<Regex>,
}

impl Filter {
    /// Build a filter from comma-separated pattern lists.
    ///
    /// Exclude patterns are appended to [`DEFAULT_EXCLUDES`]. Every pattern is
    /// trimmed before compiling.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidPattern` for the first pattern that is not
    /// a valid regular expression.
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Result<Self> {
        let include = include.map(compile_list).transpose()?;

        let mut excludes = DEFAULT_EXCLUDES
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<_>>>()?;
        if let Some(list) = exclude {
            excludes.extend(compile_list(list)?);
        }

        Ok(Self {
            include,
            exclude: excludes,
        })
    }

    /// Whether `key` survives the filter.
    pub fn allows(&self, key: &str) -> bool {
        if let Some(include) = &self.include {
            if !include.iter().any(|re| re.is_match(key)) {
                trace!(key, "not included");
                return false;
            }
        }

        if let Some(re) = self.exclude.iter().find(|re| re.is_match(key)) {
            trace!(key, pattern = re.as_str(), "excluded");
            return false;
        }

        true
    }
}

fn compile_list(list: &str) -> Result<Vec<Regex>> {
    list.split(PATTERN_SEPARATOR)
        .map(|p| compile(p.trim()))
        .collect()
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| {
        FilterError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
        .into()
    })
}
