//! Secret name transformation.
//!
//! Turns a raw secret key into the variable name that gets exported:
//! filter, then prefix, then case conversion.

use tracing::debug;

use crate::core::case::Case;
use crate::core::filter::Filter;
use crate::core::types::VarName;

/// Prefixing and case conversion applied to every surviving key.
#[derive(Debug, Clone)]
pub struct Transform {
    /// Prepended to every key.
    pub prefix: String,
    /// Case conversion, if any.
    pub case: Option<Case>,
    /// When false, the prefix is left untouched by case conversion.
    pub convert_prefix: bool,
}

impl Transform {
    /// Build a transform from the raw `convert` input.
    ///
    /// An unrecognized mode disables conversion rather than failing.
    pub fn new(prefix: impl Into<String>, convert: Option<&str>, convert_prefix: bool) -> Self {
        let case = convert.and_then(|mode| match mode.parse::<Case>() {
            Ok(case) => Some(case),
            Err(e) => {
                debug!("{}; names will not be converted", e);
                None
            }
        });

        Self {
            prefix: prefix.into(),
            case,
            convert_prefix,
        }
    }

    /// Produce the final variable name for `key`.
    pub fn rename(&self, key: &str) -> VarName {
        let prefixed = format!("{}{}", self.prefix, key);

        let Some(case) = self.case else {
            return prefixed;
        };

        if self.convert_prefix {
            case.apply(&prefixed)
        } else {
            let rest = prefixed.replacen(&self.prefix, "", 1);
            format!("{}{}", self.prefix, case.apply(&rest))
        }
    }
}

/// The full name pipeline: [`Filter`] followed by [`Transform`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub filter: Filter,
    pub transform: Transform,
}

impl Pipeline {
    pub fn new(filter: Filter, transform: Transform) -> Self {
        Self { filter, transform }
    }

    /// The exported name for `key`, or `None` if the key is filtered out.
    pub fn apply(&self, key: &str) -> Option<VarName> {
        self.filter
            .allows(key)
            .then(|| self.transform.rename(key))
    }
}
