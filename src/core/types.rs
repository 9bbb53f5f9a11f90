//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret name as it appears in the decoded secrets object.
pub type SecretKey = String;

/// A variable name after prefixing and case conversion.
pub type VarName = String;

/// A plaintext secret value.
///
/// Wrapped so the buffer is wiped when the value is dropped.
pub type SecretValue = zeroize::Zeroizing<String>;
