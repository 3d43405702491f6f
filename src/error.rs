//! Error types.
//!
//! None of these cross the JNI boundary. The exported natives collapse
//! every failure into the `-1` sentinel; these types exist for the Rust
//! API, diagnostics and tests.

use thiserror::Error;

use crate::kind::ArrayKind;

/// Why a handle could not be resolved to an array length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The handle was null. No host query was made.
    #[error("handle is absent")]
    AbsentHandle,
    /// The handle is not an instance of any recognized array kind.
    #[error("value is not an array of a recognized kind")]
    NotAnArray,
    /// The value matched `kind` but the host could not read its length.
    #[error("length of {0} array could not be read")]
    LengthUnavailable(ArrayKind),
}

/// Failure to parse an [`ArrayKind`](crate::ArrayKind) from a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKindError {
    #[error("`{0}` is not an array type signature")]
    NotAnArraySignature(String),
    #[error("array signature `{0}` is not a recognized kind")]
    Unsupported(String),
}

/// Invalid value in the hook's environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a boolean (expected 1/0, true/false, yes/no, on/off)")]
    InvalidFlag { var: &'static str, value: String },
}
