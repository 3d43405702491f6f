//! Array length resolution.
//!
//! Given a host and a possibly-absent value, probe the kinds of
//! [`ArrayKind::ALL`] in order and report the element count of the first
//! kind the value is an instance of. Nothing is retained between calls.
//!
//! ```rust,ignore
//! let host = JniHost::new(&env);
//! let len: jint = resolve(&host, JniHost::value(obj)).into();
//! ```

use jni::sys::{jint, jlong, jsize};
use tracing::{debug, trace};

use crate::error::ResolveError;
use crate::host::Host;
use crate::kind::ArrayKind;

/// Outcome of a resolution, as seen by the Java caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthResult {
    /// Element count reported by the host.
    Length(jsize),
    /// Absent handle, or not an array of a recognized kind.
    Invalid,
}

impl LengthResult {
    /// Wire value of [`LengthResult::Invalid`].
    pub const INVALID: jint = -1;

    /// The length, if one was resolved.
    pub fn length(self) -> Option<jsize> {
        match self {
            LengthResult::Length(len) => Some(len),
            LengthResult::Invalid => None,
        }
    }

    pub fn is_invalid(self) -> bool {
        self == LengthResult::Invalid
    }
}

impl From<LengthResult> for jint {
    fn from(result: LengthResult) -> jint {
        match result {
            LengthResult::Length(len) => len,
            LengthResult::Invalid => LengthResult::INVALID,
        }
    }
}

impl From<Result<(ArrayKind, jsize), ResolveError>> for LengthResult {
    fn from(result: Result<(ArrayKind, jsize), ResolveError>) -> Self {
        match result {
            Ok((_, len)) => LengthResult::Length(len),
            Err(_) => LengthResult::Invalid,
        }
    }
}

/// Result of checking one kind against a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Matched,
    NoMatch,
    /// The host could not load the array class. Counts as `NoMatch`.
    Unresolved,
}

fn probe<H: Host>(host: &H, value: H::Value, kind: ArrayKind) -> Probe {
    match host.lookup_type(kind.signature()) {
        Some(ty) if host.is_instance(value, &ty) => Probe::Matched,
        Some(_) => Probe::NoMatch,
        None => Probe::Unresolved,
    }
}

/// Classifies `value` and reads its length.
///
/// Returns the matching kind with the element count, or why there is none.
pub fn classify<H: Host>(host: &H, value: Option<H::Value>) -> Result<(ArrayKind, jsize), ResolveError> {
    let value = value.ok_or(ResolveError::AbsentHandle)?;

    for kind in ArrayKind::ALL {
        match probe(host, value, kind) {
            Probe::Matched => {
                let len = host
                    .array_element_count(value)
                    .ok_or(ResolveError::LengthUnavailable(kind))?;
                trace!(%kind, len, "matched");
                return Ok((kind, len));
            }
            Probe::NoMatch => trace!(%kind, "no match"),
            Probe::Unresolved => trace!(%kind, "unresolved, treated as no match"),
        }
    }

    Err(ResolveError::NotAnArray)
}

/// Resolves the array length of `value`, or [`LengthResult::Invalid`].
pub fn resolve<H: Host>(host: &H, value: Option<H::Value>) -> LengthResult {
    let result = classify(host, value);
    if let Err(e) = result {
        debug!(error = %e, "array length unavailable");
    }
    result.into()
}

/// Same as [`resolve`] for a reference passed as a 64-bit address.
///
/// `decode` turns the address back into a host value, `None` for absent.
/// It is the only step added on top of [`resolve`].
pub fn resolve_address<H, D>(host: &H, address: jlong, decode: D) -> LengthResult
where
    H: Host,
    D: FnOnce(jlong) -> Option<H::Value>,
{
    resolve(host, decode(address))
}
