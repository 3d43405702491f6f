//! The closed set of array kinds the resolver recognizes.
//!
//! Each kind maps to the JVM type signature handed to `FindClass`. The
//! kinds are disjoint in the JVM type system, so a value matches at most
//! one of them. [`ArrayKind::ALL`] fixes the order in which they are
//! probed.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseKindError;

/// Element kind of a recognized Java array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    /// `boolean[]`, signature `[Z`.
    Boolean,
    /// `byte[]`, signature `[B`.
    Byte,
    /// `short[]`, signature `[S`.
    Short,
    /// `char[]`, signature `[C`.
    Char,
    /// `int[]`, signature `[I`.
    Int,
    /// `long[]`, signature `[J`.
    Long,
    /// `float[]`, signature `[F`.
    Float,
    /// `double[]`, signature `[D`.
    Double,
    /// Any reference array, signature `[Ljava/lang/Object;`.
    ///
    /// Covers `String[]`, `int[][]` and every other array whose component
    /// type is a reference, since they are all assignable to `Object[]`.
    Object,
}

impl ArrayKind {
    /// Every kind, in probe order.
    pub const ALL: [ArrayKind; 9] = [
        ArrayKind::Boolean,
        ArrayKind::Byte,
        ArrayKind::Short,
        ArrayKind::Char,
        ArrayKind::Int,
        ArrayKind::Long,
        ArrayKind::Float,
        ArrayKind::Double,
        ArrayKind::Object,
    ];

    /// The JVM type signature of the array class, as accepted by `FindClass`.
    pub const fn signature(self) -> &'static str {
        match self {
            ArrayKind::Boolean => "[Z",
            ArrayKind::Byte => "[B",
            ArrayKind::Short => "[S",
            ArrayKind::Char => "[C",
            ArrayKind::Int => "[I",
            ArrayKind::Long => "[J",
            ArrayKind::Float => "[F",
            ArrayKind::Double => "[D",
            ArrayKind::Object => "[Ljava/lang/Object;",
        }
    }

    /// The field descriptor of a single element.
    pub fn element_descriptor(self) -> &'static str {
        // Every signature is '[' followed by the element descriptor.
        &self.signature()[1..]
    }

    /// The Java source spelling of the array type.
    pub const fn java_name(self) -> &'static str {
        match self {
            ArrayKind::Boolean => "boolean[]",
            ArrayKind::Byte => "byte[]",
            ArrayKind::Short => "short[]",
            ArrayKind::Char => "char[]",
            ArrayKind::Int => "int[]",
            ArrayKind::Long => "long[]",
            ArrayKind::Float => "float[]",
            ArrayKind::Double => "double[]",
            ArrayKind::Object => "Object[]",
        }
    }

    /// Returns true for the eight primitive array kinds.
    pub const fn is_primitive(self) -> bool {
        !matches!(self, ArrayKind::Object)
    }

    /// Looks up a kind by its exact type signature.
    pub fn from_signature(signature: &str) -> Option<ArrayKind> {
        ArrayKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.signature() == signature)
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}

impl FromStr for ArrayKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with('[') {
            return Err(ParseKindError::NotAnArraySignature(s.to_string()));
        }
        ArrayKind::from_signature(s).ok_or_else(|| ParseKindError::Unsupported(s.to_string()))
    }
}
