//! Error types for field construction and arithmetic.

use alloc::string::String;
use core::fmt;

use num_bigint::BigUint;
use thiserror::Error;

/// Errors produced when building or combining field elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The modulus is zero, so it has no degree and cannot define a field.
    #[error("modulus must be non-zero to define GF(2^m)")]
    InvalidModulus,

    /// An input encoding could not be parsed into a non-negative integer.
    #[error("malformed {kind} encoding: {reason}")]
    MalformedEncoding {
        /// Which encoding was being parsed.
        kind: EncodingKind,
        /// What was wrong with the input.
        reason: String,
    },

    /// The operands live in different fields.
    #[error("elements belong to different fields (modulus {lhs:#x} vs {rhs:#x})")]
    IncompatibleField {
        /// Modulus of the left-hand operand.
        lhs: BigUint,
        /// Modulus of the right-hand operand.
        rhs: BigUint,
    },
}

/// The input encodings accepted by the element constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingKind {
    Hex,
    BitVector,
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => f.write_str("hex"),
            Self::BitVector => f.write_str("bit-vector"),
        }
    }
}

impl FieldError {
    pub(crate) fn malformed(kind: EncodingKind, reason: impl Into<String>) -> Self {
        Self::MalformedEncoding {
            kind,
            reason: reason.into(),
        }
    }

    pub(crate) fn incompatible(lhs: &BigUint, rhs: &BigUint) -> Self {
        Self::IncompatibleField {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        }
    }
}

/// Result type alias for field operations.
pub type FieldResult<T> = core::result::Result<T, FieldError>;
