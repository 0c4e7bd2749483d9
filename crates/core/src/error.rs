//! Error types for the Base32 codec.
//!
//! All operations return structured errors rather than panicking.
//! There are exactly two failure domains: variant lookup (construction
//! time) and decoding (first offending call). Encoding never fails.

use thiserror::Error;

use crate::variant::Variant;

/// Top-level error type for all operations in the codec.
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown variant identifier. Identifiers are case-sensitive; the
    /// message enumerates every valid identifier in sorted order.
    #[error("`{name}` is not a valid Base32 variant: expected one of {}", Variant::valid_names())]
    InvalidVariant {
        /// The identifier the caller supplied
        name: String,
    },

    /// Decode input contains a symbol outside the active alphabet, or the
    /// trailing bits after the final partial group are non-zero.
    #[error("encoded data does not exclusively consist of Base32 ({variant}) characters")]
    InvalidCharacter {
        /// The variant whose alphabet was violated
        variant: Variant,
    },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
