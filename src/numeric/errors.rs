// ============================================================================
// Numeric Errors
// Error types for fixed-radix construction and arithmetic
// ============================================================================

use super::format::NumberFormat;
use thiserror::Error;

/// Errors that can occur while building or combining fixed-radix numbers.
///
/// Overflow is deliberately absent: construction from a double saturates and
/// digit strings truncate, neither of which is reported as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Operands carry different `(base, int_digits, frac_digits)` triples
    #[error("format mismatch between operands: {left} vs {right}")]
    ConfigMismatch {
        left: NumberFormat,
        right: NumberFormat,
    },

    /// Radix outside `2..=36`
    #[error("invalid radix {0}: base must be between 2 and 36")]
    InvalidRadix(u32),

    /// Digit-string character that is not a digit of the configured base
    #[error("invalid digit {character:?} for base {base}")]
    InvalidDigit { character: char, base: u32 },
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
