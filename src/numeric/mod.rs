// ============================================================================
// Numeric Module
// Fixed-point arithmetic in any radix from 2 to 36
// ============================================================================
//
// This module provides:
// - NumberFormat: the (base, int_digits, frac_digits) configuration
// - DigitStore: bit-packed digit storage
// - FixedRadix: signed fixed-point value over a DigitStore
// - NumericError: Error types for construction and arithmetic
//
// Design principles:
// - Operands must share one NumberFormat; mismatches are errors, never coerced
// - Overflow saturates (doubles) or truncates (digits), it never fails
// - Arithmetic is pure and returns fresh values

mod conversion;
mod digit_store;
mod errors;
mod fixed_radix;
mod format;

pub use digit_store::DigitStore;
pub use errors::{NumericError, NumericResult};
pub use fixed_radix::FixedRadix;
pub use format::{NumberFormat, MAX_BASE, MIN_BASE, WORD_BITS};
