// ============================================================================
// Number Format
// Radix and digit-length configuration shared by every fixed-radix value
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest supported radix
pub const MIN_BASE: u32 = 2;

/// Largest supported radix (digits `0-9` then `a-z`)
pub const MAX_BASE: u32 = 36;

/// Width of one backing word of a digit store
pub const WORD_BITS: usize = u32::BITS as usize;

/// The `(base, int_digits, frac_digits)` triple describing a fixed-radix number.
///
/// Two numbers can only be compared or combined when their formats are equal.
///
/// # Example
/// ```
/// use fixed_radix::numeric::NumberFormat;
///
/// let hex = NumberFormat::new(16, 8, 4).unwrap();
/// assert_eq!(hex.bits_per_digit(), 4);
/// assert_eq!(hex.total_digits(), 12);
/// assert!(NumberFormat::new(37, 8, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFormat"))]
pub struct NumberFormat {
    base: u32,
    int_digits: usize,
    frac_digits: usize,
}

impl NumberFormat {
    /// Create a validated format.
    ///
    /// # Errors
    /// Returns `InvalidRadix` if `base` is outside `2..=36`.
    pub fn new(base: u32, int_digits: usize, frac_digits: usize) -> NumericResult<Self> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(NumericError::InvalidRadix(base));
        }
        Ok(Self {
            base,
            int_digits,
            frac_digits,
        })
    }

    /// Base-10 format
    pub const fn decimal(int_digits: usize, frac_digits: usize) -> Self {
        Self {
            base: 10,
            int_digits,
            frac_digits,
        }
    }

    /// Base-2 format
    pub const fn binary(int_digits: usize, frac_digits: usize) -> Self {
        Self {
            base: 2,
            int_digits,
            frac_digits,
        }
    }

    /// Base-16 format
    pub const fn hexadecimal(int_digits: usize, frac_digits: usize) -> Self {
        Self {
            base: 16,
            int_digits,
            frac_digits,
        }
    }

    /// Builder method: same digit lengths, different radix
    pub fn with_base(self, base: u32) -> NumericResult<Self> {
        Self::new(base, self.int_digits, self.frac_digits)
    }

    /// Builder method: set the integer digit count
    pub fn with_int_digits(mut self, int_digits: usize) -> Self {
        self.int_digits = int_digits;
        self
    }

    /// Builder method: set the fractional digit count
    pub fn with_frac_digits(mut self, frac_digits: usize) -> Self {
        self.frac_digits = frac_digits;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub const fn int_digits(&self) -> usize {
        self.int_digits
    }

    #[inline]
    pub const fn frac_digits(&self) -> usize {
        self.frac_digits
    }

    /// Integer plus fractional digit count
    #[inline]
    pub const fn total_digits(&self) -> usize {
        self.int_digits + self.frac_digits
    }

    /// Bits needed to hold one digit: `ceil(log2(base))`
    #[inline]
    pub const fn bits_per_digit(&self) -> usize {
        (u32::BITS - (self.base - 1).leading_zeros()) as usize
    }

    /// Total number of packed bits
    #[inline]
    pub const fn bit_len(&self) -> usize {
        self.total_digits() * self.bits_per_digit()
    }

    /// Number of backing words
    #[inline]
    pub const fn word_len(&self) -> usize {
        self.bit_len().div_ceil(WORD_BITS)
    }

    /// Largest representable magnitude, `base^int_digits - 1`, as a double.
    pub fn max_magnitude(&self) -> f64 {
        (self.base as f64).powf(self.int_digits as f64) - 1.0
    }

    // ========================================================================
    // Compatibility
    // ========================================================================

    #[inline]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self == other
    }

    /// Fail with `ConfigMismatch` unless both formats are identical.
    #[inline]
    pub fn ensure_compatible(&self, other: &Self) -> NumericResult<()> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            Err(NumericError::ConfigMismatch {
                left: *self,
                right: *other,
            })
        }
    }
}

/// Base 10 with 20 integer and 200 fractional digits
impl Default for NumberFormat {
    fn default() -> Self {
        Self::decimal(20, 200)
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base{}[{}.{}]",
            self.base, self.int_digits, self.frac_digits
        )
    }
}

impl TryFrom<(u32, usize, usize)> for NumberFormat {
    type Error = NumericError;

    fn try_from((base, int_digits, frac_digits): (u32, usize, usize)) -> NumericResult<Self> {
        Self::new(base, int_digits, frac_digits)
    }
}

/// Unvalidated wire shape; deserialization goes through `NumberFormat::new`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawFormat {
    base: u32,
    int_digits: usize,
    frac_digits: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFormat> for NumberFormat {
    type Error = NumericError;

    fn try_from(raw: RawFormat) -> NumericResult<Self> {
        Self::new(raw.base, raw.int_digits, raw.frac_digits)
    }
}
