// ============================================================================
// Fixed-Radix Number
// Signed fixed-point value in any radix from 2 to 36
// ============================================================================

use super::digit_store::DigitStore;
use super::errors::{NumericError, NumericResult};
use super::format::NumberFormat;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

/// Signed fixed-point number stored as packed digits of a chosen radix.
///
/// The value is `±(Σ digit[i] × base^(i - frac_digits))`. Every operation
/// that combines two numbers requires identical formats and fails with
/// `ConfigMismatch` otherwise. Zero is always non-negative.
///
/// Arithmetic truncates: digits that do not fit the integer part are dropped
/// and digits below the last fractional position are discarded.
///
/// # Example
/// ```
/// use fixed_radix::numeric::{FixedRadix, NumberFormat};
///
/// let format = NumberFormat::decimal(6, 4);
/// let a = FixedRadix::parse(format, "12.5").unwrap();
/// let b = FixedRadix::from_f64(format, 0.25);
/// let sum = a.checked_add(&b).unwrap();
/// assert_eq!(sum.to_string(), "12.75");
/// ```
#[derive(Clone)]
pub struct FixedRadix {
    negative: bool,
    store: DigitStore,
}

impl FixedRadix {
    // ========================================================================
    // Construction
    // ========================================================================

    /// All digits zero.
    pub fn zero(format: NumberFormat) -> Self {
        Self {
            negative: false,
            store: DigitStore::new(format),
        }
    }

    /// The multiplicative identity, or zero when the format has no integer digits.
    pub fn one(format: NumberFormat) -> Self {
        let mut one = Self::zero(format);
        one.store.write_digit(format.frac_digits(), 1);
        one
    }

    /// Build from a double.
    ///
    /// Magnitudes above `base^int_digits - 1` saturate to that bound, written
    /// digit by digit so that formats wider than a double saturate exactly.
    /// NaN becomes zero.
    /// Fractional digits past `frac_digits` are truncated.
    pub fn from_f64(format: NumberFormat, value: f64) -> Self {
        if value.is_nan() {
            return Self::zero(format);
        }

        let base = format.base() as f64;
        let frac = format.frac_digits();
        if value.is_infinite() || value.abs() > format.max_magnitude() {
            return Self::saturated(format, value < 0.0);
        }

        let mut result = Self::zero(format);
        result.negative = value < 0.0;
        let value = value.abs();

        let mut int_part = value.trunc();
        for j in 0..format.int_digits() {
            if int_part == 0.0 {
                break;
            }
            let digit = int_part % base;
            result.store.write_digit(frac + j, digit as u32);
            int_part = (int_part - digit) / base;
        }
        // The bound rounds up once it exceeds double precision
        if int_part != 0.0 {
            return Self::saturated(format, result.negative);
        }

        let mut frac_part = value.fract();
        for j in 0..frac {
            if frac_part == 0.0 {
                break;
            }
            frac_part *= base;
            let digit = frac_part.trunc();
            result
                .store
                .write_digit(frac - j - 1, (digit as u32).min(format.base() - 1));
            frac_part -= digit;
        }

        result.normalized()
    }

    /// Largest magnitude: every integer digit is `base - 1`, every
    /// fractional digit zero.
    fn saturated(format: NumberFormat, negative: bool) -> Self {
        tracing::warn!(
            negative,
            limit = format.max_magnitude(),
            %format,
            "clamping out-of-range value"
        );
        let mut result = Self::zero(format);
        let top = format.base() - 1;
        for j in 0..format.int_digits() {
            result.store.write_digit(format.frac_digits() + j, top);
        }
        result.with_sign(negative)
    }

    /// Parse a digit string in the format's radix.
    ///
    /// Accepts surrounding whitespace, an optional `+`/`-`, digits `0-9`
    /// and case-insensitive `a-z`, and at most one `.`. Integer digits beyond
    /// `int_digits` (the most significant ones) and fractional digits beyond
    /// `frac_digits` are dropped. An empty string is zero.
    ///
    /// # Errors
    /// Returns `InvalidDigit` for a character that is not a digit of the base.
    pub fn parse(format: NumberFormat, input: &str) -> NumericResult<Self> {
        let base = format.base();
        let frac = format.frac_digits();
        let mut result = Self::zero(format);

        let s = input.trim();
        let (negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };
        let s = s.trim_start_matches('0');

        let (int_str, frac_str) = s.split_once('.').unwrap_or((s, ""));
        let digit = |character: char| {
            character
                .to_digit(36)
                .filter(|&d| d < base)
                .ok_or(NumericError::InvalidDigit { character, base })
        };

        for (j, c) in int_str.chars().rev().enumerate() {
            let d = digit(c)?;
            if j < format.int_digits() {
                result.store.write_digit(frac + j, d);
            }
        }
        for (j, c) in frac_str.chars().enumerate() {
            let d = digit(c)?;
            if j < frac {
                result.store.write_digit(frac - j - 1, d);
            }
        }

        result.negative = negative;
        Ok(result.normalized())
    }

    /// Parse with an unvalidated `(base, int_digits, frac_digits)` triple.
    ///
    /// # Errors
    /// Returns `InvalidRadix` for a base outside `2..=36`, otherwise as
    /// [`FixedRadix::parse`].
    pub fn from_str_radix(
        base: u32,
        int_digits: usize,
        frac_digits: usize,
        input: &str,
    ) -> NumericResult<Self> {
        Self::parse(NumberFormat::new(base, int_digits, frac_digits)?, input)
    }

    /// Zero must never carry a sign.
    #[inline]
    pub(crate) fn normalized(mut self) -> Self {
        if self.store.is_zero() {
            self.negative = false;
        }
        self
    }

    pub(crate) fn with_sign(mut self, negative: bool) -> Self {
        self.negative = negative;
        self.normalized()
    }

    pub(crate) fn store(&self) -> &DigitStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut DigitStore {
        &mut self.store
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn format(&self) -> NumberFormat {
        self.store.format()
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.store.base()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.store.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Digit at position `index` (0 = least significant fractional digit).
    #[inline]
    pub fn digit(&self, index: usize) -> u32 {
        self.store.read_digit(index)
    }

    pub fn abs(&self) -> Self {
        self.clone().with_sign(false)
    }

    /// Integer part as an `i32`, truncated toward zero.
    ///
    /// Magnitudes beyond `i32::MAX` saturate to `i32::MAX` before the sign
    /// is applied, so the result lies in `-i32::MAX..=i32::MAX`.
    pub fn to_i32(&self) -> i32 {
        let format = self.format();
        let base = format.base() as f64;
        let limit = i32::MAX as f64;

        let mut acc = 0.0;
        for i in (format.frac_digits()..format.total_digits()).rev() {
            acc = acc * base + self.digit(i) as f64;
            if acc > limit {
                acc = limit;
                break;
            }
        }

        let magnitude = acc as i32;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Nearest double (within double precision).
    pub fn to_f64(&self) -> f64 {
        let format = self.format();
        let base = format.base() as f64;
        let frac = format.frac_digits();

        let int_value = (frac..format.total_digits())
            .rev()
            .fold(0.0, |acc, i| acc * base + self.digit(i) as f64);

        let lowest = self.store.least_significant_nonzero_digit().min(frac);
        let frac_value = (lowest..frac).fold(0.0, |acc, i| (acc + self.digit(i) as f64) / base);

        let value = int_value + frac_value;
        if self.negative {
            -value
        } else {
            value
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare magnitudes of two same-format numbers, ignoring sign.
    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let lowest = self
            .store
            .least_significant_nonzero_digit()
            .min(other.store.least_significant_nonzero_digit());
        for i in (lowest..self.format().total_digits()).rev() {
            match self.digit(i).cmp(&other.digit(i)) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }

    /// Total order over same-format numbers.
    ///
    /// # Errors
    /// Returns `ConfigMismatch` if the formats differ.
    pub fn try_cmp(&self, other: &Self) -> NumericResult<Ordering> {
        self.format().ensure_compatible(&other.format())?;
        Ok(match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => self.cmp_magnitude(other).reverse(),
        })
    }

    /// Equality over same-format numbers.
    ///
    /// # Errors
    /// Returns `ConfigMismatch` if the formats differ.
    pub fn try_eq(&self, other: &Self) -> NumericResult<bool> {
        self.format().ensure_compatible(&other.format())?;
        if self.negative != other.negative {
            return Ok(false);
        }
        let lowest = self.store.least_significant_nonzero_digit();
        if lowest != other.store.least_significant_nonzero_digit() {
            return Ok(false);
        }
        Ok((lowest..self.format().total_digits()).all(|i| self.digit(i) == other.digit(i)))
    }

    pub fn try_lt(&self, other: &Self) -> NumericResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    pub fn try_gt(&self, other: &Self) -> NumericResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `ConfigMismatch` if the formats differ.
    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        let format = self.format();
        format.ensure_compatible(&rhs.format())?;
        if self.negative != rhs.negative {
            return self.checked_sub(&-rhs);
        }

        let base = format.base();
        let mut result = Self::zero(format);
        let start = self
            .store
            .least_significant_nonzero_digit()
            .min(rhs.store.least_significant_nonzero_digit());

        let mut carry = 0;
        for i in start..format.total_digits() {
            let mut value = self.digit(i) + rhs.digit(i) + carry;
            if value >= base {
                value -= base;
                carry = 1;
            } else {
                carry = 0;
            }
            result.store.write_digit(i, value);
        }

        Ok(result.with_sign(self.negative))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `ConfigMismatch` if the formats differ.
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        let format = self.format();
        format.ensure_compatible(&rhs.format())?;
        if self.negative != rhs.negative {
            return self.checked_add(&-rhs);
        }
        if self.is_zero() {
            return Ok(-rhs);
        }
        if rhs.is_zero() {
            return Ok(self.clone());
        }
        // Borrowing below requires |self| >= |rhs|
        if self.cmp_magnitude(rhs) == Ordering::Less {
            return Ok(-rhs.checked_sub(self)?);
        }

        let base = format.base() as i64;
        let mut result = Self::zero(format);
        let start = self
            .store
            .least_significant_nonzero_digit()
            .min(rhs.store.least_significant_nonzero_digit());

        let mut borrow = 0;
        for i in start..format.total_digits() {
            let mut value = self.digit(i) as i64 - rhs.digit(i) as i64 - borrow;
            if value < 0 {
                value += base;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.store.write_digit(i, value as u32);
        }

        Ok(result.with_sign(self.negative))
    }

    /// Checked multiplication, truncated toward zero.
    ///
    /// The full double-width product is accumulated before truncation, so
    /// the result is exact up to the last fractional digit.
    ///
    /// # Errors
    /// Returns `ConfigMismatch` if the formats differ.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        let format = self.format();
        format.ensure_compatible(&rhs.format())?;

        let mut result = Self::zero(format);
        if self.is_zero() || rhs.is_zero() {
            return Ok(result);
        }

        let base = format.base() as u64;
        let total = format.total_digits();
        let lhs_digits: Vec<u64> = self.store.digits().map(u64::from).collect();
        let rhs_digits: Vec<u64> = rhs.store.digits().map(u64::from).collect();
        let lhs_start = self.store.least_significant_nonzero_digit();
        let rhs_start = rhs.store.least_significant_nonzero_digit();

        // wide[k] holds the coefficient of base^(k - 2 * frac_digits)
        let mut wide = vec![0u64; 2 * total];
        for i in lhs_start..total {
            if lhs_digits[i] == 0 {
                continue;
            }
            for j in rhs_start..total {
                wide[i + j] += lhs_digits[i] * rhs_digits[j];
            }
        }

        let mut carry = 0;
        for slot in wide.iter_mut() {
            let value = *slot + carry;
            *slot = value % base;
            carry = value / base;
        }

        let shift = format.frac_digits();
        for k in 0..total {
            result.store.write_digit(k, wide[k + shift] as u32);
        }

        Ok(result.with_sign(self.negative ^ rhs.negative))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for &FixedRadix {
    type Output = FixedRadix;

    fn neg(self) -> Self::Output {
        let negative = !self.negative;
        self.clone().with_sign(negative)
    }
}

impl Neg for FixedRadix {
    type Output = FixedRadix;

    fn neg(self) -> Self::Output {
        let negative = !self.negative;
        self.with_sign(negative)
    }
}

/// Numbers of different formats are never equal.
impl PartialEq for FixedRadix {
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

/// Numbers of different formats are unordered.
impl PartialOrd for FixedRadix {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

fn digit_char(digit: u32) -> char {
    char::from_digit(digit, 36)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

/// Integer digits without leading zeros, a `.`, then fractional digits up to
/// the last nonzero one. Either side is `0` when all its digits are zero.
impl fmt::Display for FixedRadix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = self.format();
        let frac = format.frac_digits();

        let mut out = String::with_capacity(format.total_digits() + 3);
        if self.negative {
            out.push('-');
        }

        let int_digits = (frac..format.total_digits())
            .rev()
            .map(|i| self.digit(i))
            .skip_while(|&d| d == 0);
        let before = out.len();
        out.extend(int_digits.map(digit_char));
        if out.len() == before {
            out.push('0');
        }

        out.push('.');
        let lowest = self.store.least_significant_nonzero_digit();
        if lowest < frac {
            out.extend((lowest..frac).rev().map(|i| digit_char(self.digit(i))));
        } else {
            out.push('0');
        }

        f.write_str(&out)
    }
}

impl fmt::Debug for FixedRadix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedRadix<{}>({})", self.format(), self)
    }
}

// ============================================================================
// Tests
// ============================================================================
