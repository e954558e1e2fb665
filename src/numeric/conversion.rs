// ============================================================================
// Radix Conversion
// Re-expressing a fixed-radix value in another base and digit layout
// ============================================================================

use super::digit_store::DigitStore;
use super::errors::NumericResult;
use super::fixed_radix::FixedRadix;
use super::format::NumberFormat;

/// `digits[frac..] = digits[frac..] * factor + addend`, dropping the final carry.
fn mul_add_integer(store: &mut DigitStore, factor: u32, addend: u32) {
    let format = store.format();
    let base = format.base() as u64;
    let mut carry = addend as u64;
    for i in format.frac_digits()..format.total_digits() {
        let value = store.read_digit(i) as u64 * factor as u64 + carry;
        store.write_digit(i, (value % base) as u32);
        carry = value / base;
    }
}

/// Multiply a fraction (least significant digit first) by `factor` in place
/// and return the integer part that spills out of it.
fn scale_fraction(digits: &mut [u32], base: u32, factor: u32) -> u32 {
    let base = base as u64;
    let mut carry = 0u64;
    for digit in digits.iter_mut() {
        let value = *digit as u64 * factor as u64 + carry;
        *digit = (value % base) as u32;
        carry = value / base;
    }
    carry as u32
}

impl FixedRadix {
    /// Convert to another format.
    ///
    /// The integer part is rebuilt by Horner's method from the most significant
    /// source digit down; the fractional part by repeatedly scaling the source
    /// fraction by the target base and taking the spilled integer digit.
    /// Integer digits that do not fit are dropped and the fraction is
    /// truncated, never rounded.
    ///
    /// # Example
    /// ```
    /// use fixed_radix::numeric::{FixedRadix, NumberFormat};
    ///
    /// let x = FixedRadix::parse(NumberFormat::decimal(4, 4), "10.75").unwrap();
    /// let bin = x.convert_to_format(NumberFormat::binary(8, 4));
    /// assert_eq!(bin.to_string(), "1010.11");
    /// ```
    pub fn convert_to_format(&self, target: NumberFormat) -> Self {
        let source = self.format();
        if source == target {
            return self.clone();
        }

        let mut result = Self::zero(target);
        let store = self.store();
        let src_frac = source.frac_digits();

        if let Some(top) = store
            .most_significant_nonzero_digit()
            .filter(|&i| i >= src_frac)
        {
            for i in (src_frac..=top).rev() {
                mul_add_integer(result.store_mut(), source.base(), store.read_digit(i));
            }
        }

        let mut fraction: Vec<u32> = (0..src_frac).map(|i| store.read_digit(i)).collect();
        let dst_frac = target.frac_digits();
        for k in 1..=dst_frac {
            if fraction.iter().all(|&d| d == 0) {
                break;
            }
            let digit = scale_fraction(&mut fraction, source.base(), target.base());
            result.store_mut().write_digit(dst_frac - k, digit);
        }

        tracing::debug!(%source, %target, value = %self, "converted radix");
        result.with_sign(self.is_negative())
    }

    /// Convert to `(base, int_digits, frac_digits)`.
    ///
    /// # Errors
    /// Returns `InvalidRadix` for a base outside `2..=36`.
    pub fn convert_to(
        &self,
        base: u32,
        int_digits: usize,
        frac_digits: usize,
    ) -> NumericResult<Self> {
        let target = NumberFormat::new(base, int_digits, frac_digits)?;
        Ok(self.convert_to_format(target))
    }

    /// Convert to another base keeping the digit lengths.
    ///
    /// # Errors
    /// Returns `InvalidRadix` for a base outside `2..=36`.
    pub fn with_base(&self, base: u32) -> NumericResult<Self> {
        Ok(self.convert_to_format(self.format().with_base(base)?))
    }
}
