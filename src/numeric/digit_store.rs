// ============================================================================
// Digit Store
// Bit-packed storage for a fixed number of fixed-radix digits
// ============================================================================

use super::format::{NumberFormat, WORD_BITS};
use std::fmt;

/// Packed array of `int_digits + frac_digits` digits of one radix.
///
/// Each digit occupies `bits_per_digit` bits. Digit `0` is the least
/// significant fractional digit, digit `frac_digits` is the units digit.
///
/// Out-of-range bit offsets read as zero and ignore writes. Bits past
/// `bit_len` are never set.
///
/// `Clone` duplicates the word buffer; moving a store moves the buffer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DigitStore {
    format: NumberFormat,
    bits_per_digit: usize,
    bit_len: usize,
    words: Box<[u32]>,
}

#[inline]
const fn mask(count: usize) -> u64 {
    (1u64 << count) - 1
}

impl DigitStore {
    /// Create an all-zero store.
    pub fn new(format: NumberFormat) -> Self {
        Self {
            format,
            bits_per_digit: format.bits_per_digit(),
            bit_len: format.bit_len(),
            words: vec![0u32; format.word_len()].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn format(&self) -> NumberFormat {
        self.format
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.format.base()
    }

    #[inline]
    pub fn bits_per_digit(&self) -> usize {
        self.bits_per_digit
    }

    #[inline]
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    #[inline]
    pub fn total_digits(&self) -> usize {
        self.format.total_digits()
    }

    // ========================================================================
    // Bit Access
    // ========================================================================

    /// Read `count` bits starting at bit `offset`.
    ///
    /// `count` is clamped to 32 and to the bits remaining in the store.
    pub fn read_bits(&self, offset: usize, count: usize) -> u32 {
        if offset >= self.bit_len {
            return 0;
        }
        let count = count.min(WORD_BITS).min(self.bit_len - offset);
        let word = offset / WORD_BITS;
        let shift = offset % WORD_BITS;

        let low = (self.words[word] as u64) >> shift;
        let high = self
            .words
            .get(word + 1)
            .map_or(0, |&w| (w as u64) << (WORD_BITS - shift));

        ((low | high) & mask(count)) as u32
    }

    /// Write the low `count` bits of `value` starting at bit `offset`.
    ///
    /// Returns the masked value actually stored, or 0 when `offset` is out of
    /// range and nothing was written.
    pub fn write_bits(&mut self, offset: usize, count: usize, value: u32) -> u32 {
        if offset >= self.bit_len {
            return 0;
        }
        let count = count.min(WORD_BITS).min(self.bit_len - offset);
        let word = offset / WORD_BITS;
        let shift = offset % WORD_BITS;

        let value = value as u64 & mask(count);
        let window = mask(count) << shift;
        let shifted = value << shift;

        self.words[word] = (self.words[word] & !(window as u32)) | shifted as u32;
        if shift + count > WORD_BITS {
            if let Some(next) = self.words.get_mut(word + 1) {
                let high_window = (window >> WORD_BITS) as u32;
                *next = (*next & !high_window) | (shifted >> WORD_BITS) as u32;
            }
        }

        value as u32
    }

    // ========================================================================
    // Digit Access
    // ========================================================================

    /// Read digit `index`; out-of-range indices read as 0.
    #[inline]
    pub fn read_digit(&self, index: usize) -> u32 {
        match index.checked_mul(self.bits_per_digit) {
            Some(offset) => self.read_bits(offset, self.bits_per_digit),
            None => 0,
        }
    }

    /// Write digit `index`; out-of-range indices are ignored.
    ///
    /// `value` is masked to the digit width and not checked against the
    /// base; callers keep digits below `base`.
    #[inline]
    pub fn write_digit(&mut self, index: usize, value: u32) -> u32 {
        match index.checked_mul(self.bits_per_digit) {
            Some(offset) => self.write_bits(offset, self.bits_per_digit, value),
            None => 0,
        }
    }

    /// Digits from least to most significant.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        (0..self.total_digits()).map(move |i| self.read_digit(i))
    }

    // ========================================================================
    // Scans
    // ========================================================================

    /// Position of the lowest set bit, or `bit_len` if the store is zero.
    pub fn least_significant_nonzero_bit(&self) -> usize {
        self.words
            .iter()
            .position(|&w| w != 0)
            .map_or(self.bit_len, |i| {
                i * WORD_BITS + self.words[i].trailing_zeros() as usize
            })
    }

    /// Position of the lowest nonzero digit, or `total_digits` if zero.
    #[inline]
    pub fn least_significant_nonzero_digit(&self) -> usize {
        self.least_significant_nonzero_bit() / self.bits_per_digit
    }

    /// Position of the highest nonzero digit, if any.
    pub fn most_significant_nonzero_digit(&self) -> Option<usize> {
        let lowest = self.least_significant_nonzero_digit();
        (lowest..self.total_digits())
            .rev()
            .find(|&i| self.read_digit(i) != 0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    // ========================================================================
    // Bulk Clears
    // ========================================================================

    pub fn clear_integer_part(&mut self) {
        let frac = self.format.frac_digits();
        for i in frac..self.total_digits() {
            self.write_digit(i, 0);
        }
    }

    pub fn clear_fractional_part(&mut self) {
        for i in 0..self.format.frac_digits() {
            self.write_digit(i, 0);
        }
    }
}

impl fmt::Debug for DigitStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: Vec<u32> = self.digits().rev().collect();
        f.debug_struct("DigitStore")
            .field("format", &self.format)
            .field("digits_msd_first", &digits)
            .finish()
    }
}
