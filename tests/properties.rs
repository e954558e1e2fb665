// ============================================================================
// Property Tests
// Algebraic and round-trip laws of fixed-radix arithmetic
// ============================================================================

use fixed_radix::prelude::*;
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;

mod generators {
    use super::*;

    pub fn arb_format() -> impl Strategy<Value = NumberFormat> {
        (2u32..=36, 1usize..=6, 0usize..=6)
            .prop_map(|(base, int, frac)| NumberFormat::new(base, int, frac).unwrap())
    }

    /// Signed digit string with up to `max_int` integer and `max_frac`
    /// fractional digits of `base`.
    pub fn arb_digits(base: u32, max_int: usize, max_frac: usize) -> impl Strategy<Value = String> {
        let digit = (0..base).prop_map(|d| char::from_digit(d, 36).unwrap());
        (
            any::<bool>(),
            prop::collection::vec(digit.clone(), 0..=max_int),
            prop::collection::vec(digit, 0..=max_frac),
        )
            .prop_map(|(negative, int, frac)| {
                let mut s = String::new();
                if negative {
                    s.push('-');
                }
                s.extend(int);
                s.push('.');
                s.extend(frac);
                s
            })
    }

    /// Number whose integer part leaves `headroom` unused top digits.
    pub fn arb_number(format: NumberFormat, headroom: usize) -> impl Strategy<Value = FixedRadix> {
        let int_len = format.int_digits().saturating_sub(headroom);
        arb_digits(format.base(), int_len, format.frac_digits())
            .prop_map(move |s| FixedRadix::parse(format, &s).unwrap())
    }

    pub fn arb_pair(headroom: usize) -> impl Strategy<Value = (FixedRadix, FixedRadix)> {
        arb_format().prop_flat_map(move |format| {
            (arb_number(format, headroom), arb_number(format, headroom))
        })
    }

    /// Decimal with 6 fractional digits and magnitude below `10^int_digits`.
    pub fn arb_decimal(int_digits: u32) -> impl Strategy<Value = Decimal> {
        let bound = 10i64.pow(int_digits + 6);
        (-bound + 1..bound).prop_map(|mantissa| Decimal::new(mantissa, 6))
    }
}

use generators::*;

const DEC: NumberFormat = NumberFormat::decimal(8, 6);

fn from_decimal(d: Decimal) -> FixedRadix {
    FixedRadix::parse(DEC, &d.to_string()).unwrap()
}

proptest! {
    #[test]
    fn render_then_parse_preserves_value(
        (format, text) in arb_format().prop_flat_map(|f| {
            (Just(f), arb_digits(f.base(), f.int_digits(), f.frac_digits()))
        })
    ) {
        let value = FixedRadix::parse(format, &text).unwrap();
        let rendered = render(&value);
        let reparsed = FixedRadix::parse(format, &rendered).unwrap();
        prop_assert_eq!(&reparsed, &value, "{} rendered as {}", text, rendered);
    }

    #[test]
    fn subtraction_is_addition_of_negation((a, b) in arb_pair(1)) {
        prop_assert_eq!(a.checked_sub(&b).unwrap(), a.checked_add(&-&b).unwrap());
    }

    #[test]
    fn add_then_subtract_restores((a, b) in arb_pair(1)) {
        let sum = a.checked_add(&b).unwrap();
        prop_assert_eq!(sum.checked_sub(&b).unwrap(), a);
    }

    #[test]
    fn multiply_by_zero_is_zero((a, _b) in arb_pair(0)) {
        let zero = FixedRadix::zero(a.format());
        let product = a.checked_mul(&zero).unwrap();
        prop_assert!(product.is_zero());
        prop_assert!(!product.is_negative());
        prop_assert_eq!(product, zero);
    }

    #[test]
    fn multiplication_commutes((a, b) in arb_pair(0)) {
        prop_assert_eq!(a.checked_mul(&b).unwrap(), b.checked_mul(&a).unwrap());
    }

    #[test]
    fn ordering_agrees_with_f64((a, b) in arb_pair(0)) {
        let (x, y) = (a.to_f64(), b.to_f64());
        match a.try_cmp(&b).unwrap() {
            Ordering::Less => prop_assert!(x <= y),
            Ordering::Equal => {
                prop_assert_eq!(x, y);
                prop_assert!(a.try_eq(&b).unwrap());
            }
            Ordering::Greater => prop_assert!(x >= y),
        }
        prop_assert_eq!(a.try_lt(&b).unwrap(), b.try_gt(&a).unwrap());
    }

    #[test]
    fn conversion_round_trip_within_resolution(
        (value, base, frac) in arb_format()
            .prop_flat_map(|f| (arb_number(f, 0), 2u32..=36, 0usize..=8))
    ) {
        let source = value.format();
        let ratio = (source.base() as f64).ln() / (base as f64).ln();
        let int_digits = (source.int_digits() as f64 * ratio).ceil() as usize + 1;

        let there = value.convert_to(base, int_digits, frac).unwrap();
        let back = there
            .convert_to(source.base(), source.int_digits(), source.frac_digits())
            .unwrap();

        let tolerance = (source.base() as f64).powi(-(source.frac_digits() as i32))
            + (base as f64).powi(-(frac as i32));
        let error = value.checked_sub(&back).unwrap().abs().to_f64();
        prop_assert!(error <= tolerance * (1.0 + 1e-9), "{:?} -> {:?} -> {:?}", value, there, back);
        prop_assert!(back.abs() <= value.abs(), "conversion must truncate toward zero");
    }

    #[test]
    fn out_of_range_doubles_saturate_to_top_digits(
        base in 2u32..=36,
        int_digits in 1usize..=30,
        frac_digits in 0usize..=4,
        scale in prop_oneof![Just(2.0), Just(1e100), Just(f64::INFINITY)],
        negative in any::<bool>(),
    ) {
        let format = NumberFormat::new(base, int_digits, frac_digits).unwrap();
        let top = char::from_digit(base - 1, 36).unwrap();
        let mut expected = FixedRadix::parse(format, &top.to_string().repeat(int_digits)).unwrap();
        let mut value = (base as f64).powi(int_digits as i32) * scale;
        if negative {
            expected = -expected;
            value = -value;
        }
        prop_assert_eq!(FixedRadix::from_f64(format, value), expected);
    }

    #[test]
    fn decimal_arithmetic_matches_rust_decimal(a in arb_decimal(7), b in arb_decimal(7)) {
        prop_assert_eq!(from_decimal(a).checked_add(&from_decimal(b)).unwrap(), from_decimal(a + b));
        prop_assert_eq!(from_decimal(a).checked_sub(&from_decimal(b)).unwrap(), from_decimal(a - b));
    }

    #[test]
    fn decimal_product_matches_truncated_rust_decimal(a in arb_decimal(4), b in arb_decimal(4)) {
        let exact = (a * b).round_dp_with_strategy(6, RoundingStrategy::ToZero);
        prop_assert_eq!(from_decimal(a).checked_mul(&from_decimal(b)).unwrap(), from_decimal(exact));
    }

    #[test]
    fn expression_agrees_with_direct_arithmetic(a in arb_decimal(3), b in arb_decimal(3)) {
        let expr = parse(&format!("x*x-{}x", b.abs())).unwrap();
        let x = from_decimal(a);
        let b = from_decimal(b.abs());
        let expected = x.checked_mul(&x).unwrap().checked_sub(&b.checked_mul(&x).unwrap()).unwrap();
        prop_assert_eq!(evaluate(&expr, &x).unwrap(), expected);
    }
}

#[test]
fn quickcheck_integer_round_trip() {
    fn prop(n: i32) -> bool {
        let n = n.max(-i32::MAX);
        FixedRadix::from_f64(NumberFormat::decimal(10, 0), n as f64).to_i32() == n
    }
    quickcheck::quickcheck(prop as fn(i32) -> bool);
}

#[test]
fn quickcheck_negation_is_involution() {
    fn prop(n: i16, base: u8) -> bool {
        let format = NumberFormat::new(2 + u32::from(base) % 35, 16, 2).unwrap();
        let x = FixedRadix::from_f64(format, f64::from(n) / 4.0);
        -(-&x) == x && x.checked_add(&-&x).unwrap().is_zero()
    }
    quickcheck::quickcheck(prop as fn(i16, u8) -> bool);
}

#[test]
fn parsed_expression_is_shared_across_threads() {
    let expr = parse("x^2+2x+1").unwrap();
    let format = NumberFormat::decimal(12, 4);

    crossbeam::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let expr = &expr;
                scope.spawn(move |_| {
                    let x = FixedRadix::from_f64(format, i as f64);
                    evaluate(expr, &x).unwrap().to_i32()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = ((i + 1) * (i + 1)) as i32;
            assert_eq!(handle.join().unwrap(), expected);
        }
    })
    .unwrap();

    // Evaluation never consumed the tokens
    assert_eq!(expr.to_string(), "x 2 ^ 2 x * + 1 +");
}
