// ============================================================================
// Entry Points
// The surface used by an interactive front end
// ============================================================================

use crate::expression::{EvalResult, Expression, ParseResult};
use crate::numeric::{FixedRadix, NumericResult};

/// Parse infix text into a reusable postfix expression.
///
/// # Example
/// ```
/// use fixed_radix::{evaluate, parse, render};
/// use fixed_radix::numeric::{FixedRadix, NumberFormat};
///
/// let expr = parse("x^3").unwrap();
/// let x = FixedRadix::parse(NumberFormat::default(), "2").unwrap();
/// assert_eq!(render(&evaluate(&expr, &x).unwrap()), "8.0");
/// ```
pub fn parse(input: &str) -> ParseResult<Expression> {
    Expression::parse(input)
}

/// Evaluate `expression` with the variable bound to `binding`.
pub fn evaluate(expression: &Expression, binding: &FixedRadix) -> EvalResult<FixedRadix> {
    expression.evaluate(binding)
}

/// Render a value in its own radix.
pub fn render(value: &FixedRadix) -> String {
    value.to_string()
}

/// Re-express a value in another radix and digit layout.
///
/// # Errors
/// Returns `InvalidRadix` for a base outside `2..=36`.
pub fn convert_radix(
    value: &FixedRadix,
    base: u32,
    int_digits: usize,
    frac_digits: usize,
) -> NumericResult<FixedRadix> {
    value.convert_to(base, int_digits, frac_digits)
}
