// ============================================================================
// Expression Evaluator
// Replays a postfix token sequence against one variable binding
// ============================================================================

use super::errors::{EvalError, EvalResult};
use super::parser::Expression;
use super::token::{Operator, Token};
use crate::numeric::FixedRadix;
use smallvec::SmallVec;

/// Evaluates expressions with the variable bound to one value.
///
/// Literals are read in the binding's format, so every intermediate value
/// shares that format. The operand stack lives only for the duration of one
/// [`ExpressionEvaluator::evaluate`] call.
///
/// # Example
/// ```
/// use fixed_radix::expression::{Expression, ExpressionEvaluator};
/// use fixed_radix::numeric::{FixedRadix, NumberFormat};
///
/// let expr = Expression::parse("2x+3").unwrap();
/// let x = FixedRadix::from_f64(NumberFormat::decimal(8, 8), 4.0);
/// let value = ExpressionEvaluator::new(&x).evaluate(&expr).unwrap();
/// assert_eq!(value.to_string(), "11.0");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExpressionEvaluator<'x> {
    binding: &'x FixedRadix,
}

impl<'x> ExpressionEvaluator<'x> {
    pub fn new(binding: &'x FixedRadix) -> Self {
        Self { binding }
    }

    /// Evaluate `expression` with the variable bound.
    ///
    /// # Errors
    /// - `InvalidExpression` if an operator lacks operands or the final
    ///   stack does not hold exactly one value
    /// - `DivisionByZero` for a zero divisor
    /// - `Numeric` if a literal is not valid in the binding's radix
    ///
    /// `a ^ n` costs up to `n` full multiplications. The loop ends early only
    /// when the power reaches a fixed point such as 0 or 1, so a large
    /// exponent over a value that keeps cycling runs all `n` steps.
    pub fn evaluate(&self, expression: &Expression) -> EvalResult<FixedRadix> {
        let mut stack: SmallVec<[FixedRadix; 8]> = SmallVec::new();

        for token in expression.tokens() {
            let value = match token {
                Token::Literal(digits) => FixedRadix::parse(self.binding.format(), digits)?,
                Token::Variable => self.binding.clone(),
                Token::Operator(op) => {
                    let operands = stack.len();
                    let (rhs, lhs) = match (stack.pop(), stack.pop()) {
                        (Some(rhs), Some(lhs)) => (rhs, lhs),
                        _ => return Err(EvalError::InvalidExpression { operands }),
                    };
                    self.apply(*op, &lhs, &rhs)?
                }
            };
            tracing::trace!(%token, %value, "evaluated token");
            stack.push(value);
        }

        let operands = stack.len();
        match (stack.pop(), operands) {
            (Some(result), 1) => {
                tracing::debug!(%expression, x = %self.binding, %result, "evaluated expression");
                Ok(result)
            }
            _ => Err(EvalError::InvalidExpression { operands }),
        }
    }

    /// `lhs op rhs` in source order.
    fn apply(&self, op: Operator, lhs: &FixedRadix, rhs: &FixedRadix) -> EvalResult<FixedRadix> {
        Ok(match op {
            Operator::Add => lhs.checked_add(rhs)?,
            Operator::Sub => lhs.checked_sub(rhs)?,
            Operator::Mul => lhs.checked_mul(rhs)?,
            Operator::Div => {
                lhs.format().ensure_compatible(&rhs.format())?;
                if rhs.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                // Double precision, not the configured digit count
                FixedRadix::from_f64(self.binding.format(), lhs.to_f64() / rhs.to_f64())
            }
            Operator::Pow => power(lhs, rhs.to_i32())?,
        })
    }
}

/// Repeated multiplication from one. Negative exponents give the empty
/// product; the loop stops once the accumulator reaches a fixed point.
fn power(base: &FixedRadix, exponent: i32) -> EvalResult<FixedRadix> {
    let mut acc = FixedRadix::one(base.format());
    for _ in 0..exponent {
        let next = acc.checked_mul(base)?;
        if next == acc {
            break;
        }
        acc = next;
    }
    Ok(acc)
}

impl Expression {
    /// Shorthand for [`ExpressionEvaluator::evaluate`].
    pub fn evaluate(&self, x: &FixedRadix) -> EvalResult<FixedRadix> {
        ExpressionEvaluator::new(x).evaluate(self)
    }
}
