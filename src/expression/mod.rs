// ============================================================================
// Expression Module
// Single-variable infix expressions over fixed-radix numbers
// ============================================================================
//
// Pipeline:
//   text -> Expression::parse (shunting-yard, implicit `*` and leading `0`)
//        -> immutable postfix tokens
//        -> ExpressionEvaluator (operand stack, FixedRadix arithmetic)
//
// Division and exponentiation are evaluator-level: division goes through
// f64, exponentiation is repeated multiplication by an integer exponent.

mod errors;
mod evaluator;
mod parser;
mod token;

pub use errors::{EvalError, EvalResult, ParseError, ParseResult};
pub use evaluator::ExpressionEvaluator;
pub use parser::Expression;
pub use token::{Operator, Token, VARIABLE};
