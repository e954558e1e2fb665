// ============================================================================
// Fixed-Radix Library
// Arbitrary-radix fixed-point numbers and a single-variable expression evaluator
// ============================================================================

//! # Fixed Radix
//!
//! Fixed-width, fixed-point numbers in any base from 2 to 36, and an infix
//! expression evaluator built on them.
//!
//! ## Features
//!
//! - **Bit-packed digit storage** with `ceil(log2(base))` bits per digit
//! - **Digit-wise arithmetic** with carry and borrow propagation
//! - **Radix conversion** between any two formats, truncating
//! - **Shunting-yard parsing** with implicit `*` (`2x`, `2(x+1)`) and
//!   implicit leading `0` (`-1/2`)
//! - **Reusable parsed expressions**: parse once, evaluate for many `x`
//!
//! ## Example
//!
//! ```rust
//! use fixed_radix::prelude::*;
//!
//! let format = NumberFormat::decimal(20, 20);
//!
//! // Evaluate an expression for several bindings
//! let expr = parse("2x+3").unwrap();
//! for (x, expected) in [("4", "11.0"), ("1.5", "6.0")] {
//!     let x = FixedRadix::parse(format, x).unwrap();
//!     assert_eq!(render(&evaluate(&expr, &x).unwrap()), expected);
//! }
//!
//! // Convert between radixes
//! let value = FixedRadix::parse(format, "10.75").unwrap();
//! let binary = convert_radix(&value, 2, 8, 4).unwrap();
//! assert_eq!(binary.to_string(), "1010.11");
//! ```

pub mod api;
pub mod expression;
pub mod numeric;

pub use api::{convert_radix, evaluate, parse, render};

// Re-exports for convenience
pub mod prelude {
    pub use crate::api::{convert_radix, evaluate, parse, render};
    pub use crate::expression::{
        EvalError, Expression, ExpressionEvaluator, Operator, ParseError, Token,
    };
    pub use crate::numeric::{DigitStore, FixedRadix, NumberFormat, NumericError};
}
