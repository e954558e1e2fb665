// ============================================================================
// Expression Errors
// Failures while parsing or evaluating an expression
// ============================================================================

use crate::numeric::NumericError;
use thiserror::Error;

/// Rejected expression text. Positions are byte offsets into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    #[error("unexpected character {character:?} at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    /// A `)` with no open `(`, or a `(` never closed
    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },

    /// A numeric literal containing a second `.`
    #[error("malformed numeric literal starting at position {position}")]
    MalformedLiteral { position: usize },
}

/// Failure while replaying a postfix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Operand stack did not end with exactly one value, or an operator
    /// found fewer than two operands
    #[error("invalid expression: {operands} operand(s) on the stack")]
    InvalidExpression { operands: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error(transparent)]
    Numeric(#[from] NumericError),
}

pub type ParseResult<T> = Result<T, ParseError>;

pub type EvalResult<T> = Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::UnexpectedCharacter {
                character: '$',
                position: 3
            }
            .to_string(),
            "unexpected character '$' at position 3"
        );
        assert_eq!(
            EvalError::InvalidExpression { operands: 2 }.to_string(),
            "invalid expression: 2 operand(s) on the stack"
        );
    }

    #[test]
    fn test_numeric_errors_convert() {
        let err: EvalError = NumericError::InvalidRadix(99).into();
        assert_eq!(err, EvalError::Numeric(NumericError::InvalidRadix(99)));
        assert_eq!(err.to_string(), NumericError::InvalidRadix(99).to_string());
    }
}
