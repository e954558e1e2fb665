// ============================================================================
// Expression Parser
// Infix text to postfix tokens with implicit `*` and leading `0`
// ============================================================================

use super::errors::{ParseError, ParseResult};
use super::token::{Operator, Token, VARIABLE};
use smallvec::SmallVec;
use std::fmt;
use std::str::{CharIndices, FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed expression: an immutable postfix token sequence.
///
/// Evaluation reads the tokens without consuming them, so one parse can be
/// evaluated any number of times, from any number of threads.
///
/// # Example
/// ```
/// use fixed_radix::expression::Expression;
///
/// let expr: Expression = "2(x+1)".parse().unwrap();
/// assert_eq!(expr.to_string(), "2 x 1 + *");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    postfix: Box<[Token]>,
}

impl Expression {
    /// Parse infix text.
    ///
    /// Grammar: digits with at most one `.`, the variable `x`, `+ - * / ^`,
    /// parentheses and whitespace. `2x`, `x(…)`, `(…)(…)`, `)2` get an
    /// implicit `*`; a `+` or `-` right after `(` or at the start gets an
    /// implicit `0` operand. Operators of equal priority are left-associative.
    /// `^` evaluates by repeated multiplication, so its cost grows with the
    /// exponent.
    ///
    /// # Errors
    /// - `UnexpectedCharacter` for anything outside the grammar
    /// - `UnbalancedParenthesis` for an unmatched `(` or `)`
    /// - `MalformedLiteral` for a literal with two `.`
    pub fn parse(input: &str) -> ParseResult<Self> {
        let postfix = ExpressionParser::new(input).run()?;
        tracing::debug!(input, tokens = postfix.len(), "parsed expression");
        Ok(Self {
            postfix: postfix.into_boxed_slice(),
        })
    }

    /// Tokens in postfix order.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.postfix
    }

    /// Whether the expression refers to the variable at all.
    pub fn uses_variable(&self) -> bool {
        self.postfix.iter().any(|t| matches!(t, Token::Variable))
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Space-separated postfix form
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.postfix.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

// ============================================================================
// Shunting-Yard
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Open { position: usize },
    Operator(Operator),
}

#[inline]
fn is_literal_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

struct ExpressionParser<'a> {
    input: CharIndices<'a>,
    /// A real character deferred behind a synthesized one
    pending: Option<(usize, char)>,
    /// Last effective character; the start of input acts as `(`
    last: char,
    literal: String,
    literal_start: usize,
    output: Vec<Token>,
    stack: SmallVec<[StackEntry; 16]>,
}

impl<'a> ExpressionParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.char_indices(),
            pending: None,
            last: '(',
            literal: String::new(),
            literal_start: 0,
            output: Vec::with_capacity(input.len()),
            stack: SmallVec::new(),
        }
    }

    fn run(mut self) -> ParseResult<Vec<Token>> {
        while let Some((position, c)) = self.next_char() {
            match self.implicit_before(c) {
                Some(synthetic) => {
                    self.pending = Some((position, c));
                    self.feed(position, synthetic)?;
                }
                None => self.feed(position, c)?,
            }
        }

        self.flush_literal();
        while let Some(entry) = self.stack.pop() {
            match entry {
                StackEntry::Operator(op) => self.output.push(Token::Operator(op)),
                StackEntry::Open { position } => {
                    return Err(ParseError::UnbalancedParenthesis { position })
                }
            }
        }
        Ok(self.output)
    }

    fn next_char(&mut self) -> Option<(usize, char)> {
        self.pending.take().or_else(|| self.input.next())
    }

    /// Character to synthesize ahead of `c`, if any.
    fn implicit_before(&self, c: char) -> Option<char> {
        let last = self.last;
        let after_value = last == VARIABLE || last == ')';

        if c == VARIABLE || c == '(' {
            (after_value || is_literal_char(last)).then_some('*')
        } else if is_literal_char(c) {
            after_value.then_some('*')
        } else if c == '+' || c == '-' {
            (last == '(').then_some('0')
        } else {
            None
        }
    }

    fn feed(&mut self, position: usize, c: char) -> ParseResult<()> {
        if is_literal_char(c) {
            if self.literal.is_empty() {
                self.literal_start = position;
            } else if c == '.' && self.literal.contains('.') {
                return Err(ParseError::MalformedLiteral {
                    position: self.literal_start,
                });
            }
            self.literal.push(c);
            self.last = c;
            return Ok(());
        }

        self.flush_literal();

        match c {
            '(' => self.stack.push(StackEntry::Open { position }),
            ')' => self.close_group(position)?,
            VARIABLE => self.output.push(Token::Variable),
            // Separates literals but is not an effective character
            c if c.is_whitespace() => return Ok(()),
            c => match Operator::from_char(c) {
                Some(op) => self.push_operator(op),
                None => {
                    return Err(ParseError::UnexpectedCharacter {
                        character: c,
                        position,
                    })
                }
            },
        }

        self.last = c;
        Ok(())
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            let literal = std::mem::take(&mut self.literal);
            self.output.push(Token::Literal(literal));
        }
    }

    fn close_group(&mut self, position: usize) -> ParseResult<()> {
        loop {
            match self.stack.pop() {
                Some(StackEntry::Operator(op)) => self.output.push(Token::Operator(op)),
                Some(StackEntry::Open { .. }) => return Ok(()),
                None => return Err(ParseError::UnbalancedParenthesis { position }),
            }
        }
    }

    fn push_operator(&mut self, op: Operator) {
        while let Some(&StackEntry::Operator(top)) = self.stack.last() {
            if top.priority() < op.priority() {
                break;
            }
            self.stack.pop();
            self.output.push(Token::Operator(top));
        }
        self.stack.push(StackEntry::Operator(op));
    }
}
