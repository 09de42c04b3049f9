//! Numeric form input
//!
//! Two ways a number box turns text into a value:
//! - plain boxes read the leading integer of the text, defaulting to 0
//! - arithmetic boxes accept expressions like "64-12" or "(3+4)*2"

use thiserror::Error;

/// Error when evaluating an arithmetic input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// Nothing left to evaluate after sanitizing
    #[error("Empty expression")]
    Empty,
    /// Character that cannot start or continue a term
    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },
    /// Expression ended while a term was expected
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    /// A '(' without its ')'
    #[error("Unbalanced parenthesis")]
    UnbalancedParenthesis,
    /// Malformed number literal such as "1.2.3"
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    /// Parentheses nested deeper than [`MAX_NESTING`]
    #[error("Expression nested deeper than {} levels", MAX_NESTING)]
    TooDeep,
}

/// Deepest parenthesis nesting an arithmetic box accepts.
pub const MAX_NESTING: usize = 64;

/// Reads the leading integer of a text box, `0` when there is none.
///
/// Leading whitespace and one sign are accepted, then digits up to the first
/// non-digit. Values beyond the `i64` range saturate.
pub fn parse_int_lenient(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Keep only the characters an arithmetic box understands.
pub fn sanitize_expression(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.'))
        .collect()
}

/// Evaluate a sanitized arithmetic expression with the usual precedence.
pub fn evaluate_expression(input: &str) -> Result<f64, ExpressionError> {
    let sanitized = sanitize_expression(input);
    if sanitized.is_empty() {
        return Err(ExpressionError::Empty);
    }
    // "--" and "++" are increment/decrement tokens, never two signs
    if let Some(position) = sanitized.find("--").or_else(|| sanitized.find("++")) {
        let found = sanitized[position..].chars().next().unwrap_or('-');
        return Err(ExpressionError::UnexpectedChar { found, position });
    }

    let mut parser = ExpressionParser {
        chars: sanitized.chars().collect(),
        position: 0,
        depth: 0,
    };
    let value = parser.expression()?;
    match parser.peek() {
        None => Ok(value),
        Some(')') => Err(ExpressionError::UnbalancedParenthesis),
        Some(found) => Err(ExpressionError::UnexpectedChar {
            found,
            position: parser.position,
        }),
    }
}

/// Resolve an arithmetic box to the value it commits.
///
/// - blank (after sanitizing) commits `fallback`
/// - a division by zero or other non-finite result commits `fallback`
/// - a malformed expression commits nothing (`None`); the box keeps its
///   previous value
/// - otherwise the result is rounded to the nearest integer, halves upward
pub fn resolve_arithmetic_input(input: &str, fallback: i64) -> Option<i64> {
    match evaluate_expression(input) {
        Ok(value) if value.is_finite() => Some((value + 0.5).floor() as i64),
        Ok(_) | Err(ExpressionError::Empty) => Some(fallback),
        Err(err) => {
            tracing::debug!(input, error = %err, "Arithmetic input rejected");
            None
        }
    }
}

struct ExpressionParser {
    chars: Vec<char>,
    position: usize,
    depth: usize,
}

impl ExpressionParser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn bump(&mut self) {
        self.position += 1;
    }

    fn expression(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.bump();
            let rhs = self.term()?;
            if op == '+' {
                value += rhs;
            } else {
                value -= rhs;
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.unary()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.bump();
            let rhs = self.unary()?;
            if op == '*' {
                value *= rhs;
            } else {
                value /= rhs;
            }
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, ExpressionError> {
        let mut negative = false;
        while let Some(sign @ ('+' | '-')) = self.peek() {
            self.bump();
            negative ^= sign == '-';
        }
        let value = self.primary()?;
        Ok(if negative { -value } else { value })
    }

    fn primary(&mut self) -> Result<f64, ExpressionError> {
        match self.peek() {
            Some('(') => {
                if self.depth >= MAX_NESTING {
                    return Err(ExpressionError::TooDeep);
                }
                self.bump();
                self.depth += 1;
                let value = self.expression()?;
                self.depth -= 1;
                if self.peek() != Some(')') {
                    return Err(ExpressionError::UnbalancedParenthesis);
                }
                self.bump();
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(found) => Err(ExpressionError::UnexpectedChar {
                found,
                position: self.position,
            }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<f64, ExpressionError> {
        let start = self.position;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                self.bump();
            } else {
                break;
            }
        }
        let literal: String = self.chars[start..self.position].iter().collect();
        literal
            .parse::<f64>()
            .map_err(|_| ExpressionError::InvalidNumber(literal))
    }
}
