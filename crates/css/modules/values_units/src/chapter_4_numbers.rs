//! CSS Values & Units Level 3 — §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::ParseError;
use cssparser::Parser;
use cssparser::Token;

/// A CSS <number>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f32);

/// Parse a CSS <number> (§4.2). Accepts integer or real numbers.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<number>`.
pub fn parse_number(input: &mut Parser) -> Result<Number, ParseError> {
    if let Ok(Token::Number { value, .. }) = input.next() {
        return Ok(Number(*value));
    }
    Err(ParseError::UnexpectedToken)
}

/// Parse a CSS <integer> (§4.1). Real numbers are rejected.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an `<integer>`.
pub fn parse_integer(input: &mut Parser) -> Result<i32, ParseError> {
    if let Ok(Token::Number {
        int_value: Some(int_value),
        ..
    }) = input.next()
    {
        return Ok(*int_value);
    }
    Err(ParseError::UnexpectedToken)
}
