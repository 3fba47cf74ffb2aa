//! CSS Values & Units Level 3 — §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::ParseError;
use cssparser::{Parser, Token};

/// A CSS <percentage>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32); // stored as 0.0..=1.0

impl Percentage {
    /// Resolve against a basis in px.
    #[inline]
    pub fn of(self, basis_px: f32) -> f32 {
        self.0 * basis_px
    }
}

/// Parse a CSS <percentage> (§5.1).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<percentage>`.
pub fn parse_percentage(input: &mut Parser) -> Result<Percentage, ParseError> {
    if let Ok(Token::Percentage { unit_value, .. }) = input.next() {
        return Ok(Percentage(*unit_value));
    }
    Err(ParseError::UnexpectedToken)
}
