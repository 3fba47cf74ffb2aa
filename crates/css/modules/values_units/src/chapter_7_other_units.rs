//! CSS Values & Units Level 3 — §7 Other Units (times)
//! Spec: <https://www.w3.org/TR/css-values-3/#time>

use crate::ParseError;
use cssparser::{Parser, Token};

/// Milliseconds per second.
const MILLIS_PER_SECOND: f32 = 1000.0;

/// A CSS <time>, canonicalized to seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Time {
    pub seconds: f32,
}

/// Parse a CSS <time> (§7.3) in `s` or `ms`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for any other token or unit.
pub fn parse_time(input: &mut Parser) -> Result<Time, ParseError> {
    if let Ok(Token::Dimension { value, unit, .. }) = input.next() {
        if unit.eq_ignore_ascii_case("s") {
            return Ok(Time { seconds: *value });
        }
        if unit.eq_ignore_ascii_case("ms") {
            return Ok(Time {
                seconds: *value / MILLIS_PER_SECOND,
            });
        }
    }
    Err(ParseError::UnexpectedToken)
}
