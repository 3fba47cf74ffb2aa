//! CSS Values & Units Level 3 — §3 Textual Data Types
//! Spec: <https://www.w3.org/TR/css-values-3/#textual-values>

use crate::ParseError;
use cssparser::{Parser, Token};

/// A predefined keyword value, stored ASCII-lowercased.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident(pub String);

impl Ident {
    /// Build a keyword from text, lowercasing it.
    #[inline]
    pub fn new(text: &str) -> Self {
        Self(text.to_ascii_lowercase())
    }

    /// The keyword text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The CSS-wide keywords accepted by every property (§3.1.1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CssWideKeyword {
    /// `initial`
    Initial,
    /// `inherit`
    Inherit,
    /// `unset` (css-cascade-4): `inherit` for inherited properties, `initial` otherwise.
    Unset,
}

impl CssWideKeyword {
    pub const ALL: [Self; 3] = [Self::Initial, Self::Inherit, Self::Unset];

    /// Match a keyword ignoring ASCII case.
    pub fn from_ident(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.as_str().eq_ignore_ascii_case(text))
    }

    /// The serialized keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Inherit => "inherit",
            Self::Unset => "unset",
        }
    }
}

/// Parse an identifier token into a lowercased keyword.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an identifier.
#[inline]
pub fn parse_ident(input: &mut Parser) -> Result<Ident, ParseError> {
    match input.next() {
        Ok(Token::Ident(text)) => Ok(Ident::new(text.as_ref())),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a CSS-wide keyword.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for any other token.
pub fn parse_css_wide_keyword(input: &mut Parser) -> Result<CssWideKeyword, ParseError> {
    match input.next() {
        Ok(Token::Ident(text)) => {
            CssWideKeyword::from_ident(text.as_ref()).ok_or(ParseError::UnexpectedToken)
        }
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a `<custom-ident>` (§3.2). Case is preserved.
///
/// CSS-wide keywords and `default` are excluded.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the token is not a usable identifier.
pub fn parse_custom_ident(input: &mut Parser) -> Result<String, ParseError> {
    match input.next() {
        Ok(Token::Ident(text))
            if CssWideKeyword::from_ident(text.as_ref()).is_none()
                && !text.eq_ignore_ascii_case("default") =>
        {
            Ok(text.as_ref().to_owned())
        }
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a quoted `<string>` (§3.3).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a string.
pub fn parse_string(input: &mut Parser) -> Result<String, ParseError> {
    match input.next() {
        Ok(Token::QuotedString(text)) => Ok(text.as_ref().to_owned()),
        _ => Err(ParseError::UnexpectedToken),
    }
}
