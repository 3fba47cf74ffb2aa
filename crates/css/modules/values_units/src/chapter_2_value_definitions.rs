//! CSS Values & Units Level 3 — §2 Value Definition Syntax
//! Spec: <https://www.w3.org/TR/css-values-3/#value-defs>
//!
//! A property's grammar is modelled as a set of alternatives (`a | b | c`), optionally
//! repeated with a list separator (`a#` for commas, `a+` for spaces).

use crate::{
    CssValue, ParseError, parse_color, parse_custom_ident, parse_ident, parse_integer,
    parse_length, parse_number, parse_percentage, parse_string, parse_time,
};
use cssparser::Parser;

/// One alternative of a property grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueAtom {
    /// Any of the listed keywords (lowercase).
    Keywords(&'static [&'static str]),
    Length,
    Percentage,
    Number,
    Integer,
    Color,
    Time,
    CustomIdent,
    String,
}

impl ValueAtom {
    /// Parse a single component matching this alternative.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` when the next token does not match.
    pub fn parse(self, input: &mut Parser) -> Result<CssValue, ParseError> {
        match self {
            Self::Keywords(keywords) => {
                let ident = parse_ident(input)?;
                if keywords.contains(&ident.as_str()) {
                    Ok(CssValue::Keyword(ident))
                } else {
                    Err(ParseError::UnexpectedToken)
                }
            }
            Self::Length => parse_length(input).map(CssValue::Length),
            Self::Percentage => parse_percentage(input).map(CssValue::Percentage),
            Self::Number => parse_number(input).map(CssValue::Number),
            Self::Integer => parse_integer(input).map(CssValue::Integer),
            Self::Color => parse_color(input).map(CssValue::Color),
            Self::Time => parse_time(input).map(CssValue::Time),
            Self::CustomIdent => parse_custom_ident(input).map(CssValue::CustomIdent),
            Self::String => parse_string(input).map(CssValue::String),
        }
    }
}

/// A property grammar: alternatives tried in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueGrammar {
    pub atoms: &'static [ValueAtom],
}

impl ValueGrammar {
    /// Build a grammar from its alternatives.
    #[inline]
    pub const fn new(atoms: &'static [ValueAtom]) -> Self {
        Self { atoms }
    }

    /// Parse one component value, trying each alternative and rewinding on failure.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` when no alternative matches.
    pub fn parse_component(&self, input: &mut Parser) -> Result<CssValue, ParseError> {
        for atom in self.atoms {
            if let Ok(value) = input.try_parse(|attempt| atom.parse(attempt)) {
                return Ok(value);
            }
        }
        Err(ParseError::UnexpectedToken)
    }

    /// Parse a whole value. With a `separator`, one or more components are collected into
    /// a [`CssValue::List`]; `' '` means whitespace separated.
    ///
    /// Trailing input is left for the caller (e.g. for `!important`).
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` when the first component does not parse, or
    /// when a separator is not followed by a valid component.
    pub fn parse_value(
        &self,
        input: &mut Parser,
        separator: Option<char>,
    ) -> Result<CssValue, ParseError> {
        let Some(separator_char) = separator else {
            return self.parse_component(input);
        };
        let mut items = vec![self.parse_component(input)?];
        loop {
            if separator_char == ' ' {
                match input.try_parse(|attempt| self.parse_component(attempt)) {
                    Ok(item) => items.push(item),
                    Err(_) => break,
                }
                continue;
            }
            let separated = if separator_char == ',' {
                input.try_parse(|attempt| attempt.expect_comma()).is_ok()
            } else {
                input
                    .try_parse(|attempt| attempt.expect_delim(separator_char))
                    .is_ok()
            };
            if !separated {
                break;
            }
            items.push(self.parse_component(input)?);
        }
        Ok(CssValue::List {
            separator: separator_char,
            items,
        })
    }
}
