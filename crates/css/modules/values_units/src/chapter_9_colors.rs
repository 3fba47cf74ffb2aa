//! CSS Color Module — sRGB colors (subset)
//! Spec: <https://www.w3.org/TR/css-color-4/>

use crate::ParseError;
use cssparser::{ParseError as CssParseError, Parser, Token};
use smallvec::SmallVec;

/// Bit count used to duplicate a single hex nibble into a full byte.
const NIBBLE_SHIFT: u32 = 4;

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Opaque black, the initial value of `color`.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0,
    };

    /// An opaque color.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }
}

/// Convert an ASCII hex digit to its numeric value.
pub const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parse a 3-, 4-, 6- or 8-digit hex color (e.g., `#abc` or `#aabbccdd`).
fn parse_hex_color(text: &str) -> Option<Color> {
    let digits = text
        .bytes()
        .map(hex_value)
        .collect::<Option<SmallVec<u8, 8>>>()?;
    let channel = |index: usize| -> Option<u8> {
        match digits.len() {
            3 | 4 => {
                let nibble = *digits.get(index)?;
                Some(nibble.wrapping_shl(NIBBLE_SHIFT) | nibble)
            }
            6 | 8 => {
                let high = *digits.get(index * 2)?;
                let low = *digits.get(index * 2 + 1)?;
                Some(high.wrapping_shl(NIBBLE_SHIFT) | low)
            }
            _ => None,
        }
    };
    let alpha = if matches!(digits.len(), 4 | 8) {
        channel(3)?
    } else {
        u8::MAX
    };
    Some(Color {
        red: channel(0)?,
        green: channel(1)?,
        blue: channel(2)?,
        alpha,
    })
}

/// Map a CSS named color (common subset) to an RGBA value.
fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "transparent" => Color::TRANSPARENT,
        "black" => Color::BLACK,
        "white" => Color::rgb(255, 255, 255),
        "red" => Color::rgb(255, 0, 0),
        "green" => Color::rgb(0, 128, 0),
        "lime" => Color::rgb(0, 255, 0),
        "blue" => Color::rgb(0, 0, 255),
        "navy" => Color::rgb(0, 0, 128),
        "yellow" => Color::rgb(255, 255, 0),
        "orange" => Color::rgb(255, 165, 0),
        "purple" => Color::rgb(128, 0, 128),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "silver" => Color::rgb(192, 192, 192),
        _ => return None,
    };
    Some(color)
}

/// Scale an alpha number in `0..=1` to a byte.
fn alpha_byte(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * f32::from(u8::MAX)).round() as u8
}

/// Parse the arguments of `rgb()`/`rgba()`.
///
/// Channels are numbers clamped to `0..=255`; the optional alpha is a number in `0..=1`
/// or a percentage. Both comma and space separated forms are accepted.
fn parse_rgb_arguments(input: &mut Parser) -> Option<Color> {
    let mut channels: SmallVec<u8, 3> = SmallVec::new();
    let mut alpha = u8::MAX;
    while let Ok(token) = input.next() {
        match *token {
            Token::Number { value, .. } if channels.len() < 3 => {
                channels.push(value.clamp(0.0, f32::from(u8::MAX)).round() as u8);
            }
            Token::Number { value, .. } => alpha = alpha_byte(value),
            Token::Percentage { unit_value, .. } if channels.len() == 3 => {
                alpha = alpha_byte(unit_value);
            }
            Token::Comma => {}
            Token::Delim('/') if channels.len() == 3 => {}
            _ => return None,
        }
    }
    match channels.as_slice() {
        [red, green, blue] => Some(Color {
            red: *red,
            green: *green,
            blue: *blue,
            alpha,
        }),
        _ => None,
    }
}

/// Parse a CSS <color> (subset).
///
/// Supports hex notation, a set of named colors, and `rgb()`/`rgba()`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for unsupported or malformed input.
pub fn parse_color(input: &mut Parser) -> Result<Color, ParseError> {
    let token_initial = match input.next() {
        Ok(initial) => initial.clone(),
        Err(_) => return Err(ParseError::UnexpectedToken),
    };
    match token_initial {
        Token::Hash(value) | Token::IDHash(value) => {
            parse_hex_color(value.as_ref()).ok_or(ParseError::UnexpectedToken)
        }
        Token::Ident(name) => named_color(name.as_ref()).ok_or(ParseError::UnexpectedToken),
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            let result: Result<Option<Color>, CssParseError<'_, ()>> =
                input.parse_nested_block(|nested| Ok(parse_rgb_arguments(nested)));
            match result {
                Ok(Some(color)) => Ok(color),
                _ => Err(ParseError::UnexpectedToken),
            }
        }
        _ => Err(ParseError::UnexpectedToken),
    }
}
