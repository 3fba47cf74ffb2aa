//! CSS Values & Units Level 3 — §6 Dimensions (Lengths subset)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use crate::ParseError;
use cssparser::{Parser, Token};

/// CSS pixels per inch (§6.2).
const PX_PER_INCH: f32 = 96.0;

/// Supported subset of CSS <length>: relative font and viewport units, absolute units,
/// plus unitless zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Pixels,
    Ems,
    RootEms,
    ViewportWidth,
    ViewportHeight,
    Centimeters,
    Millimeters,
    Inches,
    Points,
    Picas,
}

impl LengthUnit {
    /// Map a unit suffix (ASCII case-insensitive) to a unit.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let unit = match suffix.to_ascii_lowercase().as_str() {
            "px" => Self::Pixels,
            "em" => Self::Ems,
            "rem" => Self::RootEms,
            "vw" => Self::ViewportWidth,
            "vh" => Self::ViewportHeight,
            "cm" => Self::Centimeters,
            "mm" => Self::Millimeters,
            "in" => Self::Inches,
            "pt" => Self::Points,
            "pc" => Self::Picas,
            _ => return None,
        };
        Some(unit)
    }

    /// Serialized unit suffix.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Ems => "em",
            Self::RootEms => "rem",
            Self::ViewportWidth => "vw",
            Self::ViewportHeight => "vh",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::Inches => "in",
            Self::Points => "pt",
            Self::Picas => "pc",
        }
    }

    /// Pixels per unit for absolute units; `None` for relative ones.
    pub const fn absolute_px(self) -> Option<f32> {
        match self {
            Self::Pixels => Some(1.0),
            Self::Inches => Some(PX_PER_INCH),
            Self::Centimeters => Some(PX_PER_INCH / 2.54),
            Self::Millimeters => Some(PX_PER_INCH / 25.4),
            Self::Points => Some(PX_PER_INCH / 72.0),
            Self::Picas => Some(PX_PER_INCH / 6.0),
            Self::Ems | Self::RootEms | Self::ViewportWidth | Self::ViewportHeight => None,
        }
    }
}

/// Compute the pixel value for a given `Length` using the current environment.
///
/// - Absolute units: converted with the fixed 96px-per-inch ratio.
/// - Ems/RootEms: scales by the provided font sizes.
/// - Viewport-relative (vw/vh): requires viewport; returns a percentage of width/height.
pub fn compute_length_px(
    length: Length,
    font_size_px: f32,
    root_font_size_px: f32,
    viewport: Option<Viewport>,
) -> Option<f32> {
    if let Some(px_per_unit) = length.unit.absolute_px() {
        return Some(length.value * px_per_unit);
    }
    match length.unit {
        LengthUnit::Ems => Some(length.value * font_size_px),
        LengthUnit::RootEms => Some(length.value * root_font_size_px),
        LengthUnit::ViewportWidth => viewport
            .map(|viewport_metrics| length.value * (viewport_metrics.width_px as f32) / 100.0),
        LengthUnit::ViewportHeight => viewport
            .map(|viewport_metrics| length.value * (viewport_metrics.height_px as f32) / 100.0),
        LengthUnit::Pixels
        | LengthUnit::Centimeters
        | LengthUnit::Millimeters
        | LengthUnit::Inches
        | LengthUnit::Points
        | LengthUnit::Picas => None,
    }
}

/// A CSS <length> value with unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    /// A length in CSS pixels.
    #[inline]
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Pixels,
        }
    }

    /// True when the length is already in its computed (px) form.
    #[inline]
    pub fn is_computed(self) -> bool {
        self.unit == LengthUnit::Pixels
    }
}

/// Viewport metrics used to evaluate viewport-relative units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width_px: u32,
    pub height_px: u32,
}

/// Parse a CSS <length> (§6.2), including unitless zero.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a supported `<length>`.
pub fn parse_length(input: &mut Parser) -> Result<Length, ParseError> {
    match input.next() {
        Ok(Token::Dimension { value, unit, .. }) => {
            let unit_kind =
                LengthUnit::from_suffix(unit.as_ref()).ok_or(ParseError::UnexpectedToken)?;
            Ok(Length {
                value: *value,
                unit: unit_kind,
            })
        }
        Ok(Token::Number { value, .. }) if *value == 0.0 => Ok(Length::px(0.0)),
        _ => Err(ParseError::UnexpectedToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn parse(text: &str) -> Result<Length, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_length(&mut parser)
    }

    /// # Panics
    /// Panics if unit parsing or conversion regresses.
    #[test]
    fn lengths_convert_to_px() {
        let viewport = Viewport {
            width_px: 800,
            height_px: 600,
        };
        let cases = [
            ("10px", 10.0),
            ("2em", 32.0),
            ("1.5rem", 15.0),
            ("50vw", 400.0),
            ("10vh", 60.0),
            ("1in", 96.0),
            ("12pt", 16.0),
            ("0", 0.0),
        ];
        for (text, expected) in cases {
            let length = parse(text).unwrap_or(Length::px(f32::NAN));
            let px = compute_length_px(length, 16.0, 10.0, Some(viewport)).unwrap_or(f32::NAN);
            assert!((px - expected).abs() < 0.01, "{text} => {px}, want {expected}");
        }
    }

    /// # Panics
    /// Panics if invalid lengths are accepted.
    #[test]
    fn rejects_unitless_nonzero_and_unknown_units() {
        assert_eq!(parse("5"), Err(ParseError::UnexpectedToken));
        assert_eq!(parse("5furlongs"), Err(ParseError::UnexpectedToken));
    }

    /// # Panics
    /// Panics if viewport units resolve without a viewport.
    #[test]
    fn viewport_units_need_a_viewport() {
        let length = Length {
            value: 10.0,
            unit: LengthUnit::ViewportWidth,
        };
        assert_eq!(compute_length_px(length, 16.0, 16.0, None), None);
    }
}
