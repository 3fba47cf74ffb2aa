//! Specified and computed value representation shared by every property.

use crate::{Color, Ident, Length, Number, Percentage, Time};
use core::fmt;
use cssparser::{ToCss, serialize_identifier, serialize_string};

/// Decimal places kept when serializing numbers.
const SERIALIZE_SCALE: f32 = 10_000.0;

/// A single property value.
///
/// The same type carries specified values (as parsed) and computed values
/// (after lengths were absolutized by the cascade).
#[derive(Clone, Debug, PartialEq)]
pub enum CssValue {
    /// A predefined keyword such as `auto`.
    Keyword(Ident),
    /// An author-defined identifier, case preserved.
    CustomIdent(String),
    String(String),
    Length(Length),
    Percentage(Percentage),
    Number(Number),
    Integer(i32),
    Color(Color),
    Time(Time),
    /// A repeated value joined by the property's list separator.
    List {
        separator: char,
        items: Vec<CssValue>,
    },
}

impl CssValue {
    /// Build a keyword value.
    #[inline]
    pub fn keyword(text: &str) -> Self {
        Self::Keyword(Ident::new(text))
    }

    /// Build a px length value.
    #[inline]
    pub const fn px(value: f32) -> Self {
        Self::Length(Length::px(value))
    }

    /// Keyword text, if this is a keyword.
    #[inline]
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(ident) => Some(ident.as_str()),
            _ => None,
        }
    }

    /// True if this is the given keyword.
    #[inline]
    pub fn is_keyword(&self, text: &str) -> bool {
        self.as_keyword() == Some(text)
    }

    /// Pixel amount, if this is a px length.
    #[inline]
    pub fn as_px(&self) -> Option<f32> {
        match self {
            Self::Length(length) if length.is_computed() => Some(length.value),
            _ => None,
        }
    }
}

/// Round away float noise before printing.
fn write_number<W>(value: f32, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    let rounded = (value * SERIALIZE_SCALE).round() / SERIALIZE_SCALE;
    // Avoid "-0".
    let normalized = if rounded == 0.0 { 0.0 } else { rounded };
    write!(dest, "{normalized}")
}

impl ToCss for Color {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        if self.alpha == u8::MAX {
            return write!(dest, "rgb({}, {}, {})", self.red, self.green, self.blue);
        }
        write!(dest, "rgba({}, {}, {}, ", self.red, self.green, self.blue)?;
        write_number(f32::from(self.alpha) / f32::from(u8::MAX), dest)?;
        dest.write_char(')')
    }
}

impl ToCss for CssValue {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match self {
            Self::Keyword(ident) => dest.write_str(ident.as_str()),
            Self::CustomIdent(text) => serialize_identifier(text, dest),
            Self::String(text) => serialize_string(text, dest),
            Self::Length(length) => {
                write_number(length.value, dest)?;
                dest.write_str(length.unit.suffix())
            }
            Self::Percentage(percentage) => {
                write_number(percentage.0 * 100.0, dest)?;
                dest.write_char('%')
            }
            Self::Number(number) => write_number(number.0, dest),
            Self::Integer(integer) => write!(dest, "{integer}"),
            Self::Color(color) => color.to_css(dest),
            Self::Time(time) => {
                write_number(time.seconds, dest)?;
                dest.write_char('s')
            }
            Self::List { separator, items } => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        if *separator == ' ' {
                            dest.write_char(' ')?;
                        } else {
                            dest.write_char(*separator)?;
                            dest.write_char(' ')?;
                        }
                    }
                    item.to_css(dest)?;
                }
                Ok(())
            }
        }
    }
}

/// A property's initial value in a form that fits a `static` table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitialValue {
    Keyword(&'static str),
    Px(f32),
    Number(f32),
    Integer(i32),
    Color(Color),
    Seconds(f32),
}

impl InitialValue {
    /// Materialize the initial value.
    pub fn to_value(self) -> CssValue {
        match self {
            Self::Keyword(text) => CssValue::keyword(text),
            Self::Px(value) => CssValue::px(value),
            Self::Number(value) => CssValue::Number(Number(value)),
            Self::Integer(value) => CssValue::Integer(value),
            Self::Color(color) => CssValue::Color(color),
            Self::Seconds(seconds) => CssValue::Time(Time { seconds }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LengthUnit;

    /// # Panics
    /// Panics if serialization drifts from CSSOM form.
    #[test]
    fn serializes_like_cssom() {
        assert_eq!(CssValue::px(10.0).to_css_string(), "10px");
        assert_eq!(
            CssValue::Length(Length {
                value: 1.5,
                unit: LengthUnit::Ems
            })
            .to_css_string(),
            "1.5em"
        );
        assert_eq!(CssValue::Percentage(Percentage(0.33)).to_css_string(), "33%");
        assert_eq!(CssValue::Color(Color::rgb(1, 2, 3)).to_css_string(), "rgb(1, 2, 3)");
        assert_eq!(
            CssValue::Color(Color::TRANSPARENT).to_css_string(),
            "rgba(0, 0, 0, 0)"
        );
        assert_eq!(CssValue::Time(Time { seconds: 0.25 }).to_css_string(), "0.25s");
        assert_eq!(CssValue::String("a b".to_owned()).to_css_string(), "\"a b\"");
    }

    /// # Panics
    /// Panics if list separators are not reproduced.
    #[test]
    fn serializes_lists() {
        let families = CssValue::List {
            separator: ',',
            items: vec![
                CssValue::CustomIdent("Helvetica".to_owned()),
                CssValue::keyword("serif"),
            ],
        };
        assert_eq!(families.to_css_string(), "Helvetica, serif");

        let page_size = CssValue::List {
            separator: ' ',
            items: vec![CssValue::px(10.0), CssValue::px(20.0)],
        };
        assert_eq!(page_size.to_css_string(), "10px 20px");
    }

    /// # Panics
    /// Panics if initial values materialize to the wrong variant.
    #[test]
    fn initial_values_materialize() {
        assert_eq!(InitialValue::Keyword("Auto").to_value(), CssValue::keyword("auto"));
        assert_eq!(InitialValue::Px(3.0).to_value().as_px(), Some(3.0));
    }
}
