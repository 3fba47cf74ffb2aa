//! Specified-to-computed value conversion run by `apply_value`.
//! Spec: <https://www.w3.org/TR/css-cascade-4/#computed>

use crate::{ApplyContext, StyleSnapshot};
use css_properties::{LogicalGroup, PropertyDescriptor, PropertyId};
use css_values_units::{CssValue, Length, Number, compute_length_px};

/// Ratio between adjacent `font-size` keywords for `larger`/`smaller`.
const FONT_SCALE_STEP: f32 = 1.2;
/// `font-weight: normal`.
const WEIGHT_NORMAL: f32 = 400.0;
/// `font-weight: bold`.
const WEIGHT_BOLD: f32 = 700.0;

/// Absolute `font-size` keyword sizes for a 16px medium.
/// Spec: <https://www.w3.org/TR/css-fonts-4/#absolute-size-mapping>
fn absolute_font_size(keyword: &str) -> Option<f32> {
    let px = match keyword {
        "xx-small" => 9.0,
        "x-small" => 10.0,
        "small" => 13.0,
        "medium" => 16.0,
        "large" => 18.0,
        "x-large" => 24.0,
        "xx-large" => 32.0,
        "xxx-large" => 48.0,
        _ => return None,
    };
    Some(px)
}

/// `bolder` and `lighter` relative to the inherited weight.
/// Spec: <https://www.w3.org/TR/css-fonts-4/#relative-weights>
fn relative_weight(keyword: &str, parent: f32) -> Option<f32> {
    let weight = match keyword {
        "bolder" if parent < 350.0 => 400.0,
        "bolder" if parent < 550.0 => 700.0,
        "bolder" if parent < 900.0 => 900.0,
        "bolder" => parent,
        "lighter" if parent < 100.0 => parent,
        "lighter" if parent < 550.0 => 100.0,
        "lighter" if parent < 750.0 => 400.0,
        "lighter" => 700.0,
        _ => return None,
    };
    Some(weight)
}

/// Border width keywords.
/// Spec: <https://www.w3.org/TR/css-backgrounds-3/#typedef-line-width>
fn border_width_keyword(keyword: &str) -> Option<f32> {
    match keyword {
        "thin" => Some(1.0),
        "medium" => Some(3.0),
        "thick" => Some(5.0),
        _ => None,
    }
}

fn parent_font_size(context: &ApplyContext<'_>) -> f32 {
    context
        .parent
        .map_or(context.root_font_size_px, StyleSnapshot::font_size_px)
}

fn parent_weight(context: &ApplyContext<'_>) -> f32 {
    context
        .parent
        .and_then(|parent| match parent.value(PropertyId::FontWeight) {
            CssValue::Number(Number(weight)) => Some(*weight),
            _ => None,
        })
        .unwrap_or(WEIGHT_NORMAL)
}

/// Absolutize one length against a font size; keeps the value if it cannot be resolved.
fn absolutize(length: Length, font_size_px: f32, context: &ApplyContext<'_>) -> CssValue {
    compute_length_px(
        length,
        font_size_px,
        context.root_font_size_px,
        context.viewport,
    )
    .map_or(CssValue::Length(length), CssValue::px)
}

/// Absolutize every length in a value, lists included.
fn absolutize_lengths(value: CssValue, font_size_px: f32, context: &ApplyContext<'_>) -> CssValue {
    match value {
        CssValue::Length(length) => absolutize(length, font_size_px, context),
        CssValue::List { separator, items } => CssValue::List {
            separator,
            items: items
                .into_iter()
                .map(|item| absolutize_lengths(item, font_size_px, context))
                .collect(),
        },
        other => other,
    }
}

/// Compute a specified value for `descriptor` (which is never a surrogate).
pub fn computed_value<S: StyleSnapshot + ?Sized>(
    descriptor: &PropertyDescriptor,
    specified: CssValue,
    snapshot: &S,
    context: &ApplyContext<'_>,
) -> CssValue {
    match descriptor.id() {
        PropertyId::FontSize => compute_font_size(specified, context),
        PropertyId::FontWeight => compute_font_weight(specified, context),
        PropertyId::LineHeight => match specified {
            CssValue::Percentage(percentage) => CssValue::px(percentage.of(snapshot.font_size_px())),
            other => absolutize_lengths(other, snapshot.font_size_px(), context),
        },
        _ if descriptor.logical_group() == Some(LogicalGroup::BorderWidth) => {
            match specified.as_keyword().and_then(border_width_keyword) {
                Some(px) => CssValue::px(px),
                None => absolutize_lengths(specified, snapshot.font_size_px(), context),
            }
        }
        _ => absolutize_lengths(specified, snapshot.font_size_px(), context),
    }
}

/// `font-size`: keywords, percentages and `em` resolve against the parent's size.
fn compute_font_size(specified: CssValue, context: &ApplyContext<'_>) -> CssValue {
    let parent_px = parent_font_size(context);
    let keyword_px = specified.as_keyword().and_then(|keyword| match keyword {
        "larger" => Some(parent_px * FONT_SCALE_STEP),
        "smaller" => Some(parent_px / FONT_SCALE_STEP),
        absolute => absolute_font_size(absolute),
    });
    if let Some(px) = keyword_px {
        return CssValue::px(px);
    }
    match specified {
        CssValue::Percentage(percentage) => CssValue::px(percentage.of(parent_px)),
        other => absolutize_lengths(other, parent_px, context),
    }
}

/// `font-weight`: keywords become numbers.
fn compute_font_weight(specified: CssValue, context: &ApplyContext<'_>) -> CssValue {
    let weight = match specified.as_keyword() {
        Some("normal") => Some(WEIGHT_NORMAL),
        Some("bold") => Some(WEIGHT_BOLD),
        Some(relative) => relative_weight(relative, parent_weight(context)),
        None => None,
    };
    weight.map_or(specified, |number| CssValue::Number(Number(number)))
}
