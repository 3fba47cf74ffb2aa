//! Per-element style storage the applicator writes into.

use css_properties::{PropertyId, PropertyRegistry};
use css_values_units::CssValue;
use css_writing_modes::{TextDirection, WritingDirection, WritingMode};

/// Font size used when the snapshot holds no computed px value.
const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// Where a slot's current value came from.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ValueSource {
    #[default]
    Initial,
    Inherited,
    Cascaded,
    Animated,
}

/// One value slot and one source tag per property.
///
/// A snapshot is owned by whoever resolves its element; it is only shared read-only.
pub trait StyleSnapshot {
    fn value(&self, id: PropertyId) -> &CssValue;

    fn source(&self, id: PropertyId) -> ValueSource;

    /// Overwrite exactly one slot.
    fn set_value(&mut self, id: PropertyId, value: CssValue, source: ValueSource);

    /// Writing direction from the `writing-mode` and `direction` slots.
    fn writing_direction(&self) -> WritingDirection {
        let writing_mode = self
            .value(PropertyId::WritingMode)
            .as_keyword()
            .and_then(WritingMode::from_keyword)
            .unwrap_or_default();
        let direction = self
            .value(PropertyId::Direction)
            .as_keyword()
            .and_then(TextDirection::from_keyword)
            .unwrap_or_default();
        WritingDirection::new(writing_mode, direction)
    }

    /// Computed `font-size` in px.
    fn font_size_px(&self) -> f32 {
        self.value(PropertyId::FontSize)
            .as_px()
            .unwrap_or(DEFAULT_FONT_SIZE_PX)
    }
}

/// Dense computed style: slots indexed by `PropertyId::index`.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    values: Vec<CssValue>,
    sources: Vec<ValueSource>,
}

impl ComputedStyle {
    /// Every slot at its initial value.
    pub fn initial() -> Self {
        let values = PropertyRegistry::global()
            .iter()
            .map(|descriptor| descriptor.initial_value().to_value())
            .collect();
        Self {
            values,
            sources: vec![ValueSource::Initial; PropertyId::COUNT],
        }
    }
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self::initial()
    }
}

impl StyleSnapshot for ComputedStyle {
    #[inline]
    fn value(&self, id: PropertyId) -> &CssValue {
        &self.values[id.index()]
    }

    #[inline]
    fn source(&self, id: PropertyId) -> ValueSource {
        self.sources
            .get(id.index())
            .copied()
            .unwrap_or_default()
    }

    fn set_value(&mut self, id: PropertyId, value: CssValue, source: ValueSource) {
        if let Some(slot) = self.values.get_mut(id.index()) {
            *slot = value;
        }
        if let Some(slot) = self.sources.get_mut(id.index()) {
            *slot = source;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if a fresh style is not fully initial.
    #[test]
    fn initial_style_reads_defaults() {
        let style = ComputedStyle::initial();
        assert_eq!(style.writing_direction(), WritingDirection::HORIZONTAL_LTR);
        assert!((style.font_size_px() - 16.0).abs() < f32::EPSILON);
        assert!(style.value(PropertyId::Display).is_keyword("inline"));
        assert_eq!(style.source(PropertyId::Color), ValueSource::Initial);
    }

    /// # Panics
    /// Panics if writing direction is not read back from its slots.
    #[test]
    fn writing_direction_follows_slots() {
        let mut style = ComputedStyle::initial();
        style.set_value(
            PropertyId::WritingMode,
            CssValue::keyword("sideways-lr"),
            ValueSource::Cascaded,
        );
        style.set_value(
            PropertyId::Direction,
            CssValue::keyword("rtl"),
            ValueSource::Inherited,
        );
        assert_eq!(
            style.writing_direction(),
            WritingDirection::new(WritingMode::SidewaysLr, TextDirection::Rtl)
        );
    }
}
