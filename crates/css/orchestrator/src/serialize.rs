//! Serialized computed values by property name, as `getComputedStyle` reports them.
//! Spec: <https://www.w3.org/TR/cssom-1/#dom-window-getcomputedstyle>

use css_cascade::{LayoutBox, StyleSnapshot, ValuePhase, compute};
use css_properties::PropertyRegistry;
use cssparser::ToCss as _;

/// Serialize the value of the property called `name`.
///
/// Returns `None` for unknown, internal and descriptor-only names. Logical names read
/// their physical counterpart under the style's own writing direction.
pub fn computed_value<S: StyleSnapshot + ?Sized>(
    style: &S,
    name: &str,
    layout: Option<&LayoutBox>,
    visited: bool,
    phase: ValuePhase,
) -> Option<String> {
    let descriptor = PropertyRegistry::global().by_name(name)?;
    compute(descriptor, style, layout, visited, phase).map(|value| value.to_css_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CascadeInput, DeclarationBlock, StyleEnvironment, resolve_style};
    use css_properties::{ExposureContext, RuntimeFeatures};

    /// # Panics
    /// Panics if serialization by name disagrees with the cascade.
    #[test]
    fn serializes_by_name() {
        let block = DeclarationBlock::parse(
            "writing-mode: vertical-rl; inset-block-start: 1.5em; color: #ff000080",
            &ExposureContext::author(RuntimeFeatures::empty()),
        );
        let style = resolve_style(&CascadeInput::new(block), None, &StyleEnvironment::default());
        let value = |name: &str| computed_value(&style, name, None, false, ValuePhase::Computed);
        assert_eq!(value("right").as_deref(), Some("24px"));
        assert_eq!(value("INSET-BLOCK-START").as_deref(), Some("24px"));
        assert_eq!(value("top").as_deref(), Some("auto"));
        assert_eq!(value("color").as_deref(), Some("rgba(255, 0, 0, 0.502)"));
        assert_eq!(value("-internal-visited-color"), None);
        assert_eq!(value("font-display"), None);
        assert_eq!(value("no-such-property"), None);
    }
}
