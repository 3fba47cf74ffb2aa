//! One cascade pass: turn an element's winning declarations into a computed style.
//!
//! Properties are applied by priority. `writing-mode` and `direction` go first so logical
//! declarations can be mapped to physical ones; font properties go next so font-relative
//! lengths see the final font size.

use crate::DeclarationBlock;
use css_cascade::{
    ApplyContext, CascadedValue, ComputedStyle, StyleSnapshot, ValueMode, apply, apply_value,
};
use css_properties::{
    ApplyPriority, PropertyDescriptor, PropertyId, PropertyRegistry, resolve_for,
};
use css_values_units::{CssValue, Viewport};
use css_writing_modes::WritingDirection;
use std::collections::HashMap;

const PRIORITIES: [ApplyPriority; 3] = [
    ApplyPriority::High,
    ApplyPriority::Font,
    ApplyPriority::Normal,
];

/// Document-wide inputs to a pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StyleEnvironment {
    pub root_font_size_px: f32,
    pub viewport: Option<Viewport>,
}

impl Default for StyleEnvironment {
    fn default() -> Self {
        Self {
            root_font_size_px: 16.0,
            viewport: None,
        }
    }
}

/// Everything that won the cascade for one element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CascadeInput {
    pub declarations: DeclarationBlock,
    /// Declarations from `:visited` rules; used only when `is_link`.
    pub visited_declarations: DeclarationBlock,
    /// Current animation values, applied over the cascade.
    pub animations: Vec<(PropertyId, CssValue)>,
    pub is_link: bool,
}

impl CascadeInput {
    #[inline]
    pub fn new(declarations: DeclarationBlock) -> Self {
        Self {
            declarations,
            ..Self::default()
        }
    }
}

/// Winning values by physical property for one priority level.
type Winners = HashMap<PropertyId, CascadedValue>;

/// Collect winners of `priority`. Normal declarations first, then important ones, each
/// in block order so later declarations win.
///
/// Regular declarations also set the visited counterpart, so both reads agree until a
/// `:visited` declaration on a link overrides it.
fn collect_winners(
    input: &CascadeInput,
    priority: ApplyPriority,
    writing_direction: WritingDirection,
) -> Winners {
    let registry = PropertyRegistry::global();
    let mut winners = Winners::new();
    for important in [false, true] {
        for declaration in input
            .declarations
            .iter()
            .filter(|declaration| declaration.important == important)
        {
            let physical = resolve_for(registry.by_id(declaration.property), writing_direction);
            if physical.priority() != priority {
                continue;
            }
            let cascaded = CascadedValue::normal(declaration.value.clone());
            if let Some(visited) = physical.visited_property() {
                winners.insert(visited, cascaded.clone());
            }
            winners.insert(physical.id(), cascaded);
        }
        if !input.is_link {
            continue;
        }
        for declaration in input
            .visited_declarations
            .iter()
            .filter(|declaration| declaration.important == important)
        {
            let physical = resolve_for(registry.by_id(declaration.property), writing_direction);
            if physical.priority() != priority {
                continue;
            }
            if let Some(visited) = physical.visited_property() {
                winners.insert(visited, CascadedValue::normal(declaration.value.clone()));
            }
        }
    }
    winners
}

/// Properties that own a slot: not surrogates, not at-rule descriptors.
fn slot_properties(priority: ApplyPriority) -> impl Iterator<Item = &'static PropertyDescriptor> {
    PropertyRegistry::global().iter().filter(move |descriptor| {
        descriptor.priority() == priority
            && !descriptor.is_surrogate()
            && !descriptor.is_descriptor_only()
    })
}

/// Run one cascade pass for an element.
pub fn resolve_style(
    input: &CascadeInput,
    parent: Option<&ComputedStyle>,
    environment: &StyleEnvironment,
) -> ComputedStyle {
    let context = ApplyContext {
        parent: parent.map(|style| style as &dyn StyleSnapshot),
        root_font_size_px: environment.root_font_size_px,
        viewport: environment.viewport,
    };
    let registry = PropertyRegistry::global();
    let mut style = ComputedStyle::initial();
    for priority in PRIORITIES {
        let writing_direction = style.writing_direction();
        let winners = collect_winners(input, priority, writing_direction);
        for descriptor in slot_properties(priority) {
            apply(descriptor, winners.get(&descriptor.id()), &mut style, &context);
        }
        for (property, value) in &input.animations {
            let physical = resolve_for(registry.by_id(*property), writing_direction);
            if physical.priority() == priority && !physical.is_descriptor_only() {
                apply_value(physical, value.clone(), ValueMode::Animated, &mut style, &context);
            }
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_cascade::ValueSource;
    use css_properties::{ExposureContext, RuntimeFeatures};
    use css_values_units::Number;

    fn block(text: &str) -> DeclarationBlock {
        DeclarationBlock::parse(text, &ExposureContext::author(RuntimeFeatures::empty()))
    }

    /// # Panics
    /// Panics if logical declarations are not mapped with the element's own writing mode.
    #[test]
    fn logical_declarations_follow_element_writing_mode() {
        let input = CascadeInput::new(block(
            "margin-inline-start: 7px; writing-mode: vertical-lr; direction: rtl",
        ));
        let style = resolve_style(&input, None, &StyleEnvironment::default());
        assert_eq!(style.value(PropertyId::MarginBottom).as_px(), Some(7.0));
        assert_eq!(style.value(PropertyId::MarginLeft).as_px(), Some(0.0));
    }

    /// # Panics
    /// Panics if important declarations lose to later normal ones.
    #[test]
    fn important_beats_later_logical_declaration() {
        let input = CascadeInput::new(block(
            "margin-top: 1px !important; margin-block-start: 2px",
        ));
        let style = resolve_style(&input, None, &StyleEnvironment::default());
        assert_eq!(style.value(PropertyId::MarginTop).as_px(), Some(1.0));
    }

    /// # Panics
    /// Panics if `em` lengths do not see the element's final font size.
    #[test]
    fn font_size_applies_before_lengths() {
        let input = CascadeInput::new(block("padding-top: 2em; font-size: 10px"));
        let style = resolve_style(&input, None, &StyleEnvironment::default());
        assert_eq!(style.value(PropertyId::PaddingTop).as_px(), Some(20.0));
    }

    /// # Panics
    /// Panics if animations do not override the cascade.
    #[test]
    fn animations_override() {
        let mut input = CascadeInput::new(block("opacity: 0.5; inset-inline-start: 1px"));
        input.animations = vec![
            (PropertyId::Opacity, CssValue::Number(Number(0.25))),
            (PropertyId::InsetInlineStart, CssValue::px(9.0)),
        ];
        let style = resolve_style(&input, None, &StyleEnvironment::default());
        assert_eq!(style.source(PropertyId::Opacity), ValueSource::Animated);
        assert_eq!(style.value(PropertyId::Left).as_px(), Some(9.0));
    }
}
