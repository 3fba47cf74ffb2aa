//! Three-way application of a winning cascaded value onto a style snapshot.
//! Spec: <https://www.w3.org/TR/css-cascade-4/#defaulting-keywords>

use crate::computed::computed_value;
use crate::{StyleSnapshot, ValueSource};
use css_properties::{PropertyDescriptor, PropertyId};
use css_values_units::{CssValue, CssWideKeyword, Viewport};
use log::trace;

/// Whether a cascaded value comes from the regular cascade or an animation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ValueMode {
    #[default]
    Normal,
    Animated,
}

/// A declared value as it left the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum DeclaredValue {
    CssWide(CssWideKeyword),
    Value(CssValue),
}

/// The value that won the cascade for one property.
#[derive(Clone, Debug, PartialEq)]
pub struct CascadedValue {
    pub value: DeclaredValue,
    pub mode: ValueMode,
}

impl CascadedValue {
    #[inline]
    pub const fn normal(value: DeclaredValue) -> Self {
        Self {
            value,
            mode: ValueMode::Normal,
        }
    }

    #[inline]
    pub const fn animated(value: CssValue) -> Self {
        Self {
            value: DeclaredValue::Value(value),
            mode: ValueMode::Animated,
        }
    }
}

/// Environment an element is resolved in.
#[derive(Clone, Copy)]
pub struct ApplyContext<'parent> {
    /// Parent element's finished style; `None` for the root.
    pub parent: Option<&'parent dyn StyleSnapshot>,
    pub root_font_size_px: f32,
    /// Needed for `vw`/`vh`; such lengths stay unresolved without it.
    pub viewport: Option<Viewport>,
}

impl ApplyContext<'_> {
    /// Root element context with no viewport.
    pub const fn root(root_font_size_px: f32) -> Self {
        Self {
            parent: None,
            root_font_size_px,
            viewport: None,
        }
    }
}

/// Which of the three application paths ran.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Application {
    Initial,
    Inherit,
    Value,
    /// The value lost to an animated value, or was an animation on a
    /// non-animatable property.
    Ignored,
}

fn assert_applicable(descriptor: &PropertyDescriptor) {
    assert!(
        !descriptor.is_surrogate(),
        "{} is a logical surrogate and must be resolved before apply",
        descriptor.name()
    );
    assert!(
        !descriptor.is_descriptor_only(),
        "{} is an at-rule descriptor and has no style slot",
        descriptor.name()
    );
}

/// Apply the winning value for `descriptor`, or the default when nothing won.
///
/// # Panics
/// Panics if `descriptor` is a surrogate or descriptor-only entry.
pub fn apply<S: StyleSnapshot + ?Sized>(
    descriptor: &PropertyDescriptor,
    cascaded: Option<&CascadedValue>,
    snapshot: &mut S,
    context: &ApplyContext<'_>,
) -> Application {
    assert_applicable(descriptor);
    let Some(cascaded) = cascaded else {
        if descriptor.is_inherited() && context.parent.is_some() {
            return apply_inherit(descriptor, snapshot, context);
        }
        return apply_initial(descriptor, snapshot);
    };
    match &cascaded.value {
        DeclaredValue::Value(value) => {
            apply_value(descriptor, value.clone(), cascaded.mode, snapshot, context)
        }
        DeclaredValue::CssWide(_) if animation_holds(descriptor, cascaded.mode, snapshot) => {
            Application::Ignored
        }
        DeclaredValue::CssWide(CssWideKeyword::Initial) => apply_initial(descriptor, snapshot),
        DeclaredValue::CssWide(CssWideKeyword::Inherit) => {
            apply_inherit(descriptor, snapshot, context)
        }
        DeclaredValue::CssWide(CssWideKeyword::Unset) => {
            if descriptor.is_inherited() {
                apply_inherit(descriptor, snapshot, context)
            } else {
                apply_initial(descriptor, snapshot)
            }
        }
    }
}

/// Write the initial value. Idempotent.
pub fn apply_initial<S: StyleSnapshot + ?Sized>(
    descriptor: &PropertyDescriptor,
    snapshot: &mut S,
) -> Application {
    assert_applicable(descriptor);
    snapshot.set_value(
        descriptor.id(),
        descriptor.initial_value().to_value(),
        ValueSource::Initial,
    );
    Application::Initial
}

/// Copy the parent's computed value; the root falls back to the initial value.
pub fn apply_inherit<S: StyleSnapshot + ?Sized>(
    descriptor: &PropertyDescriptor,
    snapshot: &mut S,
    context: &ApplyContext<'_>,
) -> Application {
    assert_applicable(descriptor);
    let Some(parent) = context.parent else {
        return apply_initial(descriptor, snapshot);
    };
    snapshot.set_value(
        descriptor.id(),
        parent.value(descriptor.id()).clone(),
        ValueSource::Inherited,
    );
    Application::Inherit
}

/// A normal value never displaces an animated one on an animatable property.
fn animation_holds<S: StyleSnapshot + ?Sized>(
    descriptor: &PropertyDescriptor,
    mode: ValueMode,
    snapshot: &S,
) -> bool {
    mode == ValueMode::Normal
        && descriptor.is_animatable()
        && snapshot.source(descriptor.id()) == ValueSource::Animated
}

/// `color` and its visited counterpart, where `currentcolor` means the inherited color.
fn is_color_property(descriptor: &PropertyDescriptor) -> bool {
    descriptor.id() == PropertyId::Color
        || descriptor.unvisited_property() == Some(PropertyId::Color)
}

/// Compute and write an explicit value.
pub fn apply_value<S: StyleSnapshot + ?Sized>(
    descriptor: &PropertyDescriptor,
    value: CssValue,
    mode: ValueMode,
    snapshot: &mut S,
    context: &ApplyContext<'_>,
) -> Application {
    assert_applicable(descriptor);
    if mode == ValueMode::Animated && !descriptor.is_animatable() {
        trace!("ignoring animated value for {}", descriptor.name());
        return Application::Ignored;
    }
    if animation_holds(descriptor, mode, snapshot) {
        trace!("{} keeps its animated value", descriptor.name());
        return Application::Ignored;
    }
    if is_color_property(descriptor) && value.is_keyword("currentcolor") {
        return apply_inherit(descriptor, snapshot, context);
    }
    let computed = computed_value(descriptor, value, &*snapshot, context);
    let source = match mode {
        ValueMode::Normal => ValueSource::Cascaded,
        ValueMode::Animated => ValueSource::Animated,
    };
    snapshot.set_value(descriptor.id(), computed, source);
    Application::Value
}
