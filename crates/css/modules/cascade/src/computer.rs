//! Computed and resolved value reconstruction (the `getComputedStyle` path).
//! Spec: <https://www.w3.org/TR/cssom-1/#resolved-values>

use crate::StyleSnapshot;
use css_properties::{
    LogicalGroup, LogicalMember, LogicalRole, MappingLogic, PropertyDescriptor, PropertyId,
    PropertyRegistry, resolve_for,
};
use css_values_units::CssValue;
use css_writing_modes::{PhysicalAxis, PhysicalEdges};

/// Which value a caller wants back.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ValuePhase {
    #[default]
    Computed,
    /// Computed value, with used values substituted for layout-dependent properties.
    Resolved,
}

/// Box metrics from layout, in px.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LayoutBox {
    pub content_width: f32,
    pub content_height: f32,
    pub margin: PhysicalEdges<f32>,
    pub padding: PhysicalEdges<f32>,
    pub inset: PhysicalEdges<f32>,
}

impl LayoutBox {
    /// Used value of a physical layout-dependent property, if layout knows it.
    pub fn used_px(&self, descriptor: &PropertyDescriptor) -> Option<f32> {
        let member = descriptor.logical_member()?;
        match (member.group, member.role) {
            (LogicalGroup::Size, LogicalRole::PhysicalAxis(PhysicalAxis::Horizontal)) => {
                Some(self.content_width)
            }
            (LogicalGroup::Size, LogicalRole::PhysicalAxis(PhysicalAxis::Vertical)) => {
                Some(self.content_height)
            }
            (LogicalGroup::Margin, LogicalRole::PhysicalSide(side)) => Some(self.margin.side(side)),
            (LogicalGroup::Padding, LogicalRole::PhysicalSide(side)) => {
                Some(self.padding.side(side))
            }
            (LogicalGroup::Inset, LogicalRole::PhysicalSide(side)) => Some(self.inset.side(side)),
            _ => None,
        }
    }
}

/// Border width computes to zero when the same side's style is `none` or `hidden`.
fn border_width_suppressed<S: StyleSnapshot + ?Sized>(
    descriptor: &PropertyDescriptor,
    snapshot: &S,
) -> bool {
    let Some(member) = descriptor.logical_member() else {
        return false;
    };
    if member.group != LogicalGroup::BorderWidth {
        return false;
    }
    let style_member = LogicalMember {
        group: LogicalGroup::BorderStyle,
        role: member.role,
        logic: MappingLogic::Axis,
    };
    PropertyRegistry::global()
        .physical_member(style_member, snapshot.writing_direction())
        .is_some_and(|style| {
            let value = snapshot.value(style.id());
            value.is_keyword("none") || value.is_keyword("hidden")
        })
}

/// Reconstruct the value of `descriptor` for serialization.
///
/// Logical properties read their physical counterpart under the snapshot's writing
/// direction. `visited` reads the `:visited` companion where one exists. `layout` is
/// consulted only for layout-dependent properties in the resolved phase.
///
/// Returns `None` for internal and descriptor-only entries.
pub fn compute<S: StyleSnapshot + ?Sized>(
    descriptor: &'static PropertyDescriptor,
    snapshot: &S,
    layout: Option<&LayoutBox>,
    visited: bool,
    phase: ValuePhase,
) -> Option<CssValue> {
    if !descriptor.is_computable() {
        return None;
    }
    let registry = PropertyRegistry::global();
    let physical = resolve_for(descriptor, snapshot.writing_direction());
    let target = match physical.visited_property() {
        Some(visited_id) if visited => registry.by_id(visited_id),
        _ => physical,
    };

    if border_width_suppressed(physical, snapshot) {
        return Some(CssValue::px(0.0));
    }
    if phase == ValuePhase::Computed {
        return Some(snapshot.value(target.id()).clone());
    }

    if physical.is_layout_dependent()
        && let Some(used) = layout.and_then(|layout_box| layout_box.used_px(physical))
    {
        return Some(CssValue::px(used));
    }
    let value = snapshot.value(target.id());
    if value.is_keyword("currentcolor") {
        let color = if visited {
            PropertyId::InternalVisitedColor
        } else {
            PropertyId::Color
        };
        return Some(snapshot.value(color).clone());
    }
    Some(value.clone())
}
