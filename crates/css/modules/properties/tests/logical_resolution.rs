#![cfg(test)]

use css_properties::{
    LogicalGroup, MappingLogic, PropertyDescriptor, PropertyId, PropertyRegistry, resolve,
    resolve_for, same_group_different_logic,
};
use css_writing_modes::{TextDirection, WritingDirection, WritingMode};

fn descriptor(id: PropertyId) -> &'static PropertyDescriptor {
    PropertyRegistry::global().by_id(id)
}

fn resolved(id: PropertyId, direction: TextDirection, writing_mode: WritingMode) -> PropertyId {
    resolve(descriptor(id), direction, writing_mode).id()
}

/// # Panics
/// Panics if a canonical mapping is wrong.
#[test]
fn canonical_mappings() {
    assert_eq!(
        resolved(
            PropertyId::InsetInlineStart,
            TextDirection::Ltr,
            WritingMode::HorizontalTb
        ),
        PropertyId::Left
    );
    assert_eq!(
        resolved(
            PropertyId::InsetBlockStart,
            TextDirection::Ltr,
            WritingMode::VerticalRl
        ),
        PropertyId::Right
    );
    assert_eq!(
        resolved(
            PropertyId::MarginInlineEnd,
            TextDirection::Rtl,
            WritingMode::HorizontalTb
        ),
        PropertyId::MarginLeft
    );
    assert_eq!(
        resolved(
            PropertyId::PaddingInlineStart,
            TextDirection::Ltr,
            WritingMode::SidewaysLr
        ),
        PropertyId::PaddingBottom
    );
}

/// # Panics
/// Panics if logical corners rotate incorrectly.
#[test]
fn corner_mappings() {
    let cases = [
        (
            PropertyId::BorderStartStartRadius,
            TextDirection::Ltr,
            WritingMode::HorizontalTb,
            PropertyId::BorderTopLeftRadius,
        ),
        (
            PropertyId::BorderStartStartRadius,
            TextDirection::Rtl,
            WritingMode::HorizontalTb,
            PropertyId::BorderTopRightRadius,
        ),
        (
            PropertyId::BorderStartEndRadius,
            TextDirection::Ltr,
            WritingMode::VerticalRl,
            PropertyId::BorderBottomRightRadius,
        ),
        (
            PropertyId::BorderEndStartRadius,
            TextDirection::Ltr,
            WritingMode::VerticalLr,
            PropertyId::BorderTopRightRadius,
        ),
        (
            PropertyId::BorderEndEndRadius,
            TextDirection::Ltr,
            WritingMode::SidewaysLr,
            PropertyId::BorderTopRightRadius,
        ),
        (
            PropertyId::BorderEndEndRadius,
            TextDirection::Rtl,
            WritingMode::SidewaysLr,
            PropertyId::BorderBottomRightRadius,
        ),
    ];
    for (logical, direction, writing_mode, physical) in cases {
        assert_eq!(
            resolved(logical, direction, writing_mode),
            physical,
            "{logical:?} {direction:?} {writing_mode:?}"
        );
    }
}

/// # Panics
/// Panics if some surrogate fails to resolve to a non-surrogate member of its own group.
#[test]
fn resolution_is_total() {
    let registry = PropertyRegistry::global();
    for surrogate in registry.iter().filter(|candidate| candidate.is_surrogate()) {
        for writing_direction in WritingDirection::all() {
            let physical = resolve_for(surrogate, writing_direction);
            assert!(
                !physical.is_surrogate(),
                "{} under {writing_direction:?}",
                surrogate.name()
            );
            assert_eq!(physical.logical_group(), surrogate.logical_group());
        }
    }
}

/// # Panics
/// Panics if the four logical sides do not cover the four physical sides.
#[test]
fn logical_sides_form_a_permutation() {
    let logical = [
        PropertyId::MarginBlockStart,
        PropertyId::MarginBlockEnd,
        PropertyId::MarginInlineStart,
        PropertyId::MarginInlineEnd,
    ];
    for writing_direction in WritingDirection::all() {
        let mut targets: Vec<PropertyId> = logical
            .iter()
            .map(|id| resolve_for(descriptor(*id), writing_direction).id())
            .collect();
        targets.sort();
        targets.dedup();
        assert_eq!(targets.len(), 4, "{writing_direction:?}");
    }
}

/// # Panics
/// Panics if a non-surrogate resolves to something else.
#[test]
fn physical_properties_resolve_to_themselves() {
    for writing_direction in WritingDirection::all() {
        for id in [PropertyId::Top, PropertyId::Width, PropertyId::Color] {
            assert_eq!(resolve_for(descriptor(id), writing_direction).id(), id);
        }
    }
}

/// # Panics
/// Panics if mapping-logic comparisons disagree with the group definitions.
#[test]
fn group_logic_consistency() {
    assert!(!same_group_different_logic(
        descriptor(PropertyId::MarginBlockStart),
        descriptor(PropertyId::MarginTop)
    ));
    assert!(same_group_different_logic(
        descriptor(PropertyId::BorderStartStartRadius),
        descriptor(PropertyId::BorderTopLeftRadius)
    ));
    assert!(!same_group_different_logic(
        descriptor(PropertyId::BorderStartStartRadius),
        descriptor(PropertyId::BorderEndEndRadius)
    ));
    // Different groups never conflict.
    assert!(!same_group_different_logic(
        descriptor(PropertyId::BorderStartStartRadius),
        descriptor(PropertyId::MarginTop)
    ));
    assert!(!same_group_different_logic(
        descriptor(PropertyId::Color),
        descriptor(PropertyId::Color)
    ));
}

/// # Panics
/// Panics if the radius group does not mix corner and identity logic.
#[test]
fn radius_group_logic_classes() {
    let registry = PropertyRegistry::global();
    for member in registry.group_members(LogicalGroup::BorderRadius) {
        let logic = member.logical_member().map(|group_member| group_member.logic);
        if member.is_surrogate() {
            assert_eq!(logic, Some(MappingLogic::Corner));
        } else {
            assert_eq!(logic, Some(MappingLogic::Identity));
        }
    }
}
