//! Direction-aware resolution of logical (surrogate) properties.
//! Spec: <https://www.w3.org/TR/css-logical-1/#box>

use crate::{PropertyDescriptor, PropertyRegistry};
use css_writing_modes::{TextDirection, WritingDirection, WritingMode};

/// Physical descriptor a property applies to under `direction` and `writing_mode`.
///
/// Non-surrogates resolve to themselves.
#[inline]
pub fn resolve(
    descriptor: &'static PropertyDescriptor,
    direction: TextDirection,
    writing_mode: WritingMode,
) -> &'static PropertyDescriptor {
    resolve_for(descriptor, WritingDirection::new(writing_mode, direction))
}

/// [`resolve`] taking a combined writing direction.
///
/// # Panics
/// Panics if a surrogate has no physical target; the registry checks this when built.
pub fn resolve_for(
    descriptor: &'static PropertyDescriptor,
    writing_direction: WritingDirection,
) -> &'static PropertyDescriptor {
    if !descriptor.is_surrogate() {
        return descriptor;
    }
    let physical = descriptor
        .logical_member()
        .and_then(|member| PropertyRegistry::global().physical_member(member, writing_direction));
    assert!(
        physical.is_some(),
        "{} has no physical target for {writing_direction:?}",
        descriptor.name()
    );
    physical.unwrap_or(descriptor)
}

/// True iff both properties belong to the same logical group but use different mapping
/// logic, so one cannot stand in for the other.
pub fn same_group_different_logic(
    first: &PropertyDescriptor,
    second: &PropertyDescriptor,
) -> bool {
    match (first.logical_member(), second.logical_member()) {
        (Some(first_member), Some(second_member)) => {
            first_member.group == second_member.group && first_member.logic != second_member.logic
        }
        _ => false,
    }
}
