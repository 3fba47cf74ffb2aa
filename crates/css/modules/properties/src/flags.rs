//! Behavioral capability bits carried by every property descriptor.
//!
//! The raw bitset stays inside this crate; callers go through the named predicates on
//! [`crate::PropertyDescriptor`].

use bitflags::bitflags;

bitflags! {
    /// Fixed-width capability set of one property.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct CapabilityFlags: u64 {
        /// Value inherits from the parent when not cascaded.
        const INHERITED = 1 << 0;
        /// Values can be blended by interpolation.
        const INTERPOLABLE = 1 << 1;
        /// Animation values may override the cascaded value.
        const ANIMATABLE = 1 << 2;
        /// Applying the same value twice leaves the same state.
        const IDEMPOTENT = 1 << 3;
        /// Not web exposed; only reachable by id or from user-agent sheets.
        const INTERNAL = 1 << 4;
        /// The `:visited` counterpart of a color property.
        const VISITED = 1 << 5;
        /// Logical property resolved to a physical one before application.
        const SURROGATE = 1 << 6;
        /// Member of a logical property group.
        const IN_LOGICAL_PROPERTY_GROUP = 1 << 7;
        /// Only valid as an at-rule descriptor, never as a style property.
        const DESCRIPTOR_ONLY = 1 << 8;
        /// Longhand of `animation` or `transition`.
        const ANIMATION = 1 << 9;
        /// Changing the value invalidates font selection.
        const AFFECTS_FONT = 1 << 10;
        /// The resolved value reads used box metrics.
        const LAYOUT_DEPENDENT = 1 << 11;

        const VALID_FOR_KEYFRAME = 1 << 16;
        const VALID_FOR_FIRST_LETTER = 1 << 17;
        const VALID_FOR_FIRST_LINE = 1 << 18;
        const VALID_FOR_HIGHLIGHT = 1 << 19;
        const VALID_FOR_PAGE_CONTEXT = 1 << 20;
        const VALID_FOR_POSITION_TRY = 1 << 21;
        const VALID_FOR_PERMISSION_ELEMENT = 1 << 22;
    }
}
