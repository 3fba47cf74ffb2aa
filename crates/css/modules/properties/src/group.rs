//! Logical property groups and the mapping-logic class of each member.
//! Spec: <https://www.w3.org/TR/css-logical-1/#logical-property-group>

use css_writing_modes::{
    LogicalAxis, LogicalCorner, LogicalSide, PhysicalAxis, PhysicalCorner, PhysicalSide,
};

/// A family of properties that set the same physical slots.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LogicalGroup {
    WritingMode,
    Inset,
    Margin,
    Padding,
    BorderWidth,
    BorderStyle,
    BorderColor,
    VisitedBorderColor,
    BorderRadius,
    Size,
    MinSize,
    MaxSize,
    Overflow,
    OverscrollBehavior,
    ContainIntrinsicSize,
    ScrollStart,
}

impl LogicalGroup {
    pub const COUNT: usize = 16;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// How a group member relates to physical geometry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MappingLogic {
    /// Side or axis mapping along the block/inline axes.
    Axis,
    /// Two-dimensional corner rotation.
    Corner,
    /// Identity with suffix: the member names a fixed slot, no rotation.
    Identity,
}

/// Position of a member inside its group.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LogicalRole {
    Side(LogicalSide),
    Axis(LogicalAxis),
    Corner(LogicalCorner),
    /// Legacy alias of the group's canonical property.
    Alias,
    PhysicalSide(PhysicalSide),
    PhysicalAxis(PhysicalAxis),
    PhysicalCorner(PhysicalCorner),
    /// The property an alias stands for.
    Canonical,
}

impl LogicalRole {
    /// True for roles that need a writing direction to be placed.
    #[inline]
    pub const fn is_logical(self) -> bool {
        matches!(
            self,
            Self::Side(_) | Self::Axis(_) | Self::Corner(_) | Self::Alias
        )
    }
}

/// Membership of a descriptor in a logical property group.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LogicalMember {
    pub group: LogicalGroup,
    pub role: LogicalRole,
    pub logic: MappingLogic,
}

const _: () = assert!(LogicalGroup::ScrollStart.index() + 1 == LogicalGroup::COUNT);
