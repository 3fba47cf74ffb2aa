//! CSS Writing Modes Level 4 — §6 Abstract Box Terminology
//! Spec: <https://www.w3.org/TR/css-writing-modes-4/#abstract-box>
//!
//! Flow-relative (logical) sides, axes and corners, and their mapping onto physical ones
//! for every writing mode and inline base direction.

use crate::{TextDirection, WritingMode};

/// A physical box side.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PhysicalSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl PhysicalSide {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Get the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// The axis on which this side is an end.
    #[inline]
    pub const fn axis(self) -> PhysicalAxis {
        match self {
            Self::Top | Self::Bottom => PhysicalAxis::Vertical,
            Self::Right | Self::Left => PhysicalAxis::Horizontal,
        }
    }
}

/// A physical axis: `Horizontal` is x (width), `Vertical` is y (height).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PhysicalAxis {
    Horizontal,
    Vertical,
}

impl PhysicalAxis {
    #[inline]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A physical box corner.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PhysicalCorner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// A flow-relative box side.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LogicalSide {
    BlockStart,
    BlockEnd,
    InlineStart,
    InlineEnd,
}

impl LogicalSide {
    pub const ALL: [Self; 4] = [
        Self::BlockStart,
        Self::BlockEnd,
        Self::InlineStart,
        Self::InlineEnd,
    ];
}

/// A flow-relative axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LogicalAxis {
    /// Block axis (vertical in horizontal writing mode).
    Block,
    /// Inline axis (horizontal in horizontal writing mode).
    Inline,
}

/// A flow-relative corner, named `<block>-<inline>` (`start-end` is block-start/inline-end).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LogicalCorner {
    StartStart,
    StartEnd,
    EndStart,
    EndEnd,
}

impl LogicalCorner {
    pub const ALL: [Self; 4] = [Self::StartStart, Self::StartEnd, Self::EndStart, Self::EndEnd];
}

// Corner tables, indexed by `WritingMode::index`, for ltr. Rtl swaps the inline half.
const START_START: [PhysicalCorner; WritingMode::COUNT] = [
    PhysicalCorner::TopLeft,
    PhysicalCorner::TopRight,
    PhysicalCorner::TopLeft,
    PhysicalCorner::TopRight,
    PhysicalCorner::BottomLeft,
];
const START_END: [PhysicalCorner; WritingMode::COUNT] = [
    PhysicalCorner::TopRight,
    PhysicalCorner::BottomRight,
    PhysicalCorner::BottomLeft,
    PhysicalCorner::BottomRight,
    PhysicalCorner::TopLeft,
];
const END_START: [PhysicalCorner; WritingMode::COUNT] = [
    PhysicalCorner::BottomLeft,
    PhysicalCorner::TopLeft,
    PhysicalCorner::TopRight,
    PhysicalCorner::TopLeft,
    PhysicalCorner::BottomRight,
];
const END_END: [PhysicalCorner; WritingMode::COUNT] = [
    PhysicalCorner::BottomRight,
    PhysicalCorner::BottomLeft,
    PhysicalCorner::BottomRight,
    PhysicalCorner::BottomLeft,
    PhysicalCorner::TopRight,
];

/// Writing mode plus inline base direction: everything needed to map logical terms.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct WritingDirection {
    pub writing_mode: WritingMode,
    pub direction: TextDirection,
}

impl WritingDirection {
    /// `horizontal-tb` / `ltr`.
    pub const HORIZONTAL_LTR: Self = Self::new(WritingMode::HorizontalTb, TextDirection::Ltr);

    #[inline]
    pub const fn new(writing_mode: WritingMode, direction: TextDirection) -> Self {
        Self {
            writing_mode,
            direction,
        }
    }

    /// Every writing mode combined with every direction.
    pub fn all() -> impl Iterator<Item = Self> {
        WritingMode::ALL.into_iter().flat_map(|writing_mode| {
            TextDirection::ALL
                .into_iter()
                .map(move |direction| Self::new(writing_mode, direction))
        })
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        self.writing_mode.is_horizontal()
    }

    /// The side where the block flow starts.
    pub const fn block_start(self) -> PhysicalSide {
        match self.writing_mode {
            WritingMode::HorizontalTb => PhysicalSide::Top,
            WritingMode::VerticalRl | WritingMode::SidewaysRl => PhysicalSide::Right,
            WritingMode::VerticalLr | WritingMode::SidewaysLr => PhysicalSide::Left,
        }
    }

    #[inline]
    pub const fn block_end(self) -> PhysicalSide {
        self.block_start().opposite()
    }

    /// The side where lines start.
    pub const fn inline_start(self) -> PhysicalSide {
        let ltr = self.direction.is_ltr();
        match self.writing_mode {
            WritingMode::HorizontalTb => {
                if ltr {
                    PhysicalSide::Left
                } else {
                    PhysicalSide::Right
                }
            }
            WritingMode::VerticalRl | WritingMode::VerticalLr | WritingMode::SidewaysRl => {
                if ltr {
                    PhysicalSide::Top
                } else {
                    PhysicalSide::Bottom
                }
            }
            WritingMode::SidewaysLr => {
                if ltr {
                    PhysicalSide::Bottom
                } else {
                    PhysicalSide::Top
                }
            }
        }
    }

    #[inline]
    pub const fn inline_end(self) -> PhysicalSide {
        self.inline_start().opposite()
    }

    /// The "over" side of a line box (where ascenders point).
    pub const fn line_over(self) -> PhysicalSide {
        match self.writing_mode {
            WritingMode::HorizontalTb => PhysicalSide::Top,
            WritingMode::VerticalRl | WritingMode::VerticalLr | WritingMode::SidewaysRl => {
                PhysicalSide::Right
            }
            WritingMode::SidewaysLr => PhysicalSide::Left,
        }
    }

    #[inline]
    pub const fn line_under(self) -> PhysicalSide {
        self.line_over().opposite()
    }

    /// Map a logical side to its physical side.
    pub const fn physical_side(self, side: LogicalSide) -> PhysicalSide {
        match side {
            LogicalSide::BlockStart => self.block_start(),
            LogicalSide::BlockEnd => self.block_end(),
            LogicalSide::InlineStart => self.inline_start(),
            LogicalSide::InlineEnd => self.inline_end(),
        }
    }

    /// Map a logical axis to its physical axis.
    pub const fn physical_axis(self, axis: LogicalAxis) -> PhysicalAxis {
        match (axis, self.is_horizontal()) {
            (LogicalAxis::Inline, true) | (LogicalAxis::Block, false) => PhysicalAxis::Horizontal,
            (LogicalAxis::Inline, false) | (LogicalAxis::Block, true) => PhysicalAxis::Vertical,
        }
    }

    /// Map a logical corner to its physical corner.
    pub const fn physical_corner(self, corner: LogicalCorner) -> PhysicalCorner {
        let table = match (corner, self.direction) {
            (LogicalCorner::StartStart, TextDirection::Ltr)
            | (LogicalCorner::StartEnd, TextDirection::Rtl) => &START_START,
            (LogicalCorner::StartEnd, TextDirection::Ltr)
            | (LogicalCorner::StartStart, TextDirection::Rtl) => &START_END,
            (LogicalCorner::EndStart, TextDirection::Ltr)
            | (LogicalCorner::EndEnd, TextDirection::Rtl) => &END_START,
            (LogicalCorner::EndEnd, TextDirection::Ltr)
            | (LogicalCorner::EndStart, TextDirection::Rtl) => &END_END,
        };
        table[self.writing_mode.index()]
    }
}

/// One value per physical side.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PhysicalEdges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> PhysicalEdges<T> {
    /// The same value on all four sides.
    #[inline]
    pub const fn uniform(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    #[inline]
    pub const fn side(&self, side: PhysicalSide) -> T {
        match side {
            PhysicalSide::Top => self.top,
            PhysicalSide::Right => self.right,
            PhysicalSide::Bottom => self.bottom,
            PhysicalSide::Left => self.left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn corner_of(block: PhysicalSide, inline: PhysicalSide) -> Option<PhysicalCorner> {
        match (block, inline) {
            (PhysicalSide::Top, PhysicalSide::Left) | (PhysicalSide::Left, PhysicalSide::Top) => {
                Some(PhysicalCorner::TopLeft)
            }
            (PhysicalSide::Top, PhysicalSide::Right) | (PhysicalSide::Right, PhysicalSide::Top) => {
                Some(PhysicalCorner::TopRight)
            }
            (PhysicalSide::Bottom, PhysicalSide::Right)
            | (PhysicalSide::Right, PhysicalSide::Bottom) => Some(PhysicalCorner::BottomRight),
            (PhysicalSide::Bottom, PhysicalSide::Left)
            | (PhysicalSide::Left, PhysicalSide::Bottom) => Some(PhysicalCorner::BottomLeft),
            _ => None,
        }
    }

    /// # Panics
    /// Panics if any of the canonical side mappings is wrong.
    #[test]
    fn canonical_sides() {
        let horizontal = WritingDirection::HORIZONTAL_LTR;
        assert_eq!(
            horizontal.physical_side(LogicalSide::InlineStart),
            PhysicalSide::Left
        );
        let vertical_rl = WritingDirection::new(WritingMode::VerticalRl, TextDirection::Ltr);
        assert_eq!(
            vertical_rl.physical_side(LogicalSide::BlockStart),
            PhysicalSide::Right
        );
        let horizontal_rtl = WritingDirection::new(WritingMode::HorizontalTb, TextDirection::Rtl);
        assert_eq!(
            horizontal_rtl.physical_side(LogicalSide::InlineStart),
            PhysicalSide::Right
        );
        let sideways_lr = WritingDirection::new(WritingMode::SidewaysLr, TextDirection::Ltr);
        assert_eq!(sideways_lr.inline_start(), PhysicalSide::Bottom);
        assert_eq!(sideways_lr.block_start(), PhysicalSide::Left);
        assert_eq!(sideways_lr.line_over(), PhysicalSide::Left);
        let sideways_rl = WritingDirection::new(WritingMode::SidewaysRl, TextDirection::Rtl);
        assert_eq!(sideways_rl.inline_start(), PhysicalSide::Bottom);
    }

    /// # Panics
    /// Panics if block and inline sides are not perpendicular in some writing direction.
    #[test]
    fn sides_are_a_permutation() {
        for writing_direction in WritingDirection::all() {
            let mut seen: Vec<PhysicalSide> = LogicalSide::ALL
                .into_iter()
                .map(|side| writing_direction.physical_side(side))
                .collect();
            seen.sort_by_key(|side| *side as u8);
            seen.dedup();
            assert_eq!(seen.len(), 4, "{writing_direction:?}");
            assert_ne!(
                writing_direction.block_start().axis(),
                writing_direction.inline_start().axis()
            );
        }
    }

    /// # Panics
    /// Panics if a corner table entry disagrees with its block and inline sides.
    #[test]
    fn corner_tables_match_side_mapping() {
        for writing_direction in WritingDirection::all() {
            for corner in LogicalCorner::ALL {
                let (block, inline) = match corner {
                    LogicalCorner::StartStart => (
                        writing_direction.block_start(),
                        writing_direction.inline_start(),
                    ),
                    LogicalCorner::StartEnd => (
                        writing_direction.block_start(),
                        writing_direction.inline_end(),
                    ),
                    LogicalCorner::EndStart => (
                        writing_direction.block_end(),
                        writing_direction.inline_start(),
                    ),
                    LogicalCorner::EndEnd => (
                        writing_direction.block_end(),
                        writing_direction.inline_end(),
                    ),
                };
                assert_eq!(
                    Some(writing_direction.physical_corner(corner)),
                    corner_of(block, inline),
                    "{writing_direction:?} {corner:?}"
                );
            }
        }
    }

    /// # Panics
    /// Panics if logical axes map to the wrong physical axes.
    #[test]
    fn axes_follow_line_orientation() {
        for writing_direction in WritingDirection::all() {
            let inline = writing_direction.physical_axis(LogicalAxis::Inline);
            let block = writing_direction.physical_axis(LogicalAxis::Block);
            assert_eq!(inline.perpendicular(), block);
            assert_eq!(inline, writing_direction.inline_start().axis());
        }
    }

    /// # Panics
    /// Panics if side lookup on edges is wrong.
    #[test]
    fn edges_lookup() {
        let edges = PhysicalEdges {
            top: 1,
            right: 2,
            bottom: 3,
            left: 4,
        };
        assert_eq!(edges.side(PhysicalSide::Bottom), 3);
        assert_eq!(PhysicalEdges::uniform(7).side(PhysicalSide::Left), 7);
    }

    /// # Panics
    /// Panics if line-over and line-under are not opposite sides.
    #[test]
    fn line_under_opposes_line_over() {
        let sideways_lr = WritingDirection::new(WritingMode::SidewaysLr, TextDirection::Ltr);
        assert_eq!(sideways_lr.line_under(), PhysicalSide::Right);
        assert_eq!(WritingDirection::HORIZONTAL_LTR.line_under(), PhysicalSide::Bottom);
        for writing_direction in WritingDirection::all() {
            assert_eq!(
                writing_direction.line_under().opposite(),
                writing_direction.line_over()
            );
        }
    }
}
