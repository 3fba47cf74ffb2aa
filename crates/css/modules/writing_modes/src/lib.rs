//! CSS Writing Modes Level 4 — writing modes, inline direction and the mapping between
//! flow-relative and physical box terms.
//! Spec: <https://www.w3.org/TR/css-writing-modes-4/>

#![forbid(unsafe_code)]

pub mod chapter_2_inline_direction;
pub mod chapter_3_block_flow;
pub mod chapter_6_abstract_box;

pub use chapter_2_inline_direction::TextDirection;
pub use chapter_3_block_flow::WritingMode;
pub use chapter_6_abstract_box::{
    LogicalAxis, LogicalCorner, LogicalSide, PhysicalAxis, PhysicalCorner, PhysicalEdges,
    PhysicalSide, WritingDirection,
};
