//! Style orchestrator: parses declaration blocks, runs cascade passes and resolves whole
//! element trees in parallel.
//!
//! Control flow per element: declarations are parsed against the property registry
//! (through the exposure gate), logical declarations are mapped to physical properties
//! once the element's writing direction is known, and the winners are applied onto a
//! fresh `ComputedStyle`. [`computed_value`] reads values back for serialization.

#![forbid(unsafe_code)]

mod cascade_pass;
mod config;
mod declaration_block;
mod engine;
mod serialize;

pub use cascade_pass::{CascadeInput, StyleEnvironment, resolve_style};
pub use config::{StyleConfig, parse_features, parse_viewport};
pub use declaration_block::{Declaration, DeclarationBlock};
pub use engine::{ElementTree, NodeKey, StyleEngine, StyleMap, StyledElement};
pub use serialize::computed_value;

pub use css_cascade::{ComputedStyle, LayoutBox, ValuePhase};
