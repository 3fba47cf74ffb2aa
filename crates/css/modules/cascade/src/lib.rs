//! CSS Cascading and Inheritance Level 4 — applying cascaded values and reconstructing
//! computed values.
//! Spec: <https://www.w3.org/TR/css-cascade-4/>

#![forbid(unsafe_code)]

mod applicator;
mod computed;
mod computer;
mod snapshot;

pub use applicator::{
    ApplyContext, Application, CascadedValue, DeclaredValue, ValueMode, apply, apply_inherit,
    apply_initial, apply_value,
};
pub use computer::{LayoutBox, ValuePhase, compute};
pub use snapshot::{ComputedStyle, StyleSnapshot, ValueSource};
