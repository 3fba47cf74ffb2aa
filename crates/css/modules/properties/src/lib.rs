//! Property registry: per-property capability metadata, logical property groups,
//! direction-aware resolution of logical properties and the exposure gate.
//! Spec: <https://www.w3.org/TR/css-logical-1/>
//!
//! One table is the single source of truth: it generates [`PropertyId`] and the static
//! descriptor array, and [`PropertyRegistry::global`] validates it once.

#![forbid(unsafe_code)]

mod descriptor;
mod exposure;
mod flags;
mod group;
mod registry;
mod resolver;
mod table;

pub use descriptor::{ApplyPriority, AtRule, PropertyDescriptor, RuleContext};
pub use exposure::{ExposureContext, ParserMode, RuntimeFeatures, is_exposed};
pub use group::{LogicalGroup, LogicalMember, LogicalRole, MappingLogic};
pub use registry::PropertyRegistry;
pub use resolver::{resolve, resolve_for, same_group_different_logic};
pub use table::PropertyId;
