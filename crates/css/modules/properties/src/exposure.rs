//! Exposure gate: whether a property name is visible to a parser context.

use crate::PropertyDescriptor;
use bitflags::bitflags;

bitflags! {
    /// Runtime-enabled platform features that gate experimental properties.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct RuntimeFeatures: u32 {
        const ANCHOR_POSITIONING = 1 << 0;
        const VIEW_TRANSITIONS = 1 << 1;
        const SCROLL_START = 1 << 2;
    }
}

impl RuntimeFeatures {
    /// Map a kebab-case feature name (as used in configuration) to its flag.
    pub fn from_feature_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "anchor-positioning" => Some(Self::ANCHOR_POSITIONING),
            "view-transitions" => Some(Self::VIEW_TRANSITIONS),
            "scroll-start" => Some(Self::SCROLL_START),
            _ => None,
        }
    }
}

/// Which kind of sheet is being parsed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ParserMode {
    /// The user-agent sheet, which may name internal properties.
    UserAgent,
    /// Author and user content.
    #[default]
    Author,
}

/// Everything the gate needs to decide exposure.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ExposureContext {
    pub mode: ParserMode,
    pub features: RuntimeFeatures,
}

impl ExposureContext {
    #[inline]
    pub const fn author(features: RuntimeFeatures) -> Self {
        Self {
            mode: ParserMode::Author,
            features,
        }
    }

    #[inline]
    pub const fn user_agent(features: RuntimeFeatures) -> Self {
        Self {
            mode: ParserMode::UserAgent,
            features,
        }
    }
}

/// Whether `descriptor` is visible in `context`.
///
/// Internal properties are visible to user-agent sheets only; feature-gated properties
/// need their feature enabled. Evaluated per call, nothing is cached.
pub fn is_exposed(descriptor: &PropertyDescriptor, context: &ExposureContext) -> bool {
    if descriptor.is_internal() && context.mode != ParserMode::UserAgent {
        return false;
    }
    descriptor
        .runtime_feature()
        .is_none_or(|feature| context.features.contains(feature))
}
