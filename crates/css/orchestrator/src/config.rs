//! Configuration for style resolution.
//!
//! Settings can be loaded from environment variables or constructed programmatically.

use crate::StyleEnvironment;
use css_properties::{ExposureContext, RuntimeFeatures};
use css_values_units::Viewport;
use log::warn;
use std::env;

/// Root font size used when none is configured.
const DEFAULT_ROOT_FONT_SIZE_PX: f32 = 16.0;

/// Runtime configuration for the style engine.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    /// Worker threads for tree resolution; `None` uses one per CPU.
    pub threads: Option<usize>,
    /// Runtime features that expose gated properties to author sheets.
    pub features: RuntimeFeatures,
    /// Font size of the root element's parent, in px.
    pub root_font_size_px: f32,
    /// Viewport for `vw`/`vh`; without one those lengths stay unresolved.
    pub viewport: Option<Viewport>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(None, RuntimeFeatures::empty(), DEFAULT_ROOT_FONT_SIZE_PX, None)
    }
}

impl StyleConfig {
    /// Construct a new `StyleConfig` with explicit values.
    ///
    /// # Arguments
    ///
    /// * `threads` - Worker thread count (minimum 1), or `None` for one per CPU
    /// * `features` - Enabled runtime features
    /// * `root_font_size_px` - Root font size; non-positive values fall back to 16px
    /// * `viewport` - Optional viewport metrics
    #[inline]
    #[must_use]
    pub fn new(
        threads: Option<usize>,
        features: RuntimeFeatures,
        root_font_size_px: f32,
        viewport: Option<Viewport>,
    ) -> Self {
        let root_font_size_px = if root_font_size_px > 0.0 {
            root_font_size_px
        } else {
            DEFAULT_ROOT_FONT_SIZE_PX
        };
        Self {
            threads: threads.map(|count| count.max(1)),
            features,
            root_font_size_px,
            viewport,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `VALOR_STYLE_THREADS`: worker thread count (default: one per CPU)
    /// - `VALOR_CSS_FEATURES`: comma-separated feature names, e.g. `anchor-positioning`
    /// - `VALOR_ROOT_FONT_SIZE`: root font size in px (default: 16)
    /// - `VALOR_VIEWPORT`: viewport as `WIDTHxHEIGHT`, e.g. `1280x720`
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let threads = env::var("VALOR_STYLE_THREADS")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .filter(|count| *count > 0);
        let features = env::var("VALOR_CSS_FEATURES")
            .ok()
            .map_or_else(RuntimeFeatures::empty, |val| parse_features(&val));
        let root_font_size_px = env::var("VALOR_ROOT_FONT_SIZE")
            .ok()
            .and_then(|val| val.parse::<f32>().ok())
            .unwrap_or(DEFAULT_ROOT_FONT_SIZE_PX);
        let viewport = env::var("VALOR_VIEWPORT")
            .ok()
            .and_then(|val| parse_viewport(&val));
        Self::new(threads, features, root_font_size_px, viewport)
    }

    /// Worker threads to build the pool with.
    #[inline]
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    /// Exposure context for author declarations.
    #[inline]
    pub const fn exposure(&self) -> ExposureContext {
        ExposureContext::author(self.features)
    }

    /// Per-element environment for the cascade pass.
    #[inline]
    pub const fn environment(&self) -> StyleEnvironment {
        StyleEnvironment {
            root_font_size_px: self.root_font_size_px,
            viewport: self.viewport,
        }
    }
}

/// Parse a comma-separated feature list. Unknown names are skipped with a warning.
pub fn parse_features(list: &str) -> RuntimeFeatures {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .fold(RuntimeFeatures::empty(), |features, name| {
            RuntimeFeatures::from_feature_name(name).map_or_else(
                || {
                    warn!("unknown css feature {name:?} ignored");
                    features
                },
                |feature| features | feature,
            )
        })
}

/// Parse `WIDTHxHEIGHT`.
pub fn parse_viewport(text: &str) -> Option<Viewport> {
    let (width, height) = text.trim().split_once(['x', 'X'])?;
    Some(Viewport {
        width_px: width.trim().parse().ok()?,
        height_px: height.trim().parse().ok()?,
    })
}
