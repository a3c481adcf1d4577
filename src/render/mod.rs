//! Preset-geometry rendering.
//!
//! This module is organized into submodules:
//! - `defaults`: format constants and fallback styling
//! - `guides`: adjustment-guide parsing and clamping
//! - `context`: per-shape [`ShapeContext`] and engine-wide [`EngineConfig`]
//! - `arc`: ellipse points and arc fragments
//! - `path_builder`: path commands and the geometry enum
//! - `round_rect`: the shared corner-treatment builder
//! - `fill`: fill and stroke attribute resolution
//! - `svg`: number formatting, escaping and element serialization
//! - `registry`: shape-type lookup over the built-in generator families

pub mod arc;
pub mod context;
pub mod defaults;
pub mod fill;
pub mod guides;
pub mod path_builder;
pub mod registry;
pub mod round_rect;
mod shapes;
pub mod svg;

pub use context::{EngineConfig, ShapeContext, StarRatio};
pub use fill::Paint;
pub use guides::AdjustmentGuide;
pub use path_builder::{GeometryPath, PathCommand, PathData};
pub use registry::{GeneratorFn, ShapeRegistry};
