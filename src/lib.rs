//! Preset-geometry shape rendering for legacy presentation slides.
//!
//! A [`ShapeDescriptor`] names one of the format's preset shapes (`"roundRect"`,
//! `"rightArrow"`, `"star5"`, ...), gives its bounding box in pixels and may
//! carry adjustment guides that tweak the outline. The engine turns it into a
//! self-contained SVG fragment positioned in the box's local coordinates:
//!
//! ```
//! use presetgeom::{ShapeDescriptor, render_shape};
//!
//! let svg = render_shape(&ShapeDescriptor::new("ellipse", 100.0, 50.0));
//! assert!(svg.starts_with("<ellipse cx='50' cy='25' rx='50' ry='25'"));
//! ```
//!
//! Unknown shape types render as an empty string so a slide with one exotic
//! shape still renders; use [`try_render_shape`] to find out why.

pub mod errors;
mod log;
pub mod render;
pub mod types;

use std::sync::LazyLock;

pub use errors::{GuideError, RenderError};
pub use render::{EngineConfig, ShapeRegistry, StarRatio};
pub use types::{Border, FillMode, RawGuide, ShapeDescriptor};

static REGISTRY: LazyLock<ShapeRegistry> = LazyLock::new(ShapeRegistry::new);

/// The built-in registry with the default configuration.
pub fn registry() -> &'static ShapeRegistry {
    &REGISTRY
}

/// Render one shape with the built-in registry.
///
/// Returns an empty string for unregistered shape types.
pub fn render_shape(descriptor: &ShapeDescriptor) -> String {
    REGISTRY.render(descriptor)
}

/// Render one shape, reporting unregistered shape types as errors.
pub fn try_render_shape(descriptor: &ShapeDescriptor) -> Result<String, RenderError> {
    REGISTRY.try_render(descriptor)
}
