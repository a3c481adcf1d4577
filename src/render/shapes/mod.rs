//! Preset generators, one module per family.
//!
//! Every generator is a plain `fn(&ShapeContext) -> String`: it reads the
//! box and guides from the context, builds a [`GeometryPath`] and renders it
//! with the context's paint. Symbols with interior strokes (dividers, folds,
//! rims) append a second, unfilled element.

mod arrows;
mod ellipse;
mod polygon;
mod rect;
mod rounded;
mod special;
mod star;

use glam::{DVec2, dvec2};

use super::context::ShapeContext;
use super::path_builder::{GeometryPath, PathData};
use super::registry::ShapeRegistry;

/// Register `"name" => generator` pairs.
macro_rules! register_shapes {
    ($registry:expr, { $($name:literal => $generator:path),* $(,)? }) => {
        $(
            $registry.register($name, $generator);
        )*
    };
}
pub(crate) use register_shapes;

/// Every built-in family.
pub(crate) fn register_all(registry: &mut ShapeRegistry) {
    arrows::register(registry);
    ellipse::register(registry);
    polygon::register(registry);
    rect::register(registry);
    rounded::register(registry);
    special::register(registry);
    star::register(registry);
}

/// Polygon element from absolute points.
fn polygon(ctx: &ShapeContext<'_>, points: Vec<DVec2>) -> String {
    GeometryPath::Points(points).render(&ctx.paint)
}

/// Polygon element from coordinates given as fractions of the box.
fn fractional_polygon(ctx: &ShapeContext<'_>, fractions: &[(f64, f64)]) -> String {
    polygon(ctx, scale_fractions(ctx, fractions))
}

fn scale_fractions(ctx: &ShapeContext<'_>, fractions: &[(f64, f64)]) -> Vec<DVec2> {
    fractions
        .iter()
        .map(|&(fx, fy)| dvec2(ctx.w * fx, ctx.h * fy))
        .collect()
}

/// Filled path element.
fn path(ctx: &ShapeContext<'_>, path: PathData) -> String {
    GeometryPath::Commands(path).render(&ctx.paint)
}

/// Filled path whose inner subpaths are holes.
fn holed(ctx: &ShapeContext<'_>, path: PathData) -> String {
    GeometryPath::EvenOdd(path).render(&ctx.paint)
}

/// Unfilled path element for strokes such as arcs, brackets and dividers.
fn stroke(ctx: &ShapeContext<'_>, path: PathData) -> String {
    GeometryPath::Commands(path).render(&ctx.paint.outline())
}

/// Main fragment followed by an unfilled detail stroke.
fn with_detail(ctx: &ShapeContext<'_>, main: String, detail: PathData) -> String {
    main + &stroke(ctx, detail)
}

/// Point-symmetric copy about the box centre, for the mirrored flow-chart
/// variants.
fn rotate_180(ctx: &ShapeContext<'_>, points: Vec<DVec2>) -> Vec<DVec2> {
    let far = dvec2(ctx.w, ctx.h);
    points.into_iter().map(|p| far - p).collect()
}

/// Clockwise sweep between two guide angles; never zero or negative, so a
/// start equal to the end draws the full ellipse.
fn positive_sweep(start: f64, end: f64) -> f64 {
    let sweep = end - start;
    if sweep > 0.0 { sweep } else { sweep + 360.0 }
}
