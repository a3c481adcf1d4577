//! Regular N-point stars.
//!
//! Vertices alternate between the bounding ellipse and an inner ellipse at
//! a uniform angular step, starting straight up. The inner radius comes from
//! the engine's [`StarRatio`](crate::render::context::StarRatio) policy unless
//! the shape carries its own `adj` guide.

use crate::render::arc::arc_point;
use crate::render::context::ShapeContext;
use crate::render::defaults::STAR_ADJ_SCALE;
use crate::render::guides::AdjustmentGuide;
use crate::render::registry::ShapeRegistry;

use super::{polygon, register_shapes};

pub(super) fn register(registry: &mut ShapeRegistry) {
    register_shapes!(registry, {
        "star4" => star4,
        "star5" => star5,
        "star6" => star6,
        "star7" => star7,
        "star8" => star8,
        "star10" => star10,
        "star12" => star12,
        "star16" => star16,
        "star24" => star24,
        "star32" => star32,
    });
}

fn inner_ratio(ctx: &ShapeContext<'_>, points: u32) -> f64 {
    let guide = AdjustmentGuide {
        name: "adj",
        default: ctx.config.star_inner_ratio(points) * STAR_ADJ_SCALE,
        min: 0.0,
        max: STAR_ADJ_SCALE,
        scale: STAR_ADJ_SCALE,
    };
    ctx.guide(&guide)
}

fn star(ctx: &ShapeContext<'_>, points: u32) -> String {
    let (hc, vc) = (ctx.hc(), ctx.vc());
    let ratio = inner_ratio(ctx, points);
    let step = 180.0 / f64::from(points);
    let vertices = (0..2 * points)
        .map(|i| {
            let scale = if i % 2 == 0 { 1.0 } else { ratio };
            arc_point(hc, vc, hc * scale, vc * scale, -90.0 + f64::from(i) * step)
        })
        .collect();
    polygon(ctx, vertices)
}

macro_rules! star_sizes {
    ($($name:ident => $points:literal),* $(,)?) => {
        $(
            fn $name(ctx: &ShapeContext<'_>) -> String {
                star(ctx, $points)
            }
        )*
    };
}

star_sizes! {
    star4 => 4,
    star5 => 5,
    star6 => 6,
    star7 => 7,
    star8 => 8,
    star10 => 10,
    star12 => 12,
    star16 => 16,
    star24 => 24,
    star32 => 32,
}
