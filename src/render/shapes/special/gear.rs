//! Gears: a toothed rim sampled around the ellipse, with a round axle hole.

use crate::render::arc::{arc_point, ellipse_loop};
use crate::render::context::ShapeContext;
use crate::render::guides::AdjustmentGuide;
use crate::render::path_builder::PathData;
use crate::render::registry::ShapeRegistry;

use super::super::{holed, register_shapes};

pub(super) fn register(registry: &mut ShapeRegistry) {
    register_shapes!(registry, {
        "gear6" => gear6,
        "gear9" => gear9,
    });
}

const GEAR6_DEPTH: AdjustmentGuide = AdjustmentGuide::length("adj1", 15000.0).up_to(20000.0);
const GEAR9_DEPTH: AdjustmentGuide = AdjustmentGuide::length("adj1", 10000.0).up_to(20000.0);

/// Axle hole radius relative to the root circle
const HOLE_RATIO: f64 = 0.4;

#[derive(Clone, Copy)]
enum Ring {
    Root,
    Flank,
    Tip,
}

/// One tooth, as offsets in tooth pitches from its centre line. The next
/// tooth opens at +0.5, which closes the valley.
const TOOTH: [(f64, Ring); 5] = [
    (-0.5, Ring::Root),
    (-0.25, Ring::Flank),
    (-0.125, Ring::Tip),
    (0.125, Ring::Tip),
    (0.25, Ring::Flank),
];

fn gear(ctx: &ShapeContext<'_>, teeth: u32, depth: &AdjustmentGuide) -> String {
    let (hc, vc) = (ctx.hc(), ctx.vc());
    let depth = ctx.ss() * ctx.guide(depth);
    let root = ((hc - depth).max(0.0), (vc - depth).max(0.0));
    let flank = ((hc + root.0) / 2.0, (vc + root.1) / 2.0);
    let pitch = 360.0 / f64::from(teeth);

    let mut d = PathData::new();
    for i in 0..teeth {
        let centre = -90.0 + f64::from(i) * pitch;
        for &(offset, ring) in &TOOTH {
            let (rx, ry) = match ring {
                Ring::Root => root,
                Ring::Flank => flank,
                Ring::Tip => (hc, vc),
            };
            let p = arc_point(hc, vc, rx, ry, centre + offset * pitch);
            d = if d.is_empty() { d.move_to(p) } else { d.line_to(p) };
        }
    }

    let hole = HOLE_RATIO * root.0.min(root.1);
    holed(ctx, d.z().append(ellipse_loop(hc, vc, hole, hole)))
}

fn gear6(ctx: &ShapeContext<'_>) -> String {
    gear(ctx, 6, &GEAR6_DEPTH)
}

fn gear9(ctx: &ShapeContext<'_>) -> String {
    gear(ctx, 9, &GEAR9_DEPTH)
}
