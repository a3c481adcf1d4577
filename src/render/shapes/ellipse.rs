//! Ellipse family

use crate::render::arc::arc_point;
use crate::render::context::ShapeContext;
use crate::render::path_builder::PathData;
use crate::render::registry::ShapeRegistry;
use crate::render::svg;

use super::{register_shapes, with_detail};

pub(super) fn register(registry: &mut ShapeRegistry) {
    register_shapes!(registry, {
        "ellipse" => ellipse,
        "flowChartConnector" => ellipse,
        "flowChartOr" => flow_chart_or,
        "flowChartSummingJunction" => flow_chart_summing_junction,
    });
}

fn ellipse(ctx: &ShapeContext<'_>) -> String {
    let (hc, vc) = (ctx.hc(), ctx.vc());
    svg::ellipse(hc, vc, hc, vc, &ctx.paint).to_string()
}

/// Ellipse crossed by a vertical and a horizontal diameter.
fn flow_chart_or(ctx: &ShapeContext<'_>) -> String {
    let (hc, vc) = (ctx.hc(), ctx.vc());
    let cross = PathData::new()
        .m(hc, 0.0)
        .l(hc, ctx.h)
        .m(0.0, vc)
        .l(ctx.w, vc);
    with_detail(ctx, ellipse(ctx), cross)
}

/// Ellipse crossed by its two diagonals, which meet the rim at 45 degree
/// offsets.
fn flow_chart_summing_junction(ctx: &ShapeContext<'_>) -> String {
    let (hc, vc) = (ctx.hc(), ctx.vc());
    let rim = |deg: f64| arc_point(hc, vc, hc, vc, deg);
    let cross = PathData::new()
        .move_to(rim(225.0))
        .line_to(rim(45.0))
        .move_to(rim(315.0))
        .line_to(rim(135.0));
    with_detail(ctx, ellipse(ctx), cross)
}
