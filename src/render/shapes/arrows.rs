//! Block arrows.
//!
//! `adj1` is the shaft thickness as a fraction of the box side across the
//! shaft; `adj2` is the head length measured against the short side, capped
//! so the head never overruns the box.

use glam::dvec2;

use crate::render::context::{ShapeContext, safe_div};
use crate::render::guides::AdjustmentGuide;
use crate::render::registry::ShapeRegistry;

use super::{polygon, register_shapes};

pub(super) fn register(registry: &mut ShapeRegistry) {
    register_shapes!(registry, {
        "rightArrow" => right_arrow,
        "leftArrow" => left_arrow,
        "upArrow" => up_arrow,
        "downArrow" => down_arrow,
        "leftRightArrow" => left_right_arrow,
        "upDownArrow" => up_down_arrow,
        "notchedRightArrow" => notched_right_arrow,
        "chevron" => chevron,
        "homePlate" => home_plate,
    });
}

const SHAFT: AdjustmentGuide = AdjustmentGuide::length("adj1", 50000.0);
const HEAD: AdjustmentGuide = AdjustmentGuide::length("adj2", 50000.0);
const POINT: AdjustmentGuide = AdjustmentGuide::length("adj", 50000.0);

/// Head length for an arrow pointing along a side of length `along`.
/// Double-headed arrows share that side between two heads.
fn head_length(ctx: &ShapeContext<'_>, along: f64, heads: f64) -> f64 {
    ctx.ss() * ctx.guide(&HEAD.up_to(ctx.max_adj(along) / heads))
}

/// Half the shaft thickness across a side of length `across`.
fn half_shaft(ctx: &ShapeContext<'_>, across: f64) -> f64 {
    across * ctx.guide(&SHAFT) / 2.0
}

fn right_arrow(ctx: &ShapeContext<'_>) -> String {
    let (w, h, vc) = (ctx.w, ctx.h, ctx.vc());
    let x1 = w - head_length(ctx, w, 1.0);
    let dy1 = half_shaft(ctx, h);
    let (y1, y2) = (vc - dy1, vc + dy1);
    polygon(
        ctx,
        vec![
            dvec2(0.0, y1),
            dvec2(x1, y1),
            dvec2(x1, 0.0),
            dvec2(w, vc),
            dvec2(x1, h),
            dvec2(x1, y2),
            dvec2(0.0, y2),
        ],
    )
}

fn left_arrow(ctx: &ShapeContext<'_>) -> String {
    let (w, h, vc) = (ctx.w, ctx.h, ctx.vc());
    let x2 = head_length(ctx, w, 1.0);
    let dy1 = half_shaft(ctx, h);
    let (y1, y2) = (vc - dy1, vc + dy1);
    polygon(
        ctx,
        vec![
            dvec2(0.0, vc),
            dvec2(x2, 0.0),
            dvec2(x2, y1),
            dvec2(w, y1),
            dvec2(w, y2),
            dvec2(x2, y2),
            dvec2(x2, h),
        ],
    )
}

fn up_arrow(ctx: &ShapeContext<'_>) -> String {
    let (w, h, hc) = (ctx.w, ctx.h, ctx.hc());
    let y2 = head_length(ctx, h, 1.0);
    let dx1 = half_shaft(ctx, w);
    let (x1, x2) = (hc - dx1, hc + dx1);
    polygon(
        ctx,
        vec![
            dvec2(0.0, y2),
            dvec2(hc, 0.0),
            dvec2(w, y2),
            dvec2(x2, y2),
            dvec2(x2, h),
            dvec2(x1, h),
            dvec2(x1, y2),
        ],
    )
}

fn down_arrow(ctx: &ShapeContext<'_>) -> String {
    let (w, h, hc) = (ctx.w, ctx.h, ctx.hc());
    let y1 = h - head_length(ctx, h, 1.0);
    let dx1 = half_shaft(ctx, w);
    let (x1, x2) = (hc - dx1, hc + dx1);
    polygon(
        ctx,
        vec![
            dvec2(0.0, y1),
            dvec2(x1, y1),
            dvec2(x1, 0.0),
            dvec2(x2, 0.0),
            dvec2(x2, y1),
            dvec2(w, y1),
            dvec2(hc, h),
        ],
    )
}

fn left_right_arrow(ctx: &ShapeContext<'_>) -> String {
    let (w, h, vc) = (ctx.w, ctx.h, ctx.vc());
    let x2 = head_length(ctx, w, 2.0);
    let x3 = w - x2;
    let dy1 = half_shaft(ctx, h);
    let (y1, y2) = (vc - dy1, vc + dy1);
    polygon(
        ctx,
        vec![
            dvec2(0.0, vc),
            dvec2(x2, 0.0),
            dvec2(x2, y1),
            dvec2(x3, y1),
            dvec2(x3, 0.0),
            dvec2(w, vc),
            dvec2(x3, h),
            dvec2(x3, y2),
            dvec2(x2, y2),
            dvec2(x2, h),
        ],
    )
}

fn up_down_arrow(ctx: &ShapeContext<'_>) -> String {
    let (w, h, hc) = (ctx.w, ctx.h, ctx.hc());
    let y1 = head_length(ctx, h, 2.0);
    let y2 = h - y1;
    let dx1 = half_shaft(ctx, w);
    let (x1, x2) = (hc - dx1, hc + dx1);
    polygon(
        ctx,
        vec![
            dvec2(0.0, y1),
            dvec2(hc, 0.0),
            dvec2(w, y1),
            dvec2(x2, y1),
            dvec2(x2, y2),
            dvec2(w, y2),
            dvec2(hc, h),
            dvec2(0.0, y2),
            dvec2(x1, y2),
            dvec2(x1, y1),
        ],
    )
}

/// Right arrow whose tail has a V notch with the same slope as the head.
fn notched_right_arrow(ctx: &ShapeContext<'_>) -> String {
    let (w, h, vc) = (ctx.w, ctx.h, ctx.vc());
    let dx2 = head_length(ctx, w, 1.0);
    let x2 = w - dx2;
    let dy1 = half_shaft(ctx, h);
    let (y1, y2) = (vc - dy1, vc + dy1);
    let notch = safe_div(dy1 * dx2, vc);
    polygon(
        ctx,
        vec![
            dvec2(0.0, y1),
            dvec2(x2, y1),
            dvec2(x2, 0.0),
            dvec2(w, vc),
            dvec2(x2, h),
            dvec2(x2, y2),
            dvec2(0.0, y2),
            dvec2(notch, vc),
        ],
    )
}

/// Depth of the point for chevron and home plate.
fn point_depth(ctx: &ShapeContext<'_>) -> f64 {
    ctx.ss() * ctx.guide(&POINT.up_to(ctx.max_adj(ctx.w)))
}

fn chevron(ctx: &ShapeContext<'_>) -> String {
    let (w, h, vc) = (ctx.w, ctx.h, ctx.vc());
    let x1 = point_depth(ctx);
    let x2 = w - x1;
    polygon(
        ctx,
        vec![
            dvec2(0.0, 0.0),
            dvec2(x2, 0.0),
            dvec2(w, vc),
            dvec2(x2, h),
            dvec2(0.0, h),
            dvec2(x1, vc),
        ],
    )
}

fn home_plate(ctx: &ShapeContext<'_>) -> String {
    let (w, h, vc) = (ctx.w, ctx.h, ctx.vc());
    let x1 = w - point_depth(ctx);
    polygon(
        ctx,
        vec![
            dvec2(0.0, 0.0),
            dvec2(x1, 0.0),
            dvec2(w, vc),
            dvec2(x1, h),
            dvec2(0.0, h),
        ],
    )
}
