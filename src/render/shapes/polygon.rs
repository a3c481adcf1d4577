//! Straight-edged presets.
//!
//! Fixed shapes are literal fractions of the box. Regular N-gons sample the
//! inscribed ellipse uniformly starting at 12 o'clock. Slanted shapes read
//! one guide measured against the short side.

use glam::{DVec2, dvec2};

use crate::render::arc::arc_point;
use crate::render::context::ShapeContext;
use crate::render::defaults::FLOWCHART_GRID;
use crate::render::guides::AdjustmentGuide;
use crate::render::registry::ShapeRegistry;

use super::{fractional_polygon, polygon, register_shapes, rotate_180, scale_fractions};

pub(super) fn register(registry: &mut ShapeRegistry) {
    register_shapes!(registry, {
        "triangle" => triangle,
        "flowChartExtract" => flow_chart_extract,
        "flowChartMerge" => flow_chart_merge,
        "rtTriangle" => rt_triangle,
        "diamond" => diamond,
        "flowChartDecision" => diamond,
        "pentagon" => pentagon,
        "hexagon" => hexagon,
        "flowChartPreparation" => flow_chart_preparation,
        "heptagon" => heptagon,
        "octagon" => octagon,
        "decagon" => decagon,
        "dodecagon" => dodecagon,
        "trapezoid" => trapezoid,
        "flowChartManualOperation" => flow_chart_manual_operation,
        "parallelogram" => parallelogram,
        "flowChartInputOutput" => flow_chart_input_output,
        "flowChartManualInput" => flow_chart_manual_input,
        "flowChartOffpageConnector" => flow_chart_offpage_connector,
        "flowChartPunchedCard" => flow_chart_punched_card,
        "plus" => plus,
        "lightningBolt" => lightning_bolt,
    });
}

const TRIANGLE_APEX: AdjustmentGuide = AdjustmentGuide::length("adj", 50000.0);
const HEXAGON_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj", 25000.0);
const TRAPEZOID_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj", 25000.0);
const PARALLELOGRAM_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj", 25000.0);
const PLUS_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj", 25000.0).up_to(50000.0);

/// Apex at `adj` of the width.
fn triangle(ctx: &ShapeContext<'_>) -> String {
    let apex = ctx.w * ctx.guide(&TRIANGLE_APEX);
    polygon(ctx, vec![dvec2(apex, 0.0), dvec2(ctx.w, ctx.h), dvec2(0.0, ctx.h)])
}

fn extract_points(ctx: &ShapeContext<'_>) -> Vec<DVec2> {
    scale_fractions(ctx, &[(0.5, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

fn flow_chart_extract(ctx: &ShapeContext<'_>) -> String {
    polygon(ctx, extract_points(ctx))
}

/// Extract symbol turned upside down.
fn flow_chart_merge(ctx: &ShapeContext<'_>) -> String {
    polygon(ctx, rotate_180(ctx, extract_points(ctx)))
}

fn rt_triangle(ctx: &ShapeContext<'_>) -> String {
    fractional_polygon(ctx, &[(0.0, 1.0), (0.0, 0.0), (1.0, 1.0)])
}

fn diamond(ctx: &ShapeContext<'_>) -> String {
    fractional_polygon(ctx, &[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5)])
}

fn pentagon(ctx: &ShapeContext<'_>) -> String {
    fractional_polygon(
        ctx,
        &[
            (0.5, 0.0),
            (1.0, 0.382),
            (0.809, 1.0),
            (0.191, 1.0),
            (0.0, 0.382),
        ],
    )
}

/// Flat-topped hexagon with side points inset by `inset`.
fn hexagon_points(ctx: &ShapeContext<'_>, inset: f64) -> Vec<DVec2> {
    let (w, h, vc) = (ctx.w, ctx.h, ctx.vc());
    vec![
        dvec2(0.0, vc),
        dvec2(inset, 0.0),
        dvec2(w - inset, 0.0),
        dvec2(w, vc),
        dvec2(w - inset, h),
        dvec2(inset, h),
    ]
}

fn hexagon(ctx: &ShapeContext<'_>) -> String {
    let a = ctx.guide(&HEXAGON_ADJ.up_to(ctx.max_adj(ctx.w) / 2.0));
    polygon(ctx, hexagon_points(ctx, ctx.ss() * a))
}

fn flow_chart_preparation(ctx: &ShapeContext<'_>) -> String {
    polygon(ctx, hexagon_points(ctx, ctx.w / 5.0))
}

/// Regular N-gon inscribed in the box, first vertex at the top.
fn regular_polygon(ctx: &ShapeContext<'_>, sides: u32) -> String {
    let (hc, vc) = (ctx.hc(), ctx.vc());
    let step = 360.0 / f64::from(sides);
    let points = (0..sides)
        .map(|i| arc_point(hc, vc, hc, vc, f64::from(i) * step - 90.0))
        .collect();
    polygon(ctx, points)
}

fn heptagon(ctx: &ShapeContext<'_>) -> String {
    regular_polygon(ctx, 7)
}

fn octagon(ctx: &ShapeContext<'_>) -> String {
    regular_polygon(ctx, 8)
}

fn decagon(ctx: &ShapeContext<'_>) -> String {
    regular_polygon(ctx, 10)
}

fn dodecagon(ctx: &ShapeContext<'_>) -> String {
    regular_polygon(ctx, 12)
}

/// Wide at the bottom, top corners pulled in by `inset`.
fn trapezoid_points(ctx: &ShapeContext<'_>, inset: f64) -> Vec<DVec2> {
    vec![
        dvec2(0.0, ctx.h),
        dvec2(inset, 0.0),
        dvec2(ctx.w - inset, 0.0),
        dvec2(ctx.w, ctx.h),
    ]
}

fn trapezoid(ctx: &ShapeContext<'_>) -> String {
    let a = ctx.guide(&TRAPEZOID_ADJ.up_to(ctx.max_adj(ctx.w) / 2.0));
    polygon(ctx, trapezoid_points(ctx, ctx.ss() * a))
}

/// Trapezoid standing on its short side.
fn flow_chart_manual_operation(ctx: &ShapeContext<'_>) -> String {
    polygon(ctx, rotate_180(ctx, trapezoid_points(ctx, ctx.w / 5.0)))
}

fn parallelogram_points(ctx: &ShapeContext<'_>, slant: f64) -> Vec<DVec2> {
    vec![
        dvec2(0.0, ctx.h),
        dvec2(slant, 0.0),
        dvec2(ctx.w, 0.0),
        dvec2(ctx.w - slant, ctx.h),
    ]
}

fn parallelogram(ctx: &ShapeContext<'_>) -> String {
    let a = ctx.guide(&PARALLELOGRAM_ADJ.up_to(ctx.max_adj(ctx.w)));
    polygon(ctx, parallelogram_points(ctx, ctx.ss() * a))
}

fn flow_chart_input_output(ctx: &ShapeContext<'_>) -> String {
    polygon(ctx, parallelogram_points(ctx, ctx.w / 5.0))
}

fn flow_chart_manual_input(ctx: &ShapeContext<'_>) -> String {
    fractional_polygon(ctx, &[(0.0, 0.2), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

fn flow_chart_offpage_connector(ctx: &ShapeContext<'_>) -> String {
    fractional_polygon(
        ctx,
        &[(0.0, 0.0), (1.0, 0.0), (1.0, 0.8), (0.5, 1.0), (0.0, 0.8)],
    )
}

fn flow_chart_punched_card(ctx: &ShapeContext<'_>) -> String {
    fractional_polygon(
        ctx,
        &[(0.2, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.2)],
    )
}

/// Cross with arms `adj` of the short side thick from each edge.
fn plus(ctx: &ShapeContext<'_>) -> String {
    let (w, h) = (ctx.w, ctx.h);
    let x1 = ctx.ss() * ctx.guide(&PLUS_ADJ);
    let (x2, y2) = (w - x1, h - x1);
    polygon(
        ctx,
        vec![
            dvec2(0.0, x1),
            dvec2(x1, x1),
            dvec2(x1, 0.0),
            dvec2(x2, 0.0),
            dvec2(x2, x1),
            dvec2(w, x1),
            dvec2(w, y2),
            dvec2(x2, y2),
            dvec2(x2, h),
            dvec2(x1, h),
            dvec2(x1, y2),
            dvec2(0.0, y2),
        ],
    )
}

#[rustfmt::skip]
const LIGHTNING_BOLT: [(f64, f64); 11] = [
    (8472.0, 0.0),      (12860.0, 6080.0),  (11050.0, 6797.0),
    (16577.0, 12007.0), (14767.0, 12877.0), (21600.0, 21600.0),
    (10012.0, 14915.0), (12222.0, 13987.0), (5022.0, 9705.0),
    (7602.0, 8382.0),   (0.0, 3890.0),
];

fn lightning_bolt(ctx: &ShapeContext<'_>) -> String {
    let fractions = LIGHTNING_BOLT.map(|(x, y)| (x / FLOWCHART_GRID, y / FLOWCHART_GRID));
    fractional_polygon(ctx, &fractions)
}
