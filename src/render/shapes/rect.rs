//! Rectangle and flow-chart family

use glam::dvec2;

use crate::render::context::ShapeContext;
use crate::render::defaults::FLOWCHART_GRID;
use crate::render::guides::AdjustmentGuide;
use crate::render::path_builder::PathData;
use crate::render::registry::ShapeRegistry;

use super::{fractional_polygon, path, polygon, register_shapes, with_detail};

pub(super) fn register(registry: &mut ShapeRegistry) {
    register_shapes!(registry, {
        "rect" => rect,
        "flowChartProcess" => rect,
        "flowChartPredefinedProcess" => flow_chart_predefined_process,
        "flowChartInternalStorage" => flow_chart_internal_storage,
        "flowChartSort" => flow_chart_sort,
        "flowChartCollate" => flow_chart_collate,
        "flowChartTerminator" => flow_chart_terminator,
        "flowChartDelay" => flow_chart_delay,
        "flowChartDocument" => flow_chart_document,
        "can" => can,
        "flowChartMagneticDisk" => flow_chart_magnetic_disk,
        "foldedCorner" => folded_corner,
    });
}

const CAN_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj", 25000.0);
const FOLD_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj", 16667.0).up_to(50000.0);

/// Terminator end caps, on the 21600 grid
const TERMINATOR_CAP: f64 = 3475.0;

fn rect(ctx: &ShapeContext<'_>) -> String {
    fractional_polygon(ctx, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

/// Box with a vertical divider an eighth in from each side.
fn flow_chart_predefined_process(ctx: &ShapeContext<'_>) -> String {
    let (x1, x2) = (ctx.w / 8.0, ctx.w * 7.0 / 8.0);
    let dividers = PathData::new()
        .m(x1, 0.0)
        .l(x1, ctx.h)
        .m(x2, 0.0)
        .l(x2, ctx.h);
    with_detail(ctx, rect(ctx), dividers)
}

fn flow_chart_internal_storage(ctx: &ShapeContext<'_>) -> String {
    let (x1, y1) = (ctx.w / 8.0, ctx.h / 8.0);
    let dividers = PathData::new()
        .m(x1, 0.0)
        .l(x1, ctx.h)
        .m(0.0, y1)
        .l(ctx.w, y1);
    with_detail(ctx, rect(ctx), dividers)
}

/// Decision diamond split by its horizontal diagonal.
fn flow_chart_sort(ctx: &ShapeContext<'_>) -> String {
    let diamond = fractional_polygon(ctx, &[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5)]);
    let split = PathData::new().m(0.0, ctx.vc()).l(ctx.w, ctx.vc());
    with_detail(ctx, diamond, split)
}

/// Two triangles meeting at the centre.
fn flow_chart_collate(ctx: &ShapeContext<'_>) -> String {
    fractional_polygon(ctx, &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)])
}

/// Stadium: straight top and bottom, elliptical caps.
fn flow_chart_terminator(ctx: &ShapeContext<'_>) -> String {
    let rx = ctx.w * TERMINATOR_CAP / FLOWCHART_GRID;
    let ry = ctx.vc();
    let d = PathData::new()
        .m(rx, 0.0)
        .l(ctx.w - rx, 0.0)
        .arc_to(rx, ry, 270.0, 180.0)
        .l(rx, ctx.h)
        .arc_to(rx, ry, 90.0, 180.0)
        .z();
    path(ctx, d)
}

/// D shape: flat left half, half-ellipse on the right.
fn flow_chart_delay(ctx: &ShapeContext<'_>) -> String {
    let (hc, vc) = (ctx.hc(), ctx.vc());
    let d = PathData::new()
        .m(0.0, 0.0)
        .l(hc, 0.0)
        .arc_to(hc, vc, 270.0, 180.0)
        .l(0.0, ctx.h)
        .z();
    path(ctx, d)
}

/// Box whose bottom edge is a wave.
fn flow_chart_document(ctx: &ShapeContext<'_>) -> String {
    let sx = ctx.w / FLOWCHART_GRID;
    let sy = ctx.h / FLOWCHART_GRID;
    let d = PathData::new()
        .m(0.0, 0.0)
        .l(ctx.w, 0.0)
        .l(ctx.w, 17322.0 * sy)
        .c(
            10800.0 * sx,
            17322.0 * sy,
            10800.0 * sx,
            23922.0 * sy,
            0.0,
            20172.0 * sy,
        )
        .z();
    path(ctx, d)
}

/// Cylinder whose end ellipses have vertical radius `ry`.
///
/// The silhouette is filled; the visible front half of the top ellipse is
/// drawn on top as a separate stroke.
fn cylinder(ctx: &ShapeContext<'_>, ry: f64) -> String {
    let (w, wd2) = (ctx.w, ctx.hc());
    let bottom = ctx.h - ry;
    let body = PathData::new()
        .m(0.0, ry)
        .arc_to(wd2, ry, 180.0, 180.0)
        .l(w, bottom)
        .arc_to(wd2, ry, 0.0, 180.0)
        .z();
    let rim = PathData::new().m(w, ry).arc_to(wd2, ry, 0.0, 180.0);
    with_detail(ctx, path(ctx, body), rim)
}

fn can(ctx: &ShapeContext<'_>) -> String {
    let a = ctx.guide(&CAN_ADJ.up_to(ctx.max_adj(ctx.h) / 2.0));
    cylinder(ctx, ctx.ss() * a / 2.0)
}

fn flow_chart_magnetic_disk(ctx: &ShapeContext<'_>) -> String {
    cylinder(ctx, ctx.h / 6.0)
}

/// Sheet with its bottom-right corner folded up.
fn folded_corner(ctx: &ShapeContext<'_>) -> String {
    let (w, h) = (ctx.w, ctx.h);
    let fold = ctx.ss() * ctx.guide(&FOLD_ADJ);
    let lift = fold / 5.0;
    let (x1, y2) = (w - fold, h - fold);
    let sheet = polygon(
        ctx,
        vec![
            dvec2(0.0, 0.0),
            dvec2(w, 0.0),
            dvec2(w, y2),
            dvec2(x1, h),
            dvec2(0.0, h),
        ],
    );
    let flap = PathData::new()
        .m(x1, h)
        .l(x1 + lift, y2 + lift)
        .l(w, y2);
    with_detail(ctx, sheet, flap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawGuide;

    #[test]
    fn predefined_process_dividers() {
        let out = flow_chart_predefined_process(&ShapeContext::new(80.0, 40.0));
        assert!(out.starts_with("<polygon points='0,0 80,0 80,40 0,40'"));
        assert!(out.contains("<path d='M10,0 L10,40 M70,0 L70,40' fill='none'"));
    }

    #[test]
    fn terminator_caps() {
        let out = flow_chart_terminator(&ShapeContext::new(216.0, 60.0));
        assert!(
            out.contains("d='M34.75,0 L181.25,0 A34.75,30 0 0,1 181.25,60 L34.75,60 A34.75,30 0 0,1 34.75,0 Z'"),
            "{out}"
        );
    }

    #[test]
    fn delay_is_half_stadium() {
        let out = flow_chart_delay(&ShapeContext::new(100.0, 50.0));
        assert!(out.contains("d='M0,0 L50,0 A50,25 0 0,1 50,50 L0,50 Z'"), "{out}");
    }

    #[test]
    fn document_wave_scales() {
        let out = flow_chart_document(&ShapeContext::new(21600.0, 21600.0));
        assert!(out.contains("C10800,17322 10800,23922 0,20172 Z"), "{out}");
    }

    #[test]
    fn can_rim_and_body() {
        let out = can(&ShapeContext::new(100.0, 200.0));
        // ss 100, adj 25% -> ellipse 25 tall, ry 12.5
        assert!(
            out.contains("d='M0,12.5 A50,12.5 0 0,1 100,12.5 L100,187.5 A50,12.5 0 0,1 0,187.5 Z'"),
            "{out}"
        );
        assert!(out.contains("d='M100,12.5 A50,12.5 0 0,1 0,12.5' fill='none'"), "{out}");
    }

    #[test]
    fn can_guide_capped_by_height() {
        let raw = vec![RawGuide::new("adj", "val 100000")];
        let ctx = ShapeContext::new(100.0, 40.0).with_guides(&raw);
        // max adj = 50000 * 40 / 40: both ellipses 20 tall, meeting mid-height
        assert!(can(&ctx).contains("A50,10 0 0,1 100,10 L100,30 "), "{}", can(&ctx));
    }

    #[test]
    fn folded_corner_flap() {
        let out = folded_corner(&ShapeContext::new(100.0, 100.0));
        assert!(out.contains("points='0,0 100,0 100,83.333 83.333,100 0,100'"), "{out}");
        assert!(out.contains("d='M83.333,100 L86.6664,86.6664 L100,83.333' fill='none'"), "{out}");
    }
}
