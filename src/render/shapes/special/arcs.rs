//! Shapes cut from the bounding ellipse by angle guides.
//!
//! All angles here are measured on the stretched ellipse (a 45 degree guide
//! always points at the box corner of a square, and along the same ray on a
//! wide box).

use crate::render::arc::visual_point;
use crate::render::context::ShapeContext;
use crate::render::guides::AdjustmentGuide;
use crate::render::path_builder::PathData;
use crate::render::registry::ShapeRegistry;

use super::super::{path, positive_sweep, register_shapes, stroke};

pub(super) fn register(registry: &mut ShapeRegistry) {
    register_shapes!(registry, {
        "pie" => pie,
        "arc" => arc,
        "chord" => chord,
        "blockArc" => block_arc,
        "circularArrow" => circular_arrow,
    });
}

const PIE_START: AdjustmentGuide = AdjustmentGuide::angle("adj1", 0.0);
const PIE_END: AdjustmentGuide = AdjustmentGuide::angle("adj2", 16_200_000.0);
const ARC_START: AdjustmentGuide = AdjustmentGuide::angle("adj1", 16_200_000.0);
const ARC_END: AdjustmentGuide = AdjustmentGuide::angle("adj2", 0.0);
const CHORD_START: AdjustmentGuide = AdjustmentGuide::angle("adj1", 2_700_000.0);
const CHORD_END: AdjustmentGuide = AdjustmentGuide::angle("adj2", 16_200_000.0);

const BLOCK_START: AdjustmentGuide = AdjustmentGuide::angle("adj1", 10_800_000.0);
const BLOCK_END: AdjustmentGuide = AdjustmentGuide::angle("adj2", 0.0);
const BLOCK_THICKNESS: AdjustmentGuide = AdjustmentGuide::length("adj3", 25000.0).up_to(50000.0);

const ARROW_THICKNESS: AdjustmentGuide = AdjustmentGuide::length("adj1", 12500.0);
const ARROW_HEAD_ANGLE: AdjustmentGuide = AdjustmentGuide::angle("adj2", 1_142_319.0);
const ARROW_END: AdjustmentGuide = AdjustmentGuide::angle("adj3", 20_457_681.0);
const ARROW_START: AdjustmentGuide = AdjustmentGuide::angle("adj4", 10_800_000.0);
const ARROW_HEAD_WIDTH: AdjustmentGuide = AdjustmentGuide::length("adj5", 12500.0).up_to(25000.0);

/// Arc along the bounding ellipse from `start` to `end`, clockwise.
///
/// Shared by pie, chord and arc, which differ only in how they close it.
fn rim_arc(ctx: &ShapeContext<'_>, start: f64, end: f64) -> PathData {
    let (wd2, hd2) = (ctx.hc(), ctx.vc());
    PathData::new()
        .move_to(visual_point(wd2, hd2, wd2, hd2, start))
        .arc_to(wd2, hd2, start, positive_sweep(start, end))
}

fn pie(ctx: &ShapeContext<'_>) -> String {
    let rim = rim_arc(ctx, ctx.guide(&PIE_START), ctx.guide(&PIE_END));
    path(ctx, rim.l(ctx.hc(), ctx.vc()).z())
}

fn chord(ctx: &ShapeContext<'_>) -> String {
    let rim = rim_arc(ctx, ctx.guide(&CHORD_START), ctx.guide(&CHORD_END));
    path(ctx, rim.z())
}

fn arc(ctx: &ShapeContext<'_>) -> String {
    stroke(ctx, rim_arc(ctx, ctx.guide(&ARC_START), ctx.guide(&ARC_END)))
}

/// Thick arc band between two angles.
///
/// The outer boundary runs clockwise from `adj1` to `adj2`; the inner one,
/// inset by `adj3` of the short side, runs back.
fn block_arc(ctx: &ShapeContext<'_>) -> String {
    let (hc, vc) = (ctx.hc(), ctx.vc());
    let start = ctx.guide(&BLOCK_START);
    let end = ctx.guide(&BLOCK_END);
    let sweep = positive_sweep(start, end);
    let dr = ctx.ss() * ctx.guide(&BLOCK_THICKNESS);
    let (iw, ih) = ((hc - dr).max(0.0), (vc - dr).max(0.0));

    let d = PathData::new()
        .move_to(visual_point(hc, vc, hc, vc, start))
        .arc_to(hc, vc, start, sweep)
        .line_to(visual_point(hc, vc, iw, ih, end))
        .arc_to(iw, ih, end, -sweep)
        .z();
    path(ctx, d)
}

/// Curved band ending in an arrowhead.
///
/// The band follows a centreline ellipse inset from the box by the head's
/// half width, so the head's outer barb touches the box. The band runs
/// clockwise from `adj4`; the head occupies the last `adj2` degrees up to
/// the tip at `adj3`.
fn circular_arrow(ctx: &ShapeContext<'_>) -> String {
    let (hc, vc) = (ctx.hc(), ctx.vc());
    let ss = ctx.ss();

    let head_ratio = ctx.guide(&ARROW_HEAD_WIDTH);
    let head = ss * head_ratio;
    let max_thickness = 2.0 * head_ratio * ARROW_THICKNESS.scale;
    let half = ss * ctx.guide(&ARROW_THICKNESS.up_to(max_thickness)) / 2.0;

    let (cw, ch) = ((hc - head).max(0.0), (vc - head).max(0.0));
    let (ow, oh) = (cw + half, ch + half);
    let (iw, ih) = ((cw - half).max(0.0), (ch - half).max(0.0));

    let start = ctx.guide(&ARROW_START);
    let sweep = positive_sweep(start, ctx.guide(&ARROW_END));
    let head_angle = ctx.guide(&ARROW_HEAD_ANGLE).min(sweep);
    let band = sweep - head_angle;
    let neck = start + band;
    let at = |rw: f64, rh: f64, deg: f64| visual_point(hc, vc, rw, rh, deg);

    let d = PathData::new()
        .move_to(at(ow, oh, start))
        .arc_to(ow, oh, start, band)
        .line_to(at(cw + head, ch + head, neck))
        .line_to(at(cw, ch, start + sweep))
        .line_to(at((cw - head).max(0.0), (ch - head).max(0.0), neck))
        .line_to(at(iw, ih, neck))
        .arc_to(iw, ih, neck, -band)
        .z();
    path(ctx, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawGuide;

    #[test]
    fn pie_default_is_three_quarters() {
        let out = pie(&ShapeContext::new(100.0, 100.0));
        assert!(
            out.starts_with("<path d='M100,50 A50,50 0 1,1 50,0 L50,50 Z'"),
            "{out}"
        );
    }

    #[test]
    fn arc_is_unfilled() {
        let out = arc(&ShapeContext::new(100.0, 100.0));
        assert!(out.starts_with("<path d='M50,0 A50,50 0 0,1 100,50' fill='none'"), "{out}");
    }

    #[test]
    fn chord_closes_straight() {
        let out = chord(&ShapeContext::new(100.0, 100.0));
        assert!(out.contains(" Z'"), "{out}");
        assert!(!out.contains(" L"), "{out}");
    }

    #[test]
    fn block_arc_default_is_upper_arch() {
        let out = block_arc(&ShapeContext::new(100.0, 100.0));
        assert_eq!(
            out,
            "<path d='M0,50 A50,50 0 0,1 100,50 L75,50 A25,25 0 0,0 25,50 Z' fill='none' \
             stroke='#000000' stroke-width='1' stroke-dasharray='none' />"
        );
    }

    #[test]
    fn block_arc_on_wide_box_uses_visual_angles() {
        let raw = vec![
            RawGuide::new("adj1", "val 2700000"),
            RawGuide::new("adj2", "val 8100000"),
        ];
        let ctx = ShapeContext::new(200.0, 100.0).with_guides(&raw);
        let out = block_arc(&ctx);
        // 45 degrees on a 100x50 ellipse: x = y = 100*50/sqrt(100^2+50^2)
        assert!(out.starts_with("<path d='M144.721,94.7214 "), "{out}");
    }

    #[test]
    fn circular_arrow_structure() {
        let ctx = ShapeContext::new(100.0, 100.0);
        let out = circular_arrow(&ctx);
        assert!(out.starts_with("<path d='M"));
        let d = out
            .split("d='")
            .nth(1)
            .and_then(|rest| rest.split('\'').next())
            .unwrap_or_default();
        assert_eq!(d.matches('A').count(), 2, "{d}");
        assert_eq!(d.matches('L').count(), 4, "{d}");
    }

    #[test]
    fn circular_arrow_tip_on_centreline() {
        // Tip at 0 degrees (east), head 12.5 wide each side of the centreline.
        let raw = vec![RawGuide::new("adj3", "val 0")];
        let ctx = ShapeContext::new(100.0, 100.0).with_guides(&raw);
        let out = circular_arrow(&ctx);
        assert!(out.contains(" L87.5,50 "), "{out}");
    }

    #[test]
    fn thickness_never_exceeds_head() {
        let raw = vec![
            RawGuide::new("adj1", "val 50000"),
            RawGuide::new("adj5", "val 5000"),
        ];
        let ctx = ShapeContext::new(100.0, 100.0).with_guides(&raw);
        let out = circular_arrow(&ctx);
        // head 5, so the band is at most 10 thick: outer radius 45 + 5
        assert!(out.starts_with("<path d='M0,50 A50,50 "), "{out}");
    }
}
