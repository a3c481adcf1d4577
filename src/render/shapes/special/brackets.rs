//! Open brackets and braces. All are strokes; none encloses an area.

use crate::render::arc::{arc_continuation, arc_segment};
use crate::render::context::ShapeContext;
use crate::render::guides::AdjustmentGuide;
use crate::render::path_builder::PathData;
use crate::render::registry::ShapeRegistry;

use super::super::{register_shapes, stroke};

pub(super) fn register(registry: &mut ShapeRegistry) {
    register_shapes!(registry, {
        "leftBracket" => left_bracket,
        "rightBracket" => right_bracket,
        "bracketPair" => bracket_pair,
        "leftBrace" => left_brace,
        "rightBrace" => right_brace,
        "bracePair" => brace_pair,
    });
}

const BRACKET_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj", 8333.0);
const BRACKET_PAIR_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj", 16667.0).up_to(50000.0);
const BRACE_CURL: AdjustmentGuide = AdjustmentGuide::length("adj1", 8333.0);
const BRACE_MIDPOINT: AdjustmentGuide = AdjustmentGuide::length("adj2", 50000.0);
const BRACE_PAIR_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj", 8333.0).up_to(25000.0);

/// `[` with corner arcs of horizontal radius `rx` and vertical radius `ry`,
/// its spine on `x`.
fn left_bracket_stroke(x: f64, h: f64, rx: f64, ry: f64) -> PathData {
    arc_segment(x + rx, h - ry, rx, ry, 90.0, 180.0).append(arc_continuation(
        x + rx,
        ry,
        rx,
        ry,
        180.0,
        270.0,
    ))
}

/// `]` whose spine is at `x + rx`.
fn right_bracket_stroke(x: f64, h: f64, rx: f64, ry: f64) -> PathData {
    arc_segment(x, ry, rx, ry, 270.0, 360.0).append(arc_continuation(
        x,
        h - ry,
        rx,
        ry,
        0.0,
        90.0,
    ))
}

fn bracket_depth(ctx: &ShapeContext<'_>) -> f64 {
    ctx.ss() * ctx.guide(&BRACKET_ADJ.up_to(ctx.max_adj(ctx.h) / 2.0))
}

fn left_bracket(ctx: &ShapeContext<'_>) -> String {
    let y1 = bracket_depth(ctx);
    stroke(ctx, left_bracket_stroke(0.0, ctx.h, ctx.w, y1))
}

fn right_bracket(ctx: &ShapeContext<'_>) -> String {
    let y1 = bracket_depth(ctx);
    stroke(ctx, right_bracket_stroke(0.0, ctx.h, ctx.w, y1))
}

/// Both brackets of a `[ ]` pair share one radius.
fn bracket_pair(ctx: &ShapeContext<'_>) -> String {
    let x1 = ctx.ss() * ctx.guide(&BRACKET_PAIR_ADJ);
    let d = left_bracket_stroke(0.0, ctx.h, x1, x1)
        .append(right_bracket_stroke(ctx.w - x1, ctx.h, x1, x1));
    stroke(ctx, d)
}

/// Curl radius and tip height shared by the single braces.
///
/// The curl guide is capped so both curls fit on the shorter side of the
/// tip.
fn brace_metrics(ctx: &ShapeContext<'_>) -> (f64, f64) {
    let mid = ctx.guide(&BRACE_MIDPOINT);
    let room = mid.min(1.0 - mid);
    let curl = BRACE_CURL.up_to(ctx.max_adj(ctx.h) * room / 2.0);
    (ctx.ss() * ctx.guide(&curl), ctx.h * mid)
}

/// `{` drawn from the bottom-right end up to the top-right end.
fn left_brace(ctx: &ShapeContext<'_>) -> String {
    let (w, h, hc) = (ctx.w, ctx.h, ctx.hc());
    let (y1, tip) = brace_metrics(ctx);
    let d = PathData::new()
        .m(w, h)
        .arc_to(hc, y1, 90.0, 90.0)
        .l(hc, tip + y1)
        .arc_to(hc, y1, 0.0, -90.0)
        .arc_to(hc, y1, 90.0, -90.0)
        .l(hc, y1)
        .arc_to(hc, y1, 180.0, 90.0);
    stroke(ctx, d)
}

/// `}` drawn from the top-left end down to the bottom-left end.
fn right_brace(ctx: &ShapeContext<'_>) -> String {
    let (h, hc) = (ctx.h, ctx.hc());
    let (y1, tip) = brace_metrics(ctx);
    let d = PathData::new()
        .m(0.0, 0.0)
        .arc_to(hc, y1, 270.0, 90.0)
        .l(hc, tip - y1)
        .arc_to(hc, y1, 180.0, -90.0)
        .arc_to(hc, y1, 270.0, -90.0)
        .l(hc, h - y1)
        .arc_to(hc, y1, 0.0, 90.0);
    stroke(ctx, d)
}

/// `{ }` with the tips at mid-height and every curl of radius `x1`.
fn brace_pair(ctx: &ShapeContext<'_>) -> String {
    let (w, h, vc) = (ctx.w, ctx.h, ctx.vc());
    let x1 = ctx.ss() * ctx.guide(&BRACE_PAIR_ADJ);
    let (x2, x3, x4) = (2.0 * x1, w - 2.0 * x1, w - x1);
    let (y2, y3, y4) = (vc - x1, vc + x1, h - x1);

    let left = PathData::new()
        .m(x2, h)
        .arc_to(x1, x1, 90.0, 90.0)
        .l(x1, y3)
        .arc_to(x1, x1, 0.0, -90.0)
        .arc_to(x1, x1, 90.0, -90.0)
        .l(x1, x1)
        .arc_to(x1, x1, 180.0, 90.0);
    let right = PathData::new()
        .m(x3, 0.0)
        .arc_to(x1, x1, 270.0, 90.0)
        .l(x4, y2)
        .arc_to(x1, x1, 180.0, -90.0)
        .arc_to(x1, x1, 270.0, -90.0)
        .l(x4, y4)
        .arc_to(x1, x1, 0.0, 90.0);
    stroke(ctx, left.append(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawGuide;

    fn path_data(out: &str) -> &str {
        out.split("d='")
            .nth(1)
            .and_then(|rest| rest.split('\'').next())
            .unwrap_or_default()
    }

    #[test]
    fn left_bracket_outline() {
        let raw = vec![RawGuide::new("adj", "val 10000")];
        let out = left_bracket(&ShapeContext::new(20.0, 100.0).with_guides(&raw));
        assert_eq!(
            path_data(&out),
            "M20,100 A20,2 0 0,1 0,98 L0,2 A20,2 0 0,1 20,0"
        );
        assert!(out.contains("fill='none'"));
    }

    #[test]
    fn right_bracket_mirrors_left() {
        let raw = vec![RawGuide::new("adj", "val 10000")];
        let out = right_bracket(&ShapeContext::new(20.0, 100.0).with_guides(&raw));
        assert_eq!(
            path_data(&out),
            "M0,0 A20,2 0 0,1 20,2 L20,98 A20,2 0 0,1 0,100"
        );
    }

    #[test]
    fn bracket_pair_has_two_strokes() {
        let raw = vec![RawGuide::new("adj", "val 20000")];
        let out = bracket_pair(&ShapeContext::new(120.0, 60.0).with_guides(&raw));
        let d = path_data(&out);
        assert_eq!(d.matches('M').count(), 2, "{d}");
        assert!(d.starts_with("M12,60 A12,12 0 0,1 0,48 L0,12 "), "{d}");
        assert!(d.contains(" M108,0 A12,12 0 0,1 120,12 L120,48 "), "{d}");
    }

    #[test]
    fn left_brace_default() {
        let raw = vec![RawGuide::new("adj1", "val 10000")];
        let out = left_brace(&ShapeContext::new(20.0, 100.0).with_guides(&raw));
        assert_eq!(
            path_data(&out),
            "M20,100 A10,2 0 0,1 10,98 L10,52 A10,2 0 0,0 0,50 \
             A10,2 0 0,0 10,48 L10,2 A10,2 0 0,1 20,0"
        );
    }

    #[test]
    fn right_brace_tip_follows_midpoint() {
        let raw = vec![
            RawGuide::new("adj1", "val 10000"),
            RawGuide::new("adj2", "val 25000"),
        ];
        let out = right_brace(&ShapeContext::new(20.0, 100.0).with_guides(&raw));
        assert!(path_data(&out).contains(" A10,2 0 0,0 20,25 "), "{out}");
    }

    #[test]
    fn brace_pair_tips_at_mid_height() {
        let out = brace_pair(&ShapeContext::new(100.0, 100.0));
        let d = path_data(&out);
        assert_eq!(d.matches('M').count(), 2, "{d}");
        assert!(d.contains(" A8.333,8.333 0 0,0 0,50 "), "{d}");
        assert!(d.contains(" A8.333,8.333 0 0,0 100,50 "), "{d}");
    }
}
