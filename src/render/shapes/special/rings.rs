//! Shapes with holes: donut, frame and the no-smoking sign.

use crate::render::arc::{ellipse_loop, visual_offset, visual_point};
use crate::render::context::ShapeContext;
use crate::render::guides::AdjustmentGuide;
use crate::render::path_builder::PathData;
use crate::render::registry::ShapeRegistry;

use super::super::{holed, register_shapes};

pub(super) fn register(registry: &mut ShapeRegistry) {
    register_shapes!(registry, {
        "donut" => donut,
        "frame" => frame,
        "noSmoking" => no_smoking,
    });
}

const DONUT_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj", 25000.0).up_to(50000.0);
const FRAME_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj1", 12500.0).up_to(50000.0);
const NO_SMOKING_ADJ: AdjustmentGuide = AdjustmentGuide::length("adj", 18750.0).up_to(50000.0);

/// Inner radii after insetting the bounding ellipse by `dr`.
fn inset_radii(ctx: &ShapeContext<'_>, dr: f64) -> (f64, f64) {
    ((ctx.hc() - dr).max(0.0), (ctx.vc() - dr).max(0.0))
}

fn donut(ctx: &ShapeContext<'_>) -> String {
    let (hc, vc) = (ctx.hc(), ctx.vc());
    let (iw, ih) = inset_radii(ctx, ctx.ss() * ctx.guide(&DONUT_ADJ));
    let d = ellipse_loop(hc, vc, hc, vc).append(ellipse_loop(hc, vc, iw, ih));
    holed(ctx, d)
}

/// Box with a rectangular window inset by `adj1` of the short side.
fn frame(ctx: &ShapeContext<'_>) -> String {
    let (w, h) = (ctx.w, ctx.h);
    let x1 = ctx.ss() * ctx.guide(&FRAME_ADJ);
    let (x4, y4) = (w - x1, h - x1);
    let d = PathData::new()
        .m(0.0, 0.0)
        .l(w, 0.0)
        .l(w, h)
        .l(0.0, h)
        .z()
        .m(x1, x1)
        .l(x1, y4)
        .l(x4, y4)
        .l(x4, x1)
        .z();
    holed(ctx, d)
}

/// Ring crossed by a diagonal bar.
///
/// The bar runs along the box diagonal. Each half of the window is a D
/// shape: an inner-ellipse arc whose chord sits half the ring width from
/// the diagonal.
fn no_smoking(ctx: &ShapeContext<'_>) -> String {
    let (hc, vc) = (ctx.hc(), ctx.vc());
    let dr = ctx.ss() * ctx.guide(&NO_SMOKING_ADJ);
    let (iw, ih) = inset_radii(ctx, dr);

    let diagonal = ctx.h.atan2(ctx.w).to_degrees();
    let reach = visual_offset(iw, ih, diagonal).length();
    let half_bar = if reach > 0.0 {
        (dr / 2.0 / reach).min(1.0).asin().to_degrees()
    } else {
        90.0
    };
    let sweep = -180.0 + 2.0 * half_bar;
    let first = diagonal - half_bar;
    let second = first - 180.0;

    let window = |start: f64| {
        PathData::new()
            .move_to(visual_point(hc, vc, iw, ih, start))
            .arc_to(iw, ih, start, sweep)
            .z()
    };
    let d = ellipse_loop(hc, vc, hc, vc)
        .append(window(first))
        .append(window(second));
    holed(ctx, d)
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
    fn donut_rings() {
        let out = donut(&ShapeContext::new(100.0, 100.0));
        let d = path_data(&out);
        assert!(d.starts_with("M0,50 A50,50 0 0,1 50,0 "), "{d}");
        assert!(d.contains(" Z M25,50 A25,25 0 0,1 50,25 "), "{d}");
        assert_eq!(d.matches('A').count(), 8);
        assert!(out.contains("fill-rule='evenodd'"));
    }

    #[test]
    fn donut_thickness_capped_at_radius() {
        let raw = vec![RawGuide::new("adj", "val 80000")];
        let out = donut(&ShapeContext::new(100.0, 100.0).with_guides(&raw));
        // capped at 50%: inner ellipse collapses to the guarded radius
        assert!(out.contains("M50,50 A0.01,0.01 "), "{out}");
    }

    #[test]
    fn frame_window() {
        let out = frame(&ShapeContext::new(200.0, 80.0));
        assert_eq!(
            path_data(&out),
            "M0,0 L200,0 L200,80 L0,80 Z M10,10 L10,70 L190,70 L190,10 Z"
        );
    }

    #[test]
    fn no_smoking_has_two_windows() {
        let out = no_smoking(&ShapeContext::new(100.0, 100.0));
        let d = path_data(&out);
        assert_eq!(d.matches('M').count(), 3, "{d}");
        assert_eq!(d.matches('Z').count(), 3, "{d}");
        assert!(out.contains("fill-rule='evenodd'"));
    }

    fn window_starts(d: &str) -> Vec<(f64, f64)> {
        d.split(" M")
            .skip(1)
            .map(|sub| {
                let head = sub.split(' ').next().unwrap_or_default();
                let (x, y) = head.split_once(',').unwrap_or(("0", "0"));
                (x.parse().unwrap_or(f64::NAN), y.parse().unwrap_or(f64::NAN))
            })
            .collect()
    }

    #[test]
    fn no_smoking_bar_matches_ring_width() {
        // ring width 18.75: each chord sits 9.375 from the diagonal
        let out = no_smoking(&ShapeContext::new(100.0, 100.0));
        for (x, y) in window_starts(path_data(&out)) {
            let off = ((x - 50.0) - (y - 50.0)).abs() / 2f64.sqrt();
            assert!((off - 9.375).abs() < 1e-3, "{x},{y} -> {off}");
        }
    }

    #[test]
    fn no_smoking_windows_are_point_symmetric() {
        let ctx = ShapeContext::new(120.0, 80.0);
        let out = no_smoking(&ctx);
        let starts = window_starts(path_data(&out));
        assert_eq!(starts.len(), 2);
        assert!((starts[0].0 + starts[1].0 - 120.0).abs() < 1e-3, "{starts:?}");
        assert!((starts[0].1 + starts[1].1 - 80.0).abs() < 1e-3, "{starts:?}");
    }
}
