//! Ellipse and arc math.
//!
//! Two angle conventions meet here. [`arc_point`] takes the *parametric*
//! angle (`x = cx + rx·cos θ`, `y = cy + ry·sin θ`). Preset definitions
//! measure angles as seen on the stretched ellipse instead; those go through
//! [`visual_to_parametric`] first. For circles the two agree.
//!
//! Angles are degrees, increasing clockwise on screen (y points down).

use glam::{DVec2, dvec2};

use super::defaults::MIN_ARC_RADIUS;
use super::path_builder::PathData;

/// Point on the ellipse at parametric angle `deg`.
pub fn arc_point(cx: f64, cy: f64, rx: f64, ry: f64, deg: f64) -> DVec2 {
    let t = deg.to_radians();
    dvec2(cx + rx * t.cos(), cy + ry * t.sin())
}

/// Parametric angle of the point a ray at `deg` from the centre hits.
///
/// The result stays in the same turn as `deg`, so sweeps computed from
/// converted angles keep their sign and size.
pub fn visual_to_parametric(rx: f64, ry: f64, deg: f64) -> f64 {
    let t = deg.to_radians();
    let p = (rx * t.sin()).atan2(ry * t.cos()).to_degrees();
    p + 360.0 * ((deg - p) / 360.0).round()
}

/// Offset from the centre to the ellipse along the ray at `deg`.
pub fn visual_offset(rx: f64, ry: f64, deg: f64) -> DVec2 {
    arc_point(0.0, 0.0, rx, ry, visual_to_parametric(rx, ry, deg))
}

/// Point on the ellipse along the ray at `deg`.
pub fn visual_point(cx: f64, cy: f64, rx: f64, ry: f64, deg: f64) -> DVec2 {
    dvec2(cx, cy) + visual_offset(rx, ry, deg)
}

/// Radius written into an arc command.
///
/// Zero (or unusable) radii are swapped for a tiny one since some renderers
/// reject `A0,0`.
pub fn guard_radius(r: f64) -> f64 {
    if r.is_finite() && r.abs() >= MIN_ARC_RADIUS {
        r.abs()
    } else {
        crate::log::trace!(radius = r, "substituting minimal arc radius");
        MIN_ARC_RADIUS
    }
}

/// Clockwise sweep from `start` to `end`, in `0..=360`.
///
/// An `end` below `start` wraps by whole turns; an `end` a full turn or more
/// past `start` is a full turn.
pub fn sweep_between(start: f64, end: f64) -> f64 {
    let diff = end - start;
    if diff >= 360.0 {
        360.0
    } else {
        diff.rem_euclid(360.0).min(360.0)
    }
}

/// Arc from `start_deg` to `end_deg` that opens a new subpath (`M` first).
pub fn arc_segment(cx: f64, cy: f64, rx: f64, ry: f64, start_deg: f64, end_deg: f64) -> PathData {
    let from = arc_point(cx, cy, rx, ry, start_deg);
    push_arc(PathData::new().move_to(from), cx, cy, rx, ry, start_deg, end_deg)
}

/// Arc from `start_deg` to `end_deg` that continues the current subpath
/// (`L` to the start point first).
pub fn arc_continuation(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start_deg: f64,
    end_deg: f64,
) -> PathData {
    let from = arc_point(cx, cy, rx, ry, start_deg);
    push_arc(PathData::new().line_to(from), cx, cy, rx, ry, start_deg, end_deg)
}

/// Arc command(s) only; the pen must already sit on the start point.
pub fn arc_onward(
    path: PathData,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start_deg: f64,
    end_deg: f64,
) -> PathData {
    push_arc(path, cx, cy, rx, ry, start_deg, end_deg)
}

/// Closed ellipse from four quarter arcs, starting at 180 degrees.
pub fn ellipse_loop(cx: f64, cy: f64, rx: f64, ry: f64) -> PathData {
    let path = arc_segment(cx, cy, rx, ry, 180.0, 270.0);
    let path = arc_onward(path, cx, cy, rx, ry, 270.0, 360.0);
    let path = arc_onward(path, cx, cy, rx, ry, 0.0, 90.0);
    arc_onward(path, cx, cy, rx, ry, 90.0, 180.0).z()
}

fn push_arc(
    path: PathData,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start_deg: f64,
    end_deg: f64,
) -> PathData {
    let sweep = sweep_between(start_deg, end_deg);
    let (arx, ary) = (guard_radius(rx), guard_radius(ry));

    if sweep >= 360.0 {
        let mid = arc_point(cx, cy, rx, ry, start_deg + 180.0);
        let end = arc_point(cx, cy, rx, ry, start_deg + 360.0);
        return path
            .a(arx, ary, 0.0, false, true, mid.x, mid.y)
            .a(arx, ary, 0.0, false, true, end.x, end.y);
    }

    let to = arc_point(cx, cy, rx, ry, start_deg + sweep);
    path.a(arx, ary, 0.0, sweep > 180.0, true, to.x, to.y)
}
