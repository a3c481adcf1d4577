//! Path data builder.
//!
//! Generators describe outlines with a fluent builder that tracks the current
//! point:
//!
//! ```ignore
//! let d = PathData::new()
//!     .m(12.5, 0.0)
//!     .l(87.5, 0.0)
//!     .a(12.5, 12.5, 0.0, false, true, 100.0, 12.5)
//!     .z();
//! assert_eq!(d.to_string(), "M12.5,0 L87.5,0 A12.5,12.5 0 0,1 100,12.5 Z");
//! ```
//!
//! [`PathData::arc_to`] adds the presentation format's offset-continuation
//! arc: the ellipse is placed so that the current point sits at the start
//! angle, which is how every preset definition chains its curves.

use std::fmt;

use glam::{DVec2, dvec2};

use super::arc::{guard_radius, visual_offset};
use super::fill::Paint;
use super::svg::{Element, fmt_num, fmt_points};

/// A single path command in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    CubicTo {
        c1: DVec2,
        c2: DVec2,
        to: DVec2,
    },
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pt = |p: &DVec2| format!("{},{}", fmt_num(p.x), fmt_num(p.y));
        match self {
            PathCommand::MoveTo(p) => write!(f, "M{}", pt(p)),
            PathCommand::LineTo(p) => write!(f, "L{}", pt(p)),
            PathCommand::Arc {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "A{},{} {} {},{} {}",
                fmt_num(*rx),
                fmt_num(*ry),
                fmt_num(*rotation),
                u8::from(*large_arc),
                u8::from(*sweep),
                pt(to)
            ),
            PathCommand::CubicTo { c1, c2, to } => {
                write!(f, "C{} {} {}", pt(c1), pt(c2), pt(to))
            }
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// Ordered path commands plus the pen position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
    current: DVec2,
    subpath_start: DVec2,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        let p = dvec2(x, y);
        self.commands.push(PathCommand::MoveTo(p));
        self.current = p;
        self.subpath_start = p;
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        let p = dvec2(x, y);
        self.commands.push(PathCommand::LineTo(p));
        self.current = p;
        self
    }

    /// Elliptical arc to `(x, y)`, SVG parameter order.
    #[allow(clippy::too_many_arguments)]
    pub fn a(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        let to = dvec2(x, y);
        self.commands.push(PathCommand::Arc {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            to,
        });
        self.current = to;
        self
    }

    /// Cubic Bézier to `(x, y)`.
    pub fn c(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        let to = dvec2(x, y);
        self.commands.push(PathCommand::CubicTo {
            c1: dvec2(x1, y1),
            c2: dvec2(x2, y2),
            to,
        });
        self.current = to;
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self.current = self.subpath_start;
        self
    }

    /// Move to a point.
    pub fn move_to(self, p: DVec2) -> Self {
        self.m(p.x, p.y)
    }

    /// Line to a point.
    pub fn line_to(self, p: DVec2) -> Self {
        self.l(p.x, p.y)
    }

    /// Offset-continuation arc.
    ///
    /// The ellipse with radii `wr`/`hr` is positioned so the current point
    /// lies on it at `st_ang`; the pen then travels `sw_ang` degrees
    /// (positive is clockwise on screen). Both angles are measured as seen on
    /// the stretched ellipse. Sweeps of a full turn or more are emitted as two
    /// half turns.
    pub fn arc_to(self, wr: f64, hr: f64, st_ang: f64, sw_ang: f64) -> Self {
        if !(st_ang.is_finite() && sw_ang.is_finite()) {
            return self;
        }
        if sw_ang.abs() >= 360.0 {
            let half = sw_ang.clamp(-360.0, 360.0) / 2.0;
            return self
                .arc_to(wr, hr, st_ang, half)
                .arc_to(wr, hr, st_ang + half, half);
        }

        let center = self.current - visual_offset(wr, hr, st_ang);
        let end = center + visual_offset(wr, hr, st_ang + sw_ang);
        self.a(
            guard_radius(wr),
            guard_radius(hr),
            0.0,
            sw_ang.abs() > 180.0,
            sw_ang > 0.0,
            end.x,
            end.y,
        )
    }

    /// Append another path's commands; the pen moves to its end.
    pub fn append(mut self, other: PathData) -> Self {
        if !other.commands.is_empty() {
            self.commands.extend(other.commands);
            self.current = other.current;
            self.subpath_start = other.subpath_start;
        }
        self
    }

    pub fn current_point(&self) -> DVec2 {
        self.current
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

/// Outline of one shape before it becomes markup.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryPath {
    /// Move/line/arc/close commands
    Commands(PathData),
    /// Commands whose inner subpaths cut holes (`fill-rule='evenodd'`)
    EvenOdd(PathData),
    /// Straight-edged polygon
    Points(Vec<DVec2>),
}

impl GeometryPath {
    pub fn element(&self, paint: &Paint) -> Element {
        match self {
            GeometryPath::Commands(path) => Element::new("path")
                .add("d", &path.to_string())
                .paint(paint),
            GeometryPath::EvenOdd(path) => Element::new("path")
                .add("d", &path.to_string())
                .add("fill-rule", "evenodd")
                .paint(paint),
            GeometryPath::Points(points) => Element::new("polygon")
                .add("points", &fmt_points(points))
                .paint(paint),
        }
    }

    /// The finished markup fragment.
    pub fn render(&self, paint: &Paint) -> String {
        self.element(paint).to_string()
    }
}

impl From<PathData> for GeometryPath {
    fn from(path: PathData) -> Self {
        GeometryPath::Commands(path)
    }
}

impl From<Vec<DVec2>> for GeometryPath {
    fn from(points: Vec<DVec2>) -> Self {
        GeometryPath::Points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn builder_serializes() {
        let d = PathData::new()
            .m(12.5, 0.0)
            .l(87.5, 0.0)
            .a(12.5, 12.5, 0.0, false, true, 100.0, 12.5)
            .z();
        assert_eq!(d.to_string(), "M12.5,0 L87.5,0 A12.5,12.5 0 0,1 100,12.5 Z");
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn cubic_serializes() {
        let d = PathData::new().m(0.0, 0.0).c(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(d.to_string(), "M0,0 C1,2 3,4 5,6");
        assert_eq!(d.current_point(), dvec2(5.0, 6.0));
    }

    #[test]
    fn close_returns_to_subpath_start() {
        let d = PathData::new().m(1.0, 1.0).l(5.0, 1.0).z();
        assert_eq!(d.current_point(), dvec2(1.0, 1.0));
    }

    #[test]
    fn arc_to_quarter_circle() {
        // Top-left corner of a rounded box: from (0,10) sweep 90 from 180.
        let d = PathData::new().m(0.0, 10.0).arc_to(10.0, 10.0, 180.0, 90.0);
        assert!(close(d.current_point(), dvec2(10.0, 0.0)));
        assert_eq!(d.to_string(), "M0,10 A10,10 0 0,1 10,0");
    }

    #[test]
    fn arc_to_negative_sweep_flips_flag() {
        let d = PathData::new().m(10.0, 0.0).arc_to(10.0, 10.0, 270.0, -90.0);
        assert!(close(d.current_point(), dvec2(0.0, 10.0)));
        assert!(d.to_string().ends_with("0 0,0 0,10"));
    }

    #[test]
    fn arc_to_full_turn_splits() {
        let d = PathData::new().m(20.0, 10.0).arc_to(10.0, 5.0, 0.0, 360.0);
        assert_eq!(d.len(), 3);
        assert!(close(d.current_point(), dvec2(20.0, 10.0)));
    }

    #[test]
    fn arc_to_uses_ellipse_angles() {
        // 45 degrees on a 20x10 ellipse lands on the diagonal through the centre.
        let d = PathData::new().m(20.0, 0.0).arc_to(20.0, 10.0, 0.0, 45.0);
        let p = d.current_point();
        assert!((p.x - p.y).abs() < 1e-9, "{p:?}");
    }

    #[test]
    fn append_moves_pen() {
        let a = PathData::new().m(0.0, 0.0).l(1.0, 0.0);
        let b = PathData::new().m(5.0, 5.0).l(6.0, 5.0);
        let d = a.append(b);
        assert_eq!(d.current_point(), dvec2(6.0, 5.0));
        assert_eq!(d.to_string(), "M0,0 L1,0 M5,5 L6,5");
    }

    #[test]
    fn geometry_elements() {
        let paint = Paint::default();
        let poly = GeometryPath::from(vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(0.0, 1.0)]);
        assert!(poly.render(&paint).starts_with("<polygon points='0,0 1,0 0,1' fill='none'"));
        let holed = GeometryPath::EvenOdd(PathData::new().m(0.0, 0.0).z());
        assert!(holed.render(&paint).contains("fill-rule='evenodd'"));
    }
}
