//! Rectangles with rounded or snipped corners.
//!
//! Eight presets differ only in which corners are treated and how, so they
//! all come through [`build`]. The outline runs clockwise from the end of the
//! top-left corner; corners with a zero inset emit nothing.

use glam::{DVec2, dvec2};

use super::guides::clamp_guide;
use super::path_builder::PathData;

/// What happens at a treated corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerTreatment {
    /// Quarter-ellipse arc
    Round,
    /// Straight chamfer
    Snip,
}

impl CornerTreatment {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "round" => Some(CornerTreatment::Round),
            "snip" => Some(CornerTreatment::Snip),
            _ => None,
        }
    }
}

/// Which corners are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerSet {
    /// All four, inset from `adj_x`
    All,
    /// Top-left only
    One,
    /// Top pair from `adj_x`, bottom pair from `adj_y`
    TwoSame,
    /// Top-left and bottom-right from `adj_x`, the other two from `adj_y`
    Diagonal,
}

impl CornerSet {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cornrAll" => Some(CornerSet::All),
            "cornr1" => Some(CornerSet::One),
            "cornr2" => Some(CornerSet::TwoSame),
            "diag" => Some(CornerSet::Diagonal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Corner {
    inset: f64,
    treatment: CornerTreatment,
}

/// Corner inset for a ratio: `min(w, h) * clamp(adj, 0, 0.5)`.
pub fn corner_inset(w: f64, h: f64, adj: f64) -> f64 {
    w.min(h).max(0.0) * clamp_guide(adj, 0.0, 0.5)
}

/// Outline of a `w` x `h` rectangle with the selected corners treated.
pub fn build(
    w: f64,
    h: f64,
    adj_x: f64,
    adj_y: f64,
    treatment: CornerTreatment,
    corners: CornerSet,
) -> PathData {
    let x = corner_inset(w, h, adj_x);
    let y = corner_inset(w, h, adj_y);
    // top-left, top-right, bottom-right, bottom-left
    let insets = match corners {
        CornerSet::All => [x, x, x, x],
        CornerSet::One => [x, 0.0, 0.0, 0.0],
        CornerSet::TwoSame => [x, x, y, y],
        CornerSet::Diagonal => [x, y, x, y],
    };
    outline(w, h, insets.map(|inset| Corner { inset, treatment }))
}

/// Snip-round rectangle: top-left rounded by `adj_round`, top-right snipped
/// by `adj_snip`.
pub fn build_snip_round(w: f64, h: f64, adj_round: f64, adj_snip: f64) -> PathData {
    let round = Corner {
        inset: corner_inset(w, h, adj_round),
        treatment: CornerTreatment::Round,
    };
    let snip = Corner {
        inset: corner_inset(w, h, adj_snip),
        treatment: CornerTreatment::Snip,
    };
    let square = Corner {
        inset: 0.0,
        treatment: CornerTreatment::Snip,
    };
    outline(w, h, [round, snip, square, square])
}

fn outline(w: f64, h: f64, [tl, tr, br, bl]: [Corner; 4]) -> PathData {
    let path = PathData::new().m(tl.inset, 0.0).l(w - tr.inset, 0.0);
    let path = corner(path, tr, dvec2(w, tr.inset));
    let path = corner(path.l(w, h - br.inset), br, dvec2(w - br.inset, h));
    let path = corner(path.l(bl.inset, h), bl, dvec2(0.0, h - bl.inset));
    corner(path.l(0.0, tl.inset), tl, dvec2(tl.inset, 0.0)).z()
}

fn corner(path: PathData, corner: Corner, to: DVec2) -> PathData {
    if corner.inset <= 0.0 {
        return path;
    }
    match corner.treatment {
        CornerTreatment::Round => {
            path.a(corner.inset, corner.inset, 0.0, false, true, to.x, to.y)
        }
        CornerTreatment::Snip => path.line_to(to),
    }
}
