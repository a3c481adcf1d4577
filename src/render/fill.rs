//! Paint attributes shared by every generator

use crate::types::{Border, FillMode};

use super::defaults;

/// `fill` attribute value.
///
/// Image fills and gradient fills point at paint servers the caller declares
/// under `imgPtrn_<id>` / `linGrd_<id>`; otherwise the solid colour is used
/// as given.
pub fn fill_attr(
    is_image_fill: bool,
    is_gradient_fill: bool,
    solid_color: &str,
    shape_id: &str,
) -> String {
    if is_image_fill {
        format!("url(#imgPtrn_{shape_id})")
    } else if is_gradient_fill {
        format!("url(#linGrd_{shape_id})")
    } else if solid_color.is_empty() {
        "none".to_string()
    } else {
        solid_color.to_string()
    }
}

/// Resolved outline attributes
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeAttrs {
    pub color: String,
    pub width: f64,
    pub dasharray: String,
}

/// Border passthrough; blank or invalid parts take the default border's value.
pub fn stroke_attrs(border: &Border) -> StrokeAttrs {
    let color = if border.color.trim().is_empty() {
        defaults::BORDER_COLOR.to_string()
    } else {
        border.color.clone()
    };
    let width = if border.width_px.is_finite() && border.width_px >= 0.0 {
        border.width_px
    } else {
        defaults::BORDER_WIDTH
    };
    let dasharray = if border.dash_array.trim().is_empty() {
        defaults::BORDER_DASH.to_string()
    } else {
        border.dash_array.clone()
    };
    StrokeAttrs {
        color,
        width,
        dasharray,
    }
}

/// Fill plus stroke, computed once per shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub fill: String,
    pub stroke: StrokeAttrs,
}

impl Paint {
    pub fn resolve(fill: &FillMode, border: &Border, shape_id: &str) -> Self {
        Self {
            fill: fill_attr(fill.image, fill.gradient, &fill.solid_color, shape_id),
            stroke: stroke_attrs(border),
        }
    }

    /// Same stroke, no fill. Used for open strokes such as divider lines and arcs.
    pub fn outline(&self) -> Self {
        Self {
            fill: "none".to_string(),
            stroke: self.stroke.clone(),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::resolve(&FillMode::default(), &Border::default(), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_fill_wins() {
        assert_eq!(
            fill_attr(true, false, "#ignored", "shape7"),
            "url(#imgPtrn_shape7)"
        );
        assert_eq!(fill_attr(true, true, "#ignored", "s"), "url(#imgPtrn_s)");
    }

    #[test]
    fn gradient_then_solid() {
        assert_eq!(fill_attr(false, true, "#123456", "s2"), "url(#linGrd_s2)");
        assert_eq!(fill_attr(false, false, "#123456", "s2"), "#123456");
        assert_eq!(fill_attr(false, false, "", "s2"), "none");
    }

    #[test]
    fn stroke_passthrough_and_defaulting() {
        let s = stroke_attrs(&Border::new("#ff00ff", 2.5, "4 2"));
        assert_eq!(s.color, "#ff00ff");
        assert_eq!(s.width, 2.5);
        assert_eq!(s.dasharray, "4 2");

        let s = stroke_attrs(&Border::new("", f64::NAN, ""));
        assert_eq!(s.color, "#000000");
        assert_eq!(s.width, 1.0);
        assert_eq!(s.dasharray, "none");

        assert_eq!(stroke_attrs(&Border::new("#000", 0.0, "none")).width, 0.0);
    }

    #[test]
    fn outline_drops_fill_only() {
        let paint = Paint::resolve(&FillMode::gradient(), &Border::default(), "g1");
        assert_eq!(paint.fill, "url(#linGrd_g1)");
        let outline = paint.outline();
        assert_eq!(outline.fill, "none");
        assert_eq!(outline.stroke, paint.stroke);
    }
}
