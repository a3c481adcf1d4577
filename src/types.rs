//! Input types handed to the engine by the document-extraction layer.
//!
//! A [`ShapeDescriptor`] is built fresh for every shape and never mutated by
//! the engine. Defaults that the source format leaves implicit (the border)
//! are normalized here once instead of at every generator call.

use std::fmt;

use crate::render::defaults;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Validate a bounding-box dimension (finite, non-negative).
#[inline]
pub fn check_dimension(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// One `{name, rawFormula}` pair from the shape's adjustment list,
/// e.g. `adj2` / `val 25000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawGuide {
    pub name: String,
    pub formula: String,
}

impl RawGuide {
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
        }
    }
}

/// How the shape interior is painted.
///
/// Image wins over gradient, gradient wins over the solid colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FillMode {
    pub image: bool,
    pub gradient: bool,
    pub solid_color: String,
}

impl FillMode {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            image: false,
            gradient: false,
            solid_color: color.into(),
        }
    }

    pub fn image() -> Self {
        Self {
            image: true,
            gradient: false,
            solid_color: String::new(),
        }
    }

    pub fn gradient() -> Self {
        Self {
            image: false,
            gradient: true,
            solid_color: String::new(),
        }
    }
}

impl Default for FillMode {
    fn default() -> Self {
        Self::solid("none")
    }
}

/// Outline paint. `Border::default()` is the format's implicit border.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub color: String,
    pub width_px: f64,
    pub dash_array: String,
}

impl Border {
    pub fn new(color: impl Into<String>, width_px: f64, dash_array: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            width_px,
            dash_array: dash_array.into(),
        }
    }
}

impl Default for Border {
    fn default() -> Self {
        Self {
            color: defaults::BORDER_COLOR.to_string(),
            width_px: defaults::BORDER_WIDTH,
            dash_array: defaults::BORDER_DASH.to_string(),
        }
    }
}

/// Everything a generator needs to draw one preset shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    /// Preset name, e.g. `rightArrow`
    pub shape_type: String,
    pub width: f64,
    pub height: f64,
    pub adjustment_guides: Vec<RawGuide>,
    pub fill: FillMode,
    pub border: Border,
    /// Used to build `url(#...)` references to caller-declared paint servers
    pub shape_id: String,
}

impl ShapeDescriptor {
    /// Descriptor with no guides, no fill and the default border.
    pub fn new(shape_type: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            shape_type: shape_type.into(),
            width,
            height,
            adjustment_guides: Vec::new(),
            fill: FillMode::default(),
            border: Border::default(),
            shape_id: String::new(),
        }
    }

    pub fn with_guide(mut self, name: impl Into<String>, formula: impl Into<String>) -> Self {
        self.adjustment_guides.push(RawGuide::new(name, formula));
        self
    }

    pub fn with_fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn with_id(mut self, shape_id: impl Into<String>) -> Self {
        self.shape_id = shape_id.into();
        self
    }
}
