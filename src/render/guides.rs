//! Adjustment guide resolution.
//!
//! Guides arrive as raw formulas (`val 25000`). Only the literal form carries
//! a value the engine can use; anything else falls back to the shape's
//! documented default. After [`GuideSet::resolve`] every guide is a finite
//! number inside the range its [`AdjustmentGuide`] declares.

use crate::errors::GuideError;
use crate::types::RawGuide;

use super::defaults::{ANGLE_SCALE, LENGTH_SCALE, MAX_ANGLE_RAW};

/// Parse the integer payload of a literal guide formula.
///
/// The `val` prefix is optional and surrounding whitespace is ignored, so
/// `val 25000`, `val25000` and `25000` all yield `25000`.
pub fn parse_literal(formula: &str) -> Result<i64, GuideError> {
    let lead = formula.len() - formula.trim_start().len();
    let mut start = lead;
    if formula[lead..].starts_with("val") {
        start += "val".len();
    }
    let payload = &formula[start..];
    let start = start + (payload.len() - payload.trim_start().len());
    let digits = payload.trim();

    digits
        .parse::<i64>()
        .map_err(|source| GuideError::InvalidNumber {
            formula: formula.to_string(),
            span: (start, digits.len()).into(),
            source,
        })
}

/// Parse and scale a formula, reporting why it could not be used.
pub fn try_resolve(formula: &str, scale: f64) -> Result<f64, GuideError> {
    if !scale.is_finite() || scale == 0.0 {
        return Err(GuideError::InvalidScale { scale });
    }
    Ok(parse_literal(formula)? as f64 / scale)
}

/// Scaled guide value, or `fallback` when the formula is unusable.
pub fn resolve(formula: &str, scale: f64, fallback: f64) -> f64 {
    match try_resolve(formula, scale) {
        Ok(value) => value,
        Err(err) => {
            crate::log::debug!(formula, %err, fallback, "guide formula unusable, using default");
            fallback
        }
    }
}

/// Clamp into `[min, max]`.
///
/// Unlike `f64::clamp` this never panics: a NaN value lands on `min`, and a
/// range whose upper bound dropped below `min` (maximums derived from a
/// degenerate aspect ratio) collapses onto `min`.
pub fn clamp_guide(value: f64, min: f64, max: f64) -> f64 {
    let hi = if max >= min { max } else { min };
    if value.is_nan() {
        min
    } else {
        value.max(min).min(hi)
    }
}

/// Declaration of one guide a generator reads: its name, the format's default
/// and range (raw units), and the divisor that turns raw units into a ratio
/// or degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentGuide {
    pub name: &'static str,
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub scale: f64,
}

impl AdjustmentGuide {
    /// Length ratio guide, range `[0, 100000]`
    pub const fn length(name: &'static str, default: f64) -> Self {
        Self {
            name,
            default,
            min: 0.0,
            max: LENGTH_SCALE,
            scale: LENGTH_SCALE,
        }
    }

    /// Angle guide in 60000ths of a degree, range `[0, 21599999]`
    pub const fn angle(name: &'static str, default: f64) -> Self {
        Self {
            name,
            default,
            min: 0.0,
            max: MAX_ANGLE_RAW,
            scale: ANGLE_SCALE,
        }
    }

    /// Replace the upper bound (raw units)
    pub const fn up_to(self, max: f64) -> Self {
        Self { max, ..self }
    }

    /// The default, scaled
    pub fn fallback(&self) -> f64 {
        self.default / self.scale
    }
}

/// Read-only view over a descriptor's guide list.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuideSet<'a> {
    raw: &'a [RawGuide],
}

impl<'a> GuideSet<'a> {
    pub fn new(raw: &'a [RawGuide]) -> Self {
        Self { raw }
    }

    /// Raw formula for `name`; the first entry wins on duplicates.
    pub fn formula(&self, name: &str) -> Option<&'a str> {
        self.raw
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.formula.as_str())
    }

    /// Resolve and clamp `guide` against this set.
    pub fn resolve(&self, guide: &AdjustmentGuide) -> f64 {
        let fallback = guide.fallback();
        let value = match self.formula(guide.name) {
            Some(formula) => resolve(formula, guide.scale, fallback),
            None => fallback,
        };
        clamp_guide(value, guide.min / guide.scale, guide.max / guide.scale)
    }
}
