//! Engine configuration and the per-shape context handed to generators

use crate::types::{RawGuide, ShapeDescriptor, check_dimension};

use super::defaults;
use super::fill::Paint;
use super::guides::{AdjustmentGuide, GuideSet};

/// How star generators pick their inner/outer radius ratio when the shape
/// carries no `adj` guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StarRatio {
    /// One ratio for every point count
    Uniform(f64),
    /// The presentation format's per-type defaults (thin 4-point star,
    /// fat 10-point star, ...)
    PresetDefaults,
}

/// Engine-wide settings, fixed when the registry is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub star_ratio: StarRatio,
}

static DEFAULT_CONFIG: EngineConfig = EngineConfig::DEFAULT;

impl EngineConfig {
    pub const DEFAULT: EngineConfig = EngineConfig {
        star_ratio: StarRatio::Uniform(defaults::STAR_RATIO),
    };

    pub fn with_star_ratio(mut self, star_ratio: StarRatio) -> Self {
        self.star_ratio = star_ratio;
        self
    }

    /// Inner radius as a fraction of the outer one for an `points`-point star.
    pub fn star_inner_ratio(&self, points: u32) -> f64 {
        match self.star_ratio {
            StarRatio::Uniform(ratio) if ratio.is_finite() => ratio.clamp(0.0, 1.0),
            StarRatio::Uniform(_) => defaults::STAR_RATIO,
            StarRatio::PresetDefaults => defaults::STAR_ADJ_DEFAULTS
                .iter()
                .find(|(n, _)| *n == points)
                .map(|(_, adj)| adj / defaults::STAR_ADJ_SCALE)
                .unwrap_or(defaults::STAR_RATIO),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything a generator reads: the sanitized box, the guide list, the
/// resolved paint and the engine configuration.
#[derive(Debug, Clone)]
pub struct ShapeContext<'a> {
    pub w: f64,
    pub h: f64,
    pub guides: GuideSet<'a>,
    pub paint: Paint,
    pub config: &'a EngineConfig,
}

impl ShapeContext<'static> {
    /// Context with no guides, default paint and default configuration.
    pub fn new(w: f64, h: f64) -> Self {
        ShapeContext {
            w: sanitize("width", w),
            h: sanitize("height", h),
            guides: GuideSet::default(),
            paint: Paint::default(),
            config: &DEFAULT_CONFIG,
        }
    }
}

impl<'a> ShapeContext<'a> {
    pub fn from_descriptor(descriptor: &'a ShapeDescriptor, config: &'a EngineConfig) -> Self {
        ShapeContext {
            w: sanitize("width", descriptor.width),
            h: sanitize("height", descriptor.height),
            guides: GuideSet::new(&descriptor.adjustment_guides),
            paint: Paint::resolve(&descriptor.fill, &descriptor.border, &descriptor.shape_id),
            config,
        }
    }

    pub fn with_guides<'b>(self, raw: &'b [RawGuide]) -> ShapeContext<'b>
    where
        'a: 'b,
    {
        ShapeContext {
            w: self.w,
            h: self.h,
            guides: GuideSet::new(raw),
            paint: self.paint,
            config: self.config,
        }
    }

    pub fn with_config<'b>(self, config: &'b EngineConfig) -> ShapeContext<'b>
    where
        'a: 'b,
    {
        ShapeContext {
            w: self.w,
            h: self.h,
            guides: self.guides,
            paint: self.paint,
            config,
        }
    }

    /// Resolve one guide for this shape.
    pub fn guide(&self, guide: &AdjustmentGuide) -> f64 {
        self.guides.resolve(guide)
    }

    /// Short side
    pub fn ss(&self) -> f64 {
        self.w.min(self.h)
    }

    /// Horizontal centre
    pub fn hc(&self) -> f64 {
        self.w / 2.0
    }

    /// Vertical centre
    pub fn vc(&self) -> f64 {
        self.h / 2.0
    }

    /// `100000 * len / ss`, the usual upper bound for guides measured
    /// against the short side. Zero when the short side is.
    pub fn max_adj(&self, len: f64) -> f64 {
        let ss = self.ss();
        if ss > 0.0 {
            defaults::LENGTH_SCALE * len / ss
        } else {
            0.0
        }
    }
}

fn sanitize(which: &'static str, value: f64) -> f64 {
    match check_dimension(value) {
        Ok(v) => v,
        Err(err) => {
            crate::log::debug!(which, value, %err, "degenerate dimension replaced with 0");
            0.0
        }
    }
}

/// `num / den`, or 0 when `den` is zero or the result is not finite.
pub fn safe_div(num: f64, den: f64) -> f64 {
    let q = num / den;
    if den != 0.0 && q.is_finite() { q } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Border, FillMode};

    #[test]
    fn star_ratio_policies() {
        let uniform = EngineConfig::default();
        assert_eq!(uniform.star_inner_ratio(4), 0.5);
        assert_eq!(uniform.star_inner_ratio(32), 0.5);

        let preset = uniform.with_star_ratio(StarRatio::PresetDefaults);
        assert_eq!(preset.star_inner_ratio(4), 0.25);
        assert_eq!(preset.star_inner_ratio(8), 0.75);
        assert_eq!(preset.star_inner_ratio(9), 0.5);

        let bad = uniform.with_star_ratio(StarRatio::Uniform(f64::NAN));
        assert_eq!(bad.star_inner_ratio(5), 0.5);
    }

    #[test]
    fn descriptor_dimensions_are_sanitized() {
        let config = EngineConfig::default();
        let d = ShapeDescriptor::new("rect", f64::NAN, -10.0);
        let ctx = ShapeContext::from_descriptor(&d, &config);
        assert_eq!((ctx.w, ctx.h), (0.0, 0.0));
        assert_eq!(ctx.max_adj(10.0), 0.0);
    }

    #[test]
    fn paint_comes_from_descriptor() {
        let config = EngineConfig::default();
        let d = ShapeDescriptor::new("rect", 10.0, 10.0)
            .with_fill(FillMode::image())
            .with_border(Border::new("#00ff00", 3.0, "2,2"))
            .with_id("pic1");
        let ctx = ShapeContext::from_descriptor(&d, &config);
        assert_eq!(ctx.paint.fill, "url(#imgPtrn_pic1)");
        assert_eq!(ctx.paint.stroke.width, 3.0);
    }

    #[test]
    fn max_adj_guards_short_side() {
        assert_eq!(ShapeContext::new(200.0, 100.0).max_adj(200.0), 200_000.0);
        assert_eq!(ShapeContext::new(0.0, 100.0).max_adj(0.0), 0.0);
    }

    #[test]
    fn safe_div_cases() {
        assert_eq!(safe_div(1.0, 4.0), 0.25);
        assert_eq!(safe_div(1.0, 0.0), 0.0);
        assert_eq!(safe_div(0.0, 0.0), 0.0);
    }
}
