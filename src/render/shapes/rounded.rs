//! Round-rect family: thin wrappers choosing a corner treatment and subset

use crate::render::context::ShapeContext;
use crate::render::guides::AdjustmentGuide;
use crate::render::registry::ShapeRegistry;
use crate::render::round_rect::{self, CornerSet, CornerTreatment};

use super::{path, register_shapes};

pub(super) fn register(registry: &mut ShapeRegistry) {
    register_shapes!(registry, {
        "roundRect" => round_rect,
        "round1Rect" => round1_rect,
        "round2SameRect" => round2_same_rect,
        "round2DiagRect" => round2_diag_rect,
        "snip1Rect" => snip1_rect,
        "snip2SameRect" => snip2_same_rect,
        "snip2DiagRect" => snip2_diag_rect,
        "snipRoundRect" => snip_round_rect,
        "flowChartAlternateProcess" => flow_chart_alternate_process,
    });
}

const fn corner_guide(name: &'static str, default: f64) -> AdjustmentGuide {
    AdjustmentGuide::length(name, default).up_to(50000.0)
}

const SINGLE: AdjustmentGuide = corner_guide("adj", 16667.0);
const FIRST: AdjustmentGuide = corner_guide("adj1", 16667.0);
const SECOND: AdjustmentGuide = corner_guide("adj2", 0.0);

/// Render one corner combination. `first` drives the primary corners,
/// `second` the secondary pair of the two-guide variants.
fn corners(
    ctx: &ShapeContext<'_>,
    first: &AdjustmentGuide,
    second: &AdjustmentGuide,
    treatment: CornerTreatment,
    set: CornerSet,
) -> String {
    let d = round_rect::build(
        ctx.w,
        ctx.h,
        ctx.guide(first),
        ctx.guide(second),
        treatment,
        set,
    );
    path(ctx, d)
}

fn round_rect(ctx: &ShapeContext<'_>) -> String {
    corners(ctx, &SINGLE, &SINGLE, CornerTreatment::Round, CornerSet::All)
}

fn round1_rect(ctx: &ShapeContext<'_>) -> String {
    corners(ctx, &SINGLE, &SINGLE, CornerTreatment::Round, CornerSet::One)
}

fn round2_same_rect(ctx: &ShapeContext<'_>) -> String {
    corners(ctx, &FIRST, &SECOND, CornerTreatment::Round, CornerSet::TwoSame)
}

fn round2_diag_rect(ctx: &ShapeContext<'_>) -> String {
    corners(ctx, &FIRST, &SECOND, CornerTreatment::Round, CornerSet::Diagonal)
}

fn snip1_rect(ctx: &ShapeContext<'_>) -> String {
    corners(ctx, &SINGLE, &SINGLE, CornerTreatment::Snip, CornerSet::One)
}

fn snip2_same_rect(ctx: &ShapeContext<'_>) -> String {
    corners(ctx, &FIRST, &SECOND, CornerTreatment::Snip, CornerSet::TwoSame)
}

/// Diagonal snips default to the top-right / bottom-left pair.
fn snip2_diag_rect(ctx: &ShapeContext<'_>) -> String {
    let first = corner_guide("adj1", 0.0);
    let second = corner_guide("adj2", 16667.0);
    corners(ctx, &first, &second, CornerTreatment::Snip, CornerSet::Diagonal)
}

fn snip_round_rect(ctx: &ShapeContext<'_>) -> String {
    let round = ctx.guide(&FIRST);
    let snip = ctx.guide(&corner_guide("adj2", 16667.0));
    path(ctx, round_rect::build_snip_round(ctx.w, ctx.h, round, snip))
}

/// Rounded box with a fixed sixth-of-short-side radius.
fn flow_chart_alternate_process(ctx: &ShapeContext<'_>) -> String {
    let d = round_rect::build(
        ctx.w,
        ctx.h,
        1.0 / 6.0,
        1.0 / 6.0,
        CornerTreatment::Round,
        CornerSet::All,
    );
    path(ctx, d)
}
