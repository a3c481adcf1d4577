//! Error types with miette diagnostics.
//!
//! Nothing in the engine raises these to a `render` caller: guide errors are
//! folded into fallback values and registry misses into an empty fragment.
//! They exist for callers that want to know *why* (`parse_literal`,
//! `ShapeRegistry::try_render`) and print it nicely.

use std::num::ParseIntError;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

// ============================================================================
// Guide Errors
// ============================================================================

/// Errors from reading an adjustment guide's raw formula
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GuideError {
    #[error("guide formula has no integer literal")]
    #[diagnostic(
        code(presetgeom::guide::invalid_number),
        help("only literal formulas such as `val 25000` can be resolved")
    )]
    InvalidNumber {
        #[source_code]
        formula: String,
        #[label("expected an integer here")]
        span: SourceSpan,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid guide scale: {scale}")]
    #[diagnostic(
        code(presetgeom::guide::invalid_scale),
        help("length guides use 100000, angle guides use 60000")
    )]
    InvalidScale { scale: f64 },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur when dispatching a descriptor to a generator
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("unknown shape type: {shape_type}")]
    #[diagnostic(
        code(presetgeom::render::unknown_shape),
        help("see `ShapeRegistry::shape_types` for the supported presets")
    )]
    UnknownShape { shape_type: String },
}
