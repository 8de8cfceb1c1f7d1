//! Error types for the tweening engine.

use serde::{Deserialize, Serialize};

/// Engine error taxonomy: fatal precondition violations (authoring or
/// integration bugs upstream), per-element transform failures (recovered
/// locally as NaN positions), and unsupported feature names.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EngineError {
    /// Paths only tween when their node sequences line up one-to-one.
    #[error("cannot tween paths of different lengths: {left} vs {right}")]
    PathLengthMismatch { left: usize, right: usize },

    #[error("cannot tween frames with {left} vs {right} points")]
    PointCountMismatch { left: usize, right: usize },

    #[error("cannot tween frames with {left} vs {right} paths")]
    PathCountMismatch { left: usize, right: usize },

    #[error("animation has no keyframes")]
    NoKeyframes,

    #[error("frame_counts has {counts} entries for {keyframes} keyframes")]
    FrameCountMismatch { counts: usize, keyframes: usize },

    #[error("invalid view rectangle: re [{re_min}, {re_max}], im [{im_min}, {im_max}]")]
    InvalidView {
        re_min: f64,
        re_max: f64,
        im_min: f64,
        im_max: f64,
    },

    #[error("invalid window size: {width}x{height}")]
    InvalidWindow { width: u32, height: u32 },

    #[error("invalid frame rate: {rate}")]
    InvalidFrameRate { rate: f64 },

    /// A user-supplied transform failed for one element.
    #[error("transform evaluation failed: {reason}")]
    TransformFailed { reason: String },

    /// An unrecognized tween-method or transition name.
    #[error("unsupported method: {name}")]
    UnsupportedMethod { name: String },
}

impl EngineError {
    /// Coarse taxonomy for logging and metrics.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::PathLengthMismatch { .. }
            | Self::PointCountMismatch { .. }
            | Self::PathCountMismatch { .. }
            | Self::NoKeyframes
            | Self::FrameCountMismatch { .. }
            | Self::InvalidView { .. }
            | Self::InvalidWindow { .. }
            | Self::InvalidFrameRate { .. } => "precondition",
            Self::TransformFailed { .. } => "transform",
            Self::UnsupportedMethod { .. } => "unsupported",
        }
    }

    /// Whether the error is recovered locally (the offending element becomes
    /// unplottable) rather than aborting the operation.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::TransformFailed { .. })
    }
}
