//! Viewport and window configuration plus tween calibration constants.

use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::EngineError;

/// Rectangular viewport on the complex plane.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
}

impl View {
    #[inline]
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Self {
        Self {
            re_min,
            re_max,
            im_min,
            im_max,
        }
    }

    /// Both axes must be finite and strictly ordered.
    pub fn validate(&self) -> Result<(), EngineError> {
        let ordered = self.re_min < self.re_max && self.im_min < self.im_max;
        let finite = [self.re_min, self.re_max, self.im_min, self.im_max]
            .iter()
            .all(|v| v.is_finite());
        if ordered && finite {
            Ok(())
        } else {
            Err(EngineError::InvalidView {
                re_min: self.re_min,
                re_max: self.re_max,
                im_min: self.im_min,
                im_max: self.im_max,
            })
        }
    }

    /// Affine map from the plane to pixel coordinates. No aspect-ratio
    /// correction; callers avoid distortion by matching aspect ratios.
    #[inline]
    pub fn project(&self, z: Complex, window: &WindowSize) -> (f64, f64) {
        let x = window.width as f64 / (self.re_max - self.re_min) * (z.re - self.re_min);
        let y = window.height as f64 / (self.im_max - self.im_min) * (z.im - self.im_min);
        (x, y)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(-10.0, 10.0, -10.0, 10.0)
    }
}

/// Pixel dimensions of the target surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width > 0 && self.height > 0 {
            Ok(())
        } else {
            Err(EngineError::InvalidWindow {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(800, 800)
    }
}

/// Calibration constants for spiral tweening. The values are empirically
/// chosen; keep them configurable rather than re-deriving them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenTolerances {
    /// Slack added to pi when deciding whether an angular delta wraps.
    pub arg_boundary_eps: f64,
    /// Opposite-sign angular divergence beyond which adjacent path nodes
    /// are disconnected mid-tween.
    pub angle_tol: f64,
    /// Lower bound of the open t-interval inside which discontinuity
    /// detection is active; the end states are never severed.
    pub interior_lo: f64,
    /// Upper bound of the same interval.
    pub interior_hi: f64,
}

impl Default for TweenTolerances {
    fn default() -> Self {
        Self {
            arg_boundary_eps: 1.189e-12,
            angle_tol: 0.053,
            interior_lo: 0.01,
            interior_hi: 0.99,
        }
    }
}
