//! Interpolation helpers shared by the tween implementations:
//! scalar lerp, shortest-arc angular shifts, and progress transitions.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::str::FromStr;

use crate::complex::Complex;
use crate::config::TweenTolerances;
use crate::error::EngineError;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Shift that takes angle `th1` to `th2` along the shortest arc, never
/// traversing more than pi radians (within `eps` slack at the boundary,
/// which keeps deltas that land exactly on pi from jittering between
/// directions). Use as `th(t) = th1 + t * dth` with `th1` reduced mod 2*pi.
#[inline]
pub fn shortest_arc(th1: f64, th2: f64, eps: f64) -> f64 {
    let th1 = th1.rem_euclid(TAU);
    let th2 = th2.rem_euclid(TAU);
    let dth = th2 - th1;
    if dth.abs() > PI + eps {
        dth - TAU.copysign(dth)
    } else {
        dth
    }
}

/// One spiral step: polar interpolation of `p` toward `q` at `t`.
/// Returns the interpolated position and the angular shift applied, which
/// path tweening inspects for direction conflicts between adjacent nodes.
#[inline]
pub fn spiral_step(p: Complex, q: Complex, t: f64, tol: &TweenTolerances) -> (Complex, f64) {
    let r1 = p.abs();
    let r2 = q.abs();
    let th1 = p.arg().rem_euclid(TAU);
    let dth = shortest_arc(p.arg(), q.arg(), tol.arg_boundary_eps);
    (Complex::from_polar(r1 + t * (r2 - r1), th1 + t * dth), dth)
}

/// Interpolation style for positional attributes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TweenMethod {
    /// Polar decomposition: radius linear, angle along the shortest arc.
    #[default]
    Spiral,
    /// Straight-line interpolation in the plane.
    Direct,
}

impl FromStr for TweenMethod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spiral" => Ok(Self::Spiral),
            "direct" => Ok(Self::Direct),
            _ => Err(EngineError::UnsupportedMethod {
                name: s.to_string(),
            }),
        }
    }
}

/// Half-range of the atan ease curve; `EaseInOut` maps progress through
/// `(atan(14t - 7) + C) / 2C`. Calibration constant, kept verbatim.
const EASE_HALF_RANGE: f64 = 1.4289;

/// Pure reparameterization of normalized progress, applied before tweening.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transition {
    /// S-curve: slow out of the source keyframe, fast through the middle,
    /// slow into the destination.
    #[default]
    EaseInOut,
    /// Constant-speed progress.
    Linear,
}

impl Transition {
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Transition::EaseInOut => {
                ((14.0 * t - 7.0).atan() + EASE_HALF_RANGE) / (2.0 * EASE_HALF_RANGE)
            }
            Transition::Linear => t,
        }
    }
}

impl FromStr for Transition {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ease-in-out" | "ease" => Ok(Self::EaseInOut),
            "linear" | "steady" => Ok(Self::Linear),
            _ => Err(EngineError::UnsupportedMethod {
                name: s.to_string(),
            }),
        }
    }
}
