//! Drawable point primitive and its tween/transform operations.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::complex::Complex;
use crate::config::TweenTolerances;
use crate::error::EngineError;
use crate::interp::{lerp, spiral_step, TweenMethod};

/// Marker shape for points. Only circles for now.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    #[default]
    Circle,
}

/// A styled point on the complex plane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub pos: Complex,
    pub stroke_weight: f64,
    pub fill: Color,
    pub marker: Marker,
    /// Display diameter in pixels.
    pub size: f64,
    /// Static elements skip transforms and tweening and render as-is.
    pub is_static: bool,
}

impl Default for Point {
    fn default() -> Self {
        Self {
            pos: Complex::ZERO,
            stroke_weight: 1.0,
            fill: Color::RED,
            marker: Marker::Circle,
            size: 15.0,
            is_static: false,
        }
    }
}

impl Point {
    pub fn new(pos: Complex) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    /// `color` is a pure alias for `fill`; there is no second storage slot.
    #[inline]
    pub fn color(&self) -> Color {
        self.fill
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.fill = color;
    }

    /// Interpolated point between `self` and `other` at `t` in `[0, 1]`.
    pub fn tween(&self, other: &Point, t: f64, method: TweenMethod) -> Point {
        self.tween_with(other, t, method, &TweenTolerances::default())
    }

    pub fn tween_with(
        &self,
        other: &Point,
        t: f64,
        method: TweenMethod,
        tol: &TweenTolerances,
    ) -> Point {
        if self == other {
            return self.clone();
        }
        let mut out = self.clone();
        out.stroke_weight = lerp(self.stroke_weight, other.stroke_weight, t);
        out.fill = self.fill.lerp(other.fill, t);
        out.size = lerp(self.size, other.size, t);
        out.pos = match method {
            TweenMethod::Spiral => spiral_step(self.pos, other.pos, t, tol).0,
            TweenMethod::Direct => Complex::new(
                lerp(self.pos.re, other.pos.re, t),
                lerp(self.pos.im, other.pos.im, t),
            ),
        };
        out
    }

    /// Image of the point under `f`, style preserved. An evaluation failure
    /// becomes a NaN position (skipped at render time); static points pass
    /// through unevaluated.
    pub fn transform<F>(&self, f: &F) -> Point
    where
        F: Fn(Complex) -> Result<Complex, EngineError>,
    {
        if self.is_static {
            return self.clone();
        }
        let mut out = self.clone();
        out.pos = match f(self.pos) {
            Ok(w) => w,
            Err(err) => {
                log::debug!("transform failed at {:?}: {err}", self.pos);
                Complex::nan()
            }
        };
        out
    }
}
