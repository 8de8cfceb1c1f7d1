//! Polyline path primitive: tween (spiral/direct), concatenation, style
//! matching, and deadend bookkeeping.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::complex::Complex;
use crate::config::TweenTolerances;
use crate::error::EngineError;
use crate::interp::{lerp, spiral_step, TweenMethod};

/// Node interpolation mode along a path. Only linear for now.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathInterp {
    #[default]
    Linear,
}

/// A styled polyline through the complex plane.
///
/// `deadends` holds edge indices: an entry `n` marks the segment from
/// `seq[n]` to `seq[n + 1]` as not drawn, which is how a path is fractured
/// mid-sequence without splitting it into separate objects. All entries
/// satisfy `n < seq.len() - 1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub seq: Vec<Complex>,
    pub interp: PathInterp,
    pub color: Color,
    pub width: f64,
    pub deadends: HashSet<usize>,
    /// Static elements skip transforms and tweening and render as-is.
    pub is_static: bool,
}

impl Default for Path {
    fn default() -> Self {
        Self {
            seq: vec![Complex::ZERO, Complex::ONE],
            interp: PathInterp::Linear,
            color: Color::BLACK,
            width: 3.0,
            deadends: HashSet::new(),
            is_static: false,
        }
    }
}

impl Path {
    pub fn new(seq: Vec<Complex>) -> Self {
        Self {
            seq,
            ..Self::default()
        }
    }

    /// Number of edges, deadends included.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.seq.len().saturating_sub(1)
    }

    /// Whether two paths can share one draw batch.
    #[inline]
    pub fn matches_style(&self, other: &Path) -> bool {
        self.color == other.color && self.width == other.width && self.is_static == other.is_static
    }

    /// Interpolated path between `self` and `other` at `t` in `[0, 1]`.
    /// The sequences must have equal lengths; a mismatch is an authoring
    /// bug, not a recoverable condition.
    pub fn tween(&self, other: &Path, t: f64, method: TweenMethod) -> Result<Path, EngineError> {
        self.tween_with(other, t, method, &TweenTolerances::default())
    }

    pub fn tween_with(
        &self,
        other: &Path,
        t: f64,
        method: TweenMethod,
        tol: &TweenTolerances,
    ) -> Result<Path, EngineError> {
        if self == other {
            return Ok(self.clone());
        }
        if self.seq.len() != other.seq.len() {
            return Err(EngineError::PathLengthMismatch {
                left: self.seq.len(),
                right: other.seq.len(),
            });
        }

        let mut out = self.clone();
        out.color = self.color.lerp(other.color, t);
        out.width = lerp(self.width, other.width, t);

        match method {
            TweenMethod::Spiral => {
                let mut shifts = Vec::with_capacity(self.seq.len());
                for (n, (&p, &q)) in self.seq.iter().zip(&other.seq).enumerate() {
                    let (pos, dth) = spiral_step(p, q, t, tol);
                    out.seq[n] = pos;
                    shifts.push(dth);
                }
                // Adjacent nodes revolving in opposite directions by more
                // than the angular tolerance would draw a tearing line;
                // sever the edge instead. End states stay intact.
                if tol.interior_lo < t && t < tol.interior_hi {
                    for n in 0..shifts.len().saturating_sub(1) {
                        let (a, b) = (shifts[n], shifts[n + 1]);
                        if a * b < 0.0 && (a - b).abs() > tol.angle_tol {
                            out.deadends.insert(n);
                        }
                    }
                }
            }
            TweenMethod::Direct => {
                for n in 0..self.seq.len() {
                    let v = Complex::new(
                        lerp(self.seq[n].re, other.seq[n].re, t),
                        lerp(self.seq[n].im, other.seq[n].im, t),
                    );
                    out.seq[n] = v;
                    // An unplottable node severs both of its edges.
                    if !v.is_finite() {
                        if n > 0 {
                            out.deadends.insert(n - 1);
                        }
                        if n + 1 < self.seq.len() {
                            out.deadends.insert(n);
                        }
                    }
                }
            }
        }

        Ok(out)
    }

    /// Image of the path under `f`, style preserved; nodes whose evaluation
    /// fails map to NaN. Static paths pass through unevaluated.
    pub fn transform<F>(&self, f: &F) -> Path
    where
        F: Fn(Complex) -> Result<Complex, EngineError>,
    {
        if self.is_static {
            return self.clone();
        }
        let mut out = self.clone();
        for (n, &z) in self.seq.iter().enumerate() {
            out.seq[n] = match f(z) {
                Ok(w) => w,
                Err(err) => {
                    log::debug!("transform failed at node {n} ({z:?}): {err}");
                    Complex::nan()
                }
            };
        }
        out
    }

    /// Concatenation of `self` and `other`, keeping `self`'s style.
    /// With `connect_ends` false the junction edge becomes a deadend, so no
    /// segment is drawn between the two constituent paths.
    pub fn concat(&self, other: &Path, connect_ends: bool) -> Path {
        let mut out = self.clone();
        let offset = self.seq.len();
        out.seq.extend_from_slice(&other.seq);
        if !connect_ends && offset > 0 {
            out.deadends.insert(offset - 1);
        }
        for &n in &other.deadends {
            out.deadends.insert(n + offset);
        }
        out
    }
}
