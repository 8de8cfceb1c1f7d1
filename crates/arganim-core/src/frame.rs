//! A single frame of animation: ordered points and paths plus background
//! and hold metadata, with tweening, transform mapping, and style batching.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::complex::Complex;
use crate::config::{TweenTolerances, View, WindowSize};
use crate::error::EngineError;
use crate::fastframe::FastFrame;
use crate::interp::TweenMethod;
use crate::path::Path;
use crate::point::Point;

/// An ordered collection of drawables with a background color.
///
/// Element order is z-order: later entries draw on top. Path order also
/// feeds style batching, which merges adjacent same-style runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub points: Vec<Point>,
    pub paths: Vec<Path>,
    pub background: Color,
    /// Extra whole ticks this frame stays on screen after rendering.
    /// Only authored keyframes carry a nonzero delay.
    pub delay: u32,
    /// Set once style batching has collapsed adjacent same-style paths.
    pub optimized: bool,
}

impl Frame {
    pub fn new(points: Vec<Point>, paths: Vec<Path>) -> Self {
        Self {
            points,
            paths,
            ..Self::default()
        }
    }

    /// Interpolated frame between `self` and `other` at `t` in `[0, 1]`.
    /// Points and paths pair up by index; count mismatches are fatal.
    pub fn tween(&self, other: &Frame, t: f64, method: TweenMethod) -> Result<Frame, EngineError> {
        self.tween_with(other, t, method, &TweenTolerances::default())
    }

    pub fn tween_with(
        &self,
        other: &Frame,
        t: f64,
        method: TweenMethod,
        tol: &TweenTolerances,
    ) -> Result<Frame, EngineError> {
        if self == other {
            return Ok(self.clone());
        }
        if self.points.len() != other.points.len() {
            return Err(EngineError::PointCountMismatch {
                left: self.points.len(),
                right: other.points.len(),
            });
        }
        if self.paths.len() != other.paths.len() {
            return Err(EngineError::PathCountMismatch {
                left: self.paths.len(),
                right: other.paths.len(),
            });
        }

        let mut out = self.clone();
        // In-between frames never pause; only authored keyframes hold.
        out.delay = 0;
        out.background = self.background.lerp(other.background, t);
        for (n, (p, q)) in self.points.iter().zip(&other.points).enumerate() {
            out.points[n] = p.tween_with(q, t, method, tol);
        }
        for (n, (p, q)) in self.paths.iter().zip(&other.paths).enumerate() {
            out.paths[n] = p.tween_with(q, t, method, tol)?;
        }
        Ok(out)
    }

    /// Image of the frame under `f`, applied independently per element.
    /// Per-element failures become NaN positions; static elements pass
    /// through unevaluated.
    pub fn transform<F>(&self, f: F) -> Frame
    where
        F: Fn(Complex) -> Result<Complex, EngineError>,
    {
        let mut out = self.clone();
        out.points = self.points.iter().map(|p| p.transform(&f)).collect();
        out.paths = self.paths.iter().map(|p| p.transform(&f)).collect();
        out
    }

    /// Collapse each maximal run of adjacent same-style paths into one
    /// concatenated path with a deadend at every junction. Idempotent.
    /// Batching changes how edges are grouped into draw calls, never which
    /// segments appear on screen.
    pub fn optimize_paths(&mut self) {
        if self.optimized {
            return;
        }
        self.optimized = true;
        if self.paths.is_empty() {
            return;
        }
        let mut merged: Vec<Path> = Vec::with_capacity(self.paths.len());
        let mut run = self.paths[0].clone();
        for path in &self.paths[1..] {
            if run.matches_style(path) {
                run = run.concat(path, false);
            } else {
                merged.push(run);
                run = path.clone();
            }
        }
        merged.push(run);
        self.paths = merged;
    }

    /// Flatten into pixel-space vertex/color tables for one fixed
    /// view/window pair, optimizing the path list in place first.
    pub fn prerender(&mut self, view: &View, window: &WindowSize) -> FastFrame {
        self.optimize_paths();
        FastFrame::build(self, view, window)
    }
}
