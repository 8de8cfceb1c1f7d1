//! Precompiled render tables: a flattened, pixel-space copy of one frame.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::{View, WindowSize};
use crate::frame::Frame;

/// Angular step of the circle approximation; every 10 degrees gives a
/// 36-vertex fan per point marker.
const FAN_STEP_DEG: usize = 10;

/// One flat vertex array with per-vertex colors, shaped for a persistent
/// buffer upload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexBatch {
    /// Interleaved x,y pixel coordinates.
    pub vertices: Vec<f32>,
    /// r,g,b byte channels, one triple per vertex.
    pub colors: Vec<u8>,
}

/// Render-ready flattening of a [`Frame`] at one view/window size.
///
/// Point entries are triangle-fan circle approximations; path entries are
/// line lists with one vertex pair per edge. Deadend edges keep their slot
/// as an infinite sentinel pair, so table shapes stay identical across the
/// frames of an animation and persistent vertex buffers can be updated in
/// place each tick. Not reusable across view or window changes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FastFrame {
    pub background: Color,
    /// Extra whole ticks this frame stays on screen after rendering.
    pub delay: u32,
    pub point_table: Vec<VertexBatch>,
    pub path_table: Vec<VertexBatch>,
    /// Stroke width per path-table entry.
    pub path_widths: Vec<f32>,
}

impl FastFrame {
    /// Flatten `frame`, which must already be path-optimized.
    pub(crate) fn build(frame: &Frame, view: &View, window: &WindowSize) -> FastFrame {
        let mut out = FastFrame {
            background: frame.background,
            delay: frame.delay,
            ..Default::default()
        };

        for point in &frame.points {
            let (x, y) = view.project(point.pos, window);
            let vertices = circle_fan(x, y, point.size / 2.0);
            let n_vertices = vertices.len() / 2;
            out.point_table.push(VertexBatch {
                vertices,
                colors: repeat_rgb(point.fill.to_bytes(), n_vertices),
            });
        }

        for path in &frame.paths {
            let mut vertices = Vec::with_capacity(4 * path.edge_count());
            for n in 0..path.edge_count() {
                if path.deadends.contains(&n) {
                    vertices.extend_from_slice(&[f32::INFINITY; 4]);
                } else {
                    let (x0, y0) = view.project(path.seq[n], window);
                    let (x1, y1) = view.project(path.seq[n + 1], window);
                    vertices.extend_from_slice(&[x0 as f32, y0 as f32, x1 as f32, y1 as f32]);
                }
            }
            let n_vertices = vertices.len() / 2;
            out.path_table.push(VertexBatch {
                vertices,
                colors: repeat_rgb(path.color.to_bytes(), n_vertices),
            });
            out.path_widths.push(path.width as f32);
        }

        out
    }
}

/// Interleaved vertices of a triangle-fan circle approximation centered at
/// pixel `(x, y)` with radius `r`.
pub(crate) fn circle_fan(x: f64, y: f64, r: f64) -> Vec<f32> {
    let mut vertices = Vec::with_capacity(2 * (360 / FAN_STEP_DEG));
    for deg in (0..360).step_by(FAN_STEP_DEG) {
        let th = (deg as f64).to_radians();
        vertices.push((x + r * th.cos()) as f32);
        vertices.push((y + r * th.sin()) as f32);
    }
    vertices
}

fn repeat_rgb(rgb: [u8; 3], n: usize) -> Vec<u8> {
    let mut colors = Vec::with_capacity(3 * n);
    for _ in 0..n {
        colors.extend_from_slice(&rgb);
    }
    colors
}
