//! Immediate-mode draw compilation: a frame becomes a background clear plus
//! style-batched line lists and per-point triangle fans.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::{View, WindowSize};
use crate::fastframe::circle_fan;
use crate::frame::Frame;
use crate::path::Path;

/// One draw call for the rendering backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    /// Line list: interleaved x,y pixel coordinates, two vertices per
    /// segment, one shared color and stroke width.
    Lines {
        vertices: Vec<f32>,
        color: [u8; 3],
        width: f32,
    },
    /// Triangle fan approximating a filled circle.
    Fan { vertices: Vec<f32>, color: [u8; 3] },
}

/// Per-tick draw output: clear color plus ordered draw calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub background: Color,
    pub ops: Vec<DrawOp>,
}

/// Compile `frame` for immediate drawing.
///
/// Consecutive paths sharing a style merge into a single `Lines` op, so the
/// backend switches line style once per run. Deadend and non-finite edges
/// are omitted (the immediate path has no dense-table requirement), and
/// points at non-finite positions are skipped.
pub fn compile_frame(frame: &Frame, view: &View, window: &WindowSize) -> DrawList {
    let mut list = DrawList {
        background: frame.background,
        ops: Vec::new(),
    };

    let mut vertices: Vec<f32> = Vec::new();
    let mut style: Option<&Path> = None;
    for path in &frame.paths {
        match style {
            Some(s) if !s.matches_style(path) => {
                flush_lines(&mut list, s, std::mem::take(&mut vertices));
                style = Some(path);
            }
            Some(_) => {}
            None => style = Some(path),
        }
        append_edges(path, view, window, &mut vertices);
    }
    if let Some(s) = style {
        flush_lines(&mut list, s, vertices);
    }

    for point in &frame.points {
        if !point.pos.is_finite() {
            continue;
        }
        let (x, y) = view.project(point.pos, window);
        list.ops.push(DrawOp::Fan {
            vertices: circle_fan(x, y, point.size / 2.0),
            color: point.fill.to_bytes(),
        });
    }

    list
}

fn flush_lines(list: &mut DrawList, style: &Path, vertices: Vec<f32>) {
    if vertices.is_empty() {
        return;
    }
    list.ops.push(DrawOp::Lines {
        vertices,
        color: style.color.to_bytes(),
        width: style.width as f32,
    });
}

fn append_edges(path: &Path, view: &View, window: &WindowSize, out: &mut Vec<f32>) {
    for n in 0..path.edge_count() {
        if path.deadends.contains(&n) {
            continue;
        }
        let (z0, z1) = (path.seq[n], path.seq[n + 1]);
        if !z0.is_finite() || !z1.is_finite() {
            continue;
        }
        let (x0, y0) = view.project(z0, window);
        let (x1, y1) = view.project(z1, window);
        out.extend_from_slice(&[x0 as f32, y0 as f32, x1 as f32, y1 as f32]);
    }
}
