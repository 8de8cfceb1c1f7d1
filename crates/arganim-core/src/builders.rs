//! Authoring helpers: subdivided lines, ellipses, and the standard
//! complex-plane grid frame.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::complex::Complex;
use crate::config::View;
use crate::frame::Frame;
use crate::path::Path;

/// Evenly subdivided straight path from `z1` to `z2`. Subdivision matters
/// for tweening: each node travels its own spiral, so a segment bends
/// smoothly instead of staying rigid.
pub fn line(z1: Complex, z2: Complex, steps: usize) -> Path {
    let steps = steps.max(1);
    let dz = (z2 - z1) / steps as f64;
    let mut seq = Vec::with_capacity(steps + 1);
    seq.push(z1);
    for n in 1..steps {
        seq.push(z1 + dz * n as f64);
    }
    seq.push(z2);
    Path::new(seq)
}

/// Closed elliptical path centered at `center` with semi-axes `a` and `b`,
/// sampled every `d_theta_deg` degrees (5 if not positive).
pub fn ellipse(center: Complex, a: f64, b: f64, d_theta_deg: f64) -> Path {
    let step_deg = if d_theta_deg > 0.0 { d_theta_deg } else { 5.0 };
    let steps = (360.0 / step_deg).ceil() as usize;
    let d_theta = step_deg.to_radians();
    let mut seq = Vec::with_capacity(steps + 1);
    seq.push(center + Complex::new(a, 0.0));
    for n in 1..steps {
        let th = n as f64 * d_theta;
        seq.push(center + Complex::new(a * th.cos(), b * th.sin()));
    }
    seq.push(seq[0]);
    Path::new(seq)
}

/// Settings for [`standard_grid`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    /// Plane rectangle the grid covers.
    pub view: View,
    pub horizontal_lines: usize,
    pub vertical_lines: usize,
    /// Node-count multipliers for the tweenable grid lines.
    pub horizontal_res: usize,
    pub vertical_res: usize,
    pub horizontal_color: Color,
    pub vertical_color: Color,
    pub horizontal_mid_color: Color,
    pub vertical_mid_color: Color,
    pub horizontal_width: f64,
    pub vertical_width: f64,
    pub horizontal_midlines: bool,
    pub vertical_midlines: bool,
    /// Keep a dimmed static copy of the grid underneath, so the viewer can
    /// see where transformed lines came from.
    pub background_grid: bool,
    pub axes: bool,
    pub delay: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            view: View::new(-5.0, 5.0, -5.0, 5.0),
            horizontal_lines: 10,
            vertical_lines: 10,
            horizontal_res: 1,
            vertical_res: 1,
            horizontal_color: Color::BLUE,
            vertical_color: Color::BLUE,
            horizontal_mid_color: Color::new(0.5, 0.5, 1.0),
            vertical_mid_color: Color::new(0.5, 0.5, 1.0),
            horizontal_width: 3.0,
            vertical_width: 3.0,
            horizontal_midlines: true,
            vertical_midlines: true,
            background_grid: true,
            axes: true,
            delay: 0,
        }
    }
}

/// Build the standard grid frame: an optional dimmed static copy of the
/// grid, midlines under the main lines, the main grid lines, and optional
/// static white axes, in that z-order.
pub fn standard_grid(opts: &GridOptions) -> Frame {
    let View {
        re_min: xmin,
        re_max: xmax,
        im_min: ymin,
        im_max: ymax,
    } = opts.view;

    let mut frame = Frame {
        delay: opts.delay,
        ..Frame::default()
    };

    let mut statics: Vec<Path> = Vec::new();
    if opts.background_grid {
        let h_dim = opts.horizontal_color.scaled(0.5);
        let v_dim = opts.vertical_color.scaled(0.5);
        for n in 0..opts.horizontal_lines {
            let y = grid_coord(ymin, ymax, n, opts.horizontal_lines);
            statics.push(static_line(
                Complex::new(xmin, y),
                Complex::new(xmax, y),
                h_dim,
                1.0,
            ));
        }
        for n in 0..opts.vertical_lines {
            let x = grid_coord(xmin, xmax, n, opts.vertical_lines);
            statics.push(static_line(
                Complex::new(x, ymin),
                Complex::new(x, ymax),
                v_dim,
                1.0,
            ));
        }
    }

    for n in 0..opts.horizontal_lines {
        let y = grid_coord(ymin, ymax, n, opts.horizontal_lines);
        let mut main = line(
            Complex::new(xmin, y),
            Complex::new(xmax, y),
            50 * opts.horizontal_res,
        );
        main.color = opts.horizontal_color;
        main.width = opts.horizontal_width;
        frame.paths.push(main);

        if n + 1 == opts.horizontal_lines {
            break;
        }
        if opts.horizontal_midlines {
            let y = ymin + (n as f64 + 0.5) * (ymax - ymin) / (opts.horizontal_lines - 1) as f64;
            let mut mid = line(
                Complex::new(xmin, y),
                Complex::new(xmax, y),
                50 * opts.horizontal_res,
            );
            mid.color = opts.horizontal_mid_color;
            mid.width = 1.0;
            frame.paths.insert(0, mid);
        }
    }

    for n in 0..opts.vertical_lines {
        let x = grid_coord(xmin, xmax, n, opts.vertical_lines);
        let mut main = line(
            Complex::new(x, ymin),
            Complex::new(x, ymax),
            50 * opts.vertical_res,
        );
        main.color = opts.vertical_color;
        main.width = opts.vertical_width;
        frame.paths.push(main);

        if n + 1 == opts.vertical_lines {
            break;
        }
        if opts.vertical_midlines {
            let x = xmin + (n as f64 + 0.5) * (xmax - xmin) / (opts.vertical_lines - 1) as f64;
            let mut mid = line(
                Complex::new(x, ymin),
                Complex::new(x, ymax),
                50 * opts.vertical_res,
            );
            mid.color = opts.vertical_mid_color;
            mid.width = 1.0;
            frame.paths.insert(0, mid);
        }
    }

    if opts.axes {
        push_axes(&mut frame, xmin, xmax, ymin, ymax);
    }

    let mut paths = statics;
    paths.append(&mut frame.paths);
    frame.paths = paths;
    frame
}

fn push_axes(frame: &mut Frame, xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
    let x_axis = static_line(
        Complex::new(xmin, 0.0),
        Complex::new(xmax, 0.0),
        Color::WHITE,
        5.0,
    );
    frame.paths.push(x_axis);
    let y_axis = static_line(
        Complex::new(0.0, ymin),
        Complex::new(0.0, ymax),
        Color::WHITE,
        5.0,
    );
    frame.paths.push(y_axis);
}

fn static_line(z1: Complex, z2: Complex, color: Color, width: f64) -> Path {
    let mut path = Path::new(vec![z1, z2]);
    path.color = color;
    path.width = width;
    path.is_static = true;
    path
}

/// Grid line coordinate `n` of `count` across `[min, max]`; a single line
/// sits at the midpoint.
fn grid_coord(min: f64, max: f64, n: usize, count: usize) -> f64 {
    if count == 1 {
        (min + max) / 2.0
    } else {
        min + n as f64 * (max - min) / (count - 1) as f64
    }
}
