use std::cell::Cell;

use arganim_core::{
    color::Color,
    complex::Complex,
    config::{View, WindowSize},
    error::EngineError,
    frame::Frame,
    interp::TweenMethod,
    path::Path,
    point::Point,
    render::{compile_frame, DrawOp},
};

fn mk_path(nodes: &[(f64, f64)]) -> Path {
    Path::new(nodes.iter().map(|&(re, im)| Complex::new(re, im)).collect())
}

fn styled(mut path: Path, color: Color, width: f64) -> Path {
    path.color = color;
    path.width = width;
    path
}

/// it should refuse to tween frames with mismatched element counts
#[test]
fn frame_tween_checks_structure() {
    let a = Frame::new(vec![Point::default()], vec![]);
    let b = Frame::new(vec![Point::default(), Point::default()], vec![]);
    let err = a.tween(&b, 0.5, TweenMethod::Spiral).unwrap_err();
    assert!(matches!(err, EngineError::PointCountMismatch { left: 1, right: 2 }));

    let c = Frame::new(vec![], vec![Path::default()]);
    let d = Frame::new(vec![], vec![]);
    let err = c.tween(&d, 0.5, TweenMethod::Spiral).unwrap_err();
    assert!(matches!(err, EngineError::PathCountMismatch { left: 1, right: 0 }));
    assert_eq!(err.category(), "precondition");
}

/// it should interpolate the background channel-wise and zero the delay
#[test]
fn frame_tween_background_and_delay() {
    let mut a = Frame::default();
    a.background = Color::BLACK;
    a.delay = 7;
    let mut b = Frame::default();
    b.background = Color::WHITE;
    b.delay = 3;

    let mid = a.tween(&b, 0.25, TweenMethod::Spiral).unwrap();
    assert_eq!(mid.background, Color::new(0.25, 0.25, 0.25));
    assert_eq!(mid.delay, 0);
}

/// it should apply a transform per element and turn failures into NaN
#[test]
fn transform_recovers_failures_locally() {
    let good = Point::new(Complex::new(1.0, 0.0));
    let doomed = Point::new(Complex::new(5.0, 0.0));
    let frame = Frame::new(vec![good, doomed], vec![mk_path(&[(0.0, 0.0), (1.0, 0.0)])]);

    let out = frame.transform(|z| {
        if z.re > 2.0 {
            Err(EngineError::TransformFailed {
                reason: "pole".into(),
            })
        } else {
            Ok(z * 2.0)
        }
    });

    assert_eq!(out.points[0].pos, Complex::new(2.0, 0.0));
    assert!(!out.points[1].pos.is_finite());
    assert_eq!(out.paths[0].seq[1], Complex::new(2.0, 0.0));
}

/// it should pass static elements through unchanged and unevaluated
#[test]
fn transform_skips_static_elements() {
    let mut grid_line = mk_path(&[(0.0, 0.0), (1.0, 0.0)]);
    grid_line.is_static = true;
    let mut pinned = Point::new(Complex::new(2.0, 2.0));
    pinned.is_static = true;
    let moving = Point::new(Complex::new(1.0, 1.0));

    let calls = Cell::new(0usize);
    let frame = Frame::new(vec![pinned.clone(), moving], vec![grid_line.clone()]);
    let out = frame.transform(|z| {
        calls.set(calls.get() + 1);
        Ok(z * 3.0)
    });

    // Only the one non-static point was evaluated.
    assert_eq!(calls.get(), 1);
    assert_eq!(out.points[0], pinned);
    assert_eq!(out.points[1].pos, Complex::new(3.0, 3.0));
    assert_eq!(out.paths[0], grid_line);
}

/// it should merge adjacent same-style paths with deadends at the junctions
#[test]
fn optimize_merges_style_runs() {
    let blue = Color::BLUE;
    let mut frame = Frame::new(
        vec![],
        vec![
            styled(mk_path(&[(0.0, 0.0), (1.0, 0.0)]), blue, 3.0),
            styled(mk_path(&[(2.0, 0.0), (3.0, 0.0)]), blue, 3.0),
            styled(mk_path(&[(4.0, 0.0), (5.0, 0.0)]), blue, 3.0),
            styled(mk_path(&[(6.0, 0.0), (7.0, 0.0)]), Color::WHITE, 1.0),
        ],
    );
    frame.optimize_paths();

    assert!(frame.optimized);
    assert_eq!(frame.paths.len(), 2);
    assert_eq!(frame.paths[0].seq.len(), 6);
    let mut junctions: Vec<usize> = frame.paths[0].deadends.iter().copied().collect();
    junctions.sort_unstable();
    assert_eq!(junctions, vec![1, 3]);
}

/// it should be idempotent across repeated optimization passes
#[test]
fn optimize_is_idempotent() {
    let mut frame = Frame::new(
        vec![],
        vec![
            mk_path(&[(0.0, 0.0), (1.0, 0.0)]),
            mk_path(&[(2.0, 0.0), (3.0, 0.0)]),
        ],
    );
    frame.optimize_paths();
    let once = frame.clone();
    frame.optimize_paths();
    assert_eq!(frame, once);
}

/// it should not change the compiled draw output, only the batching
#[test]
fn optimize_preserves_rendered_output() {
    let frame = Frame::new(
        vec![Point::new(Complex::new(1.0, 1.0))],
        vec![
            styled(mk_path(&[(0.0, 0.0), (1.0, 0.0)]), Color::BLUE, 3.0),
            styled(mk_path(&[(2.0, 0.0), (3.0, 1.0)]), Color::BLUE, 3.0),
            styled(mk_path(&[(4.0, 0.0), (5.0, 1.0)]), Color::WHITE, 1.0),
        ],
    );
    let mut optimized = frame.clone();
    optimized.optimize_paths();

    let view = View::default();
    let window = WindowSize::default();
    assert_eq!(
        compile_frame(&frame, &view, &window),
        compile_frame(&optimized, &view, &window)
    );
}

/// it should introduce exactly one junction deadend when ends stay apart
#[test]
fn concat_junction_deadends() {
    let mut a = mk_path(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    a.deadends.insert(0);
    let mut b = mk_path(&[(5.0, 0.0), (6.0, 0.0)]);
    b.deadends.insert(0);

    let joined = a.concat(&b, false);
    let mut deadends: Vec<usize> = joined.deadends.iter().copied().collect();
    deadends.sort_unstable();
    // Junction at len(a)-1 = 2; b's deadend 0 shifted to 3.
    assert_eq!(deadends, vec![0, 2, 3]);

    let connected = a.concat(&b, true);
    let mut deadends: Vec<usize> = connected.deadends.iter().copied().collect();
    deadends.sort_unstable();
    assert_eq!(deadends, vec![0, 3]);
}

/// it should flatten points into 36-vertex fans with per-vertex byte colors
#[test]
fn prerender_point_tables() {
    let mut point = Point::new(Complex::ZERO);
    point.size = 15.0;
    point.fill = Color::new(0.5, 0.0, 1.0);
    let mut frame = Frame::new(vec![point], vec![]);
    frame.background = Color::new(0.1, 0.2, 0.3);
    frame.delay = 4;

    let fast = frame.prerender(&View::default(), &WindowSize::default());
    assert_eq!(fast.background, Color::new(0.1, 0.2, 0.3));
    assert_eq!(fast.delay, 4);
    assert_eq!(fast.point_table.len(), 1);

    let batch = &fast.point_table[0];
    assert_eq!(batch.vertices.len(), 72);
    assert_eq!(batch.colors.len(), 36 * 3);
    assert_eq!(&batch.colors[..3], &[128, 0, 255]);
    // First fan vertex sits at angle 0: center (400, 400) plus radius 7.5.
    assert_eq!(batch.vertices[0], 407.5);
    assert_eq!(batch.vertices[1], 400.0);
}

/// it should keep path tables dense with sentinel pairs for deadend edges
#[test]
fn prerender_path_tables_stay_dense() {
    let mut path = mk_path(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    path.deadends.insert(0);
    let mut frame = Frame::new(vec![], vec![path]);

    let fast = frame.prerender(&View::default(), &WindowSize::default());
    assert_eq!(fast.path_table.len(), 1);
    assert_eq!(fast.path_widths, vec![3.0]);

    let batch = &fast.path_table[0];
    // Two edges, four coordinates each, dense across the deadend.
    assert_eq!(batch.vertices.len(), 8);
    assert!(batch.vertices[..4].iter().all(|v| v.is_infinite()));
    assert_eq!(&batch.vertices[4..], &[440.0, 400.0, 480.0, 400.0]);
    assert_eq!(batch.colors.len(), 4 * 3);
}

/// it should skip non-finite points and edges in immediate compilation
#[test]
fn compile_skips_unplottable_elements() {
    let mut bad_point = Point::new(Complex::nan());
    bad_point.size = 10.0;
    let good_point = Point::new(Complex::ZERO);
    let mut torn = mk_path(&[(0.0, 0.0), (f64::NAN, 0.0), (2.0, 0.0)]);
    torn.deadends.insert(0);

    let frame = Frame::new(vec![bad_point, good_point], vec![torn]);
    let list = compile_frame(&frame, &View::default(), &WindowSize::default());

    let fans = list
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Fan { .. }))
        .count();
    assert_eq!(fans, 1);
    // Edge 0 is a deadend and edge 1 touches a NaN node: no line output.
    let lines = list
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Lines { .. }))
        .count();
    assert_eq!(lines, 0);
}
