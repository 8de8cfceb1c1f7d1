use arganim_core::{
    color::Color,
    complex::Complex,
    config::TweenTolerances,
    interp::TweenMethod,
    path::Path,
    point::Point,
};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn mk_path(nodes: &[(f64, f64)]) -> Path {
    Path::new(nodes.iter().map(|&(re, im)| Complex::new(re, im)).collect())
}

/// it should return an exact copy when tweening a point with itself at any t
#[test]
fn equal_point_tween_is_copy() {
    let mut p = Point::new(Complex::new(3.0, -2.0));
    p.size = 9.0;
    p.fill = Color::new(0.2, 0.4, 0.6);
    for t in [0.0, 0.37, 0.5, 1.0] {
        assert_eq!(p.tween(&p, t, TweenMethod::Spiral), p);
        assert_eq!(p.tween(&p, t, TweenMethod::Direct), p);
    }
}

/// it should return an exact copy when tweening a path with itself, deadends included
#[test]
fn equal_path_tween_is_copy() {
    let mut p = mk_path(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
    p.deadends.insert(1);
    p.width = 4.5;
    let out = p.tween(&p, 0.61, TweenMethod::Spiral).unwrap();
    assert_eq!(out, p);
}

/// it should degenerate spiral motion to the radius when both angles match
#[test]
fn spiral_shared_angle_moves_radially() {
    let mut a = Point::new(Complex::ZERO);
    a.size = 10.0;
    a.fill = Color::RED;
    let mut b = Point::new(Complex::new(10.0, 0.0));
    b.size = 20.0;
    b.fill = Color::BLUE;

    let mid = a.tween(&b, 0.5, TweenMethod::Spiral);
    approx(mid.pos.re, 5.0, 1e-12);
    approx(mid.pos.im, 0.0, 1e-12);
    approx(mid.size, 15.0, 1e-12);
    assert_eq!(mid.fill, Color::new(0.5, 0.0, 0.5));
}

/// it should interpolate angles across the branch cut along the shortest arc
#[test]
fn spiral_crosses_branch_cut() {
    let a = Point::new(Complex::from_polar(1.0, 350f64.to_radians()));
    let b = Point::new(Complex::from_polar(1.0, 10f64.to_radians()));
    let mid = a.tween(&b, 0.5, TweenMethod::Spiral);
    // Halfway is at angle 0, not at 180.
    approx(mid.pos.re, 1.0, 1e-9);
    approx(mid.pos.im, 0.0, 1e-9);
}

/// it should tween non-positional style attributes linearly for both methods
#[test]
fn style_attributes_interpolate_linearly() {
    let mut a = Point::new(Complex::ONE);
    a.stroke_weight = 1.0;
    a.size = 10.0;
    let mut b = Point::new(Complex::new(2.0, 0.0));
    b.stroke_weight = 3.0;
    b.size = 30.0;

    for method in [TweenMethod::Spiral, TweenMethod::Direct] {
        let q = a.tween(&b, 0.25, method);
        approx(q.stroke_weight, 1.5, 1e-12);
        approx(q.size, 15.0, 1e-12);
    }

    let mut pa = mk_path(&[(0.0, 0.0), (1.0, 0.0)]);
    pa.width = 3.0;
    pa.color = Color::BLACK;
    let mut pb = mk_path(&[(0.0, 0.0), (1.0, 1.0)]);
    pb.width = 5.0;
    pb.color = Color::WHITE;
    let q = pa.tween(&pb, 0.25, TweenMethod::Direct).unwrap();
    approx(q.width, 3.5, 1e-12);
    assert_eq!(q.color, Color::new(0.25, 0.25, 0.25));
}

/// it should deadend both edges around a node that interpolates to NaN
#[test]
fn direct_tween_deadends_nan_nodes() {
    let a = mk_path(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    let b = mk_path(&[(0.0, 0.0), (f64::NAN, f64::NAN), (2.0, 0.0)]);
    let out = a.tween(&b, 0.5, TweenMethod::Direct).unwrap();
    assert!(!out.seq[1].is_finite());
    let mut deadends: Vec<usize> = out.deadends.iter().copied().collect();
    deadends.sort_unstable();
    assert_eq!(deadends, vec![0, 1]);
}

/// it should keep deadend indices in range when an endpoint node goes bad
#[test]
fn direct_tween_clamps_deadends_at_sequence_ends() {
    let a = mk_path(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    let b = mk_path(&[(f64::INFINITY, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    let out = a.tween(&b, 0.5, TweenMethod::Direct).unwrap();
    assert!(out.deadends.iter().all(|&n| n < out.seq.len() - 1));
    assert!(out.deadends.contains(&0));

    let c = mk_path(&[(0.0, 0.0), (1.0, 0.0), (f64::NAN, 0.0)]);
    let out = a.tween(&c, 0.5, TweenMethod::Direct).unwrap();
    assert!(out.deadends.iter().all(|&n| n < out.seq.len() - 1));
    assert!(out.deadends.contains(&1));
}

/// it should refuse to tween paths whose sequences differ in length
#[test]
fn path_length_mismatch_is_fatal() {
    let a = mk_path(&[(0.0, 0.0), (1.0, 0.0)]);
    let b = mk_path(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    let err = a.tween(&b, 0.5, TweenMethod::Direct).unwrap_err();
    assert_eq!(err.category(), "precondition");
}

/// it should sever edges between nodes revolving in opposite directions
#[test]
fn spiral_tween_severs_conflicting_revolutions() {
    let a = mk_path(&[(1.0, 0.0), (1.0, 0.0)]);
    let q0 = Complex::from_polar(1.0, 0.5);
    let q1 = Complex::from_polar(1.0, -0.5);
    let b = Path::new(vec![q0, q1]);

    let mid = a.tween(&b, 0.5, TweenMethod::Spiral).unwrap();
    assert!(mid.deadends.contains(&0));
}

/// it should leave the end states intact outside the interior t window
#[test]
fn spiral_tween_keeps_ends_connected() {
    let a = mk_path(&[(1.0, 0.0), (1.0, 0.0)]);
    let b = Path::new(vec![
        Complex::from_polar(1.0, 0.5),
        Complex::from_polar(1.0, -0.5),
    ]);

    for t in [0.0, 0.005, 0.995, 1.0] {
        let out = a.tween(&b, t, TweenMethod::Spiral).unwrap();
        assert!(out.deadends.is_empty(), "severed at t={t}");
    }
}

/// it should honor a widened angular tolerance as a calibration knob
#[test]
fn spiral_tolerances_are_configurable() {
    let a = mk_path(&[(1.0, 0.0), (1.0, 0.0)]);
    let b = Path::new(vec![
        Complex::from_polar(1.0, 0.5),
        Complex::from_polar(1.0, -0.5),
    ]);

    // The combined divergence is 1.0 rad; a tolerance above that keeps the
    // edge connected where the default severs it.
    let relaxed = TweenTolerances {
        angle_tol: 1.5,
        ..TweenTolerances::default()
    };
    let out = a
        .tween_with(&b, 0.5, TweenMethod::Spiral, &relaxed)
        .unwrap();
    assert!(out.deadends.is_empty());
}

/// it should not run the discontinuity scan for the direct method
#[test]
fn direct_tween_has_no_angular_scan() {
    let a = mk_path(&[(1.0, 0.0), (1.0, 0.0)]);
    let b = Path::new(vec![
        Complex::from_polar(1.0, 0.5),
        Complex::from_polar(1.0, -0.5),
    ]);
    let out = a.tween(&b, 0.5, TweenMethod::Direct).unwrap();
    assert!(out.deadends.is_empty());
}
