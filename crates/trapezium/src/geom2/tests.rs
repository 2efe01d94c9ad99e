use super::*;
use nalgebra::{point, vector, Point2, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

#[test]
fn project_onto_axis_and_diagonal() {
    let a = vector![3.0, 4.0];
    let px = project(a, vector![2.0, 0.0]);
    assert!((px - vector![3.0, 0.0]).norm() < 1e-12);
    let pd = project(a, vector![1.0, 1.0]);
    assert!((pd - vector![3.5, 3.5]).norm() < 1e-12);
    // rejection is orthogonal to the base and completes the decomposition
    let r = reject(a, vector![1.0, 1.0]);
    assert!(r.dot(&vector![1.0, 1.0]).abs() < 1e-12);
    assert!((pd + r - a).norm() < 1e-12);
}

#[test]
fn project_onto_zero_is_not_finite() {
    let p = project(vector![1.0, 2.0], Vector2::zeros());
    assert!(!p.x.is_finite() && !p.y.is_finite());
}

#[test]
fn rotate_quarter_turns() {
    let v = rotate(vector![1.0, 0.0], FRAC_PI_2);
    assert!((v - vector![0.0, 1.0]).norm() < 1e-12);
    let w = rotate(vector![1.0, 0.0], PI);
    assert!((w - vector![-1.0, 0.0]).norm() < 1e-12);
    let p = rotate_point(point![0.0, 2.0], -FRAC_PI_2);
    assert!((p - point![2.0, 0.0]).norm() < 1e-12);
    assert!((perp(vector![2.0, 1.0]) - rotate(vector![2.0, 1.0], FRAC_PI_2)).norm() < 1e-12);
}

#[test]
fn rotate_roundtrip_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let p = Point2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        let th: f64 = rng.gen_range(-10.0..10.0);
        let back = rotate_point(rotate_point(p, th), -th);
        assert!((back - p).norm() < 1e-12 * (1.0 + p.coords.norm()));
    }
}

#[test]
fn angles() {
    assert!((angle_of(vector![-1.0, 1.0]) - 3.0 * FRAC_PI_4).abs() < 1e-12);
    assert!((angle_of(vector![-1.0, 0.0]) - PI).abs() < 1e-12);
    let a = angle_between(vector![1.0, 0.0], vector![-1.0, 1.0]);
    assert!((a - 3.0 * FRAC_PI_4).abs() < 1e-12);
    let b = angle_between(vector![1.0, 0.0], vector![-1.0, -1.0]);
    assert!((b - 3.0 * FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn side_of_base() {
    let base = vector![1.0, 0.0];
    assert_eq!(Side::of(base, vector![0.0, 2.0]), Side::Left);
    assert_eq!(Side::of(base, vector![0.0, -2.0]), Side::Right);
    assert_eq!(Side::Left.signum(), 1.0);
    assert_eq!(Side::Right.signum(), -1.0);
}

#[test]
fn line_intersection_and_parallels() {
    let l1 = Line2::new(point![0.0, 0.0], vector![1.0, 1.0]);
    let l2 = Line2::through(point![0.0, 2.0], point![2.0, 2.0]);
    let x = l1.intersect(&l2, 1e-12).unwrap();
    assert!((x - point![2.0, 2.0]).norm() < 1e-12);
    let l3 = Line2::new(point![5.0, 0.0], vector![-3.0, -3.0]);
    assert!(l1.intersect(&l3, 1e-12).is_none());
    // zero direction never intersects
    let l4 = Line2::new(point![1.0, 1.0], Vector2::zeros());
    assert!(l1.intersect(&l4, 1e-12).is_none());
    assert!((l2.distance_to(point![7.0, -1.0]) - 3.0).abs() < 1e-12);
}

#[test]
fn line_slope() {
    let l = Line2::through(point![1.0, 1.0], point![3.0, 2.0]);
    assert!((l.slope(1e-12).unwrap() - 0.5).abs() < 1e-12);
    let v = Line2::through(point![1.0, 1.0], point![1.0, 4.0]);
    assert!(v.slope(1e-12).is_none());
}

#[test]
fn near_zero_treats_nan_as_zero() {
    assert!(near_zero(0.0, 0.0, 1e-12));
    assert!(near_zero(f64::NAN, 1.0, 1e-12));
    assert!(near_zero(1e-13, 1.0, 1e-12));
    assert!(!near_zero(1e-13, 1e-3, 1e-12));
}

#[test]
fn cfg_defaults() {
    let cfg = SolveCfg::default();
    assert_eq!(cfg.guard_angle, std::f64::consts::E);
    assert_eq!(cfg.strategy, Strategy::Direction);
    let s = cfg.with_strategy(Strategy::Slope).with_guard_angle(1.0);
    assert_eq!(s.strategy, Strategy::Slope);
    assert_eq!(s.guard_angle, 1.0);
    assert_eq!(s.eps_singular, cfg.eps_singular);
}
