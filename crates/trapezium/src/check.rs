//! Invariant checker for solved trapezia.
//!
//! Measures how far a `Trapezium` is from its defining properties:
//! - CD ∥ AB (normalized cross product of the two sides);
//! - interior angles 3π/4 at A, B and π/4 at C, D;
//! - legs AD ⟂ BC (normalized dot product);
//! - the selected constraint point lies on line CD (distance over height).
//!
//! Residuals are dimensionless (or radians) so a single tolerance applies.

use std::f64::consts::FRAC_PI_4;

use nalgebra::Vector2;

use crate::error::InvariantViolation;
use crate::geom2::{cross, Line2};
use crate::solve::{Trapezium, Vertex};

/// Measured deviation of each invariant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Residuals {
    pub parallel: f64,
    /// Angle error at A, B, C, D (radians).
    pub angles: [f64; 4],
    pub orthogonal: f64,
    pub on_far_side: f64,
}

impl Residuals {
    /// Largest residual; NaN propagates.
    pub fn max(&self) -> f64 {
        self.angles
            .iter()
            .copied()
            .chain([self.parallel, self.orthogonal, self.on_far_side])
            .fold(0.0, |m, r| if r.is_nan() || r > m { r } else { m })
    }
}

#[inline]
fn unit(v: Vector2<f64>) -> Vector2<f64> {
    v / v.norm()
}

/// Target interior angle at each vertex.
#[inline]
fn target_angle(v: Vertex) -> f64 {
    match v {
        Vertex::A | Vertex::B => 3.0 * FRAC_PI_4,
        Vertex::C | Vertex::D => FRAC_PI_4,
    }
}

pub fn measure(t: &Trapezium) -> Residuals {
    let ab = t.b - t.a;
    let dc = t.c - t.d;
    let angles = Vertex::ALL.map(|v| (t.interior_angle(v) - target_angle(v)).abs());
    let far = Line2::through(t.d, t.c);
    Residuals {
        parallel: cross(unit(ab), unit(dc)).abs(),
        angles,
        orthogonal: unit(t.d - t.a).dot(&unit(t.c - t.b)).abs(),
        on_far_side: far.distance_to(t.choice.point) / t.height().max(f64::MIN_POSITIVE),
    }
}

/// Measure `t` and fail on the first residual above `tol`.
pub fn check(t: &Trapezium, tol: f64) -> Result<Residuals, InvariantViolation> {
    let r = measure(t);
    let over = |x: f64| !(x <= tol);
    if over(r.parallel) {
        return Err(InvariantViolation::NotParallel(r.parallel));
    }
    for (vertex, residual) in Vertex::ALL.into_iter().zip(r.angles) {
        if over(residual) {
            return Err(InvariantViolation::Angle { vertex, residual });
        }
    }
    if over(r.orthogonal) {
        return Err(InvariantViolation::LegsNotOrthogonal(r.orthogonal));
    }
    if over(r.on_far_side) {
        return Err(InvariantViolation::ConstraintOffFarSide(r.on_far_side));
    }
    Ok(r)
}
