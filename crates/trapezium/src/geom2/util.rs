use nalgebra::{Point2, Rotation2, Vector2};

/// Orthogonal projection of `a` onto `b`: `(a·b / b·b) b`.
///
/// Pre: `b ≠ 0`; a zero `b` yields NaN components.
#[inline]
pub fn project(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    b * (a.dot(&b) / b.dot(&b))
}

/// Component of `a` orthogonal to `b` (`a − project(a, b)`).
#[inline]
pub fn reject(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    a - project(a, b)
}

/// `v` rotated counter-clockwise by `theta` about the origin.
#[inline]
pub fn rotate(v: Vector2<f64>, theta: f64) -> Vector2<f64> {
    Rotation2::new(theta) * v
}

/// Point `p` rotated counter-clockwise by `theta` about the origin.
#[inline]
pub fn rotate_point(p: Point2<f64>, theta: f64) -> Point2<f64> {
    Rotation2::new(theta) * p
}

/// z-component of the 3D cross product; positive if `b` is counter-clockwise from `a`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// `v` turned by +90°.
#[inline]
pub fn perp(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Absolute direction of `v` in (−π, π].
#[inline]
pub fn angle_of(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x)
}

/// Unsigned angle between `a` and `b` in [0, π].
#[inline]
pub fn angle_between(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    cross(a, b).atan2(a.dot(&b)).abs()
}

/// `|x| <= eps·scale`. NaN counts as zero so it surfaces as a singularity.
#[inline]
pub(crate) fn near_zero(x: f64, scale: f64, eps: f64) -> bool {
    !(x.abs() > eps * scale)
}
