//! Solver configuration and the transient line type.
//!
//! - `SolveCfg`: guard angle, tolerances and the slope strategy.
//! - `Side`: which side of a directed base line a point lies on.
//! - `Line2`: infinite line `p + t·dir`, the only line shape the solver builds.

use nalgebra::{Point2, Vector2};

use super::cfg::{COINCIDE_EPS, GUARD_ANGLE, SINGULAR_EPS};
use super::util::{cross, near_zero};

/// How the legs AD and BC are derived from the offset direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Rotate the unit offset direction by 45° and intersect in point/direction form.
    #[default]
    Direction,
    /// Closed-form slopes `tan(angle ± 45°)` and `−1/mA`, intersected in slope form.
    Slope,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Direction => "direction",
            Self::Slope => "slope",
        }
    }
}

/// Solver configuration (guard angle, tolerances, strategy).
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Angle (radians) the rotation guard turns the inputs by before solving.
    pub guard_angle: f64,
    pub eps_coincide: f64,
    pub eps_singular: f64,
    pub strategy: Strategy,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            guard_angle: GUARD_ANGLE,
            eps_coincide: COINCIDE_EPS,
            eps_singular: SINGULAR_EPS,
            strategy: Strategy::Direction,
        }
    }
}

impl SolveCfg {
    #[inline]
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }
    #[inline]
    pub fn with_guard_angle(self, guard_angle: f64) -> Self {
        Self {
            guard_angle,
            ..self
        }
    }
}

/// Side of a directed line, looking along its direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Counter-clockwise of the direction (`cross(dir, offset) > 0`).
    Left,
    Right,
}

impl Side {
    /// Side of `offset` relative to the direction `base`. Zero cross product counts as `Right`.
    #[inline]
    pub fn of(base: Vector2<f64>, offset: Vector2<f64>) -> Self {
        if cross(base, offset) > 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }
    /// `+1` for `Left`, `−1` for `Right`: the sense of the 45° turn towards the outside.
    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Infinite line `p + t·dir` (no normalization required here).
#[derive(Clone, Copy, Debug)]
pub struct Line2 {
    pub p: Point2<f64>,
    pub dir: Vector2<f64>,
}

impl Line2 {
    #[inline]
    pub fn new(p: Point2<f64>, dir: Vector2<f64>) -> Self {
        Self { p, dir }
    }
    #[inline]
    pub fn through(p: Point2<f64>, q: Point2<f64>) -> Self {
        Self { p, dir: q - p }
    }
    /// `dy/dx`, or None for a vertical (or zero) direction.
    #[inline]
    pub fn slope(&self, eps: f64) -> Option<f64> {
        if near_zero(self.dir.x, self.dir.norm(), eps) {
            None
        } else {
            Some(self.dir.y / self.dir.x)
        }
    }
    /// Unsigned distance from `q` to the line. Zero direction gives NaN.
    #[inline]
    pub fn distance_to(&self, q: Point2<f64>) -> f64 {
        cross(self.dir, q - self.p).abs() / self.dir.norm()
    }
    /// Intersection point, or None when the directions are parallel within `eps`.
    ///
    /// Solves `p + s·u = q + t·v` by crossing both sides with `v`.
    pub fn intersect(&self, other: &Line2, eps: f64) -> Option<Point2<f64>> {
        let denom = cross(self.dir, other.dir);
        if near_zero(denom, self.dir.norm() * other.dir.norm(), eps) {
            return None;
        }
        let s = cross(other.p - self.p, other.dir) / denom;
        Some(self.p + self.dir * s)
    }
}
