//! Planar vector algebra used by the trapezium solver.
//!
//! Purpose
//! - Keep the handful of primitives the solver needs (projection, rotation,
//!   cross product, line intersection) in one place, free of any knowledge of
//!   trapezia, so each can be tested in isolation.
//! - Points are `Point2<f64>`, displacements `Vector2<f64>`; rotations go
//!   through `Rotation2` (the standard 2×2 rotation matrix).
//!
//! Conventions
//! - Angles are radians, counter-clockwise positive.
//! - Tolerances are relative; see `near_zero` and `SolveCfg`.

mod cfg;
mod types;
mod util;

pub use types::{Line2, Side, SolveCfg, Strategy};
pub use util::{angle_between, angle_of, cross, perp, project, reject, rotate, rotate_point};

pub(crate) use util::near_zero;

#[cfg(test)]
mod tests;
