//! Right-trapezium construction.
//!
//! Given the known side AB and two constraint points P1, P2, compute C and D
//! such that ABCD has CD ∥ AB, interior angles 135° at A and B and 45° at C
//! and D, with CD through whichever constraint point lies farther from AB.
//!
//! Layout
//! - `geom2`: vector algebra (projection, rotation, lines) and `SolveCfg`.
//! - `solve`: rotation guard, orientation resolver, slope and intersection
//!   solvers, composed by `solve::solve`.
//! - `check`: residuals of the defining invariants.
//! - `rand2`: reproducible random problems.
//! - `api`: plain-coordinate entry points for I/O collaborators.

pub mod api;
pub mod check;
pub mod error;
pub mod geom2;
mod log;
pub mod rand2;
pub mod solve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Degeneracy, InvariantViolation, Singularity, TrapeziumError};
pub use geom2::{SolveCfg, Strategy};
pub use solve::{solve, Problem, Trapezium};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::check::{check, measure, Residuals};
    pub use crate::error::{Degeneracy, InvariantViolation, Singularity, TrapeziumError};
    pub use crate::geom2::{Line2, Side, SolveCfg, Strategy};
    pub use crate::rand2::{draw_problem, draw_problems, ReplayToken, SampleCfg};
    pub use crate::solve::{solve, Choice, Constraint, Leg, Problem, Trapezium, Vertex};
    pub use nalgebra::{Point2, Vector2};
}
