use thiserror::Error;

use crate::solve::{Leg, Vertex};

/// Errors raised while constructing a trapezium.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrapeziumError {
    #[error("degenerate input: {0}")]
    DegenerateInput(#[from] Degeneracy),

    #[error("numerical singularity: {0}")]
    NumericalSingularity(#[from] Singularity),

    #[error("coordinate of point {point} is not finite ({value})")]
    NonFinite { point: &'static str, value: f64 },
}

/// Input geometry for which no trapezium exists.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    #[error("points A and B coincide, so line AB is undefined")]
    CoincidentBase,

    #[error("P1 and P2 both lie on line AB, so the parallel side CD has no offset")]
    ConstraintsOnBase,
}

/// A division by (near) zero in the closed-form solve.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Singularity {
    #[error("line AB is vertical in the solving frame, its slope is undefined")]
    VerticalBase,

    #[error("leg {leg} is vertical in the solving frame, its slope is undefined")]
    UndefinedSlope { leg: Leg },

    #[error("leg {leg} is parallel to AB, it never meets the line through the constraint point")]
    LegParallelToBase { leg: Leg },
}

/// A solved trapezium that fails one of its defining invariants.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvariantViolation {
    #[error("CD is not parallel to AB (residual {0:e})")]
    NotParallel(f64),

    #[error("interior angle at {vertex} is off by {residual:e} rad")]
    Angle { vertex: Vertex, residual: f64 },

    #[error("legs AD and BC are not orthogonal (residual {0:e})")]
    LegsNotOrthogonal(f64),

    #[error("the selected constraint point is off line CD (residual {0:e})")]
    ConstraintOffFarSide(f64),
}
