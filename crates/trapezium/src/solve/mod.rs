//! Trapezium construction: C and D from the known side AB and constraints P1, P2.
//!
//! Purpose
//! - Build ABCD with CD ∥ AB, interior angles 135° at A and B and 45° at C
//!   and D, and CD through whichever constraint point lies farther from AB.
//!
//! Pipeline (pure, stateless, run once per call)
//! 1. `orient`: perpendicular offsets of P1, P2 from AB; keep the larger.
//!    Selection happens in the caller's frame so exact ties stay exact.
//! 2. `guard`: rotate all inputs by θ₀ (default e radians).
//! 3. `slope`: leg directions (or slopes) at ±45° from the offset direction.
//! 4. `intersect`: meet each leg with the parallel through the kept point.
//! 5. `guard`: rotate C, D (and the offset) back by −θ₀.
//!
//! Failure modes are typed (`TrapeziumError`) and raised at the division that
//! would have produced a non-finite coordinate.

mod guard;
mod intersect;
mod orient;
mod slope;
mod types;

pub use guard::{RotationGuard, Turn};
pub use types::{Choice, Constraint, Leg, Problem, Trapezium, Vertex};

use nalgebra::Point2;

use crate::error::TrapeziumError;
use crate::geom2::{SolveCfg, Strategy};
use crate::log::debug;

/// Solve `problem` under `cfg`.
pub fn solve(problem: &Problem, cfg: &SolveCfg) -> Result<Trapezium, TrapeziumError> {
    ensure_finite(problem)?;
    let keep = orient::select(problem.a, problem.b, problem.p1, problem.p2, cfg.eps_coincide)?;
    let guard = RotationGuard::new(cfg.guard_angle);
    let (mut choice, [c, d]) = guard.around(problem.points(), |[a, b, p1, p2]| {
        let point = match keep {
            Constraint::P1 => p1,
            Constraint::P2 => p2,
        };
        solve_in_frame(a, b, orient::candidate(a, b, keep, point), cfg)
    })?;
    // Report the caller's point, not its rotated round-trip.
    choice.point = problem.constraint(choice.constraint);
    debug!(
        strategy = cfg.strategy.name(),
        c = ?(c.x, c.y),
        d = ?(d.x, d.y),
        "trapezium solved"
    );
    Ok(Trapezium {
        a: problem.a,
        b: problem.b,
        c,
        d,
        choice,
    })
}

/// Steps 3–4 in whatever frame the points are given.
fn solve_in_frame(
    a: Point2<f64>,
    b: Point2<f64>,
    choice: Choice,
    cfg: &SolveCfg,
) -> Result<(Choice, [Point2<f64>; 2]), TrapeziumError> {
    let far = match cfg.strategy {
        Strategy::Direction => {
            let legs = slope::leg_directions(&choice);
            intersect::by_direction(a, b, &choice, legs, cfg.eps_singular)?
        }
        Strategy::Slope => {
            let slopes = slope::leg_slopes(&choice, cfg.eps_singular)?;
            intersect::by_slope(a, b, &choice, slopes, cfg.eps_singular)?
        }
    };
    Ok((choice, far))
}

fn ensure_finite(problem: &Problem) -> Result<(), TrapeziumError> {
    let named = [
        ("A", problem.a),
        ("B", problem.b),
        ("P1", problem.p1),
        ("P2", problem.p2),
    ];
    for (point, p) in named {
        if let Some(&value) = p.coords.iter().find(|v| !v.is_finite()) {
            return Err(TrapeziumError::NonFinite { point, value });
        }
    }
    Ok(())
}
