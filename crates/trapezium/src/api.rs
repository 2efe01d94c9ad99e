//! Plain-coordinate surface for I/O collaborators.
//!
//! The core's contract is "four points in, two points out"; these helpers
//! take and return bare `f64` tuples so argument parsers and reporters never
//! touch nalgebra types.

use crate::error::TrapeziumError;
use crate::geom2::SolveCfg;
use crate::solve::{solve, Problem};

/// `(C, D)` for `[xA, yA, xB, yB, xP1, yP1, xP2, yP2]` under the default config.
pub fn far_side(coords: [f64; 8]) -> Result<([f64; 2], [f64; 2]), TrapeziumError> {
    far_side_with(coords, &SolveCfg::default())
}

/// `(C, D)` for `coords` under `cfg`.
pub fn far_side_with(
    coords: [f64; 8],
    cfg: &SolveCfg,
) -> Result<([f64; 2], [f64; 2]), TrapeziumError> {
    let t = solve(&Problem::from_coords(coords), cfg)?;
    Ok(([t.c.x, t.c.y], [t.d.x, t.d.y]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Degeneracy;

    #[test]
    fn worked_example() {
        let (c, d) = far_side([0.0, 0.0, 2.0, 0.0, 1.0, 1.0, 1.0, -0.3]).unwrap();
        assert!((c[0] - 3.0).abs() < 1e-9 && (c[1] - 1.0).abs() < 1e-9);
        assert!((d[0] + 1.0).abs() < 1e-9 && (d[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_base() {
        let err = far_side([0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, -0.3]).unwrap_err();
        assert_eq!(err, TrapeziumError::DegenerateInput(Degeneracy::CoincidentBase));
    }
}
