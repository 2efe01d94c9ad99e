//! Intersection solver: meet each leg with the line through the selected
//! constraint point parallel to AB. Returns `[C, D]`.

use nalgebra::Point2;

use super::slope::{LegDirections, LegSlopes};
use super::types::{Choice, Leg};
use crate::error::Singularity;
use crate::geom2::{near_zero, Line2};

/// Point/direction form: `Line2::intersect` on each leg.
pub(crate) fn by_direction(
    a: Point2<f64>,
    b: Point2<f64>,
    choice: &Choice,
    legs: LegDirections,
    eps: f64,
) -> Result<[Point2<f64>; 2], Singularity> {
    let far = Line2::new(choice.point, b - a);
    let d = Line2::new(a, legs.ad)
        .intersect(&far, eps)
        .ok_or(Singularity::LegParallelToBase { leg: Leg::AD })?;
    let c = Line2::new(b, legs.bc)
        .intersect(&far, eps)
        .ok_or(Singularity::LegParallelToBase { leg: Leg::BC })?;
    Ok([c, d])
}

/// Slope-intercept form. Needs a non-vertical AB.
pub(crate) fn by_slope(
    a: Point2<f64>,
    b: Point2<f64>,
    choice: &Choice,
    slopes: LegSlopes,
    eps: f64,
) -> Result<[Point2<f64>; 2], Singularity> {
    let m_ab = Line2::through(a, b)
        .slope(eps)
        .ok_or(Singularity::VerticalBase)?;
    let p = choice.point;
    let d = meet(a, slopes.ma, p, m_ab, eps).ok_or(Singularity::LegParallelToBase { leg: Leg::AD })?;
    let c = meet(b, slopes.mb, p, m_ab, eps).ok_or(Singularity::LegParallelToBase { leg: Leg::BC })?;
    Ok([c, d])
}

/// Line through `anchor` with slope `m` against the line through `p` with slope `m_ab`.
fn meet(anchor: Point2<f64>, m: f64, p: Point2<f64>, m_ab: f64, eps: f64) -> Option<Point2<f64>> {
    let denom = m - m_ab;
    if near_zero(denom, 1.0 + m.abs() + m_ab.abs(), eps) {
        return None;
    }
    let x = (p.y - anchor.y + m * anchor.x - m_ab * p.x) / denom;
    let y = m_ab * (x - p.x) + p.y;
    Some(Point2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Side;
    use crate::solve::Constraint;
    use nalgebra::{point, vector};

    fn choice_at(point: Point2<f64>, offset: nalgebra::Vector2<f64>) -> Choice {
        Choice {
            constraint: Constraint::P1,
            point,
            offset,
            side: Side::Left,
        }
    }

    #[test]
    fn slope_form_matches_worked_example() {
        let (a, b) = (point![0.0, 0.0], point![2.0, 0.0]);
        let ch = choice_at(point![1.0, 1.0], vector![0.0, 1.0]);
        let [c, d] = by_slope(a, b, &ch, LegSlopes { ma: -1.0, mb: 1.0 }, 1e-12).unwrap();
        assert!((d - point![-1.0, 1.0]).norm() < 1e-12);
        assert!((c - point![3.0, 1.0]).norm() < 1e-12);
    }

    #[test]
    fn direction_form_matches_worked_example() {
        let (a, b) = (point![0.0, 0.0], point![2.0, 0.0]);
        let ch = choice_at(point![1.0, 1.0], vector![0.0, 1.0]);
        let legs = LegDirections {
            ad: vector![-1.0, 1.0],
            bc: vector![-1.0, -1.0],
        };
        let [c, d] = by_direction(a, b, &ch, legs, 1e-12).unwrap();
        assert!((d - point![-1.0, 1.0]).norm() < 1e-12);
        assert!((c - point![3.0, 1.0]).norm() < 1e-12);
    }

    #[test]
    fn vertical_base_has_no_slope() {
        let (a, b) = (point![1.0, 0.0], point![1.0, 3.0]);
        let ch = choice_at(point![0.0, 1.0], vector![-1.0, 0.0]);
        let err = by_slope(a, b, &ch, LegSlopes { ma: 1.0, mb: -1.0 }, 1e-12).unwrap_err();
        assert_eq!(err, Singularity::VerticalBase);
    }

    #[test]
    fn leg_parallel_to_base_is_reported() {
        let (a, b) = (point![0.0, 0.0], point![2.0, 1.0]);
        let ch = choice_at(point![0.0, 2.0], vector![-0.8, 1.6]);
        let err = by_slope(a, b, &ch, LegSlopes { ma: 0.5, mb: -2.0 }, 1e-12).unwrap_err();
        assert_eq!(err, Singularity::LegParallelToBase { leg: Leg::AD });
        let legs = LegDirections {
            ad: vector![-1.0, 3.0],
            bc: vector![4.0, 2.0],
        };
        let err = by_direction(a, b, &ch, legs, 1e-12).unwrap_err();
        assert_eq!(err, Singularity::LegParallelToBase { leg: Leg::BC });
    }
}
