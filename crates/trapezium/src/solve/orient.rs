//! Orientation resolver: pick the constraint point farther from line AB.
//!
//! Each candidate's perpendicular offset `dᵢ = (Pᵢ − A) − proj(Pᵢ − A, B − A)`
//! is compared by squared length, with lengths within a relative `eps` of each
//! other counted as equal. Ties are broken by a key that only depends on the
//! unordered pair {P1, P2}: left of AB beats right, then the lexicographically
//! smaller point wins. Swapping P1 and P2 therefore never changes which point
//! is used.
//!
//! `select` runs in the caller's frame, before the rotation guard, so exact
//! ties there stay exact.

use std::cmp::Ordering;

use nalgebra::{Point2, Vector2};

use super::types::{Choice, Constraint};
use crate::error::Degeneracy;
use crate::geom2::{near_zero, reject, Side};
use crate::log::debug;

/// Which constraint point to keep.
pub(crate) fn select(
    a: Point2<f64>,
    b: Point2<f64>,
    p1: Point2<f64>,
    p2: Point2<f64>,
    eps: f64,
) -> Result<Constraint, Degeneracy> {
    let ab = b - a;
    let scale = a.coords.norm().max(b.coords.norm());
    if ab == Vector2::zeros() || near_zero(ab.norm(), scale, eps) {
        return Err(Degeneracy::CoincidentBase);
    }
    let c1 = candidate(a, b, Constraint::P1, p1);
    let c2 = candidate(a, b, Constraint::P2, p2);
    let chosen = if rank(&c2, &c1, eps).is_gt() { c2 } else { c1 };

    let reach = ab.norm().max((chosen.point - a).norm());
    if near_zero(chosen.offset.norm(), reach, eps) {
        return Err(Degeneracy::ConstraintsOnBase);
    }
    debug!(
        constraint = chosen.constraint.name(),
        side = chosen.side.name(),
        offset_sq = chosen.offset.norm_squared(),
        "constraint selected"
    );
    Ok(chosen.constraint)
}

/// Offset and side of `point` relative to line AB.
pub(crate) fn candidate(
    a: Point2<f64>,
    b: Point2<f64>,
    constraint: Constraint,
    point: Point2<f64>,
) -> Choice {
    let ab = b - a;
    let offset = reject(point - a, ab);
    Choice {
        constraint,
        point,
        offset,
        side: Side::of(ab, offset),
    }
}

/// Order on candidates; the greater one is selected.
fn rank(x: &Choice, y: &Choice, eps: f64) -> Ordering {
    let (dx, dy) = (x.offset.norm_squared(), y.offset.norm_squared());
    let by_offset = if near_zero(dx - dy, dx.max(dy), eps) {
        Ordering::Equal
    } else {
        dx.total_cmp(&dy)
    };
    by_offset
        .then_with(|| (x.side == Side::Left).cmp(&(y.side == Side::Left)))
        .then_with(|| y.point.x.total_cmp(&x.point.x))
        .then_with(|| y.point.y.total_cmp(&x.point.y))
}
