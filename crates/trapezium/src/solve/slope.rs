//! Slope solver: turn the offset direction into the directions of the legs.
//!
//! The offset `d_sel` is perpendicular to AB and points towards CD. Turning
//! its direction by 45° away from B gives the side AD that meets AB at 135°;
//! BC is perpendicular to AD. "Away from B" is +45° when the constraint point
//! lies left of AB and −45° when it lies right of it.
//!
//! Two renditions:
//! - `leg_directions`: rotate the unit offset by ±45°. No division at all.
//! - `leg_slopes`: the closed form `mA = tan(angle ± 45°) = (t ± 1)/(1 ∓ t)`
//!   with `t = tan(angle)`, and `mB = −1/mA`. Both denominators are checked.

use std::f64::consts::FRAC_PI_4;

use nalgebra::Vector2;

use super::types::{Choice, Leg};
use crate::error::Singularity;
use crate::geom2::{angle_of, near_zero, perp, rotate};
use crate::log::trace;

/// Directions of the leg through A (`ad`) and the leg through B (`bc`).
#[derive(Clone, Copy, Debug)]
pub(crate) struct LegDirections {
    pub ad: Vector2<f64>,
    pub bc: Vector2<f64>,
}

/// Slopes of AD (`ma`) and BC (`mb`).
#[derive(Clone, Copy, Debug)]
pub(crate) struct LegSlopes {
    pub ma: f64,
    pub mb: f64,
}

/// Pre: `choice.offset ≠ 0` (guaranteed by the orientation resolver).
pub(crate) fn leg_directions(choice: &Choice) -> LegDirections {
    let ad = rotate(choice.offset.normalize(), choice.side.signum() * FRAC_PI_4);
    LegDirections { ad, bc: perp(ad) }
}

pub(crate) fn leg_slopes(choice: &Choice, eps: f64) -> Result<LegSlopes, Singularity> {
    let t = angle_of(choice.offset).tan();
    let s = choice.side.signum();
    // tan(angle + s·π/4) with tan(π/4) = 1
    let denom = 1.0 - s * t;
    if near_zero(denom, 1.0 + t.abs(), eps) {
        return Err(Singularity::UndefinedSlope { leg: Leg::AD });
    }
    let ma = (t + s) / denom;
    if near_zero(ma, 1.0, eps) {
        return Err(Singularity::UndefinedSlope { leg: Leg::BC });
    }
    let mb = -1.0 / ma;
    trace!(ma, mb, "leg slopes");
    Ok(LegSlopes { ma, mb })
}
