//! Rotation guard: solve in a frame turned by a fixed irrational angle.
//!
//! The slope formulas divide by quantities that vanish on axis-aligned and
//! ±45° lines. Turning every input by θ₀ before solving and every output by
//! −θ₀ afterwards leaves the answer unchanged (up to rounding) while making
//! those alignments measure-zero for realistic inputs. It does not make them
//! impossible; the solver still checks its denominators.

use nalgebra::{Point2, Rotation2, Vector2};

use super::types::Choice;

/// Values that can be carried through a rotation of the plane.
pub trait Turn: Sized {
    fn turned(self, rot: &Rotation2<f64>) -> Self;
}

impl Turn for Point2<f64> {
    #[inline]
    fn turned(self, rot: &Rotation2<f64>) -> Self {
        rot * self
    }
}

impl Turn for Vector2<f64> {
    #[inline]
    fn turned(self, rot: &Rotation2<f64>) -> Self {
        rot * self
    }
}

impl<T: Turn, const N: usize> Turn for [T; N] {
    #[inline]
    fn turned(self, rot: &Rotation2<f64>) -> Self {
        self.map(|x| x.turned(rot))
    }
}

impl<T: Turn, U: Turn> Turn for (T, U) {
    #[inline]
    fn turned(self, rot: &Rotation2<f64>) -> Self {
        (self.0.turned(rot), self.1.turned(rot))
    }
}

impl Turn for Choice {
    /// Side is preserved: rotations keep orientation.
    #[inline]
    fn turned(self, rot: &Rotation2<f64>) -> Self {
        Self {
            point: self.point.turned(rot),
            offset: self.offset.turned(rot),
            ..self
        }
    }
}

/// Forward/inverse rotation pair applied symmetrically around a solve.
#[derive(Clone, Copy, Debug)]
pub struct RotationGuard {
    forward: Rotation2<f64>,
    inverse: Rotation2<f64>,
}

impl RotationGuard {
    pub fn new(theta: f64) -> Self {
        let forward = Rotation2::new(theta);
        Self {
            forward,
            inverse: forward.inverse(),
        }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.forward.angle()
    }

    #[inline]
    pub fn forward<T: Turn>(&self, x: T) -> T {
        x.turned(&self.forward)
    }

    #[inline]
    pub fn inverse<T: Turn>(&self, x: T) -> T {
        x.turned(&self.inverse)
    }

    /// Run `solve` on the rotated `input` and rotate its output back.
    pub fn around<I, O, E, F>(&self, input: I, solve: F) -> Result<O, E>
    where
        I: Turn,
        O: Turn,
        F: FnOnce(I) -> Result<O, E>,
    {
        let out = solve(self.forward(input))?;
        Ok(self.inverse(out))
    }
}
