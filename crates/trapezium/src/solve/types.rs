//! Value types for one construction: the input quadruple, the selected
//! constraint, and the solved trapezium.

use std::fmt;

use nalgebra::{Isometry2, Point2, Vector2};

use crate::geom2::{angle_between, Side};

/// Which of the two constraint points was selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    P1,
    P2,
}

impl Constraint {
    pub fn name(&self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
        }
    }
}

/// Slanted side of the trapezium: AD through A, BC through B.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    AD,
    BC,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AD => "AD",
            Self::BC => "BC",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vertex {
    A,
    B,
    C,
    D,
}

impl Vertex {
    pub const ALL: [Vertex; 4] = [Vertex::A, Vertex::B, Vertex::C, Vertex::D];

    /// Adjacent vertices (previous, next) along A→B→C→D.
    #[inline]
    pub fn neighbors(self) -> (Vertex, Vertex) {
        match self {
            Self::A => (Self::D, Self::B),
            Self::B => (Self::A, Self::C),
            Self::C => (Self::B, Self::D),
            Self::D => (Self::C, Self::A),
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        })
    }
}

/// Outcome of the orientation resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Choice {
    pub constraint: Constraint,
    /// The selected constraint point; CD passes through it.
    pub point: Point2<f64>,
    /// Perpendicular offset from line AB to `point`.
    pub offset: Vector2<f64>,
    /// Side of the directed line AB that `point` lies on.
    pub side: Side,
}

/// The four input points: known side AB and constraint points P1, P2.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Problem {
    pub a: Point2<f64>,
    pub b: Point2<f64>,
    pub p1: Point2<f64>,
    pub p2: Point2<f64>,
}

impl Problem {
    #[inline]
    pub fn new(a: Point2<f64>, b: Point2<f64>, p1: Point2<f64>, p2: Point2<f64>) -> Self {
        Self { a, b, p1, p2 }
    }

    /// From `[xA, yA, xB, yB, xP1, yP1, xP2, yP2]`.
    pub fn from_coords(c: [f64; 8]) -> Self {
        Self {
            a: Point2::new(c[0], c[1]),
            b: Point2::new(c[2], c[3]),
            p1: Point2::new(c[4], c[5]),
            p2: Point2::new(c[6], c[7]),
        }
    }

    pub fn coords(&self) -> [f64; 8] {
        [
            self.a.x, self.a.y, self.b.x, self.b.y, self.p1.x, self.p1.y, self.p2.x, self.p2.y,
        ]
    }

    #[inline]
    pub fn points(&self) -> [Point2<f64>; 4] {
        [self.a, self.b, self.p1, self.p2]
    }

    #[inline]
    pub fn constraint(&self, which: Constraint) -> Point2<f64> {
        match which {
            Constraint::P1 => self.p1,
            Constraint::P2 => self.p2,
        }
    }

    /// Same problem with P1 and P2 exchanged.
    #[inline]
    pub fn swapped(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
            ..*self
        }
    }

    /// Every point moved by the rigid motion `iso`.
    pub fn transformed(&self, iso: &Isometry2<f64>) -> Self {
        Self {
            a: iso * self.a,
            b: iso * self.b,
            p1: iso * self.p1,
            p2: iso * self.p2,
        }
    }
}

/// Solved trapezium ABCD with CD ∥ AB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezium {
    pub a: Point2<f64>,
    pub b: Point2<f64>,
    pub c: Point2<f64>,
    pub d: Point2<f64>,
    pub choice: Choice,
}

impl Trapezium {
    /// Vertices in A, B, C, D order.
    #[inline]
    pub fn vertices(&self) -> [Point2<f64>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    #[inline]
    pub fn vertex(&self, v: Vertex) -> Point2<f64> {
        match v {
            Vertex::A => self.a,
            Vertex::B => self.b,
            Vertex::C => self.c,
            Vertex::D => self.d,
        }
    }

    /// Interior angle (radians) at `v`, between its two adjacent sides.
    pub fn interior_angle(&self, v: Vertex) -> f64 {
        let (prev, next) = v.neighbors();
        let p = self.vertex(v);
        angle_between(self.vertex(prev) - p, self.vertex(next) - p)
    }

    /// Interior angles at A, B, C, D.
    pub fn interior_angles(&self) -> [f64; 4] {
        Vertex::ALL.map(|v| self.interior_angle(v))
    }

    /// Enclosed area (shoelace formula).
    pub fn area(&self) -> f64 {
        let vs = self.vertices();
        let mut twice = 0.0;
        for k in 0..vs.len() {
            let p = vs[k];
            let q = vs[(k + 1) % vs.len()];
            twice += p.x * q.y - q.x * p.y;
        }
        0.5 * twice.abs()
    }

    /// Distance between the parallel sides AB and CD.
    #[inline]
    pub fn height(&self) -> f64 {
        self.choice.offset.norm()
    }
}
