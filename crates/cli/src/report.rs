//! Textual and JSON renderings of a solved trapezium.

use serde::Serialize;
use trapezium::prelude::Point2;
use trapezium::{Problem, SolveCfg, Trapezium};

#[inline]
fn xy(p: Point2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

/// One solve, flattened for serialization.
#[derive(Debug, Serialize)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
    pub a: [f64; 2],
    pub b: [f64; 2],
    pub p1: [f64; 2],
    pub p2: [f64; 2],
    pub c: [f64; 2],
    pub d: [f64; 2],
    pub selected: &'static str,
    pub side: &'static str,
    pub height: f64,
    pub area: f64,
    pub interior_angles_deg: [f64; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_residual: Option<f64>,
    pub config: CfgRecord,
}

#[derive(Debug, Serialize)]
pub struct CfgRecord {
    pub strategy: &'static str,
    pub guard_angle: f64,
}

impl From<&SolveCfg> for CfgRecord {
    fn from(cfg: &SolveCfg) -> Self {
        Self {
            strategy: cfg.strategy.name(),
            guard_angle: cfg.guard_angle,
        }
    }
}

impl Record {
    pub fn new(problem: &Problem, t: &Trapezium, cfg: &SolveCfg) -> Self {
        Self {
            index: None,
            a: xy(t.a),
            b: xy(t.b),
            p1: xy(problem.p1),
            p2: xy(problem.p2),
            c: xy(t.c),
            d: xy(t.d),
            selected: t.choice.constraint.name(),
            side: t.choice.side.name(),
            height: t.height(),
            area: t.area(),
            interior_angles_deg: t.interior_angles().map(f64::to_degrees),
            max_residual: None,
            config: cfg.into(),
        }
    }
}

/// Input block followed by the two solved points.
pub fn text(problem: &Problem, t: &Trapezium) -> String {
    let Problem { a, b, p1, p2 } = problem;
    format!(
        "\nSpecifications:\n\
         Point A:  ({:?}, {:?}), point B:  ({:?}, {:?})\n\
         Point P1: ({:?}, {:?}), point P2: ({:?}, {:?})\n\n\
         Point C is: ({:?}, {:?}).\n\
         Point D is: ({:?}, {:?}).\n",
        a.x, a.y, b.x, b.y, p1.x, p1.y, p2.x, p2.y, t.c.x, t.c.y, t.d.x, t.d.y
    )
}

/// Compact one-line form used by `sample`.
pub fn line(index: u64, problem: &Problem, t: &Trapezium) -> String {
    let [xa, ya, xb, yb, x1, y1, x2, y2] = problem.coords();
    format!(
        "#{index} A=({xa:.4}, {ya:.4}) B=({xb:.4}, {yb:.4}) P1=({x1:.4}, {y1:.4}) P2=({x2:.4}, {y2:.4}) -> C=({:.4}, {:.4}) D=({:.4}, {:.4}) [{}]",
        t.c.x,
        t.c.y,
        t.d.x,
        t.d.y,
        t.choice.constraint.name()
    )
}

/// Short description of the inputs for error context.
pub fn describe(problem: &Problem) -> String {
    let [xa, ya, xb, yb, x1, y1, x2, y2] = problem.coords();
    format!("A=({xa}, {ya}) B=({xb}, {yb}) P1=({x1}, {y1}) P2=({x2}, {y2})")
}
