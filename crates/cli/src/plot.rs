//! SVG figure of the solved trapezium.
//!
//! Equal aspect is required: a stretched axis would draw the 135°/45° angles
//! wrong even though the coordinates are right. The canvas is square, the left
//! and bottom label areas have the same size, and the data window is a square
//! centred on the figure, so one data unit spans the same pixels on both axes.

use std::ops::Range;
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use trapezium::prelude::Point2;
use trapezium::{Problem, Trapezium};

const LABEL_AREA: u32 = 40;
const MARGIN: u32 = 20;

/// Square data window around `points`, padded by 10% (never empty).
pub fn square_window(points: &[Point2<f64>]) -> (Range<f64>, Range<f64>) {
    let [mut x_min, mut y_min] = [f64::INFINITY; 2];
    let [mut x_max, mut y_max] = [f64::NEG_INFINITY; 2];
    for p in points {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    let cx = 0.5 * (x_min + x_max);
    let cy = 0.5 * (y_min + y_max);
    let half = 0.55 * (x_max - x_min).max(y_max - y_min).max(1e-9);
    (cx - half..cx + half, cy - half..cy + half)
}

fn segment(p: Point2<f64>, q: Point2<f64>) -> [(f64, f64); 2] {
    [(p.x, p.y), (q.x, q.y)]
}

/// Draw AB, CD, the legs and the constraint segment P1–P2 on `backend`.
pub fn render<B>(backend: B, problem: &Problem, t: &Trapezium) -> Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let (xr, yr) = square_window(&[t.a, t.b, t.c, t.d, problem.p1, problem.p2]);
    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .x_label_area_size(LABEL_AREA)
        .y_label_area_size(LABEL_AREA)
        .build_cartesian_2d(xr, yr)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .draw()?;

    let thick = |c: RGBColor| c.stroke_width(2);
    chart
        .draw_series(LineSeries::new(segment(t.a, t.b), thick(BLACK)))?
        .label("AB")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], thick(BLACK)));
    chart
        .draw_series(LineSeries::new(segment(t.d, t.c), thick(RED)))?
        .label("CD")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], thick(RED)));
    chart
        .draw_series(
            [segment(t.a, t.d), segment(t.b, t.c)]
                .into_iter()
                .map(|seg| PathElement::new(seg.to_vec(), thick(GREEN))),
        )?
        .label("AD, BC")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], thick(GREEN)));
    chart
        .draw_series(DashedLineSeries::new(
            segment(problem.p1, problem.p2),
            10,
            5,
            thick(BLACK),
        ))?
        .label("P1–P2")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], thick(BLACK)));

    let marked = [
        ("A", t.a, BLACK),
        ("B", t.b, BLACK),
        ("C", t.c, RED),
        ("D", t.d, RED),
        ("P1", problem.p1, BLACK),
        ("P2", problem.p2, BLACK),
    ];
    chart.draw_series(marked.iter().map(|&(name, p, color)| {
        EmptyElement::at((p.x, p.y))
            + Circle::new((0, 0), 4, color.filled())
            + Text::new(name, (6, -18), ("sans-serif", 16).into_font())
    }))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Render to an SVG file of `size`×`size` pixels.
pub fn render_svg(path: &Path, problem: &Problem, t: &Trapezium, size: u32) -> Result<()> {
    render(SVGBackend::new(path, (size, size)), problem, t)
}
