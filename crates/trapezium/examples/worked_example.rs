//! Solve the worked example and a handful of sampled problems.
//!
//! Usage:
//!   cargo run -p trapezium --example worked_example
//!   cargo run -p trapezium --example worked_example -- 2025
//!
//! The optional argument is the sampler seed (default 7).

use nalgebra::point;
use trapezium::check::check;
use trapezium::rand2::{draw_problems, SampleCfg};
use trapezium::{solve, Problem, SolveCfg, Strategy};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7u64);

    let p = Problem::new(
        point![0.0, 0.0],
        point![2.0, 0.0],
        point![1.0, 1.0],
        point![1.0, -0.3],
    );
    for strategy in [Strategy::Direction, Strategy::Slope] {
        match solve(&p, &SolveCfg::default().with_strategy(strategy)) {
            Ok(t) => println!(
                "{:>9}: C = ({:.6}, {:.6}), D = ({:.6}, {:.6})",
                strategy.name(),
                t.c.x,
                t.c.y,
                t.d.x,
                t.d.y
            ),
            Err(e) => println!("{:>9}: {e}", strategy.name()),
        }
    }

    println!("\nsampled (seed {seed}):");
    for (tok, p) in draw_problems(SampleCfg::default(), seed, 5) {
        match solve(&p, &SolveCfg::default()) {
            Ok(t) => {
                let worst = check(&t, 1e-9).map(|r| r.max());
                println!(
                    "#{} kept {} area {:.3} residual {:?}",
                    tok.index,
                    t.choice.constraint.name(),
                    t.area(),
                    worst
                );
            }
            Err(e) => println!("#{}: {e}", tok.index),
        }
    }
}
