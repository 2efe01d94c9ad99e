use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};
use trapezium::check::check;
use trapezium::rand2::{draw_problems, SampleCfg};
use trapezium::{Problem, SolveCfg, Strategy, Trapezium};

mod plot;
mod provenance;
mod report;

#[derive(Parser)]
#[command(name = "trapezium")]
#[command(version)]
#[command(about = "Construct trapezium ABCD (135° at A and B) from side AB and constraint points P1, P2")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve for C and D and print them
    Solve {
        #[command(flatten)]
        points: Points,
        #[command(flatten)]
        solver: SolverOpts,
        /// Print a JSON record instead of the text report
        #[arg(long)]
        json: bool,
        /// Verify the trapezium invariants after solving
        #[arg(long)]
        check: bool,
        /// Tolerance for --check
        #[arg(long, default_value_t = 1e-9)]
        tol: f64,
    },
    /// Draw the figure as SVG (equal axes) and write a provenance sidecar
    Figure {
        #[command(flatten)]
        points: Points,
        #[command(flatten)]
        solver: SolverOpts,
        #[arg(long)]
        out: PathBuf,
        /// Canvas side in pixels
        #[arg(long, default_value_t = 800)]
        size: u32,
    },
    /// Solve randomly drawn problems (reproducible by seed)
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: u64,
        #[command(flatten)]
        solver: SolverOpts,
        /// One JSON record per line
        #[arg(long)]
        json: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct Points {
    /// xA yA xB yB xP1 yP1 xP2 yP2
    #[arg(
        num_args = 8,
        required = true,
        allow_negative_numbers = true,
        value_names = ["XA", "YA", "XB", "YB", "XP1", "YP1", "XP2", "YP2"]
    )]
    coords: Vec<f64>,
}

impl Points {
    fn problem(&self) -> Result<Problem> {
        let coords: [f64; 8] = self
            .coords
            .as_slice()
            .try_into()
            .with_context(|| format!("expected 8 coordinates, got {}", self.coords.len()))?;
        Ok(Problem::from_coords(coords))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Direction,
    Slope,
}

#[derive(Args)]
struct SolverOpts {
    /// How the legs AD and BC are derived
    #[arg(long, value_enum, default_value_t = StrategyArg::Direction)]
    strategy: StrategyArg,
    /// Rotation-guard angle in radians [default: e]
    #[arg(long, allow_negative_numbers = true)]
    guard_angle: Option<f64>,
}

impl SolverOpts {
    fn cfg(&self) -> SolveCfg {
        let strategy = match self.strategy {
            StrategyArg::Direction => Strategy::Direction,
            StrategyArg::Slope => Strategy::Slope,
        };
        let cfg = SolveCfg::default().with_strategy(strategy);
        match self.guard_angle {
            Some(th) => cfg.with_guard_angle(th),
            None => cfg,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            points,
            solver,
            json,
            check,
            tol,
        } => solve(&points.problem()?, &solver.cfg(), json, check.then_some(tol)),
        Action::Figure {
            points,
            solver,
            out,
            size,
        } => figure(&points.problem()?, &solver.cfg(), &out, size),
        Action::Sample {
            seed,
            count,
            solver,
            json,
        } => sample(seed, count, &solver.cfg(), json),
        Action::Report => print_report(),
    }
}

fn solve_problem(problem: &Problem, cfg: &SolveCfg) -> Result<Trapezium> {
    trapezium::solve(problem, cfg)
        .with_context(|| format!("no trapezium for {}", report::describe(problem)))
}

fn solve(problem: &Problem, cfg: &SolveCfg, json: bool, tol: Option<f64>) -> Result<()> {
    tracing::info!(
        strategy = cfg.strategy.name(),
        guard_angle = cfg.guard_angle,
        "solve"
    );
    let t = solve_problem(problem, cfg)?;
    let mut residual = None;
    if let Some(tol) = tol {
        let r = check(&t, tol).context("solved trapezium failed its invariants")?;
        tracing::info!(max_residual = r.max(), tol, "invariants hold");
        residual = Some(r.max());
    }
    if json {
        let record = report::Record {
            max_residual: residual,
            ..report::Record::new(problem, &t, cfg)
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", report::text(problem, &t));
    }
    Ok(())
}

fn figure(problem: &Problem, cfg: &SolveCfg, out: &Path, size: u32) -> Result<()> {
    tracing::info!(out = %out.display(), size, "figure");
    let t = solve_problem(problem, cfg)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating figure dir {}", parent.display()))?;
        }
    }
    plot::render_svg(out, problem, &t, size)
        .with_context(|| format!("rendering {}", out.display()))?;

    let payload = provenance::Payload::new(
        "figure",
        json!({
            "coords": problem.coords(),
            "strategy": cfg.strategy.name(),
            "guard_angle": cfg.guard_angle,
            "size": size,
            "c": [t.c.x, t.c.y],
            "d": [t.d.x, t.d.y],
        }),
    );
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(provenance = %prov.display(), "figure written");
    Ok(())
}

fn sample(seed: u64, count: u64, cfg: &SolveCfg, json: bool) -> Result<()> {
    tracing::info!(seed, count, strategy = cfg.strategy.name(), "sample");
    let mut failed = 0usize;
    for (tok, problem) in draw_problems(SampleCfg::default(), seed, count) {
        match trapezium::solve(&problem, cfg) {
            Ok(t) if json => {
                let record = report::Record {
                    index: Some(tok.index),
                    ..report::Record::new(&problem, &t, cfg)
                };
                println!("{}", serde_json::to_string(&record)?);
            }
            Ok(t) => println!("{}", report::line(tok.index, &problem, &t)),
            Err(e) => {
                failed += 1;
                tracing::warn!(index = tok.index, error = %e, "sample not solvable");
            }
        }
    }
    tracing::info!(failed, "sample done");
    Ok(())
}

fn print_report() -> Result<()> {
    let cfg = SolveCfg::default();
    let payload = provenance::Payload::new(
        "report",
        json!({
            "strategy": cfg.strategy.name(),
            "guard_angle": cfg.guard_angle,
            "eps_coincide": cfg.eps_coincide,
            "eps_singular": cfg.eps_singular,
        }),
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::block(&payload, &[]))?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn negative_coordinates_parse() {
        let cmd = Cmd::try_parse_from([
            "trapezium", "solve", "0", "0", "2", "0", "1", "1", "1", "-0.3",
        ])
        .unwrap();
        match cmd.action {
            Action::Solve { points, .. } => {
                let p = points.problem().unwrap();
                assert_eq!(p.p2.y, -0.3);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn too_few_coordinates_is_a_usage_error() {
        let err = Cmd::try_parse_from(["trapezium", "solve", "0", "0", "2", "0", "1"]);
        assert!(err.is_err());
    }

    #[test]
    fn solver_flags_map_to_cfg() {
        let cmd = Cmd::try_parse_from([
            "trapezium",
            "solve",
            "--strategy",
            "slope",
            "--guard-angle",
            "-0.5",
            "0",
            "0",
            "2",
            "0",
            "1",
            "1",
            "1",
            "-0.3",
        ])
        .unwrap();
        match cmd.action {
            Action::Solve { solver, .. } => {
                let cfg = solver.cfg();
                assert_eq!(cfg.strategy, Strategy::Slope);
                assert_eq!(cfg.guard_angle, -0.5);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn figure_writes_svg_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("figs").join("trap.svg");
        let p = Problem::from_coords([0.0, 0.0, 2.0, 0.0, 1.0, 1.0, 1.0, -0.3]);
        figure(&p, &SolveCfg::default(), &out, 400).unwrap();
        assert!(out.exists());
        let prov = dir.path().join("figs").join("trap.provenance.json");
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(prov).unwrap()).unwrap();
        assert_eq!(parsed["command"], "figure");
        assert!((parsed["params"]["c"][0].as_f64().unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_input_is_reported_with_context() {
        let p = Problem::from_coords([0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, -0.3]);
        let err = solve_problem(&p, &SolveCfg::default()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("no trapezium for A=(0, 0) B=(0, 0)"));
        assert!(msg.contains("A and B coincide"));
    }
}
