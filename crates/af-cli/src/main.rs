//! antfarm — route units through a colony in the fewest turns.
//!
//! ```text
//! antfarm farm.txt                       # echo input, then one line per turn
//! cat farm.txt | antfarm -               # read stdin
//! antfarm farm.txt --format csv -o out/  # out/moves.csv
//! antfarm farm.txt --format json         # solution as JSON on stdout
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use af_graph::{BfsExtractor, Farm, RouteExtractor};
use af_io::{CsvMoveWriter, MoveLogObserver, MoveWriter, TextMoveWriter, format_batch};
use af_sched::{Admission, Occupancy, SchedulerConfig};
use af_solve::{Solution, Solver};

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "antfarm")]
#[command(about = "Move every unit from ##start to ##end in the fewest turns", long_about = None)]
struct Args {
    /// Farm description; `-` reads stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Directory for `moves.csv` (csv format only).
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// How many units may enter the colony per turn.
    #[arg(long, value_enum, default_value_t = AdmissionArg::OnePerTurn)]
    admission: AdmissionArg,

    /// Which occupied rooms block a move.
    #[arg(long, value_enum, default_value_t = OccupancyArg::PerRoute)]
    occupancy: OccupancyArg,

    /// List extracted routes and their load on stderr.
    #[arg(long)]
    show_routes: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AdmissionArg {
    OnePerTurn,
    OnePerRoute,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OccupancyArg {
    PerRoute,
    Room,
}

impl Args {
    fn scheduler_config(&self) -> SchedulerConfig {
        let admission = match self.admission {
            AdmissionArg::OnePerTurn => Admission::OnePerTurn,
            AdmissionArg::OnePerRoute => Admission::OnePerRoute,
        };
        let occupancy = match self.occupancy {
            OccupancyArg::PerRoute => Occupancy::PerRoute,
            OccupancyArg::Room => Occupancy::Room,
        };
        SchedulerConfig::default().with_admission(admission).with_occupancy(occupancy)
    }
}

// ── JSON report ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Report<'a> {
    units:  u32,
    turns:  u32,
    config: SchedulerConfig,
    routes: Vec<RouteReport>,
    moves:  Vec<String>,
    /// Raw solution with numeric ids.
    solution: &'a Solution,
}

#[derive(Serialize)]
struct RouteReport {
    rooms: Vec<String>,
    units: u32,
}

impl<'a> Report<'a> {
    fn new(farm: &Farm, config: SchedulerConfig, solution: &'a Solution) -> Self {
        let colony = &farm.colony;
        let routes = solution
            .routes
            .iter()
            .enumerate()
            .map(|(i, route)| RouteReport {
                rooms: route.rooms.iter().map(|&r| colony.room_name(r).to_owned()).collect(),
                units: solution.schedule.assignment.load(af_core::RouteId(i as u32)),
            })
            .collect();
        let moves = solution
            .schedule
            .batches
            .iter()
            .map(|b| format_batch(colony, b))
            .collect();
        Self {
            units: farm.unit_count,
            turns: solution.turn_count(),
            config,
            routes,
            moves,
            solution,
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    enable_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let farm = if args.input == "-" {
        af_io::load_farm_reader(io::stdin().lock()).context("reading farm from stdin")?
    } else {
        af_io::load_farm(Path::new(&args.input))
            .with_context(|| format!("reading farm from {}", args.input))?
    };

    let config = args.scheduler_config();
    let solver = Solver::new(BfsExtractor).config(config);
    tracing::info!(
        units = farm.unit_count,
        rooms = farm.colony.room_count(),
        admission = config.admission.as_str(),
        occupancy = config.occupancy.as_str(),
        "solving"
    );

    let solution = match args.format {
        Format::Text => {
            // Nothing is printed for an unsolvable farm; buffer the moves
            // until the echo can go first.
            let mut obs = MoveLogObserver::new(&farm.colony, TextMoveWriter::new(Vec::new()));
            let solution = solver.solve_with(&farm, &mut obs)?;
            if let Some(e) = obs.take_error() {
                return Err(e.into());
            }
            let moves = obs.into_writer().into_inner();

            let mut out = BufWriter::new(io::stdout().lock());
            af_io::write_farm(&mut out, &farm)?;
            out.write_all(&moves)?;
            out.flush()?;
            solution
        }
        Format::Csv => {
            let (solution, path) = write_csv_log(&solver, &farm, &args.output)?;
            println!("wrote {} turns to {}", solution.turn_count(), path.display());
            solution
        }
        Format::Json => {
            let solution = solver.solve(&farm)?;
            let mut out = BufWriter::new(io::stdout().lock());
            serde_json::to_writer_pretty(&mut out, &Report::new(&farm, config, &solution))?;
            writeln!(out)?;
            out.flush()?;
            solution
        }
    };

    if args.show_routes {
        let mut err = io::stderr().lock();
        af_io::write_routes(&mut err, &farm.colony, &solution.routes, &solution.schedule)?;
    }
    Ok(())
}

/// Solve, then write `dir/moves.csv`.  A failed solve leaves the directory
/// untouched.
fn write_csv_log<E: RouteExtractor>(
    solver: &Solver<E>,
    farm:   &Farm,
    dir:    &Path,
) -> Result<(Solution, PathBuf)> {
    let solution = solver.solve(farm)?;

    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join("moves.csv");
    let mut writer = CsvMoveWriter::create(&path)?;
    for batch in &solution.schedule.batches {
        writer.write_batch(&farm.colony, batch)?;
    }
    writer.finish()?;
    Ok((solution, path))
}
