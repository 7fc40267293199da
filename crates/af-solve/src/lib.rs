//! `af-solve` — orchestrates a full run over a parsed [`Farm`].
//!
//! ```text
//! Farm ──▶ ① unit count check      (InvalidUnitCount)
//!      ──▶ ② RouteExtractor         (NoRouteFound when empty)
//!      ──▶ ③ validate every route   (MalformedRoute, fatal)
//!      ──▶ ④ MovementScheduler      ──▶ Solution { routes, schedule }
//! ```
//!
//! Extraction runs to exhaustion before scheduling starts; nothing flows
//! back from the scheduler to the extractor.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use af_graph::BfsExtractor;
//! use af_solve::Solver;
//!
//! let farm = af_io::load_farm(path)?;
//! let solution = Solver::new(BfsExtractor).solve(&farm)?;
//! println!("{} turns", solution.turn_count());
//! ```
//!
//! [`Farm`]: af_graph::Farm

pub mod error;
pub mod solver;


pub use error::{SolveError, SolveResult};
pub use solver::{Solution, Solver, solve};
