//! `af-io` — the text surfaces around the core.
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`parse`]    | `parse_farm`, `load_farm`, `load_farm_reader`                |
//! | [`format`]   | `write_farm` (input echo), `format_batch`, `write_schedule`  |
//! | [`writer`]   | `MoveWriter` trait, `TextMoveWriter`                         |
//! | [`csv`]      | `CsvMoveWriter` (`turn,unit,room` rows)                      |
//! | [`observer`] | `MoveLogObserver` — streams batches to a `MoveWriter`        |
//! | [`error`]    | `FarmError`, `FarmResult<T>`                                 |
//!
//! # Input format
//!
//! ```text
//! 3            <- unit count (first non-comment line)
//! ##start
//! S 0 0        <- room: name x y
//! A 1 0
//! ##end
//! E 2 0
//! # comment
//! S-A          <- link: name-name
//! A-E
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let farm = af_io::load_farm(Path::new("farm.txt"))?;
//! let solution = Solver::new(BfsExtractor).solve(&farm)?;
//! af_io::write_farm(&mut stdout, &farm)?;
//! af_io::write_schedule(&mut stdout, &farm.colony, &solution.schedule)?;
//! ```

pub mod csv;
pub mod error;
pub mod format;
pub mod observer;
pub mod parse;
pub mod writer;


pub use crate::csv::CsvMoveWriter;
pub use error::{FarmError, FarmResult};
pub use format::{format_batch, format_move, write_farm, write_routes, write_schedule};
pub use observer::MoveLogObserver;
pub use parse::{MAX_UNIT_COUNT, load_farm, load_farm_reader, parse_farm};
pub use writer::{MoveWriter, TextMoveWriter};
