//! `eld-output` — duty-log output writers for the eld trip planner.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                  |
//! |-----------|---------|--------------------------------|
//! | *(none)*  | CSV     | `duty_log.csv`, `stops.csv`    |
//! | `sqlite`  | SQLite  | `output.db`                    |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`TripOutputObserver`], which implements `eld_sim::DutyObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use eld_output::{CsvWriter, TripOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TripOutputObserver::new(writer);
//! let log = sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TripOutputObserver;
pub use row::{LogEntryRow, StopRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
