//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `duty_log.csv`
//! - `stops.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{LogEntryRow, OutputResult, StopRow};
use crate::writer::OutputWriter;

/// Writes trip output to two CSV files.
pub struct CsvWriter {
    entries:  Writer<File>,
    stops:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut entries = Writer::from_path(dir.join("duty_log.csv"))?;
        entries.write_record(["day", "status", "start_hour", "end_hour"])?;

        let mut stops = Writer::from_path(dir.join("stops.csv"))?;
        stops.write_record(["seq", "kind", "cumulative_distance", "day", "time"])?;

        Ok(Self {
            entries,
            stops,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_entry(&mut self, row: &LogEntryRow) -> OutputResult<()> {
        self.entries.write_record(&[
            row.day.to_string(),
            row.status.code().to_owned(),
            format!("{:.2}", row.start),
            format!("{:.2}", row.end),
        ])?;
        Ok(())
    }

    fn write_stop(&mut self, row: &StopRow) -> OutputResult<()> {
        self.stops.write_record(&[
            row.seq.to_string(),
            row.kind.code().to_owned(),
            format!("{:.2}", row.cumulative_distance),
            row.day.to_string(),
            row.local_time(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.entries.flush()?;
        self.stops.flush()?;
        Ok(())
    }
}
