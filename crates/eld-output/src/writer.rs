//! The `OutputWriter` trait implemented by all backend writers.

use crate::{LogEntryRow, OutputResult, StopRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are returned to the caller; [`TripOutputObserver`][crate::TripOutputObserver]
/// keeps the first one for [`take_error`][crate::TripOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one duty-log entry.
    fn write_entry(&mut self, row: &LogEntryRow) -> OutputResult<()>;

    /// Write a batch of duty-log entries.
    fn write_entries(&mut self, rows: &[LogEntryRow]) -> OutputResult<()> {
        rows.iter().try_for_each(|row| self.write_entry(row))
    }

    /// Write one stop row.
    fn write_stop(&mut self, row: &StopRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
