//! `TripOutputObserver<W>` — bridges `DutyObserver` to an `OutputWriter`.

use log::debug;

use eld_core::{DutyClock, LogEntry, StopEvent, TripLog};
use eld_sim::DutyObserver;

use crate::row::{LogEntryRow, StopRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DutyObserver`] that writes log entries and stops to any
/// [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Entries are buffered per day and handed to
/// [`write_entries`][OutputWriter::write_entries] when the log moves on to
/// the next day and at trip end.  Stops are written as they happen.
///
/// Errors from the writer are stored internally because `DutyObserver`
/// methods have no return value.  After `sim.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct TripOutputObserver<W: OutputWriter> {
    writer:          W,
    pending:         Vec<LogEntryRow>,
    entries_written: usize,
    stops_written:   u32,
    /// Sequence number of the last stop seen, written or not.
    stop_seq:        u32,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> TripOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:         Vec::new(),
            entries_written: 0,
            stops_written:   0,
            stop_seq:        0,
            last_error:      None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Log entries successfully handed to the writer.
    pub fn entries_written(&self) -> usize {
        self.entries_written
    }

    /// Stops successfully handed to the writer.
    pub fn stops_written(&self) -> u32 {
        self.stops_written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write the buffered day.  The buffer is cleared even on failure.
    fn flush_day(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_entries(&self.pending);
        if self.store_err(result) {
            self.entries_written += self.pending.len();
        }
        self.pending.clear();
    }

    fn store_err(&mut self, result: OutputResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                // Keep only the first error.
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
                false
            }
        }
    }
}

impl<W: OutputWriter> DutyObserver for TripOutputObserver<W> {
    fn on_entry(&mut self, day: u32, entry: &LogEntry) {
        if self.pending.last().is_some_and(|row| row.day != day) {
            self.flush_day();
        }
        self.pending.push(LogEntryRow::new(day, entry));
    }

    fn on_stop(&mut self, stop: &StopEvent, at: DutyClock) {
        self.stop_seq += 1;
        let result = self.writer.write_stop(&StopRow::new(self.stop_seq, stop, at));
        if self.store_err(result) {
            self.stops_written += 1;
        }
    }

    fn on_trip_end(&mut self, log: &TripLog) {
        self.flush_day();
        let result = self.writer.finish();
        self.store_err(result);
        debug!(
            "output finished: {} entries, {} stops over {} day(s)",
            self.entries_written,
            self.stops_written,
            log.days.len()
        );
    }
}
