//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `duty_log` and `stops`.

use std::path::Path;

use rusqlite::Connection;

use crate::{LogEntryRow, OutputResult, StopRow};
use crate::writer::OutputWriter;

/// Writes trip output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS duty_log (
                 day        INTEGER NOT NULL,
                 status     TEXT    NOT NULL,
                 start_hour REAL    NOT NULL,
                 end_hour   REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS stops (
                 seq                 INTEGER PRIMARY KEY,
                 kind                TEXT    NOT NULL,
                 cumulative_distance REAL    NOT NULL,
                 day                 INTEGER NOT NULL,
                 time                TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_entry(&mut self, row: &LogEntryRow) -> OutputResult<()> {
        self.conn
            .prepare_cached(
                "INSERT INTO duty_log (day, status, start_hour, end_hour) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?
            .execute(rusqlite::params![row.day, row.status.code(), row.start, row.end])?;
        Ok(())
    }

    fn write_entries(&mut self, rows: &[LogEntryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO duty_log (day, status, start_hour, end_hour) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.day, row.status.code(), row.start, row.end])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_stop(&mut self, row: &StopRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO stops (seq, kind, cumulative_distance, day, time) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.seq,
                row.kind.code(),
                row.cumulative_distance,
                row.day,
                row.local_time(),
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
