//! Clock & day-log writer.
//!
//! Turns "`status` for `hours` starting now" into one `LogEntry` per calendar
//! day touched, advancing the clock by exactly `hours`.

use log::trace;

use eld_core::{DayLog, DutyStatus, EPSILON, LogEntry, round_hundredths};

use crate::{DutyObserver, DutySimulator};

impl DutySimulator {
    /// Log `status` for `hours`, splitting at every midnight crossed.
    ///
    /// Durations at or below [`EPSILON`] are a no-op.  `Driving` time is
    /// added to `driving_today`; nothing here resets it.
    ///
    /// Boundaries are rounded to hundredths when written while the clock
    /// keeps full precision.  Each entry starts where the day's previous
    /// entry ended, and a residue slice that rounds to nothing advances the
    /// clock without being written.
    pub fn record_duty<O: DutyObserver>(
        &mut self,
        status:   DutyStatus,
        hours:    f64,
        observer: &mut O,
    ) {
        let mut remaining = hours;
        while remaining > EPSILON {
            let clock = self.state.clock;
            let day = clock.day();
            let local = clock.local_time();
            let chunk = remaining.min(clock.room_left_today());

            let end = round_hundredths(local + chunk);
            let start = match self.log.days.last() {
                Some(last) if last.day == day => last
                    .entries
                    .last()
                    .map_or(round_hundredths(local), |e| e.end),
                _ => round_hundredths(local),
            };

            if end > start {
                let entry = LogEntry::new(status, start, end);
                trace!("day {day}: {entry}");
                self.day_mut(day).entries.push(entry);
                self.state.day = day;
                observer.on_entry(day, &entry);
            }

            self.state.clock.advance(chunk);
            if status == DutyStatus::Driving {
                self.state.driving_today += chunk;
            }
            remaining -= chunk;
        }
    }

    /// The log for `day`, creating it (and any missing day before it).
    fn day_mut(&mut self, day: u32) -> &mut DayLog {
        let next = self.log.days.last().map_or(1, |d| d.day + 1);
        for d in next..=day {
            self.log.days.push(DayLog::new(d));
        }
        &mut self.log.days[(day - 1) as usize]
    }
}
