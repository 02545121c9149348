//! Human-readable run summaries.

use std::fmt;

use ck_sim::RunStats;

/// Renders one run's statistics as a multi-line summary via `Display`.
///
/// Line lengths are numbered from 1 for humans; the average wait is
/// truncated to whole seconds before the minute/second split, and reads
/// `n/a` when no customer was served.
///
/// ```text
/// single-line, 5 stations
/// Total elapsed time: 120 min 0 sec
/// Customers served: 236
/// Length of line 1: 4
/// Maximum queue length: 9
/// Average customer waiting time: 1 min 42 sec
/// ```
pub struct TextReport<'a> {
    label: &'a str,
    stats: &'a RunStats,
}

impl<'a> TextReport<'a> {
    pub fn new(label: &'a str, stats: &'a RunStats) -> Self {
        Self { label, stats }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, sec) = mins_secs(self.stats.duration_ticks);
        writeln!(f, "{}", self.label)?;
        writeln!(f, "Total elapsed time: {min} min {sec} sec")?;
        writeln!(f, "Customers served: {}", self.stats.customers_served)?;
        for (i, len) in self.stats.final_line_lengths.iter().enumerate() {
            writeln!(f, "Length of line {}: {len}", i + 1)?;
        }
        writeln!(f, "Maximum queue length: {}", self.stats.max_queue_len)?;
        match self.stats.average_wait_secs() {
            Some(avg) => {
                let (m, s) = mins_secs(avg as u64);
                writeln!(f, "Average customer waiting time: {m} min {s} sec")
            }
            None => writeln!(f, "Average customer waiting time: n/a (no customers served)"),
        }
    }
}

fn mins_secs(total_secs: u64) -> (u64, u64) {
    (total_secs / 60, total_secs % 60)
}
