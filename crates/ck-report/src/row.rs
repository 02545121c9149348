//! Plain data row types written by the CSV backend.

use ck_sim::RunStats;

/// One policy run, flattened for side-by-side comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRunRow {
    pub policy:             String,
    pub duration_secs:      u64,
    pub total_arrivals:     u64,
    pub customers_served:   u64,
    pub total_wait_secs:    u64,
    /// `None` when no customer was served; written as an empty field.
    pub avg_wait_secs:      Option<f64>,
    pub max_queue_len:      usize,
    /// Final length of each line, in line-index order.
    pub final_line_lengths: Vec<usize>,
}

impl PolicyRunRow {
    /// Flatten a finished run's statistics under a policy label.
    pub fn from_stats(policy: impl Into<String>, stats: &RunStats) -> Self {
        Self {
            policy:             policy.into(),
            duration_secs:      stats.duration_ticks,
            total_arrivals:     stats.total_arrivals,
            customers_served:   stats.customers_served,
            total_wait_secs:    stats.total_wait_secs,
            avg_wait_secs:      stats.average_wait_secs(),
            max_queue_len:      stats.max_queue_len,
            final_line_lengths: stats.final_line_lengths.clone(),
        }
    }
}
