//! The read-only results object produced by a finished run.

/// Aggregate statistics for one simulation run, consumed by the report
/// layer after the run completes.
///
/// `customers_served` counts dispatches (one per dequeue), so a customer
/// still standing at a register when the run ends is inside the served
/// total; `in_service_at_end` reports how many of them there are.  The
/// conservation identity is therefore
/// `customers_served + final_line_lengths.sum() == total_arrivals`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// The configured run length, for elapsed-time reporting.
    pub duration_ticks: u64,

    /// Customers synthesized by the arrival process over the whole run.
    pub total_arrivals: u64,

    /// Customers dispatched from a line into a station.
    pub customers_served: u64,

    /// Sum of `(dispatch tick − arrival tick)` over all dispatched customers.
    pub total_wait_secs: u64,

    /// Largest line length observed at any arrival, across all lines.
    pub max_queue_len: usize,

    /// Length of each line when the run stopped, in line-index order.
    /// Residual waiters are not folded into the served/wait totals.
    pub final_line_lengths: Vec<usize>,

    /// Stations still mid-checkout when the run stopped.
    pub in_service_at_end: usize,
}

impl RunStats {
    /// Mean wait in seconds, or `None` when nobody was served — an explicit
    /// "no data" state, never NaN or infinity.
    pub fn average_wait_secs(&self) -> Option<f64> {
        if self.customers_served == 0 {
            None
        } else {
            Some(self.total_wait_secs as f64 / self.customers_served as f64)
        }
    }

    /// Total customers still in the system (waiting or mid-checkout).
    pub fn remaining_in_system(&self) -> usize {
        self.final_line_lengths.iter().sum::<usize>() + self.in_service_at_end
    }
}
