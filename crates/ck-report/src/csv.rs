//! CSV output backend.
//!
//! Writes one `policy_comparison` row per finished run.  Vector-valued
//! fields (the per-line final lengths) are joined with `;` so the file
//! stays one row per run.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::Writer;

use crate::{PolicyRunRow, ReportResult};

const HEADER: [&str; 8] = [
    "policy",
    "duration_secs",
    "total_arrivals",
    "customers_served",
    "total_wait_secs",
    "avg_wait_secs",
    "max_queue_len",
    "final_line_lengths",
];

/// Writes policy-comparison rows to any `io::Write` sink.
pub struct CsvReportWriter<W: io::Write> {
    writer:   Writer<W>,
    finished: bool,
}

impl CsvReportWriter<File> {
    /// Open (or create) `path` and write the header row.
    pub fn from_path(path: &Path) -> ReportResult<Self> {
        Self::with_writer(Writer::from_path(path)?)
    }
}

impl<W: io::Write> CsvReportWriter<W> {
    /// Wrap an arbitrary sink and write the header row.
    pub fn from_writer(sink: W) -> ReportResult<Self> {
        Self::with_writer(Writer::from_writer(sink))
    }

    fn with_writer(mut writer: Writer<W>) -> ReportResult<Self> {
        writer.write_record(HEADER)?;
        Ok(Self { writer, finished: false })
    }

    /// Append one run's row.
    pub fn write_run(&mut self, row: &PolicyRunRow) -> ReportResult<()> {
        let lengths = row
            .final_line_lengths
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";");
        let avg = row
            .avg_wait_secs
            .map(|a| format!("{a:.2}"))
            .unwrap_or_default();

        self.writer.write_record(&[
            row.policy.clone(),
            row.duration_secs.to_string(),
            row.total_arrivals.to_string(),
            row.customers_served.to_string(),
            row.total_wait_secs.to_string(),
            avg,
            row.max_queue_len.to_string(),
            lengths,
        ])?;
        Ok(())
    }

    /// Flush the underlying sink.  Safe to call more than once.
    pub fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
