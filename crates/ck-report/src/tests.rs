//! Tests for the report renderers.

use ck_sim::RunStats;

use crate::{CsvReportWriter, PolicyRunRow, TextReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sample_stats() -> RunStats {
    RunStats {
        duration_ticks:     7_200,
        total_arrivals:     240,
        customers_served:   236,
        total_wait_secs:    24_190,
        max_queue_len:      9,
        final_line_lengths: vec![4],
        in_service_at_end:  3,
    }
}

fn empty_stats() -> RunStats {
    RunStats {
        duration_ticks:     100,
        total_arrivals:     10,
        customers_served:   0,
        total_wait_secs:    0,
        max_queue_len:      10,
        final_line_lengths: vec![10],
        in_service_at_end:  0,
    }
}

// ── Text report ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use super::*;

    #[test]
    fn renders_full_summary() {
        // 24190 / 236 = 102.5 s → truncates to 1 min 42 sec.
        let rendered = TextReport::new("single-line, 5 stations", &sample_stats()).to_string();
        assert_eq!(
            rendered,
            "single-line, 5 stations\n\
             Total elapsed time: 120 min 0 sec\n\
             Customers served: 236\n\
             Length of line 1: 4\n\
             Maximum queue length: 9\n\
             Average customer waiting time: 1 min 42 sec\n"
        );
    }

    #[test]
    fn lines_numbered_from_one() {
        let mut stats = sample_stats();
        stats.final_line_lengths = vec![2, 0, 7];
        let rendered = TextReport::new("least-customers", &stats).to_string();
        assert!(rendered.contains("Length of line 1: 2\n"));
        assert!(rendered.contains("Length of line 2: 0\n"));
        assert!(rendered.contains("Length of line 3: 7\n"));
    }

    #[test]
    fn no_data_average_reads_na() {
        let rendered = TextReport::new("starved run", &empty_stats()).to_string();
        assert!(rendered.contains("Average customer waiting time: n/a (no customers served)"));
    }
}

// ── CSV report ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy_comparison.csv");

        let mut writer = CsvReportWriter::from_path(&path).unwrap();
        let mut stats = sample_stats();
        stats.final_line_lengths = vec![4, 1];
        writer.write_run(&PolicyRunRow::from_stats("least-customers", &stats)).unwrap();
        writer.write_run(&PolicyRunRow::from_stats("random-line", &stats)).unwrap();
        writer.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "policy,duration_secs,total_arrivals,customers_served,total_wait_secs,\
             avg_wait_secs,max_queue_len,final_line_lengths"
        );
        assert_eq!(lines[1], "least-customers,7200,240,236,24190,102.50,9,4;1");
        assert!(lines[2].starts_with("random-line,"));
    }

    #[test]
    fn no_data_average_is_empty_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        let mut writer = CsvReportWriter::from_path(&path).unwrap();
        writer.write_run(&PolicyRunRow::from_stats("starved", &empty_stats())).unwrap();
        writer.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let row = contents.lines().nth(1).unwrap();
        assert_eq!(row, "starved,100,10,0,0,,10,10");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("twice.csv");

        let mut writer = CsvReportWriter::from_path(&path).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}
