use super::benchmark_record::BenchmarkRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// A configuration singled out by the summary, with the value it stood out for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, derive_new::new)]
pub struct ConfigurationHighlight {
    pub batch_size: i64,
    pub flush_interval_ms: i64,
    pub value: f64,
}

/// Aggregate view over a loaded sweep, used for chart subtext and console output.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SweepSummary {
    pub records: usize,
    pub batch_sizes: Vec<i64>,
    pub flush_intervals: Vec<i64>,
    pub payload_bytes: Vec<i64>,
    pub total_received: u64,
    pub total_dropped: u64,
    pub total_client_backpressure: u64,
    pub total_server_backpressure: u64,
    pub best_throughput: Option<ConfigurationHighlight>,
    pub lowest_p99: Option<ConfigurationHighlight>,
}

impl SweepSummary {
    pub fn from_records(records: &[BenchmarkRecord]) -> Self {
        let batch_sizes: BTreeSet<i64> = records.iter().filter_map(|r| r.batch_size).collect();
        let flush_intervals: BTreeSet<i64> = records
            .iter()
            .map(BenchmarkRecord::flush_interval_or_default)
            .collect();
        let payload_bytes: BTreeSet<i64> =
            records.iter().filter_map(|r| r.payload_bytes).collect();

        Self {
            records: records.len(),
            batch_sizes: batch_sizes.into_iter().collect(),
            flush_intervals: flush_intervals.into_iter().collect(),
            payload_bytes: payload_bytes.into_iter().collect(),
            total_received: total(records, |r| r.received),
            total_dropped: total(records, |r| r.dropped),
            total_client_backpressure: total(records, |r| r.client.backpressure),
            total_server_backpressure: total(records, |r| r.server.backpressure),
            best_throughput: highlight(records, |r| r.throughput_msg_sec, |a, b| a > b),
            lowest_p99: highlight(records, |r| r.p99_ms, |a, b| a < b),
        }
    }
}

fn total(records: &[BenchmarkRecord], value: fn(&BenchmarkRecord) -> Option<i64>) -> u64 {
    records
        .iter()
        .filter_map(value)
        .map(|v| v.max(0) as u64)
        .sum()
}

// First record wins ties.
fn highlight(
    records: &[BenchmarkRecord],
    value: fn(&BenchmarkRecord) -> Option<f64>,
    better: fn(f64, f64) -> bool,
) -> Option<ConfigurationHighlight> {
    records
        .iter()
        .filter_map(|r| {
            let batch_size = r.batch_size?;
            let measured = value(r)?;
            Some(ConfigurationHighlight::new(
                batch_size,
                r.flush_interval_or_default(),
                measured,
            ))
        })
        .fold(None, |best, candidate| match best {
            Some(current) if !better(candidate.value, current.value) => Some(current),
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(flush: i64, batch: i64, throughput: f64, p99: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            flush_interval_ms: Some(flush),
            batch_size: Some(batch),
            throughput_msg_sec: Some(throughput),
            p99_ms: Some(p99),
            received: Some(100),
            dropped: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn summarises_distinct_axes_and_totals() {
        let records = vec![
            record(5, 4, 1000.0, 2.0),
            record(0, 1, 3000.0, 1.0),
            record(5, 1, 2000.0, 4.0),
        ];

        let summary = SweepSummary::from_records(&records);

        assert_eq!(summary.records, 3);
        assert_eq!(summary.batch_sizes, vec![1, 4]);
        assert_eq!(summary.flush_intervals, vec![0, 5]);
        assert_eq!(summary.total_received, 300);
        assert_eq!(summary.total_dropped, 3);
        assert_eq!(
            summary.best_throughput,
            Some(ConfigurationHighlight::new(1, 0, 3000.0))
        );
        assert_eq!(
            summary.lowest_p99,
            Some(ConfigurationHighlight::new(1, 0, 1.0))
        );
    }

    #[test]
    fn empty_sweep_has_no_highlights() {
        let summary = SweepSummary::from_records(&[]);
        assert_eq!(summary.records, 0);
        assert!(summary.best_throughput.is_none());
        assert!(summary.lowest_p99.is_none());
    }

    #[test]
    fn first_record_wins_ties() {
        let records = vec![record(0, 2, 500.0, 1.0), record(0, 8, 500.0, 1.0)];
        let summary = SweepSummary::from_records(&records);
        assert_eq!(summary.best_throughput.map(|h| h.batch_size), Some(2));
    }
}
