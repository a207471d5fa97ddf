use super::chart::BenchChart;
use super::chart_kind::ChartKind;
use super::usable_in;
use crate::benchmark_record::{
    sort_by_configuration, BenchmarkRecord, BATCH_SIZE, FLUSH_INTERVAL_MS, P50_MS, P99_MS,
    THROUGHPUT_MSG_SEC,
};
use crate::sweep_summary::SweepSummary;
use charming::{element::Symbol, Chart};

const REQUIRED_COLUMNS: [&str; 4] = [BATCH_SIZE, P50_MS, P99_MS, THROUGHPUT_MSG_SEC];

/// `[batch size, value]` points of the latency/throughput line chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatencyThroughputSeries {
    pub p50: Vec<Vec<f64>>,
    pub p99: Vec<Vec<f64>>,
    pub throughput: Vec<Vec<f64>>,
}

/// Points in (flush interval, batch size) order.
///
/// Flush intervals are not split into separate lines, so a sweep over several of them
/// renders as one interleaved line. Records without a usable batch size, p50, p99 or
/// throughput are skipped.
pub fn latency_throughput_series(records: &[BenchmarkRecord]) -> LatencyThroughputSeries {
    let mut series = LatencyThroughputSeries::default();
    for record in sort_by_configuration(records) {
        if !usable_in(
            ChartKind::LatencyThroughput,
            record,
            &REQUIRED_COLUMNS,
            &[FLUSH_INTERVAL_MS],
        ) {
            continue;
        }
        let (Some(batch_size), Some(p50), Some(p99), Some(throughput)) = (
            record.batch_size,
            record.p50_ms,
            record.p99_ms,
            record.throughput_msg_sec,
        ) else {
            continue;
        };
        let batch_size = batch_size as f64;
        series.p50.push(vec![batch_size, p50]);
        series.p99.push(vec![batch_size, p99]);
        series.throughput.push(vec![batch_size, throughput]);
    }
    series
}

pub fn create_latency_throughput_chart(records: &[BenchmarkRecord], dark: bool) -> Chart {
    let summary = SweepSummary::from_records(records);
    let series = latency_throughput_series(records);

    BenchChart::new(
        &ChartKind::LatencyThroughput.title(),
        &summary.subtext(),
        dark,
        false,
    )
    .with_data_zoom()
    .with_value_x_axis("Batch Size")
    .with_dual_y_axis("Latency [ms]", "Throughput [msg/s]")
    .add_dual_series("p50", series.p50, Symbol::Circle, "#1f77b4", 0)
    .add_dual_series("p99", series.p99, Symbol::Triangle, "#ff7f0e", 0)
    .add_dual_series("Throughput", series.throughput, Symbol::Rect, "#2ca02c", 1)
    .inner
}
