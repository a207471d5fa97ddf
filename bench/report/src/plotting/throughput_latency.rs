use super::chart::BenchChart;
use super::chart_kind::ChartKind;
use super::colormap::Colormap;
use super::usable_in;
use crate::benchmark_record::{
    BenchmarkRecord, BATCH_SIZE, FLUSH_INTERVAL_MS, P99_MS, SERVER_BACKPRESSURE,
    THROUGHPUT_MSG_SEC,
};
use crate::sweep_summary::SweepSummary;
use charming::Chart;

/// Marker area in px² contributed by each unit of batch size.
pub const AREA_PER_BATCH_UNIT: f64 = 16.0;
pub const MIN_SYMBOL_SIZE: f64 = 4.0;

// Marker layout: [throughput, p99, backpressure, symbol size]
const BACKPRESSURE_DIMENSION: usize = 2;
const SIZE_DIMENSION: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub label: String,
    pub throughput: f64,
    pub p99: f64,
    pub batch_size: i64,
    pub backpressure: i64,
}

impl ScatterPoint {
    /// Marker diameter whose area grows linearly with batch size.
    pub fn symbol_size(&self) -> f64 {
        (self.batch_size.max(0) as f64 * AREA_PER_BATCH_UNIT)
            .sqrt()
            .max(MIN_SYMBOL_SIZE)
    }
}

/// One point per usable record in load order; missing server backpressure counts as 0.
pub fn scatter_points(records: &[BenchmarkRecord]) -> Vec<ScatterPoint> {
    records
        .iter()
        .filter(|record| {
            usable_in(
                ChartKind::ThroughputVsLatency,
                record,
                &[THROUGHPUT_MSG_SEC, P99_MS, BATCH_SIZE],
                &[FLUSH_INTERVAL_MS, SERVER_BACKPRESSURE],
            )
        })
        .filter_map(|record| {
            let (Some(throughput), Some(p99), Some(batch_size)) =
                (record.throughput_msg_sec, record.p99_ms, record.batch_size)
            else {
                return None;
            };
            Some(ScatterPoint {
                label: record.label(),
                throughput,
                p99,
                batch_size,
                backpressure: record.server_backpressure_or_default(),
            })
        })
        .collect()
}

pub fn create_throughput_latency_chart(records: &[BenchmarkRecord], dark: bool) -> Chart {
    let summary = SweepSummary::from_records(records);
    let points = scatter_points(records);
    let min_backpressure = points.iter().map(|p| p.backpressure).min().unwrap_or(0) as f64;
    let max_backpressure = points.iter().map(|p| p.backpressure).max().unwrap_or(0) as f64;
    let colors = Colormap::Viridis.hex_stops();

    let markers = points
        .iter()
        .map(|p| vec![p.throughput, p.p99, p.backpressure as f64, p.symbol_size()])
        .collect();
    let labels = points
        .iter()
        .map(|p| (vec![p.throughput, p.p99], p.label.clone()))
        .collect();

    BenchChart::new(
        &ChartKind::ThroughputVsLatency.title(),
        &summary.subtext(),
        dark,
        false,
    )
    .with_item_tooltip()
    .with_value_x_axis("Throughput [msg/s]")
    .with_y_axis("p99 Latency [ms]")
    .add_sized_scatter_series("Server Backpressure Events", markers, SIZE_DIMENSION)
    .add_point_labels("Configuration", labels)
    .with_visual_map(
        min_backpressure,
        max_backpressure.max(min_backpressure + 1.0),
        colors.iter().map(String::as_str).collect(),
        BACKPRESSURE_DIMENSION,
        0,
    )
    .inner
}
