pub mod coercion;
pub mod error;
pub mod grid;
pub mod loader;
pub mod plotting;
pub mod prints;
mod types;
mod utils;

pub use types::*;

pub use plotting::backpressure_heatmap::create_backpressure_heatmap;
pub use plotting::latency_throughput::create_latency_throughput_chart;
pub use plotting::slice_sweep::create_slice_sweep_chart;
pub use plotting::throughput_latency::create_throughput_latency_chart;

use benchmark_record::BenchmarkRecord;
use charming::Chart;
use grid::BackpressureGrid;
use plotting::chart_kind::ChartKind;
use tracing::warn;

/// Build every chart that applies to the sweep: the latency and scatter charts always,
/// the backpressure heatmap only when the sweep varies flush interval.
pub fn build_charts(records: &[BenchmarkRecord], dark: bool) -> Vec<(ChartKind, Chart)> {
    let mut charts = vec![
        (
            ChartKind::LatencyThroughput,
            create_latency_throughput_chart(records, dark),
        ),
        (
            ChartKind::ThroughputVsLatency,
            create_throughput_latency_chart(records, dark),
        ),
    ];

    match create_backpressure_heatmap(records, dark) {
        Some(chart) => charts.push((ChartKind::BackpressureHeatmap, chart)),
        None => warn!(
            "Skipping {}: needs at least {} batch size and {} distinct flush intervals",
            ChartKind::BackpressureHeatmap,
            BackpressureGrid::MIN_BATCH_SIZES,
            BackpressureGrid::MIN_FLUSH_INTERVALS
        ),
    }

    charts
}
