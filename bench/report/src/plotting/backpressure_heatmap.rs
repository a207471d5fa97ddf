use super::chart::BenchChart;
use super::chart_kind::ChartKind;
use super::colormap::Colormap;
use crate::benchmark_record::BenchmarkRecord;
use crate::grid::BackpressureGrid;
use crate::sweep_summary::SweepSummary;
use charming::Chart;

/// Heatmap of server backpressure over batch size and flush interval.
///
/// Returns `None` when the sweep covers fewer than two flush intervals.
pub fn create_backpressure_heatmap(records: &[BenchmarkRecord], dark: bool) -> Option<Chart> {
    let grid = BackpressureGrid::build(records)?;
    let summary = SweepSummary::from_records(records);
    let colors = Colormap::Magma.hex_stops();

    let chart = BenchChart::new(
        &ChartKind::BackpressureHeatmap.title(),
        &summary.subtext(),
        dark,
        false,
    )
    .with_item_tooltip()
    .with_category_x_axis("Batch Size", labels(&grid.batch_sizes))
    .with_category_y_axis("Flush Interval [ms]", labels(&grid.flush_intervals))
    .add_heatmap("Backpressure Events", grid.as_charming_points())
    .with_visual_map(
        0.0,
        grid.max_value().max(1) as f64,
        colors.iter().map(String::as_str).collect(),
        2,
        0,
    )
    .inner;

    Some(chart)
}

fn labels(values: &[i64]) -> Vec<String> {
    values.iter().map(i64::to_string).collect()
}
