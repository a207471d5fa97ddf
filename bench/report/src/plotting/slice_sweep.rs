use super::chart::BenchChart;
use super::chart_kind::ChartKind;
use crate::slice_sweep::{rows_for_mode, SliceSweepRecord, NATIVE_SERVER_MODE, TS_SERVER_MODE};
use charming::{element::Symbol, Chart};

fn points(rows: &[&SliceSweepRecord], value: fn(&SliceSweepRecord) -> f64) -> Vec<Vec<f64>> {
    rows.iter().map(|row| vec![row.slice_size, value(row)]).collect()
}

/// Throughput (left axis) and GC time (right axis) against slice size for both server modes,
/// with p99 delay as points on the left axis.
pub fn create_slice_sweep_chart(rows: &[SliceSweepRecord], dark: bool) -> Chart {
    let ts = rows_for_mode(rows, TS_SERVER_MODE);
    let native = rows_for_mode(rows, NATIVE_SERVER_MODE);
    let subtext = format!(
        "{} TS Server Runs  •  {} Native Server Runs",
        ts.len(),
        native.len()
    );

    BenchChart::new(&ChartKind::SliceSweep.title(), &subtext, dark, false)
        .with_value_x_axis("Slice Size")
        .with_dual_y_axis("Throughput [msg/s]", "GC Time [ms]")
        .add_dual_series(
            "TS Throughput",
            points(&ts, |r| r.throughput_msg_s),
            Symbol::Circle,
            "#0000ff",
            0,
        )
        .add_dual_series(
            "Native Throughput",
            points(&native, |r| r.throughput_msg_s),
            Symbol::Rect,
            "#008000",
            0,
        )
        .add_dual_series("TS GC ms", points(&ts, |r| r.gc_ms), Symbol::Circle, "#ff0000", 1)
        .add_dual_series(
            "Native GC ms",
            points(&native, |r| r.gc_ms),
            Symbol::Rect,
            "#ffa500",
            1,
        )
        .add_scatter_series("TS p99 Delay", points(&ts, |r| r.p99_delay_ms), "#800080")
        .add_scatter_series(
            "Native p99 Delay",
            points(&native, |r| r.p99_delay_ms),
            "#ff00ff",
        )
        .inner
}
