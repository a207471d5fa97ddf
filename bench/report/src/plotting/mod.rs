pub mod backpressure_heatmap;
pub mod chart;
pub mod chart_kind;
pub mod colormap;
pub mod latency_throughput;
pub mod slice_sweep;
pub mod text;
pub mod throughput_latency;

use crate::benchmark_record::BenchmarkRecord;
use chart_kind::ChartKind;
use tracing::warn;

/// Whether `record` can feed `chart`, which needs every `required` column and reads
/// `optional` ones when present. Logs why the record is skipped when it cannot.
pub(crate) fn usable_in(
    chart: ChartKind,
    record: &BenchmarkRecord,
    required: &[&str],
    optional: &[&str],
) -> bool {
    let problems = record.column_problems(required, optional);
    if problems.is_empty() {
        return true;
    }
    warn!(
        "Skipping record at {}:{} in {chart}: {}",
        record.origin.file.display(),
        record.origin.line,
        problems.join(", ")
    );
    false
}
