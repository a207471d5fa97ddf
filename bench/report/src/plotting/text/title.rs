use crate::plotting::chart_kind::ChartKind;

impl ChartKind {
    pub fn title(&self) -> String {
        let detail = match self {
            ChartKind::LatencyThroughput => "",
            ChartKind::ThroughputVsLatency => " (size = batch, color = server backpressure)",
            ChartKind::BackpressureHeatmap => " (lower is better)",
            ChartKind::SliceSweep => ": Throughput, GC, p99 Delay vs Slice Size",
        };
        format!("{self}{detail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_appends_chart_detail() {
        assert_eq!(
            ChartKind::BackpressureHeatmap.title(),
            "Server Backpressure Heatmap (lower is better)"
        );
        assert_eq!(
            ChartKind::LatencyThroughput.title(),
            "Latency & Throughput by Batch Size"
        );
    }
}
