use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ChartKind {
    #[display("Latency & Throughput by Batch Size")]
    #[serde(rename = "latency_throughput")]
    LatencyThroughput,
    #[display("Latency vs Throughput")]
    #[serde(rename = "throughput_vs_latency")]
    ThroughputVsLatency,
    #[display("Server Backpressure Heatmap")]
    #[serde(rename = "backpressure_heatmap")]
    BackpressureHeatmap,
    #[display("Slice Sweep")]
    #[serde(rename = "slice_sweep")]
    SliceSweep,
}

impl ChartKind {
    /// File name stem used when the chart is saved on its own.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ChartKind::LatencyThroughput => "latency_throughput",
            ChartKind::ThroughputVsLatency => "throughput_vs_latency",
            ChartKind::BackpressureHeatmap => "backpressure_heatmap",
            ChartKind::SliceSweep => "slice_sweep",
        }
    }
}
