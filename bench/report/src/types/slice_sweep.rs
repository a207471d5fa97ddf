use serde::{Deserialize, Serialize};

pub const TS_SERVER_MODE: &str = "ts-server";
pub const NATIVE_SERVER_MODE: &str = "native-server";

/// One row of a slice-size sweep comparing server implementations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceSweepRecord {
    pub mode: String,
    pub slice_size: f64,
    pub throughput_msg_s: f64,
    pub gc_ms: f64,
    pub p99_delay_ms: f64,
}

/// Rows of one server mode, in file order.
pub fn rows_for_mode<'a>(rows: &'a [SliceSweepRecord], mode: &str) -> Vec<&'a SliceSweepRecord> {
    rows.iter().filter(|row| row.mode == mode).collect()
}
