use crate::utils::{round_float, ColumnTaker};
use derive_more::derive::Display;
use serde::Serialize;

/// Which end of the transport a set of buffering statistics was collected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum BufferSide {
    #[display("client")]
    Client,
    #[display("server")]
    Server,
}

impl BufferSide {
    /// Column name for this side, e.g. `serverBackpressure` for suffix `Backpressure`.
    pub fn column(&self, suffix: &str) -> String {
        format!("{self}{suffix}")
    }
}

pub const FLUSHES_SUFFIX: &str = "Flushes";
pub const AVG_BUFFERS_SUFFIX: &str = "AvgBuffers";
pub const MAX_BUFFERS_SUFFIX: &str = "MaxBuffers";
pub const AVG_BYTES_SUFFIX: &str = "AvgBytes";
pub const MAX_BYTES_SUFFIX: &str = "MaxBytes";
pub const BACKPRESSURE_SUFFIX: &str = "Backpressure";

/// Buffering statistics reported by one side of the transport.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferingStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flushes: Option<i64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "round_float"
    )]
    pub avg_buffers: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_buffers: Option<i64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "round_float"
    )]
    pub avg_bytes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backpressure: Option<i64>,
}

impl BufferingStats {
    /// Move this side's columns out of the row, leaving the rest untouched.
    pub(crate) fn take(side: BufferSide, taker: &mut ColumnTaker) -> Self {
        Self {
            flushes: taker.int(&side.column(FLUSHES_SUFFIX)),
            avg_buffers: taker.float(&side.column(AVG_BUFFERS_SUFFIX)),
            max_buffers: taker.int(&side.column(MAX_BUFFERS_SUFFIX)),
            avg_bytes: taker.float(&side.column(AVG_BYTES_SUFFIX)),
            max_bytes: taker.int(&side.column(MAX_BYTES_SUFFIX)),
            backpressure: taker.int(&side.column(BACKPRESSURE_SUFFIX)),
        }
    }

    /// Whether the column with this suffix holds a value.
    pub fn has_value(&self, suffix: &str) -> bool {
        match suffix {
            FLUSHES_SUFFIX => self.flushes.is_some(),
            AVG_BUFFERS_SUFFIX => self.avg_buffers.is_some(),
            MAX_BUFFERS_SUFFIX => self.max_buffers.is_some(),
            AVG_BYTES_SUFFIX => self.avg_bytes.is_some(),
            MAX_BYTES_SUFFIX => self.max_bytes.is_some(),
            BACKPRESSURE_SUFFIX => self.backpressure.is_some(),
            _ => false,
        }
    }
}
