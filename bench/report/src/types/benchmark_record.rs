use super::buffering_stats::{BufferSide, BufferingStats};
use super::field_value::FieldValue;
use super::raw_record::{CoercedRecord, RecordOrigin};
use crate::utils::{round_float, ColumnTaker};
use serde::Serialize;
use std::collections::BTreeMap;

pub const BATCH_SIZE: &str = "batchSize";
pub const FLUSH_INTERVAL_MS: &str = "flushIntervalMs";
pub const FRAMES: &str = "frames";
pub const PAYLOAD_BYTES: &str = "payloadBytes";
pub const TIMEOUT_MS: &str = "timeoutMs";
pub const P50_MS: &str = "p50Ms";
pub const P99_MS: &str = "p99Ms";
pub const MAX_MS: &str = "maxMs";
pub const THROUGHPUT_MSG_SEC: &str = "throughputMsgSec";
pub const RECEIVED: &str = "received";
pub const DROPPED: &str = "dropped";
pub const OUTSTANDING: &str = "outstanding";
pub const SERVER_BACKPRESSURE: &str = "serverBackpressure";

/// Header row written by the load-testing harness.
pub const CSV_HEADER: [&str; 24] = [
    "batchSize",
    "flushIntervalMs",
    "frames",
    "payloadBytes",
    "timeoutMs",
    "p50Ms",
    "p99Ms",
    "maxMs",
    "throughputMsgSec",
    "received",
    "dropped",
    "outstanding",
    "clientFlushes",
    "clientAvgBuffers",
    "clientMaxBuffers",
    "clientAvgBytes",
    "clientMaxBytes",
    "clientBackpressure",
    "serverFlushes",
    "serverAvgBuffers",
    "serverMaxBuffers",
    "serverAvgBytes",
    "serverMaxBytes",
    "serverBackpressure",
];

/// Measured results for one (flush interval, batch size) configuration.
///
/// Every column is optional; chart builders decide their own defaults.
/// Columns outside [`CSV_HEADER`] are kept, coerced, in `extra`. Known columns
/// whose cell is not a number of the column's type are left empty and the cell
/// is kept in `invalid`; only charts reading that column skip the record.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    #[serde(skip)]
    pub origin: RecordOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flush_interval_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<i64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "round_float"
    )]
    pub p50_ms: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "round_float"
    )]
    pub p99_ms: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "round_float"
    )]
    pub max_ms: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "round_float"
    )]
    pub throughput_msg_sec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropped: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outstanding: Option<i64>,
    pub client: BufferingStats,
    pub server: BufferingStats,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, FieldValue>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub invalid: BTreeMap<String, FieldValue>,
}

impl BenchmarkRecord {
    /// Flush interval with a missing value read as 0 ms.
    pub fn flush_interval_or_default(&self) -> i64 {
        self.flush_interval_ms.unwrap_or(0)
    }

    pub fn server_backpressure_or_default(&self) -> i64 {
        self.server.backpressure.unwrap_or(0)
    }

    /// Short point label, e.g. `b16 f5`.
    pub fn label(&self) -> String {
        let batch = self
            .batch_size
            .map_or_else(|| "?".to_owned(), |b| b.to_string());
        format!("b{batch} f{}", self.flush_interval_or_default())
    }

    /// Whether the known column `column` holds a value.
    pub fn has_value(&self, column: &str) -> bool {
        match column {
            BATCH_SIZE => self.batch_size.is_some(),
            FLUSH_INTERVAL_MS => self.flush_interval_ms.is_some(),
            FRAMES => self.frames.is_some(),
            PAYLOAD_BYTES => self.payload_bytes.is_some(),
            TIMEOUT_MS => self.timeout_ms.is_some(),
            P50_MS => self.p50_ms.is_some(),
            P99_MS => self.p99_ms.is_some(),
            MAX_MS => self.max_ms.is_some(),
            THROUGHPUT_MSG_SEC => self.throughput_msg_sec.is_some(),
            RECEIVED => self.received.is_some(),
            DROPPED => self.dropped.is_some(),
            OUTSTANDING => self.outstanding.is_some(),
            _ => {
                if let Some(suffix) = column.strip_prefix(&BufferSide::Client.to_string()) {
                    self.client.has_value(suffix)
                } else if let Some(suffix) = column.strip_prefix(&BufferSide::Server.to_string()) {
                    self.server.has_value(suffix)
                } else {
                    false
                }
            }
        }
    }

    /// Reasons this record cannot feed a chart that needs every `required` column
    /// and reads `optional` columns when present. Empty when the record is usable.
    pub fn column_problems(&self, required: &[&str], optional: &[&str]) -> Vec<String> {
        let mut problems = Vec::new();
        for column in required.iter().chain(optional) {
            if let Some(value) = self.invalid.get(*column) {
                problems.push(format!("{column} is not a number: '{value}'"));
            }
        }
        for column in required {
            if !self.invalid.contains_key(*column) && !self.has_value(column) {
                problems.push(format!("{column} is missing"));
            }
        }
        problems
    }
}

impl From<CoercedRecord> for BenchmarkRecord {
    fn from(record: CoercedRecord) -> Self {
        let CoercedRecord { origin, mut fields } = record;
        let mut invalid = BTreeMap::new();
        let mut taker = ColumnTaker {
            fields: &mut fields,
            invalid: &mut invalid,
        };

        let batch_size = taker.int(BATCH_SIZE);
        let flush_interval_ms = taker.int(FLUSH_INTERVAL_MS);
        let frames = taker.int(FRAMES);
        let payload_bytes = taker.int(PAYLOAD_BYTES);
        let timeout_ms = taker.int(TIMEOUT_MS);
        let p50_ms = taker.float(P50_MS);
        let p99_ms = taker.float(P99_MS);
        let max_ms = taker.float(MAX_MS);
        let throughput_msg_sec = taker.float(THROUGHPUT_MSG_SEC);
        let received = taker.int(RECEIVED);
        let dropped = taker.int(DROPPED);
        let outstanding = taker.int(OUTSTANDING);
        let client = BufferingStats::take(BufferSide::Client, &mut taker);
        let server = BufferingStats::take(BufferSide::Server, &mut taker);

        Self {
            origin,
            batch_size,
            flush_interval_ms,
            frames,
            payload_bytes,
            timeout_ms,
            p50_ms,
            p99_ms,
            max_ms,
            throughput_msg_sec,
            received,
            dropped,
            outstanding,
            client,
            server,
            extra: fields,
            invalid,
        }
    }
}

/// Records ordered by (flush interval, batch size), missing values read as 0.
///
/// The sort is stable, so records sharing a configuration keep their load order.
pub fn sort_by_configuration(records: &[BenchmarkRecord]) -> Vec<&BenchmarkRecord> {
    let mut sorted: Vec<&BenchmarkRecord> = records.iter().collect();
    sorted.sort_by_key(|r| (r.flush_interval_or_default(), r.batch_size.unwrap_or(0)));
    sorted
}
