use super::field_value::FieldValue;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where a row came from: the file and the 1-based line number of the row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, derive_new::new)]
pub struct RecordOrigin {
    pub file: PathBuf,
    pub line: u64,
}

/// One data row as read from a CSV file, keyed by header name.
///
/// Columns the row does not reach are absent rather than empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    pub origin: RecordOrigin,
    pub fields: BTreeMap<String, String>,
}

/// A [`RawRecord`] with every present field coerced to a [`FieldValue`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoercedRecord {
    pub origin: RecordOrigin,
    pub fields: BTreeMap<String, FieldValue>,
}
