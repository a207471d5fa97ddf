use crate::types::field_value::FieldValue;
use serde::Serializer;
use std::collections::BTreeMap;

pub(crate) fn round_float<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serializer.serialize_some(&((value * 1000.0).round() / 1000.0)),
        None => serializer.serialize_none(),
    }
}

/// Cells moved out of a coerced row while filling typed columns.
///
/// Cells that cannot fill their column land in `invalid`, keyed by column.
pub(crate) struct ColumnTaker<'a> {
    pub fields: &'a mut BTreeMap<String, FieldValue>,
    pub invalid: &'a mut BTreeMap<String, FieldValue>,
}

impl ColumnTaker<'_> {
    pub fn int(&mut self, column: &str) -> Option<i64> {
        self.take_with(column, FieldValue::as_i64)
    }

    pub fn float(&mut self, column: &str) -> Option<f64> {
        self.take_with(column, FieldValue::as_f64)
    }

    // Blank cells in known columns count as absent.
    fn take_with<T>(&mut self, column: &str, convert: fn(&FieldValue) -> Option<T>) -> Option<T> {
        let value = self.fields.remove(column)?;
        if value.is_blank() {
            return None;
        }
        let converted = convert(&value);
        if converted.is_none() {
            self.invalid.insert(column.to_owned(), value);
        }
        converted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconvertible_cell_is_set_aside() {
        let mut fields = BTreeMap::from([
            ("batchSize".to_owned(), FieldValue::Text("lots".to_owned())),
            ("p99Ms".to_owned(), FieldValue::Float(1.5)),
            ("frames".to_owned(), FieldValue::Text(" ".to_owned())),
        ]);
        let mut invalid = BTreeMap::new();
        let mut taker = ColumnTaker {
            fields: &mut fields,
            invalid: &mut invalid,
        };

        assert_eq!(taker.int("batchSize"), None);
        assert_eq!(taker.float("p99Ms"), Some(1.5));
        assert_eq!(taker.int("frames"), None);
        assert_eq!(taker.int("timeoutMs"), None);

        assert!(fields.is_empty());
        assert_eq!(
            invalid,
            BTreeMap::from([("batchSize".to_owned(), FieldValue::Text("lots".to_owned()))])
        );
    }

    #[test]
    fn fractional_value_in_integer_column_is_set_aside() {
        let mut fields = BTreeMap::from([("batchSize".to_owned(), FieldValue::Float(2.5))]);
        let mut invalid = BTreeMap::new();
        let mut taker = ColumnTaker {
            fields: &mut fields,
            invalid: &mut invalid,
        };

        assert_eq!(taker.int("batchSize"), None);
        assert_eq!(invalid.get("batchSize"), Some(&FieldValue::Float(2.5)));
    }
}
