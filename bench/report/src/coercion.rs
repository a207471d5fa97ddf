use crate::types::field_value::FieldValue;
use crate::types::raw_record::{CoercedRecord, RawRecord};

/// Coerce a single cell: integer first, then finite float, otherwise the original text.
///
/// Scientific notation without a decimal point (`1e3`) is not an integer, so it lands as a float.
pub fn coerce_value(raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return FieldValue::Int(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => FieldValue::Float(value),
        _ => FieldValue::Text(raw.to_owned()),
    }
}

/// Coerce every field of a row independently. Keys absent from the row stay absent.
pub fn coerce_record(raw: &RawRecord) -> CoercedRecord {
    CoercedRecord {
        origin: raw.origin.clone(),
        fields: raw
            .fields
            .iter()
            .map(|(key, value)| (key.clone(), coerce_value(value)))
            .collect(),
    }
}

/// Coerce rows in order, one output row per input row.
pub fn coerce_records(raw: &[RawRecord]) -> Vec<CoercedRecord> {
    raw.iter().map(coerce_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::raw_record::RecordOrigin;
    use std::collections::BTreeMap;
    use test_case::test_case;

    #[test_case("12", FieldValue::Int(12); "integer")]
    #[test_case("-3", FieldValue::Int(-3); "negative integer")]
    #[test_case(" 42 ", FieldValue::Int(42); "padded integer")]
    #[test_case("12.5", FieldValue::Float(12.5); "float")]
    #[test_case("0.25", FieldValue::Float(0.25); "fraction")]
    #[test_case("1e3", FieldValue::Float(1000.0); "exponent without decimal point")]
    #[test_case("abc", FieldValue::Text("abc".to_owned()); "text")]
    #[test_case("", FieldValue::Text(String::new()); "empty")]
    #[test_case("NaN", FieldValue::Text("NaN".to_owned()); "not a number stays text")]
    #[test_case("inf", FieldValue::Text("inf".to_owned()); "infinity stays text")]
    fn coerces_single_value(raw: &str, expected: FieldValue) {
        assert_eq!(coerce_value(raw), expected);
    }

    #[test]
    fn absent_fields_stay_absent() {
        let mut fields = BTreeMap::new();
        fields.insert("batchSize".to_owned(), "8".to_owned());
        fields.insert("p50Ms".to_owned(), "1.5".to_owned());
        let raw = RawRecord {
            fields,
            ..Default::default()
        };

        let coerced = coerce_record(&raw);

        assert_eq!(coerced.fields.len(), 2);
        assert_eq!(coerced.fields["batchSize"], FieldValue::Int(8));
        assert_eq!(coerced.fields["p50Ms"], FieldValue::Float(1.5));
        assert!(!coerced.fields.contains_key("p99Ms"));
    }

    #[test]
    fn coerces_rows_in_order() {
        let rows: Vec<RawRecord> = ["1", "n/a", "2.5"]
            .iter()
            .enumerate()
            .map(|(index, value)| RawRecord {
                origin: RecordOrigin::new("sweep.csv".into(), index as u64 + 2),
                fields: BTreeMap::from([("batchSize".to_owned(), value.to_string())]),
            })
            .collect();

        let coerced = coerce_records(&rows);

        let lines: Vec<u64> = coerced.iter().map(|r| r.origin.line).collect();
        assert_eq!(lines, vec![2, 3, 4]);
        assert_eq!(coerced[1].fields["batchSize"], FieldValue::Text("n/a".to_owned()));
        assert_eq!(coerced[2].fields["batchSize"], FieldValue::Float(2.5));
    }
}
