use crate::coercion::coerce_records;
use crate::error::ReportError;
use crate::types::benchmark_record::BenchmarkRecord;
use crate::types::raw_record::{RawRecord, RecordOrigin};
use crate::types::slice_sweep::SliceSweepRecord;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read every file in order and concatenate their rows.
pub fn read_csv_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawRecord>, ReportError> {
    let mut rows = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let file_rows = read_csv_file(path)?;
        debug!("Read {} rows from {}", file_rows.len(), path.display());
        rows.extend(file_rows);
    }
    Ok(rows)
}

pub fn read_csv_file(path: &Path) -> Result<Vec<RawRecord>, ReportError> {
    let file = File::open(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file, path)
}

/// Parse delimited text with a header row. `file` is only used to label origins and errors.
///
/// Rows shorter than the header leave the trailing columns absent; cells past the header are dropped.
pub fn read_csv<R: Read>(reader: R, file: &Path) -> Result<Vec<RawRecord>, ReportError> {
    let csv_error = |source| ReportError::Csv {
        path: file.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, |p| p.line());
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        rows.push(RawRecord {
            origin: RecordOrigin::new(file.to_path_buf(), line),
            fields,
        });
    }
    Ok(rows)
}

/// Load, coerce and type every row of the given files.
///
/// Cells that are not numbers in numeric columns do not fail the load; they are
/// kept on the record and only charts reading those columns skip it.
pub fn load_records<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<BenchmarkRecord>, ReportError> {
    let raw = read_csv_files(paths)?;
    let records: Vec<BenchmarkRecord> = coerce_records(&raw)
        .into_iter()
        .map(BenchmarkRecord::from)
        .collect();
    for record in records.iter().filter(|r| !r.invalid.is_empty()) {
        debug!(
            "Non-numeric cells at {}:{}: {:?}",
            record.origin.file.display(),
            record.origin.line,
            record.invalid
        );
    }
    Ok(records)
}

pub fn load_slice_sweep(path: &Path) -> Result<Vec<SliceSweepRecord>, ReportError> {
    let file = File::open(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file)
        .deserialize()
        .collect::<Result<Vec<SliceSweepRecord>, csv::Error>>()
        .map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Write the typed records as `records.json` into `output_dir`, creating it if needed.
pub fn dump_to_json(records: &[BenchmarkRecord], output_dir: &Path) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let report_path = output_dir.join("records.json");
    let report_json = serde_json::to_string_pretty(records)?;
    std::fs::write(&report_path, report_json).map_err(|source| ReportError::Io {
        path: report_path.clone(),
        source,
    })?;
    Ok(report_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<RawRecord> {
        read_csv(text.as_bytes(), Path::new("inline.csv")).unwrap()
    }

    #[test]
    fn maps_rows_by_header() {
        let rows = parse("batchSize,p50Ms\n1,0.5\n2,0.75\n");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields["batchSize"], "1");
        assert_eq!(rows[1].fields["p50Ms"], "0.75");
        assert_eq!(rows[1].origin.line, 3);
    }

    #[test]
    fn short_row_leaves_columns_absent() {
        let rows = parse("batchSize,flushIntervalMs,p50Ms\n4,10\n");

        assert_eq!(rows[0].fields.len(), 2);
        assert!(!rows[0].fields.contains_key("p50Ms"));
    }

    #[test]
    fn surplus_cells_are_dropped() {
        let rows = parse("batchSize\n4,extra,cells\n");

        assert_eq!(rows[0].fields.len(), 1);
        assert_eq!(rows[0].fields["batchSize"], "4");
    }

    #[test]
    fn header_only_file_has_no_rows() {
        assert!(parse("batchSize,p50Ms\n").is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_csv_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
