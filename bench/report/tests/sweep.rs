use batch_bench_report::benchmark_record::{BenchmarkRecord, CSV_HEADER};
use batch_bench_report::build_charts;
use batch_bench_report::error::ReportError;
use batch_bench_report::field_value::FieldValue;
use batch_bench_report::grid::BackpressureGrid;
use batch_bench_report::loader::{load_records, load_slice_sweep, read_csv_files};
use batch_bench_report::plotting::chart_kind::ChartKind;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use test_case::test_case;

fn header() -> String {
    CSV_HEADER.join(",")
}

/// A full-width row: only the configuration, latency, throughput and server backpressure vary.
fn row(batch: i64, flush: i64, p50: f64, p99: f64, throughput: f64, backpressure: i64) -> String {
    format!(
        "{batch},{flush},1000,256,5000,{p50},{p99},9.5,{throughput},1000,0,0,\
         10,1.5,4,384.25,1024,0,12,2.5,6,640.5,2048,{backpressure}"
    )
}

fn write_csv(dir: &TempDir, name: &str, rows: &[String]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", header()).unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    path
}

#[test]
fn loads_files_in_order_given() {
    let dir = TempDir::new().unwrap();
    let first = write_csv(
        &dir,
        "b.csv",
        &[row(1, 0, 0.5, 1.0, 1000.0, 0), row(2, 0, 0.6, 1.2, 1900.0, 0)],
    );
    let second = write_csv(&dir, "a.csv", &[row(4, 5, 0.7, 1.4, 3500.0, 2)]);

    let raw = read_csv_files(&[&first, &second]).unwrap();
    let records = load_records(&[first, second]).unwrap();

    assert_eq!(raw.len(), 3);
    assert_eq!(records.len(), 3);
    let batches: Vec<Option<i64>> = records.iter().map(|r| r.batch_size).collect();
    assert_eq!(batches, vec![Some(1), Some(2), Some(4)]);
    assert_eq!(records[2].flush_interval_ms, Some(5));
    assert_eq!(records[2].server.backpressure, Some(2));
    assert_eq!(records[2].client.avg_bytes, Some(384.25));
    assert!(records[2].extra.is_empty());
}

#[test]
fn missing_file_aborts_loading() {
    let dir = TempDir::new().unwrap();
    let present = write_csv(&dir, "present.csv", &[row(1, 0, 0.5, 1.0, 1000.0, 0)]);
    let missing = dir.path().join("missing.csv");

    let err = load_records(&[present, missing]).unwrap_err();

    assert!(matches!(err, ReportError::Io { .. }));
    assert!(err.to_string().contains("missing.csv"));
}

#[test]
fn tolerates_extra_and_missing_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.csv");
    std::fs::write(
        &path,
        "batchSize,p99Ms,throughputMsgSec,transport\n8,2.5,4000,writev\n",
    )
    .unwrap();

    let records = load_records(&[path]).unwrap();

    assert_eq!(records[0].batch_size, Some(8));
    assert_eq!(records[0].p50_ms, None);
    assert_eq!(records[0].flush_interval_ms, None);
    assert_eq!(
        records[0].extra.get("transport"),
        Some(&FieldValue::Text("writev".to_owned()))
    );
}

#[test]
fn text_in_numeric_column_is_kept_with_its_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "batchSize,p99Ms\n1,2.0\n2,slow\n").unwrap();

    let records = load_records(&[path]).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].p99_ms, None);
    assert_eq!(records[1].origin.line, 3);
    assert_eq!(
        records[1].invalid.get("p99Ms"),
        Some(&FieldValue::Text("slow".to_owned()))
    );
}

#[test]
fn text_in_unplotted_column_still_renders_charts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("s.csv");
    std::fs::write(
        &path,
        "batchSize,flushIntervalMs,p50Ms,p99Ms,throughputMsgSec,serverAvgBytes\n\
         1,5,0.5,1.0,1000,n/a\n\
         2,5,0.6,1.2,1900,512\n",
    )
    .unwrap();

    let records = load_records(&[path]).unwrap();
    let kinds: Vec<ChartKind> = build_charts(&records, false)
        .into_iter()
        .map(|(kind, _)| kind)
        .collect();

    assert_eq!(
        kinds,
        vec![ChartKind::LatencyThroughput, ChartKind::ThroughputVsLatency]
    );
    assert_eq!(records[0].server.avg_bytes, None);
    assert_eq!(records[1].server.avg_bytes, Some(512.0));
}

#[test]
fn text_in_backpressure_column_drops_only_that_heatmap_cell() {
    let dir = TempDir::new().unwrap();
    let unreadable = format!(
        "{},n/a",
        row(4, 10, 0.6, 1.3, 3000.0, 0).trim_end_matches(",0")
    );
    let path = write_csv(
        &dir,
        "sweep.csv",
        &[
            row(1, 5, 0.4, 0.9, 1000.0, 7),
            row(2, 10, 0.5, 1.1, 1900.0, 3),
            unreadable,
        ],
    );

    let records = load_records(&[path]).unwrap();
    let grid = BackpressureGrid::build(&records).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(grid.batch_sizes, vec![1, 2]);
    assert_eq!(build_charts(&records, true).len(), 3);
}

#[test]
fn single_flush_interval_produces_line_and_scatter_only() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "sweep.csv",
        &[
            row(1, 5, 0.4, 0.9, 1000.0, 0),
            row(2, 5, 0.5, 1.1, 1900.0, 1),
            row(4, 5, 0.7, 1.6, 3600.0, 3),
            row(8, 5, 1.1, 2.4, 6500.0, 8),
        ],
    );

    let records = load_records(&[path]).unwrap();
    let kinds: Vec<ChartKind> = build_charts(&records, false)
        .into_iter()
        .map(|(kind, _)| kind)
        .collect();

    assert_eq!(
        kinds,
        vec![ChartKind::LatencyThroughput, ChartKind::ThroughputVsLatency]
    );
}

#[test]
fn two_flush_intervals_add_the_heatmap() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "sweep.csv",
        &[row(1, 5, 0.4, 0.9, 1000.0, 7), row(2, 10, 0.5, 1.1, 1900.0, 3)],
    );

    let records = load_records(&[path]).unwrap();
    let charts = build_charts(&records, true);
    let grid = BackpressureGrid::build(&records).unwrap();

    assert_eq!(charts.len(), 3);
    assert_eq!(charts[2].0, ChartKind::BackpressureHeatmap);
    assert_eq!(grid.value(5, 2), Some(0));
    assert_eq!(grid.value(10, 1), Some(0));
    assert_eq!(grid.value(5, 1), Some(7));
    assert_eq!(grid.value(10, 2), Some(3));
}

#[test_case(&[(1, 0)], 0; "one configuration")]
#[test_case(&[(1, 0), (2, 0), (4, 0)], 0; "batch sweep only")]
#[test_case(&[(1, 0), (1, 5)], 1; "flush sweep only")]
#[test_case(&[(1, 0), (2, 5), (4, 10)], 1; "both axes")]
fn heatmap_needs_two_flush_intervals(configurations: &[(i64, i64)], heatmaps: usize) {
    let records: Vec<BenchmarkRecord> = configurations
        .iter()
        .map(|(batch, flush)| BenchmarkRecord {
            batch_size: Some(*batch),
            flush_interval_ms: Some(*flush),
            p50_ms: Some(1.0),
            p99_ms: Some(2.0),
            throughput_msg_sec: Some(100.0),
            ..Default::default()
        })
        .collect();

    let rendered = build_charts(&records, false)
        .iter()
        .filter(|(kind, _)| *kind == ChartKind::BackpressureHeatmap)
        .count();

    assert_eq!(rendered, heatmaps);
}

#[test]
fn loads_slice_sweep_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slice_sweep_results.csv");
    std::fs::write(
        &path,
        "mode,slice_size,throughput_msg_s,gc_ms,p99_delay_ms\n\
         ts-server,16,120000,3.5,0.8\n\
         native-server,16,180000.5,0,0.4\n",
    )
    .unwrap();

    let rows = load_slice_sweep(&path).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].mode, "ts-server");
    assert_eq!(rows[1].throughput_msg_s, 180000.5);
}
