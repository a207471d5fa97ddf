use batch_bench_report::error::ReportError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(
        "No CSV files found in {}. Run a bench with --csv={}/bench-write.csv",
        .data_dir.display(),
        .data_dir.display()
    )]
    NoInputFiles { data_dir: PathBuf },
    #[error("Cannot list directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to render {name}: {reason}")]
    Render { name: String, reason: String },
    #[error("Failed to open {} in browser: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
