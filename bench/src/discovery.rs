use crate::args::defaults::CSV_EXTENSION;
use crate::error::PlotError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Files to plot: the explicit ones when given, otherwise every CSV in `data_dir`.
pub fn resolve_input_files(files: &[PathBuf], data_dir: &Path) -> Result<Vec<PathBuf>, PlotError> {
    if !files.is_empty() {
        return Ok(files.to_vec());
    }

    let discovered = discover_csv_files(data_dir)?;
    if discovered.is_empty() {
        return Err(PlotError::NoInputFiles {
            data_dir: data_dir.to_path_buf(),
        });
    }
    info!(
        "Using CSVs from {}: {:?}",
        data_dir.display(),
        discovered
    );
    Ok(discovered)
}

/// CSV files directly inside `dir`, sorted by path. A missing directory has no files.
pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>, PlotError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let read_dir_error = |source| PlotError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == CSV_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
