pub mod defaults;

use clap::Parser;
use defaults::*;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Benchmark CSV files, plotted as one sweep in the given order.
    /// When empty, every CSV file in --data-dir is used.
    pub files: Vec<PathBuf>,

    /// Directory searched for CSV files when no files are given
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Output directory for generated charts
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Render all charts into a single page instead of one file per chart
    #[arg(long, default_value_t = false)]
    pub combined: bool,

    /// Use the light theme instead of the dark one
    #[arg(long, default_value_t = false)]
    pub light: bool,

    /// Chart width in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    pub width: u64,

    /// Chart height in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    pub height: u64,

    /// Open generated charts in browser after they are written
    #[arg(long, default_value_t = false)]
    pub open_charts: bool,

    /// Also write the loaded records to records.json in the output directory
    #[arg(long, default_value_t = false)]
    pub dump_json: bool,

    /// Do not print the sweep summary
    #[arg(long, default_value_t = false)]
    pub no_summary: bool,

    /// Slice sweep CSV (mode, slice_size, throughput_msg_s, gc_ms, p99_delay_ms) to plot.
    /// When given without benchmark files, CSV discovery is skipped.
    #[arg(long)]
    pub slice_sweep: Option<PathBuf>,
}

impl Args {
    pub fn dark(&self) -> bool {
        !self.light
    }

    /// Benchmark charts are skipped only when the run is just a slice sweep plot.
    pub fn plots_benchmark_sweep(&self) -> bool {
        self.slice_sweep.is_none() || !self.files.is_empty()
    }
}
