use crate::args::Args;
use crate::discovery;
use crate::error::PlotError;
use crate::plot::{self, RenderOptions};
use batch_bench_report::plotting::chart_kind::ChartKind;
use batch_bench_report::sweep_summary::SweepSummary;
use batch_bench_report::{build_charts, create_slice_sweep_chart, loader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

pub fn run(args: Args) -> Result<(), PlotError> {
    let options = RenderOptions {
        output_directory: args.output_dir.clone(),
        width: args.width,
        height: args.height,
        dark: args.dark(),
    };

    let mut generated = Vec::new();
    if let Some(path) = &args.slice_sweep {
        generated.push(plot_slice_sweep(path, &options)?);
    }
    if args.plots_benchmark_sweep() {
        let files = discovery::resolve_input_files(&args.files, &args.data_dir)?;
        generated.extend(plot_benchmark_sweep(&files, &args, &options)?);
    }

    if args.open_charts {
        for path in &generated {
            plot::open_in_browser(path)?;
        }
    }
    Ok(())
}

/// Load the sweep and write its charts, returning the written files.
pub fn plot_benchmark_sweep(
    files: &[PathBuf],
    args: &Args,
    options: &RenderOptions,
) -> Result<Vec<PathBuf>, PlotError> {
    let data_processing_start = Instant::now();
    let records = loader::load_records(files)?;
    let summary = SweepSummary::from_records(&records);
    let charts = build_charts(&records, options.dark);
    let data_processing_time = data_processing_start.elapsed();

    if !args.no_summary {
        summary.print_summary(files.len());
    }
    if args.dump_json {
        let path = loader::dump_to_json(&records, &options.output_directory)?;
        info!("Saved records to: {}", path.display());
    }

    let chart_render_start = Instant::now();
    let generated = if args.combined {
        vec![plot::save_combined(&charts, options)?]
    } else {
        charts
            .iter()
            .map(|(kind, chart)| plot::save_chart(chart, *kind, options))
            .collect::<Result<Vec<_>, _>>()?
    };
    let chart_render_time = chart_render_start.elapsed();

    for path in &generated {
        info!(
            "Generated plot at: {} ({} records, data processing: {:.2?}, chart render: {:.2?})",
            path.display(),
            records.len(),
            data_processing_time,
            chart_render_time
        );
    }
    Ok(generated)
}

fn plot_slice_sweep(path: &Path, options: &RenderOptions) -> Result<PathBuf, PlotError> {
    let rows = loader::load_slice_sweep(path)?;
    let chart = create_slice_sweep_chart(&rows, options.dark);
    let output = plot::save_chart(&chart, ChartKind::SliceSweep, options)?;
    info!(
        "Generated {} plot at: {} ({} rows)",
        ChartKind::SliceSweep,
        output.display(),
        rows.len()
    );
    Ok(output)
}
