mod args;
mod discovery;
mod error;
mod plot;
mod runner;

use crate::args::defaults::DEFAULT_LOG_FILTER;
use crate::args::Args;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    info!("Plotting benchmark results...");
    if let Err(err) = runner::run(args) {
        error!("{err}");
        std::process::exit(1);
    }
    info!("Finished plotting.");
}
