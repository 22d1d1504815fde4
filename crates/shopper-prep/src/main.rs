//! CLI entry point for the cleaning pipeline.
//!
//! The pipeline has exactly one input and one output, both at fixed relative
//! paths; there are no flags. A missing input file terminates the run with a
//! non-zero exit code and a message naming the expected path.

use anyhow::Result;
use shopper_prep::{CleaningError, CleaningPipeline};
use std::process::ExitCode;
use tracing::{error, info};

/// Initialize the tracing subscriber for logging.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let pipeline = CleaningPipeline::with_defaults();
    info!(
        "Input: {} -> Output: {}",
        pipeline.config().input_path.display(),
        pipeline.config().output_path().display()
    );

    let outcome = pipeline.run().map_err(|e| match e {
        CleaningError::InputNotFound(path) => {
            anyhow::anyhow!("CSV not found at {}", path)
        }
        other => anyhow::Error::from(other),
    })?;

    info!(
        "Done in {}ms: {} rows, {} columns written",
        outcome.summary.duration_ms, outcome.summary.rows, outcome.summary.columns_after
    );
    for step in &outcome.steps {
        info!("  - {}", step);
    }

    Ok(())
}
