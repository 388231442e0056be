use crate::args::Args;
use crate::config::Config;
use crate::engine;
use crate::error::AppError;
use crate::presentation::Reporter;
use anyhow::{Context, Result};

pub fn run(args: Args) -> Result<()> {
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(AppError::MissingDirectory) => {
            // Exit status stays 0 here.
            println!("{}", AppError::MissingDirectory);
            return Ok(());
        }
        Err(e) => return Err(e).context("invalid arguments"),
    };

    let mut reporter = Reporter::stdio();
    let totals = engine::run(&config, &mut reporter)
        .with_context(|| format!("failed to count rows under {}", config.root.display()))?;
    reporter.total(&totals).context("failed to write total")?;

    if totals.errors > 0 {
        log::warn!("{} path(s) could not be counted", totals.errors);
    }
    Ok(())
}
