use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::counter;
use crate::error::{AppError, Result};
use crate::filesystem::FileWalk;
use crate::presentation::Reporter;
use crate::stats::{FileCount, Totals};

/// Walks `config.root`, reporting each counted file as it is reached.
///
/// Returns the running totals once the walk is exhausted.
///
/// # Errors
///
/// Returns an error only for fatal conditions: an inaccessible root or a
/// failure to write output. Per-file and per-path errors are reported as
/// diagnostics and counted in `Totals::errors`.
pub fn run<O: Write, E: Write>(config: &Config, reporter: &mut Reporter<O, E>) -> Result<Totals> {
    log::info!(
        "counting rows under {} (skipping: {})",
        config.root.display(),
        config.skip.iter().collect::<Vec<_>>().join(",")
    );

    let mut totals = Totals::default();
    for item in FileWalk::new(&config.root, &config.skip)? {
        match item.and_then(process_file) {
            Ok(count) => {
                reporter.file(&count)?;
                totals.record(&count);
            }
            Err(e) if e.is_recoverable() => {
                totals.record_error();
                reporter.diagnostic(&e)?;
            }
            Err(e) => return Err(e),
        }
    }

    log::debug!(
        "walk finished: {} files, {} rows, {} errors",
        totals.files,
        totals.rows,
        totals.errors
    );
    Ok(totals)
}

/// Counts one file into a [`FileCount`].
///
/// # Errors
/// Returns [`AppError::FileRead`] if the file cannot be opened or read.
pub fn process_file(path: PathBuf) -> Result<FileCount> {
    match counter::count_lines(&path) {
        Ok(rows) => Ok(FileCount { path, rows }),
        Err(source) => Err(AppError::FileRead { path, source }),
    }
}
