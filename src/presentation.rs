// src/presentation.rs
use crate::error::{AppError, Result};
use crate::stats::{FileCount, Totals};
use std::io::{self, StderrLock, StdoutLock, Write};

/// Writes per-file rows and the final total to `out`, diagnostics to `err`.
pub struct Reporter<O, E> {
    out: O,
    err: E,
}

impl Reporter<StdoutLock<'static>, StderrLock<'static>> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout().lock(), io::stderr().lock())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub const fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// # Errors
    /// Fails if stdout cannot be written.
    pub fn file(&mut self, count: &FileCount) -> Result<()> {
        writeln!(
            self.out,
            "File: {} | Rows: {}",
            count.path.display(),
            count.rows
        )
        .map_err(AppError::Output)
    }

    /// # Errors
    /// Fails if stderr cannot be written.
    pub fn diagnostic(&mut self, error: &AppError) -> Result<()> {
        writeln!(self.err, "{error}").map_err(AppError::Output)
    }

    /// # Errors
    /// Fails if stdout cannot be written or flushed.
    pub fn total(&mut self, totals: &Totals) -> Result<()> {
        writeln!(self.out, "Total count: {}", totals.rows).map_err(AppError::Output)?;
        self.out.flush().map_err(AppError::Output)
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
