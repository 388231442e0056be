// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The walk root could not be accessed. Fatal for the whole run.
    ///
    /// The cause is left to the error chain; `main` prints it with `{:#}`.
    #[error("Error accessing root {path:?}")]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error accessing path: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Error counting rows in file {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory argument is required.")]
    MissingDirectory,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to write output")]
    Output(#[source] std::io::Error),
}

impl AppError {
    /// Whether the walk may continue past this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Walk(_) | Self::FileRead { .. })
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
