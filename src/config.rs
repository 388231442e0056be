// src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::skip::SkipSet;
use derive_builder::Builder;
use std::path::PathBuf;

/// Immutable settings for one run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(error = "AppError", validate = "Self::validate"))]
pub struct Config {
    pub root: PathBuf,
    #[builder(default)]
    pub skip: SkipSet,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), AppError> {
        match &self.root {
            Some(root) if !root.as_os_str().is_empty() => Ok(()),
            _ => Err(AppError::MissingDirectory),
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for AppError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        Self::Config(e.to_string())
    }
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mut builder = ConfigBuilder::default();
        if let Some(dir) = args.directory {
            builder.root(dir);
        }
        builder.skip(args.escape).build()
    }
}
