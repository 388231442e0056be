pub mod app;
pub mod args;
pub mod config;
pub mod counter;
pub mod engine;
pub mod error;
pub mod filesystem;
pub mod presentation;
pub mod skip;
pub mod stats;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
