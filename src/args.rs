// src/args.rs
use crate::skip::{SkipSet, parse_skip_set};
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Parser, ValueHint};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "count_rows",
    version,
    about = "ディレクトリ配下のファイル行数を再帰的に集計するツール"
)]
pub struct Args {
    /// 集計対象のディレクトリ
    // Empty values reach the config layer so they can be reported like a missing flag.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "PATH",
        value_hint = ValueHint::DirPath,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub directory: Option<PathBuf>,

    /// 除外するディレクトリ名（カンマ区切り, 例: target,.git）
    #[arg(
        long = "esc",
        value_name = "NAMES",
        value_parser = parse_skip_set,
        default_value = ""
    )]
    pub escape: SkipSet,
}

impl Args {
    /// Parses the process arguments, accepting the single-dash `-esc` spelling.
    #[must_use]
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize(std::env::args_os()))
    }
}

/// Rewrites single-dash long flags into their clap spelling.
///
/// `-esc`/`-esc=x` become `--esc`/`--esc=x` and `--d`/`--d=x` become `--dir`.
/// Everything after a bare `--` is left untouched.
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                passthrough = true;
                return arg;
            }
            if s == "-esc" || s.starts_with("-esc=") {
                return OsString::from(format!("-{s}"));
            }
            if let Some(rest) = s.strip_prefix("--d")
                && (rest.is_empty() || rest.starts_with('='))
            {
                return OsString::from(format!("--dir{rest}"));
            }
            arg
        })
        .collect()
}
