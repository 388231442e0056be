use std::path::PathBuf;

/// One successfully counted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCount {
    pub path: PathBuf,
    pub rows: usize,
}

impl FileCount {
    pub fn new(path: impl Into<PathBuf>, rows: usize) -> Self {
        Self {
            path: path.into(),
            rows,
        }
    }
}

/// Running totals for a single walk.
///
/// `rows` always equals the sum of every `FileCount` passed to [`Totals::record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub rows: usize,
    pub files: usize,
    /// 回復したエラー数（走査は継続）
    pub errors: usize,
}

impl Totals {
    pub const fn record(&mut self, count: &FileCount) {
        self.rows += count.rows;
        self.files += 1;
    }

    pub const fn record_error(&mut self) {
        self.errors += 1;
    }
}
