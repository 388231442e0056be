// src/skip.rs
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

/// 走査対象から除外するディレクトリ名の集合
///
/// Names are matched exactly against a directory's base name, never against
/// its full path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet(BTreeSet<String>);

impl SkipSet {
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromStr for SkipSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            s.split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_owned)
                .collect(),
        ))
    }
}

/// clap value parser for `-esc`.
///
/// # Errors
/// Never fails; malformed input only yields fewer entries.
pub fn parse_skip_set(s: &str) -> Result<SkipSet, String> {
    SkipSet::from_str(s).map_err(|e| match e {})
}
