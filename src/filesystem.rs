use crate::error::{AppError, Result};
use crate::skip::SkipSet;
use ignore::WalkBuilder;
use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Sequential depth-first walk yielding every non-directory path under a root.
///
/// Directories named in the skip set are pruned together with their whole
/// subtree. Per-path traversal failures are yielded as `Err` items and the
/// walk carries on past them.
///
/// The root is cleaned lexically first, so `./src/` walks as `src` and a root
/// of `.` yields paths without the `./` prefix.
pub struct FileWalk {
    inner: Option<ignore::Walk>,
    strip_curdir: bool,
}

impl FileWalk {
    /// Starts a walk at `root`.
    ///
    /// # Errors
    /// Returns [`AppError::Root`] if the root cannot be stat'ed.
    pub fn new(root: &Path, skip: &SkipSet) -> Result<Self> {
        let meta = std::fs::metadata(root).map_err(|source| AppError::Root {
            path: root.to_path_buf(),
            source,
        })?;

        let root = clean(root);
        let strip_curdir = root.as_os_str() == ".";

        if meta.is_dir() && base_name(&root).is_some_and(|name| skip.contains(&name)) {
            log::debug!("root {} is in the skip set", root.display());
            return Ok(Self {
                inner: None,
                strip_curdir,
            });
        }

        let mut builder = WalkBuilder::new(&root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        let skip = skip.clone();
        builder.filter_entry(move |entry| {
            let pruned = entry.depth() > 0
                && entry.file_type().is_some_and(|ft| ft.is_dir())
                && skip.contains(&entry.file_name().to_string_lossy());
            if pruned {
                log::debug!("skipping {}", entry.path().display());
            }
            !pruned
        });

        Ok(Self {
            inner: Some(builder.build()),
            strip_curdir,
        })
    }
}

impl Iterator for FileWalk {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        let walk = self.inner.as_mut()?;
        loop {
            match walk.next()? {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                        continue;
                    }
                    let path = entry.into_path();
                    if self.strip_curdir
                        && let Ok(rel) = path.strip_prefix(".")
                    {
                        return Some(Ok(rel.to_path_buf()));
                    }
                    return Some(Ok(path));
                }
                Err(e) => return Some(Err(AppError::Walk(e))),
            }
        }
    }
}

/// Drops `.` components and folds `name/..` pairs without touching the disk.
fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for part in path.components() {
        match part {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(part),
            },
            _ => parts.push(part),
        }
    }
    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

/// Last component of a cleaned path; `.`, `..` and `/` count as names.
fn base_name(path: &Path) -> Option<Cow<'_, str>> {
    path.components()
        .next_back()
        .map(|part| part.as_os_str().to_string_lossy())
}
