use crate::config::constants::MAX_RECENT_FILES;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Most-recently-accessed-first history of opened files, unique by path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecentFiles {
    entries: VecDeque<PathBuf>,
}

impl RecentFiles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `uri` to the front, dropping the oldest entries past the bound.
    pub fn add(&mut self, uri: &Path) {
        self.entries.retain(|existing| existing != uri);
        self.entries.push_front(uri.to_path_buf());
        self.entries.truncate(MAX_RECENT_FILES);
    }

    /// Drops `uri` and everything below it. Returns whether anything changed.
    pub fn forget(&mut self, uri: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|existing| !existing.starts_with(uri));
        before != self.entries.len()
    }

    /// Rewrites entries at or below `from` to live under `to`, keeping their
    /// position. A rewritten path that was already listed keeps only its
    /// most recent slot. Returns whether anything changed.
    pub fn relocate(&mut self, from: &Path, to: &Path) -> bool {
        let mut changed = false;
        for entry in &mut self.entries {
            if let Some(path) = relocated(entry, from, to) {
                *entry = path;
                changed = true;
            }
        }
        if changed {
            *self = std::mem::take(&mut self.entries).into_iter().collect();
        }
        changed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<PathBuf> {
        self.entries.iter().cloned().collect()
    }
}

/// Where `path` ends up once `from` has been moved to `to`, or `None` when
/// `path` is not `from` or below it.
#[must_use]
pub fn relocated(path: &Path, from: &Path, to: &Path) -> Option<PathBuf> {
    let rest = path.strip_prefix(from).ok()?;
    Some(if rest.as_os_str().is_empty() {
        to.to_path_buf()
    } else {
        to.join(rest)
    })
}

impl FromIterator<PathBuf> for RecentFiles {
    /// Builds the list from most-recent-first paths, keeping the bound and
    /// the first occurrence of duplicates.
    fn from_iter<T: IntoIterator<Item = PathBuf>>(iter: T) -> Self {
        let mut entries: VecDeque<PathBuf> = VecDeque::new();
        for uri in iter {
            if entries.len() == MAX_RECENT_FILES {
                break;
            }
            if !entries.contains(&uri) {
                entries.push_back(uri);
            }
        }
        Self { entries }
    }
}
