//! Name-based exclusion policy for template copies.
//!
//! Names are matched exactly against the entry's own file name, never against
//! its path, so a `node_modules` three levels down is skipped just like one at
//! the root.

use std::collections::BTreeSet;
use std::fs::FileType;

/// Directory names never copied out of a template.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "dist"];

/// File names never copied out of a template.
pub const EXCLUDED_FILES: &[&str] = &["package-lock.json", ".env", "eslint-report.json"];

/// Kind of a directory entry. Symbolic links are classified by their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Classify a [`FileType`] obtained by following links (`fs::metadata`).
    ///
    /// Sockets, FIFOs and devices are treated as files.
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_dir() {
            Self::Directory
        } else {
            Self::File
        }
    }
}

/// Two static name sets: directories and files that are never copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    dirs: BTreeSet<String>,
    files: BTreeSet<String>,
}

impl ExclusionPolicy {
    /// Build a policy from arbitrary name sets.
    pub fn new<D, F>(dirs: D, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Build-output and dependency-cache directories; lockfile, local secrets
    /// and lint report files.
    pub fn standard() -> Self {
        Self::new(EXCLUDED_DIRS.iter().copied(), EXCLUDED_FILES.iter().copied())
    }

    /// Whether an entry with this name and kind must be left out.
    pub fn is_excluded(&self, name: &str, kind: EntryKind) -> bool {
        match kind {
            EntryKind::Directory => self.dirs.contains(name),
            EntryKind::File => self.files.contains(name),
        }
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
