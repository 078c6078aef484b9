//! Recursive template copy under an [`ExclusionPolicy`].
//!
//! The destination mirrors the source minus excluded entries. Directories are
//! created on demand, parents before children. Entries are visited in sorted
//! name order so that repeated runs log identically.
//!
//! ## Symbolic links
//!
//! A link is treated as the kind of its target, both for the exclusion check
//! and for copying. A link resolving to a file is copied as a regular file
//! holding the target's bytes. A link resolving to a directory is skipped with
//! a warning, since following it could recurse forever. A dangling link is an
//! I/O error.

use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, StarterError};
use crate::exclude::{EntryKind, ExclusionPolicy};

/// Counters accumulated over one copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Regular files written.
    pub files: usize,
    /// Directories created, including the destination root.
    pub dirs: usize,
    /// Entries left out by the policy or the symlink rule.
    pub skipped: usize,
}

impl CopyStats {
    /// Add another copy's counters to this one.
    pub fn merge(&mut self, other: CopyStats) {
        self.files += other.files;
        self.dirs += other.dirs;
        self.skipped += other.skipped;
    }
}

/// Reproduces source trees at destination paths.
#[derive(Debug, Clone, Default)]
pub struct Materializer {
    policy: ExclusionPolicy,
}

impl Materializer {
    pub fn new(policy: ExclusionPolicy) -> Self {
        Self { policy }
    }

    /// Copy the tree rooted at `src` to `dest`.
    ///
    /// A missing `src` is not an error: nothing is created and empty stats are
    /// returned. `dest` and its parents are created as needed. Existing
    /// destination files with the same name are overwritten.
    pub fn copy_dir(&self, src: &Path, dest: &Path) -> Result<CopyStats> {
        let mut stats = CopyStats::default();
        if !src.exists() {
            tracing::debug!("source {} does not exist, nothing to copy", src.display());
            return Ok(stats);
        }

        fs::create_dir_all(dest).map_err(StarterError::io(dest))?;
        stats.dirs += 1;

        let mut excluded = 0;
        let walker = WalkDir::new(src)
            .follow_links(false)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            // Dangling links pass the filter so the copy loop reports them.
            .filter_entry(|entry| match resolved_kind(entry) {
                Ok(kind) if self.policy.is_excluded(&entry.file_name().to_string_lossy(), kind) => {
                    tracing::debug!("excluded {}", entry.path().display());
                    excluded += 1;
                    false
                }
                _ => true,
            });

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(src, e))?;
            let from = entry.path();
            let relative = from.strip_prefix(src).map_err(|_| StarterError::Io {
                path: from.to_path_buf(),
                source: std::io::Error::other("entry is outside the source tree"),
            })?;
            let to = dest.join(relative);

            match resolved_kind(&entry).map_err(StarterError::io(from))? {
                EntryKind::Directory if entry.path_is_symlink() => {
                    tracing::warn!("skipping symlinked directory {}", from.display());
                    stats.skipped += 1;
                }
                EntryKind::Directory => {
                    fs::create_dir_all(&to).map_err(StarterError::io(&to))?;
                    stats.dirs += 1;
                }
                EntryKind::File => {
                    copy_bytes(from, &to)?;
                    stats.files += 1;
                }
            }
        }

        stats.skipped += excluded;
        Ok(stats)
    }

    /// Copy a single file if it exists. Returns `false` when `src` is absent.
    ///
    /// The exclusion policy is not consulted; callers name these files explicitly.
    pub fn copy_file(&self, src: &Path, dest: &Path) -> Result<bool> {
        if !src.exists() {
            tracing::debug!("{} not present in template, skipping", src.display());
            return Ok(false);
        }
        copy_bytes(src, dest)?;
        Ok(true)
    }
}

/// Kind of the entry, following a symbolic link to its target.
fn resolved_kind(entry: &DirEntry) -> std::io::Result<EntryKind> {
    if entry.path_is_symlink() {
        fs::metadata(entry.path()).map(|m| EntryKind::from_file_type(m.file_type()))
    } else {
        Ok(EntryKind::from_file_type(entry.file_type()))
    }
}

fn walk_error(src: &Path, err: walkdir::Error) -> StarterError {
    let path = err.path().unwrap_or(src).to_path_buf();
    StarterError::Io {
        path,
        source: err.into(),
    }
}

fn copy_bytes(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map_err(StarterError::io(from))?;
    tracing::debug!("copied {} -> {}", from.display(), to.display());
    Ok(())
}
