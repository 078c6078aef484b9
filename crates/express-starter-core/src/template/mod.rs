//! Locating the template tree to copy from.
//!
//! Lookup order:
//! 1. an explicit path (`--template` / `EXPRESS_STARTER_TEMPLATE`)
//! 2. a `template/` directory next to the running executable
//! 3. the template compiled into the binary ([`embedded`]), extracted to a
//!    scratch directory that lives as long as the returned [`TemplateDir`]

pub mod embedded;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Result, StarterError};

/// Directory name searched for beside the executable.
pub const INSTALLED_TEMPLATE_DIR: &str = "template";

/// A template directory on disk.
///
/// For the embedded template the directory is temporary and removed on drop.
#[derive(Debug)]
pub struct TemplateDir {
    path: PathBuf,
    scratch: Option<TempDir>,
}

impl TemplateDir {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this is the extracted copy of the embedded template.
    pub fn is_embedded(&self) -> bool {
        self.scratch.is_some()
    }
}

/// Resolve the template directory.
///
/// An explicit path must be an existing directory.
pub fn locate(explicit: Option<&Path>) -> Result<TemplateDir> {
    if let Some(path) = explicit {
        return if path.is_dir() {
            Ok(TemplateDir {
                path: path.to_path_buf(),
                scratch: None,
            })
        } else {
            Err(StarterError::TemplateNotFound(path.to_path_buf()))
        };
    }

    if let Some(installed) = installed_template() {
        tracing::debug!("using installed template at {}", installed.display());
        return Ok(TemplateDir {
            path: installed,
            scratch: None,
        });
    }

    extract_embedded()
}

/// Extract the embedded template into a fresh temporary directory.
pub fn extract_embedded() -> Result<TemplateDir> {
    let scratch = tempfile::Builder::new()
        .prefix("express-starter-")
        .tempdir()
        .map_err(StarterError::io(std::env::temp_dir()))?;
    embedded::extract(scratch.path())?;
    tracing::debug!("extracted embedded template to {}", scratch.path().display());

    Ok(TemplateDir {
        path: scratch.path().to_path_buf(),
        scratch: Some(scratch),
    })
}

fn installed_template() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let candidate = exe.parent()?.join(INSTALLED_TEMPLATE_DIR);
    candidate.is_dir().then_some(candidate)
}
