//! Creating a new project from a template.
//!
//! ## Resulting layout
//!
//! With the default [`TemplateLayout`]:
//! ```text
//! <project>/
//! ├── package.json       # name patched, bin and prepublishOnly removed
//! ├── .env.example
//! ├── .env               # derived from .env.example
//! ├── tsconfig.json, eslint.config.js, jest.config.ts, ...
//! ├── src/               # copied recursively, minus excluded names
//! └── scripts/
//! ```
//!
//! [`create_project`] stops at the first failure and leaves whatever it wrote
//! in place; the caller decides whether to [`discard`] it.

use std::path::{Path, PathBuf};

use crate::env::derive_env_file;
use crate::error::{Result, StarterError};
use crate::layout::TemplateLayout;
use crate::manifest::patch_manifest;
use crate::materialize::{CopyStats, Materializer};
use crate::name::ProjectName;

/// What [`create_project`] produced.
#[derive(Debug, Clone)]
pub struct ProjectReport {
    pub project_dir: PathBuf,
    /// Layout directories that existed in the template and were copied.
    pub directories: Vec<String>,
    /// Layout files that existed in the template and were copied.
    pub files: Vec<String>,
    pub stats: CopyStats,
    pub manifest_patched: bool,
    pub env_created: bool,
}

/// Materialize `template_dir` as `<parent_dir>/<name>`.
///
/// Fails with [`StarterError::ProjectExists`] before writing anything if the
/// project directory already exists, even when empty. `parent_dir` is not
/// created; a missing parent is an I/O error.
pub fn create_project(
    template_dir: &Path,
    parent_dir: &Path,
    name: &ProjectName,
    layout: &TemplateLayout,
    materializer: &Materializer,
) -> Result<ProjectReport> {
    let project_dir = parent_dir.join(name.as_str());
    if project_dir.exists() {
        return Err(StarterError::ProjectExists(project_dir));
    }

    // `parent_dir` must already exist; only the project directory is created.
    std::fs::create_dir(&project_dir).map_err(|e| match e.kind() {
        std::io::ErrorKind::AlreadyExists => StarterError::ProjectExists(project_dir.clone()),
        _ => StarterError::Io {
            path: project_dir.clone(),
            source: e,
        },
    })?;
    tracing::info!("created {}", project_dir.display());

    let mut report = ProjectReport {
        project_dir: project_dir.clone(),
        directories: Vec::new(),
        files: Vec::new(),
        stats: CopyStats::default(),
        manifest_patched: false,
        env_created: false,
    };

    for dir in &layout.directories {
        let src = template_dir.join(dir);
        if !src.is_dir() {
            tracing::debug!("template has no {dir}/ directory");
            continue;
        }
        let stats = materializer.copy_dir(&src, &project_dir.join(dir))?;
        tracing::info!("copied {dir}/ ({} files)", stats.files);
        report.stats.merge(stats);
        report.directories.push(dir.clone());
    }

    for file in &layout.files {
        if materializer.copy_file(&template_dir.join(file), &project_dir.join(file))? {
            report.stats.files += 1;
            report.files.push(file.clone());
        }
    }

    report.manifest_patched = patch_manifest(&project_dir, name.as_str())?;
    report.env_created = derive_env_file(&project_dir)?;

    Ok(report)
}

/// Best-effort removal of a partially created project.
///
/// Failures are logged and otherwise ignored.
pub fn discard(project_dir: &Path) {
    if !project_dir.exists() {
        return;
    }
    match std::fs::remove_dir_all(project_dir) {
        Ok(()) => tracing::info!("removed partial project {}", project_dir.display()),
        Err(e) => tracing::warn!("failed to remove {}: {e}", project_dir.display()),
    }
}
