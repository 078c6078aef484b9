//! Unified error types for the express-starter toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding a project.
#[derive(Error, Debug)]
pub enum StarterError {
    // --- Input ---

    /// The project name does not match `^[a-z0-9-]+$`.
    #[error("invalid project name '{0}' (use only lowercase letters, numbers, and hyphens)")]
    InvalidName(String),

    /// Attempted to create a project in a directory that already exists.
    #[error("project directory already exists: {0}")]
    ProjectExists(PathBuf),

    /// The template directory could not be found.
    #[error("template directory not found: {0}")]
    TemplateNotFound(PathBuf),

    // --- Materialization ---

    /// A filesystem operation failed on `path`.
    #[error("I/O error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `package.json` exists but is not valid JSON.
    #[error("failed to parse manifest at {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `package.json` parsed, but its top-level value is not an object.
    #[error("manifest at {0} is not a JSON object")]
    ManifestShape(PathBuf),

    // --- Configuration ---

    /// `starter.config.json` in the template root contains invalid JSON.
    #[error("failed to parse template config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StarterError {
    /// Build an [`StarterError::Io`] for `path`. Intended for `map_err`.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    /// The destination already existed; it was not created by this run.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ProjectExists(_))
    }
}

/// Alias for `Result<T, StarterError>`.
pub type Result<T> = std::result::Result<T, StarterError>;
