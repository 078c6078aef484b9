//! Which parts of a template are copied into a new project.
//!
//! The default layout matches the bundled Express starter. A template can
//! override it by shipping `starter.config.json` at its root:
//!
//! ```json
//! {
//!   "directories": ["src", "scripts"],
//!   "files": ["package.json", "tsconfig.json", ".env.example"]
//! }
//! ```
//!
//! Both keys are optional; a missing key keeps its default list.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StarterError};

/// File name of the optional layout override in the template root.
pub const LAYOUT_CONFIG_FILE: &str = "starter.config.json";

const DEFAULT_DIRECTORIES: &[&str] = &["src", "scripts"];

const DEFAULT_FILES: &[&str] = &[
    "package.json",
    "tsconfig.json",
    "eslint.config.js",
    "jest.config.ts",
    ".env.example",
    ".gitignore",
    "README.md",
    "LICENSE",
];

/// Template subdirectories copied recursively, and root files copied one by one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateLayout {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            directories: DEFAULT_DIRECTORIES.iter().map(|s| s.to_string()).collect(),
            files: DEFAULT_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TemplateLayout {
    /// Load `starter.config.json` from `template_dir`, or fall back to the default.
    pub fn load_or_default(template_dir: &Path) -> Result<Self> {
        let path = template_dir.join(LAYOUT_CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(StarterError::io(&path))?;
        let layout: Self =
            serde_json::from_str(&contents).map_err(|e| StarterError::ConfigParse {
                path: path.clone(),
                source: e,
            })?;
        tracing::debug!("loaded template layout from {}", path.display());
        Ok(layout)
    }
}
