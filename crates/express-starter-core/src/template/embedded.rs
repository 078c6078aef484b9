//! The Express starter template, compiled into the binary.
//!
//! Each entry pairs a path relative to the template root with the file's
//! contents, loaded via [`include_str!`] from `templates/express-api/`. The
//! paths are relative to this source file
//! (`crates/express-starter-core/src/template/embedded.rs`).
//!
//! ## Adding a template file
//!
//! 1. Place the file under `templates/express-api/`
//! 2. Add a row to [`FILES`] with its relative path and `include_str!`
//! 3. Run the tests; `test_table_matches_template_tree` fails if the table and
//!    the directory disagree

use std::path::Path;

use crate::error::{Result, StarterError};

/// `(relative path, contents)` for every file of the bundled template.
pub const FILES: &[(&str, &str)] = &[
    (".env.example", include_str!("../../templates/express-api/.env.example")),
    (".gitignore", include_str!("../../templates/express-api/.gitignore")),
    ("LICENSE", include_str!("../../templates/express-api/LICENSE")),
    ("README.md", include_str!("../../templates/express-api/README.md")),
    ("eslint.config.js", include_str!("../../templates/express-api/eslint.config.js")),
    ("jest.config.ts", include_str!("../../templates/express-api/jest.config.ts")),
    ("package.json", include_str!("../../templates/express-api/package.json")),
    ("tsconfig.json", include_str!("../../templates/express-api/tsconfig.json")),
    ("scripts/clean.mjs", include_str!("../../templates/express-api/scripts/clean.mjs")),
    ("src/index.ts", include_str!("../../templates/express-api/src/index.ts")),
    ("src/app.ts", include_str!("../../templates/express-api/src/app.ts")),
    ("src/config/env.ts", include_str!("../../templates/express-api/src/config/env.ts")),
    (
        "src/middleware/errorHandler.ts",
        include_str!("../../templates/express-api/src/middleware/errorHandler.ts"),
    ),
    ("src/routes/health.ts", include_str!("../../templates/express-api/src/routes/health.ts")),
    (
        "src/__tests__/health.test.ts",
        include_str!("../../templates/express-api/src/__tests__/health.test.ts"),
    ),
];

/// Write every bundled file under `root`, creating directories as needed.
pub fn extract(root: &Path) -> Result<()> {
    for (relative, contents) in FILES {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StarterError::io(parent))?;
        }
        std::fs::write(&path, contents).map_err(StarterError::io(&path))?;
    }
    Ok(())
}
