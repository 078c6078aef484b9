//! Rewrites the generated project's `package.json`.
//!
//! After patching: `name` is the new project name, `bin` is gone and
//! `scripts.prepublishOnly` is gone. Every other field passes through with its
//! original key order.

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, StarterError};

/// File name of the manifest at the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Patch `<dest_dir>/package.json` for `project_name`.
///
/// Returns `Ok(false)` when there is no manifest. The new document is fully
/// serialized before the file is touched, so a parse failure leaves the
/// original bytes in place.
pub fn patch_manifest(dest_dir: &Path, project_name: &str) -> Result<bool> {
    let path = dest_dir.join(MANIFEST_FILE);
    if !path.exists() {
        tracing::debug!("no {MANIFEST_FILE} in {}, skipping patch", dest_dir.display());
        return Ok(false);
    }

    let contents = std::fs::read_to_string(&path).map_err(StarterError::io(&path))?;
    let mut manifest: Value =
        serde_json::from_str(&contents).map_err(|e| StarterError::ManifestParse {
            path: path.clone(),
            source: e,
        })?;

    if !patch_value(&mut manifest, project_name) {
        return Err(StarterError::ManifestShape(path));
    }

    let mut json =
        serde_json::to_string_pretty(&manifest).map_err(|e| StarterError::ManifestParse {
            path: path.clone(),
            source: e,
        })?;
    json.push('\n');
    std::fs::write(&path, json).map_err(StarterError::io(&path))?;

    tracing::info!("set package name to {project_name}");
    Ok(true)
}

/// Apply the field-level transform in memory.
///
/// Returns `false`, leaving `manifest` untouched, when it is not a JSON object.
/// A missing or non-object `scripts` is left as is.
pub fn patch_value(manifest: &mut Value, project_name: &str) -> bool {
    let Some(fields) = manifest.as_object_mut() else {
        return false;
    };

    fields.insert("name".to_string(), Value::String(project_name.to_string()));
    // `shift_remove` keeps the remaining keys in their original order.
    fields.shift_remove("bin");
    if let Some(scripts) = fields.get_mut("scripts").and_then(Value::as_object_mut) {
        scripts.shift_remove("prepublishOnly");
    }
    true
}
