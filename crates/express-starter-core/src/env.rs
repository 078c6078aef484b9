//! Derives the runtime `.env` from `.env.example`.

use std::path::Path;

use crate::error::{Result, StarterError};

pub const ENV_EXAMPLE: &str = ".env.example";
pub const ENV_FILE: &str = ".env";

/// Copy `.env.example` to `.env` in `dest_dir` when the example exists and
/// `.env` does not. Returns whether `.env` was created.
///
/// An existing `.env` is never overwritten, so calling this again is a no-op.
pub fn derive_env_file(dest_dir: &Path) -> Result<bool> {
    let example = dest_dir.join(ENV_EXAMPLE);
    let env = dest_dir.join(ENV_FILE);

    if !example.exists() || env.exists() {
        return Ok(false);
    }

    std::fs::copy(&example, &env).map_err(StarterError::io(&example))?;
    tracing::info!("created {ENV_FILE} from {ENV_EXAMPLE}");
    Ok(true)
}
