//! Starter model file

use anyhow::{bail, Context, Result};
use crudgen::schema::DEFAULT_MODEL_JSON;
use std::fs;
use std::path::Path;

/// Write the default `Product` model to `path`
///
/// # Errors
///
/// Returns an error if `path` exists and `force` is off, or if the file
/// cannot be written.
pub fn write_starter_model(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists. Use --force to replace it.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, DEFAULT_MODEL_JSON)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
