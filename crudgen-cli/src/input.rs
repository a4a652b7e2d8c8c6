//! Model text input

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Argument value meaning "read from stdin"
pub const STDIN: &str = "-";

/// Read model text from a file, or from stdin when `source` is `-`
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_model(source: &Path) -> Result<String> {
    if source.as_os_str() == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read model from stdin")?;
        return Ok(text);
    }

    fs::read_to_string(source)
        .with_context(|| format!("Failed to read model file: {}", source.display()))
}
