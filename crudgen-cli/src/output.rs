//! Writing generated files to disk
//!
//! Writes are all-or-nothing at the planning stage: every target path is
//! resolved and checked for conflicts before the first file is touched.

use anyhow::{bail, Context, Result};
use crudgen::GenerationResult;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File did not exist
    Created,
    /// File existed with different content and was replaced
    Overwritten,
    /// File already had the generated content
    Unchanged,
}

/// A file handled by [`OutputWriter::write_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Relative generated path
    pub path: String,
    /// Resolved path on disk
    pub full_path: PathBuf,
    /// Outcome
    pub outcome: WriteOutcome,
}

/// Writes a [`GenerationResult`] under a root directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
    overwrite: bool,
}

impl OutputWriter {
    /// Create a writer rooted at `root`
    pub fn new(root: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            root: root.into(),
            overwrite,
        }
    }

    /// Root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a generated path against the root
    ///
    /// # Errors
    ///
    /// Returns an error if the path is absolute or contains `.`/`..`
    /// components.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let path = Path::new(relative);
        if relative.is_empty() || !path.components().all(|c| matches!(c, Component::Normal(_))) {
            bail!("Refusing to write outside the output directory: '{relative}'");
        }
        Ok(self.root.join(path))
    }

    /// Outcome each file would have, without writing anything
    ///
    /// # Errors
    ///
    /// Returns an error if a path is unsafe or an existing file cannot be
    /// read.
    pub fn plan(&self, result: &GenerationResult) -> Result<Vec<WrittenFile>> {
        result
            .files
            .iter()
            .map(|(path, content)| {
                let full_path = self.resolve(path)?;
                let outcome = if full_path.exists() {
                    let existing = fs::read_to_string(&full_path)
                        .with_context(|| format!("Failed to read file: {}", full_path.display()))?;
                    if existing == *content {
                        WriteOutcome::Unchanged
                    } else {
                        WriteOutcome::Overwritten
                    }
                } else {
                    WriteOutcome::Created
                };

                Ok(WrittenFile {
                    path: path.clone(),
                    full_path,
                    outcome,
                })
            })
            .collect()
    }

    /// Write every generated file
    ///
    /// Unchanged files are left alone. Without `overwrite`, any file whose
    /// content differs aborts the whole write before anything is changed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A path is unsafe
    /// - A file would be overwritten and `overwrite` is off
    /// - Directory creation or file writing fails
    pub fn write_all(&self, result: &GenerationResult) -> Result<Vec<WrittenFile>> {
        self.write_over(result, None)
    }

    /// Write every generated file, replacing files that still hold `previous` output
    ///
    /// A file whose content on disk equals what `previous` generated for the
    /// same path was written by us and is replaced even without `overwrite`.
    /// Any other differing file is a conflict, as in [`Self::write_all`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::write_all`].
    pub fn write_over(
        &self,
        result: &GenerationResult,
        previous: Option<&GenerationResult>,
    ) -> Result<Vec<WrittenFile>> {
        let planned = self.plan(result)?;

        if !self.overwrite {
            let mut conflicts = Vec::new();
            for file in &planned {
                if file.outcome != WriteOutcome::Overwritten {
                    continue;
                }
                let ours = match previous.and_then(|prev| prev.files.get(&file.path)) {
                    Some(prior) => {
                        let existing = fs::read_to_string(&file.full_path).with_context(|| {
                            format!("Failed to read file: {}", file.full_path.display())
                        })?;
                        existing == *prior
                    }
                    None => false,
                };
                if !ours {
                    conflicts.push(file.full_path.display().to_string());
                }
            }
            if !conflicts.is_empty() {
                bail!(
                    "Refusing to overwrite existing files (use --force):\n  {}",
                    conflicts.join("\n  ")
                );
            }
        }

        for file in &planned {
            if file.outcome == WriteOutcome::Unchanged {
                continue;
            }

            if let Some(parent) = file.full_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }

            fs::write(&file.full_path, &result.files[&file.path])
                .with_context(|| format!("Failed to write file: {}", file.full_path.display()))?;

            debug!(path = %file.full_path.display(), outcome = ?file.outcome, "wrote file");
        }

        Ok(planned)
    }
}
