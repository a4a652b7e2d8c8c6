//! File selection and disk comparison for `preview` and `diff`

use crate::{OutputWriter, WriteOutcome, WrittenFile};
use anyhow::{bail, Result};
use crudgen::{GeneratedFile, GenerationResult};

/// Generated files in artifact order, or only the one at `wanted`
///
/// # Errors
///
/// Returns an error listing the available paths when `wanted` matches
/// nothing.
pub fn select_files<'r>(
    result: &'r GenerationResult,
    wanted: Option<&str>,
) -> Result<Vec<GeneratedFile<'r>>> {
    let selected: Vec<_> = result
        .artifacts()
        .filter(|file| wanted.is_none_or(|wanted| file.path == wanted))
        .collect();

    if selected.is_empty() {
        let available: Vec<_> = result.files.keys().map(String::as_str).collect();
        bail!(
            "No generated file matches '{}'. Available:\n  {}",
            wanted.unwrap_or_default(),
            available.join("\n  ")
        );
    }

    Ok(selected)
}

/// How generated output compares with an output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSummary {
    /// Every generated file with its would-be outcome
    pub files: Vec<WrittenFile>,
}

impl DiffSummary {
    /// Compare `result` with what is under the writer's root
    ///
    /// # Errors
    ///
    /// Returns an error if a path is unsafe or an existing file cannot be
    /// read.
    pub fn compute(writer: &OutputWriter, result: &GenerationResult) -> Result<Self> {
        Ok(Self {
            files: writer.plan(result)?,
        })
    }

    /// Files that do not exist yet
    #[must_use]
    pub fn new_files(&self) -> usize {
        self.count(WriteOutcome::Created)
    }

    /// Files whose content differs
    #[must_use]
    pub fn modified(&self) -> usize {
        self.count(WriteOutcome::Overwritten)
    }

    /// Files that would change on write
    #[must_use]
    pub fn changed(&self) -> usize {
        self.new_files() + self.modified()
    }

    fn count(&self, outcome: WriteOutcome) -> usize {
        self.files.iter().filter(|file| file.outcome == outcome).count()
    }
}
