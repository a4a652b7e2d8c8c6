//! Generate command
//!
//! Writes the six generated C# files under the output directory.
//!
//! # Example
//!
//! ```bash
//! crudgen generate model.json --out ./app
//! ```

use anyhow::Result;
use console::{style, Emoji};
use crudgen_cli_lib::{CrudgenConfig, OutputWriter, WriteOutcome};
use std::path::PathBuf;

static SUCCESS: Emoji<'_, '_> = Emoji("✓", "+");
static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

pub struct GenerateCommand {
    model: PathBuf,
    out: Option<PathBuf>,
    force: bool,
}

impl GenerateCommand {
    pub const fn new(model: PathBuf, out: Option<PathBuf>, force: bool) -> Self {
        Self { model, out, force }
    }

    pub fn execute(&self, config: &CrudgenConfig) -> Result<()> {
        let result = super::generate_from(&self.model, config)?;
        let entity = &result.model.entity_name;

        println!(
            "\n{} {} {}",
            style("Generating CRUD module for").cyan().bold(),
            style(entity).green().bold(),
            style("...").cyan().bold()
        );

        let root = self.out.clone().unwrap_or_else(|| config.output.dir.clone());
        let writer = OutputWriter::new(root, self.force || config.output.overwrite);
        let written = writer.write_all(&result)?;

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            written.len()
        );

        for file in result.artifacts() {
            let outcome = written
                .iter()
                .find(|w| w.path == file.path)
                .map(|w| w.outcome);
            let label = match outcome {
                Some(WriteOutcome::Created) => style("created"),
                Some(WriteOutcome::Overwritten) => style("overwritten").yellow(),
                Some(WriteOutcome::Unchanged) | None => style("unchanged").dim(),
            };

            println!(
                "  {} {} ({}, {})",
                style(SUCCESS.to_string()).green(),
                style(file.path).dim(),
                style(&file.description).dim(),
                label
            );
        }

        println!(
            "\n{}CRUD module for {} is ready in {}",
            SPARKLE,
            style(entity).green().bold(),
            style(writer.root().display()).yellow()
        );

        Ok(())
    }
}
