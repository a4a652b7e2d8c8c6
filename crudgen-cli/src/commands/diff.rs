//! Diff command
//!
//! Compares freshly generated files with what is currently on disk.

use anyhow::{Context, Result};
use console::{style, Emoji};
use crudgen_cli_lib::report::DiffSummary;
use crudgen_cli_lib::{CrudgenConfig, OutputWriter, WriteOutcome};
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::path::PathBuf;

static NEW: Emoji<'_, '_> = Emoji("✨ ", "+ ");
static SAME: Emoji<'_, '_> = Emoji("✓ ", "= ");
static CHANGED: Emoji<'_, '_> = Emoji("📝 ", "~ ");

pub struct DiffCommand {
    model: PathBuf,
    out: Option<PathBuf>,
}

impl DiffCommand {
    pub const fn new(model: PathBuf, out: Option<PathBuf>) -> Self {
        Self { model, out }
    }

    pub fn execute(&self, config: &CrudgenConfig) -> Result<()> {
        let result = super::generate_from(&self.model, config)?;
        let root = self.out.clone().unwrap_or_else(|| config.output.dir.clone());
        let writer = OutputWriter::new(root, false);

        let summary = DiffSummary::compute(&writer, &result)?;
        for file in &summary.files {
            match file.outcome {
                WriteOutcome::Created => {
                    println!("{NEW}{} {}", style(&file.path).green(), style("(new file)").dim());
                }
                WriteOutcome::Unchanged => {
                    println!("{SAME}{}", style(&file.path).dim());
                }
                WriteOutcome::Overwritten => {
                    println!("{CHANGED}{}", style(&file.path).yellow().bold());

                    let existing = fs::read_to_string(&file.full_path).with_context(|| {
                        format!("Failed to read file: {}", file.full_path.display())
                    })?;
                    print_diff(&existing, &result.files[&file.path]);
                }
            }
        }

        println!(
            "\n{} of {} files differ from {}",
            summary.changed(),
            result.files.len(),
            style(writer.root().display()).yellow()
        );

        Ok(())
    }
}

fn print_diff(old: &str, new: &str) {
    let diff = TextDiff::from_lines(old, new);

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => {
                print!("{}", style(format!("-{change}")).red());
            }
            ChangeTag::Insert => {
                print!("{}", style(format!("+{change}")).green());
            }
            ChangeTag::Equal => {
                print!(" {change}");
            }
        }
    }
    println!();
}
