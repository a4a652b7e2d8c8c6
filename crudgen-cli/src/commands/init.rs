//! Starter model command

use anyhow::Result;
use console::style;
use crudgen_cli_lib::starter::write_starter_model;
use std::path::PathBuf;

/// Write the default `Product` model
pub struct InitCommand {
    path: PathBuf,
    force: bool,
}

impl InitCommand {
    pub const fn new(path: PathBuf, force: bool) -> Self {
        Self { path, force }
    }

    pub fn execute(&self) -> Result<()> {
        write_starter_model(&self.path, self.force)?;

        println!(
            "{} {}",
            style("Created").green().bold(),
            style(self.path.display()).cyan()
        );
        println!("\n{}", style("Next steps:").cyan().bold());
        println!("  1. Edit the entity and its properties");
        println!(
            "  2. Preview the output: {}",
            style(format!("crudgen preview {}", self.path.display())).yellow()
        );
        println!(
            "  3. Write the files: {}",
            style(format!("crudgen generate {}", self.path.display())).yellow()
        );

        Ok(())
    }
}
