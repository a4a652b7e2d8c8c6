//! Preview command

use anyhow::Result;
use console::style;
use crudgen_cli_lib::report::select_files;
use crudgen_cli_lib::CrudgenConfig;
use std::path::PathBuf;

/// Print generated files without writing them
pub struct PreviewCommand {
    model: PathBuf,
    file: Option<String>,
}

impl PreviewCommand {
    pub const fn new(model: PathBuf, file: Option<String>) -> Self {
        Self { model, file }
    }

    pub fn execute(&self, config: &CrudgenConfig) -> Result<()> {
        let result = super::generate_from(&self.model, config)?;

        let selected = select_files(&result, self.file.as_deref())?;

        for file in selected {
            println!(
                "{} {}",
                style(format!("==> {}", file.path)).cyan().bold(),
                style(format!("({})", file.description)).dim()
            );
            println!("{}", file.content);
        }

        Ok(())
    }
}
