//! CLI command implementations

pub mod diff;
pub mod generate;
pub mod init;
pub mod preview;
pub mod schema;
pub mod watch;

pub use diff::DiffCommand;
pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use preview::PreviewCommand;
pub use schema::SchemaCommand;
pub use watch::WatchCommand;

use anyhow::{Context, Result};
use crudgen::{GenerationResult, Generator};
use crudgen_cli_lib::{input, CrudgenConfig};
use std::path::Path;

/// Read the model and run the generator configured by `config`
fn generate_from(model: &Path, config: &CrudgenConfig) -> Result<GenerationResult> {
    let text = input::read_model(model)?;
    let generator = Generator::with_settings(config.generator.clone())
        .context("Failed to initialize generator")?;
    generator
        .generate(&text)
        .with_context(|| format!("Failed to generate CRUD module from {}", model.display()))
}
