//! Schema command

use anyhow::{Context, Result};
use crudgen::schema::model_schema;

pub struct SchemaCommand;

impl SchemaCommand {
    pub fn execute() -> Result<()> {
        let schema = serde_json::to_string_pretty(&model_schema())
            .context("Failed to serialize model schema")?;
        println!("{schema}");
        Ok(())
    }
}
