//! Configuration management for the crudgen CLI
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CRUDGEN_` prefix, `__` for nesting)
//! 2. `./crudgen.toml`, or the file passed with `--config`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # crudgen.toml
//! [generator]
//! namespace = "GeneratedApp"
//! database_name = "AppDb"
//!
//! [output]
//! dir = "."
//! overwrite = false
//! ```
//!
//! `CRUDGEN_OUTPUT__OVERWRITE=true` overrides `output.overwrite`.

use anyhow::Context;
use crudgen::GeneratorSettings;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "crudgen.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CRUDGEN_";

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory generated paths are resolved against
    pub dir: PathBuf,

    /// Replace existing files whose content differs
    pub overwrite: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            overwrite: false,
        }
    }
}

/// Complete crudgen configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrudgenConfig {
    /// Values baked into generated sources
    #[serde(default)]
    pub generator: GeneratorSettings,

    /// Where and how files are written
    #[serde(default)]
    pub output: OutputSettings,
}

impl CrudgenConfig {
    /// Load configuration from `./crudgen.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The configuration file contains invalid TOML
    /// - Configuration values fail type conversion
    pub fn load() -> anyhow::Result<Self> {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        let file = local.exists().then_some(local.as_path());
        Self::extract(file)
    }

    /// Load configuration from a specific file and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist
    /// - The file contains invalid TOML
    /// - Configuration values fail type conversion
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Self::extract(Some(path))
    }

    fn extract(file: Option<&Path>) -> anyhow::Result<Self> {
        // Start with defaults (lowest priority)
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }

        // Environment variables override everything
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config = figment
            .extract()
            .context("Failed to load crudgen configuration")?;
        Ok(config)
    }
}
