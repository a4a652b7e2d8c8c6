//! crudgen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{DiffCommand, GenerateCommand, InitCommand, PreviewCommand, SchemaCommand, WatchCommand};
use crudgen_cli_lib::{observability, CrudgenConfig, LogFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Generate layered CRUD modules from an entity description", long_about = None)]
struct Cli {
    /// Configuration file (default: ./crudgen.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the CRUD module and write it to disk
    Generate {
        /// Model file (`-` for stdin)
        model: PathBuf,
        /// Output directory (default from config)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Overwrite files whose content differs
        #[arg(short, long)]
        force: bool,
    },
    /// Print generated files to stdout
    Preview {
        /// Model file (`-` for stdin)
        model: PathBuf,
        /// Only print this generated path (e.g., `Output/Api/Program.cs`)
        #[arg(long)]
        file: Option<String>,
    },
    /// Show differences between generated files and files on disk
    Diff {
        /// Model file (`-` for stdin)
        model: PathBuf,
        /// Output directory (default from config)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Regenerate whenever the model file changes
    Watch {
        /// Model file
        model: PathBuf,
        /// Output directory (default from config)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Overwrite files that were edited outside the watch
        #[arg(short, long)]
        force: bool,
    },
    /// Write a starter model file
    Init {
        /// Destination (default: model.json)
        #[arg(default_value = "model.json")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the JSON Schema for model files
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(cli.verbose, cli.log_format)?;

    let config = match &cli.config {
        Some(path) => CrudgenConfig::load_from(path)?,
        None => CrudgenConfig::load()?,
    };

    match cli.command {
        Commands::Generate { model, out, force } => {
            GenerateCommand::new(model, out, force).execute(&config)?;
        }
        Commands::Preview { model, file } => {
            PreviewCommand::new(model, file).execute(&config)?;
        }
        Commands::Diff { model, out } => {
            DiffCommand::new(model, out).execute(&config)?;
        }
        Commands::Watch { model, out, force } => {
            WatchCommand::new(model, out, force).execute(&config)?;
        }
        Commands::Init { path, force } => {
            InitCommand::new(path, force).execute()?;
        }
        Commands::Schema => {
            SchemaCommand::execute()?;
        }
    }

    Ok(())
}
