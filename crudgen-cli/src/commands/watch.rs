//! Watch command
//!
//! Regenerates on every change to the model file. A model that fails to
//! parse or validate leaves the last good output in place on disk. Errors
//! are printed and the watch carries on.

use anyhow::{bail, Context, Result};
use console::style;
use crudgen::Generator;
use crudgen_cli_lib::{input, CrudgenConfig, ModelWatch, OutputWriter, Refresh};
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use tracing::debug;

pub struct WatchCommand {
    model: PathBuf,
    out: Option<PathBuf>,
    force: bool,
}

impl WatchCommand {
    pub const fn new(model: PathBuf, out: Option<PathBuf>, force: bool) -> Self {
        Self { model, out, force }
    }

    pub fn execute(&self, config: &CrudgenConfig) -> Result<()> {
        if self.model.as_os_str() == input::STDIN {
            bail!("watch needs a model file, not stdin");
        }

        let model = self
            .model
            .canonicalize()
            .with_context(|| format!("Model file not found: {}", self.model.display()))?;
        // Editors often replace the file on save, so watch its directory.
        let watch_dir = model
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let generator = Generator::with_settings(config.generator.clone())
            .context("Failed to initialize generator")?;
        let root = self.out.clone().unwrap_or_else(|| config.output.dir.clone());
        let writer = OutputWriter::new(root, self.force || config.output.overwrite);
        let mut state = ModelWatch::new(model.clone(), generator, writer);

        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<notify::Event>| {
                // Receiver gone means we are shutting down.
                let _ = tx.send(res);
            },
            Config::default(),
        )
        .context("Failed to start file watcher")?;
        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", watch_dir.display()))?;

        println!(
            "{} {} {}",
            style("Watching").green().bold(),
            style(model.display()).cyan(),
            style("(Ctrl-C to stop)").dim()
        );

        report(state.refresh(), &state);

        for res in rx {
            let event = match res {
                Ok(event) => event,
                Err(err) => {
                    eprintln!("{} {err}", style("watch error:").red().bold());
                    continue;
                }
            };

            if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
                || !event.paths.iter().any(|path| path == &model)
            {
                continue;
            }

            debug!(kind = ?event.kind, "model file changed");
            report(state.refresh(), &state);
        }

        Ok(())
    }
}

fn report(refresh: Refresh, state: &ModelWatch) {
    match refresh {
        Refresh::Written { entity, files } => {
            println!(
                "{} {} files for {} in {}",
                style("Regenerated").green().bold(),
                files.len(),
                style(entity).green(),
                style(state.writer().root().display()).yellow()
            );
        }
        Refresh::Unchanged => {
            println!("{}", style("No changes").dim());
        }
        Refresh::ReadFailed(err) => {
            eprintln!("{} {err:#}", style("Could not read model:").red().bold());
        }
        Refresh::GenerationFailed {
            error,
            kept_last_good,
        } => {
            eprintln!("{} {error}", style("Generation failed:").red().bold());
            if kept_last_good {
                eprintln!("{}", style("Keeping last good output").dim());
            }
        }
        Refresh::WriteFailed(err) => {
            eprintln!("{} {err:#}", style("Write failed:").red().bold());
        }
    }
}
