//! One regeneration step of `crudgen watch`
//!
//! Every failure is reported as a [`Refresh`] variant so the watch loop can
//! print it and keep running. Files on disk are only replaced when they still
//! hold what this watch last wrote, unless the writer overwrites.

use crate::{input, OutputWriter, Session, SessionUpdate, WrittenFile};
use crudgen::{GenerationError, GenerationResult, Generator};
use std::path::PathBuf;
use tracing::{info, warn};

/// Result of [`ModelWatch::refresh`]
#[derive(Debug)]
pub enum Refresh {
    /// Files were written for `entity`
    Written {
        /// Entity name of the written model
        entity: String,
        /// Per-file outcomes
        files: Vec<WrittenFile>,
    },
    /// Output matches what was last written
    Unchanged,
    /// The model file could not be read
    ReadFailed(anyhow::Error),
    /// The model did not generate; nothing on disk was touched
    GenerationFailed {
        /// Generation error
        error: GenerationError,
        /// Whether an earlier good result is still held
        kept_last_good: bool,
    },
    /// Generation succeeded but writing did not
    WriteFailed(anyhow::Error),
}

/// Regenerates a model file into an output directory
pub struct ModelWatch {
    model: PathBuf,
    session: Session,
    writer: OutputWriter,
    written: Option<GenerationResult>,
}

impl ModelWatch {
    /// Watch `model`, writing through `writer`
    #[must_use]
    pub fn new(model: impl Into<PathBuf>, generator: Generator, writer: OutputWriter) -> Self {
        Self {
            model: model.into(),
            session: Session::new(generator),
            writer,
            written: None,
        }
    }

    /// Output writer
    #[must_use]
    pub const fn writer(&self) -> &OutputWriter {
        &self.writer
    }

    /// Re-read the model and write changed output
    pub fn refresh(&mut self) -> Refresh {
        let text = match input::read_model(&self.model) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "could not read model");
                return Refresh::ReadFailed(err);
            }
        };

        let had_result = self.session.last_good().is_some();
        let pending = match self.session.apply(&text) {
            SessionUpdate::Updated(result) => Some(result.clone()),
            SessionUpdate::Unchanged => None,
            SessionUpdate::Failed(error) => {
                return Refresh::GenerationFailed {
                    error,
                    kept_last_good: had_result,
                };
            }
        };

        // A previous write may have failed; retry it for the same output.
        let Some(result) = pending.or_else(|| {
            self.session
                .last_good()
                .filter(|good| self.written.as_ref() != Some(*good))
                .cloned()
        }) else {
            return Refresh::Unchanged;
        };

        match self.writer.write_over(&result, self.written.as_ref()) {
            Ok(files) => {
                info!(files = files.len(), "regenerated");
                let entity = result.model.entity_name.clone();
                self.written = Some(result);
                Refresh::Written { entity, files }
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "could not write generated files");
                Refresh::WriteFailed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WriteOutcome;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    const WIDGET: &str = r#"{"EntityName":"Widget","Properties":[{"Name":"Id","Type":"int"}]}"#;
    const WIDGET_RENAMED: &str =
        r#"{"EntityName":"Widget","Properties":[{"Name":"Key","Type":"int"}]}"#;
    const ENTITY: &str = "out/Output/Domain/Entities/Widget.cs";
    const PROGRAM: &str = "out/Output/Api/Program.cs";

    fn watch(dir: &TempDir, overwrite: bool) -> ModelWatch {
        let writer = OutputWriter::new(dir.path().join("out"), overwrite);
        ModelWatch::new(dir.path().join("model.json"), Generator::new().unwrap(), writer)
    }

    fn hand_edit(dir: &TempDir, relative: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "// hand edited\n").unwrap();
    }

    #[test]
    fn test_first_refresh_writes_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("model.json"), WIDGET).unwrap();
        let mut watch = watch(&dir, false);

        match watch.refresh() {
            Refresh::Written { entity, files } => {
                assert_eq!(entity, "Widget");
                assert_eq!(files.len(), 6);
            }
            other => panic!("unexpected refresh: {other:?}"),
        }
        assert!(matches!(watch.refresh(), Refresh::Unchanged));
    }

    #[test]
    fn test_hand_edited_file_survives_without_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("model.json"), WIDGET).unwrap();
        hand_edit(&dir, PROGRAM);
        let mut watch = watch(&dir, false);

        let refresh = watch.refresh();
        assert!(matches!(&refresh, Refresh::WriteFailed(err) if err.to_string().contains("Refusing to overwrite")));
        assert_eq!(
            fs::read_to_string(dir.path().join(PROGRAM)).unwrap(),
            "// hand edited\n"
        );
        assert!(!dir.path().join(ENTITY).exists());
    }

    #[test]
    fn test_overwrite_replaces_hand_edited_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("model.json"), WIDGET).unwrap();
        hand_edit(&dir, PROGRAM);
        let mut watch = watch(&dir, true);

        assert!(matches!(watch.refresh(), Refresh::Written { .. }));
        assert_ne!(
            fs::read_to_string(dir.path().join(PROGRAM)).unwrap(),
            "// hand edited\n"
        );
    }

    #[test]
    fn test_own_output_is_replaced_on_change() {
        let dir = tempdir().unwrap();
        let model = dir.path().join("model.json");
        fs::write(&model, WIDGET).unwrap();
        let mut watch = watch(&dir, false);
        assert!(matches!(watch.refresh(), Refresh::Written { .. }));

        fs::write(&model, WIDGET_RENAMED).unwrap();
        match watch.refresh() {
            Refresh::Written { files, .. } => {
                let entity = files
                    .iter()
                    .find(|file| file.path == "Output/Domain/Entities/Widget.cs")
                    .unwrap();
                assert_eq!(entity.outcome, WriteOutcome::Overwritten);
            }
            other => panic!("unexpected refresh: {other:?}"),
        }
        assert!(fs::read_to_string(dir.path().join(ENTITY))
            .unwrap()
            .contains("Key"));
    }

    #[test]
    fn test_edit_after_watch_started_is_kept() {
        let dir = tempdir().unwrap();
        let model = dir.path().join("model.json");
        fs::write(&model, WIDGET).unwrap();
        let mut watch = watch(&dir, false);
        assert!(matches!(watch.refresh(), Refresh::Written { .. }));

        hand_edit(&dir, ENTITY);
        fs::write(&model, WIDGET_RENAMED).unwrap();
        assert!(matches!(watch.refresh(), Refresh::WriteFailed(_)));
        assert_eq!(
            fs::read_to_string(dir.path().join(ENTITY)).unwrap(),
            "// hand edited\n"
        );
    }

    #[test]
    fn test_failed_write_is_retried() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("model.json"), WIDGET).unwrap();
        hand_edit(&dir, PROGRAM);
        let mut watch = watch(&dir, false);
        assert!(matches!(watch.refresh(), Refresh::WriteFailed(_)));

        fs::remove_file(dir.path().join(PROGRAM)).unwrap();
        assert!(matches!(watch.refresh(), Refresh::Written { .. }));
        assert!(dir.path().join(PROGRAM).is_file());
    }

    #[test]
    fn test_unreadable_model_is_reported() {
        let dir = tempdir().unwrap();
        let mut watch = watch(&dir, false);
        let refresh = watch.refresh();
        assert!(matches!(&refresh, Refresh::ReadFailed(err) if err.to_string().contains("Failed to read model file")));

        fs::write(dir.path().join("model.json"), [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(watch.refresh(), Refresh::ReadFailed(_)));
    }

    #[test]
    fn test_generation_failure_keeps_disk() {
        let dir = tempdir().unwrap();
        let model = dir.path().join("model.json");
        fs::write(&model, WIDGET).unwrap();
        let mut watch = watch(&dir, false);
        assert!(matches!(watch.refresh(), Refresh::Written { .. }));
        let before = fs::read_to_string(dir.path().join(ENTITY)).unwrap();

        fs::write(&model, r#"{"EntityName":"","Properties":[]}"#).unwrap();
        assert!(matches!(
            watch.refresh(),
            Refresh::GenerationFailed {
                kept_last_good: true,
                ..
            }
        ));
        assert_eq!(fs::read_to_string(dir.path().join(ENTITY)).unwrap(), before);
    }
}
