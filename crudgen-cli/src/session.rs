//! Regeneration session with last-good-result retention
//!
//! A failed regeneration never replaces the previous successful result, so
//! a half-edited model does not wipe what the user was looking at.

use crudgen::{GenerationError, GenerationResult, Generator};
use tracing::{debug, warn};

/// Outcome of feeding new model text into a [`Session`]
#[derive(Debug)]
pub enum SessionUpdate<'a> {
    /// New output differs from the previous result
    Updated(&'a GenerationResult),
    /// New output is identical to the previous result
    Unchanged,
    /// Generation failed; the previous result, if any, is kept
    Failed(GenerationError),
}

/// Holds the last successful generation result
pub struct Session {
    generator: Generator,
    last_good: Option<GenerationResult>,
}

impl Session {
    /// Start a session with no result yet
    #[must_use]
    pub const fn new(generator: Generator) -> Self {
        Self {
            generator,
            last_good: None,
        }
    }

    /// Last successful result
    #[must_use]
    pub const fn last_good(&self) -> Option<&GenerationResult> {
        self.last_good.as_ref()
    }

    /// Regenerate from new model text
    pub fn apply(&mut self, model_text: &str) -> SessionUpdate<'_> {
        match self.generator.generate(model_text) {
            Ok(result) => {
                if self.last_good.as_ref() == Some(&result) {
                    debug!("regenerated output is unchanged");
                    return SessionUpdate::Unchanged;
                }
                SessionUpdate::Updated(self.last_good.insert(result))
            }
            Err(err) => {
                warn!(error = %err, "generation failed, keeping last good result");
                SessionUpdate::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGET: &str = r#"{"EntityName":"Widget","Properties":[{"Name":"Id","Type":"int"}]}"#;
    const GADGET: &str = r#"{"EntityName":"Gadget","Properties":[{"Name":"Id","Type":"int"}]}"#;

    fn session() -> Session {
        Session::new(Generator::new().unwrap())
    }

    #[test]
    fn test_first_success_updates() {
        let mut session = session();
        assert!(matches!(session.apply(WIDGET), SessionUpdate::Updated(_)));
        assert_eq!(session.last_good().unwrap().model.entity_name, "Widget");
    }

    #[test]
    fn test_same_input_is_unchanged() {
        let mut session = session();
        session.apply(WIDGET);
        assert!(matches!(session.apply(WIDGET), SessionUpdate::Unchanged));
    }

    #[test]
    fn test_failure_keeps_last_good() {
        let mut session = session();
        session.apply(WIDGET);

        assert!(matches!(session.apply("{ broken"), SessionUpdate::Failed(_)));
        assert!(matches!(
            session.apply(r#"{"EntityName":"","Properties":[]}"#),
            SessionUpdate::Failed(_)
        ));
        assert_eq!(session.last_good().unwrap().model.entity_name, "Widget");
    }

    #[test]
    fn test_new_model_replaces_result() {
        let mut session = session();
        session.apply(WIDGET);
        assert!(matches!(session.apply(GADGET), SessionUpdate::Updated(r) if r.model.entity_name == "Gadget"));
    }

    #[test]
    fn test_failure_without_previous_result() {
        let mut session = session();
        assert!(matches!(session.apply(""), SessionUpdate::Failed(_)));
        assert!(session.last_good().is_none());
    }
}
