//! Generation error types.

use crate::templates::ArtifactKind;
use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// A model description that parsed but violates the model contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `EntityName` is absent, not a string, or blank.
    #[error("EntityName is required")]
    MissingEntityName,

    /// `Properties` is absent, not an array, or empty.
    #[error("At least one property is required")]
    NoProperties,
}

/// Errors that abort a generation run.
///
/// Generation is all-or-nothing: when any of these is returned no files
/// were produced.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The model text is not well-formed JSON.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// The model text parsed but failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A built-in template failed to compile.
    #[error("failed to register template '{name}': {source}")]
    Template {
        /// Template name
        name: &'static str,
        /// Underlying template error
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// Rendering an artifact failed.
    #[error("failed to render {artifact}: {source}")]
    Render {
        /// Artifact being rendered
        artifact: ArtifactKind,
        /// Underlying render error
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

impl GenerationError {
    /// Whether this error came from the validator rather than the parser
    /// or template engine.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingEntityName.to_string(),
            "EntityName is required"
        );
        assert_eq!(
            ValidationError::NoProperties.to_string(),
            "At least one property is required"
        );
    }

    #[test]
    fn test_validation_is_transparent() {
        let err = GenerationError::from(ValidationError::NoProperties);
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "At least one property is required");
    }

    #[test]
    fn test_parse_error_is_verbatim() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = source.to_string();
        let err = GenerationError::from(source);
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), expected);
    }
}
