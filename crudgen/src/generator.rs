//! CRUD generator orchestrator
//!
//! This module coordinates the generation of all files for a CRUD module.
//! It parses and validates the model text, resolves field types, builds the
//! template view-model and renders:
//! - Entity class
//! - Persistence context
//! - Repository interface and implementation
//! - API controller
//! - Application bootstrap
//!
//! Generation is a pure function of the model text and the generator
//! settings: no timestamps, randomness or I/O enter the output.

use crate::config::GeneratorSettings;
use crate::error::Result;
use crate::field_type::map_type;
use crate::helpers::TemplateHelpers;
use crate::model::{validate, ModelDescription, PropertyDescription};
use crate::templates::{ArtifactKind, TemplateRegistry};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Generate every artifact for a model using default settings.
///
/// # Errors
///
/// Returns an error if:
/// - The text is not valid JSON
/// - The model fails validation
/// - A template fails to render
///
/// # Examples
///
/// ```
/// let err = crudgen::generate(r#"{"EntityName":"","Properties":[]}"#).unwrap_err();
/// assert_eq!(err.to_string(), "EntityName is required");
/// ```
pub fn generate(raw_model_text: &str) -> Result<GenerationResult> {
    Generator::new()?.generate(raw_model_text)
}

/// CRUD module generator
pub struct Generator {
    /// Settings baked into every artifact
    settings: GeneratorSettings,
    /// Template registry
    templates: &'static TemplateRegistry,
}

impl Generator {
    /// Create a generator with default settings
    ///
    /// # Errors
    ///
    /// Returns an error if the template registry fails to initialize.
    pub fn new() -> Result<Self> {
        Self::with_settings(GeneratorSettings::default())
    }

    /// Create a generator with explicit settings
    ///
    /// # Errors
    ///
    /// Returns an error if the template registry fails to initialize.
    pub fn with_settings(settings: GeneratorSettings) -> Result<Self> {
        Ok(Self {
            settings,
            templates: TemplateRegistry::global()?,
        })
    }

    /// Settings used by this generator
    #[must_use]
    pub const fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate all artifacts from raw model text
    ///
    /// Either every artifact is produced or none is.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse, the model fails
    /// validation, or rendering fails.
    pub fn generate(&self, raw_model_text: &str) -> Result<GenerationResult> {
        let raw = parse(raw_model_text)?;
        let model = validate(&raw)?;

        debug!(
            entity = %model.entity_name,
            properties = model.properties.len(),
            "generating CRUD module"
        );

        let view = ViewModel::new(&model, &self.settings);

        let files = ArtifactKind::ALL
            .into_iter()
            .map(|kind| {
                let content = self.templates.render(kind, &view)?;
                trace!(artifact = %kind, bytes = content.len(), "rendered artifact");
                Ok((kind.path(&model.entity_name), content))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(GenerationResult { model, files })
    }
}

/// Blank input is treated as an empty document so it reports the missing
/// entity name rather than a syntax error.
fn parse(raw_model_text: &str) -> Result<Value> {
    if raw_model_text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(raw_model_text)?)
}

/// Output of a successful generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// The validated model
    pub model: ModelDescription,
    /// Output path to file content
    pub files: BTreeMap<String, String>,
}

impl GenerationResult {
    /// Generated files in artifact order
    pub fn artifacts(&self) -> impl Iterator<Item = GeneratedFile<'_>> {
        ArtifactKind::ALL.into_iter().filter_map(move |kind| {
            let path = kind.path(&self.model.entity_name);
            let (path, content) = self.files.get_key_value(&path)?;
            Some(GeneratedFile {
                kind,
                path,
                content,
                description: kind.description(&self.model.entity_name),
            })
        })
    }

    /// Content of one artifact
    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> Option<&str> {
        self.files
            .get(&kind.path(&self.model.entity_name))
            .map(String::as_str)
    }
}

/// Represents a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile<'a> {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Relative output path
    pub path: &'a str,
    /// File content
    pub content: &'a str,
    /// File description for user feedback
    pub description: String,
}

/// Template view-model
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ViewModel<'a> {
    entity_name: &'a str,
    collection_name: String,
    route_path: String,
    namespace: &'a str,
    database_name: &'a str,
    properties: Vec<EnrichedProperty<'a>>,
}

/// A property with its resolved C# type
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct EnrichedProperty<'a> {
    name: &'a str,
    #[serde(rename = "Type")]
    ty: &'a str,
    concrete_type: &'static str,
}

impl<'a> ViewModel<'a> {
    fn new(model: &'a ModelDescription, settings: &'a GeneratorSettings) -> Self {
        Self {
            entity_name: &model.entity_name,
            collection_name: TemplateHelpers::collection_name(&model.entity_name),
            route_path: TemplateHelpers::to_route_path(&model.entity_name),
            namespace: &settings.namespace,
            database_name: &settings.database_name,
            properties: model.properties.iter().map(EnrichedProperty::new).collect(),
        }
    }
}

impl<'a> EnrichedProperty<'a> {
    fn new(property: &'a PropertyDescription) -> Self {
        Self {
            name: &property.name,
            ty: &property.ty,
            concrete_type: map_type(&property.ty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GenerationError, ValidationError};

    const WIDGET: &str = r#"{"EntityName":"Widget","Properties":[{"Name":"Id","Type":"int"},{"Name":"Name","Type":"string"}]}"#;

    #[test]
    fn test_generate_widget() {
        let result = generate(WIDGET).unwrap();
        assert_eq!(result.files.len(), 6);
        assert_eq!(result.model.entity_name, "Widget");
        assert_eq!(result.model.properties.len(), 2);
    }

    #[test]
    fn test_blank_input_reports_entity_name() {
        for input in ["", "   ", "\n\t"] {
            let err = generate(input).unwrap_err();
            assert!(matches!(
                err,
                GenerationError::Validation(ValidationError::MissingEntityName)
            ));
        }
    }

    #[test]
    fn test_syntax_error() {
        let err = generate("{\"EntityName\": ").unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[test]
    fn test_view_model_preserves_order() {
        let model = validate(&serde_json::from_str(WIDGET).unwrap()).unwrap();
        let settings = GeneratorSettings::default();
        let view = ViewModel::new(&model, &settings);

        let names: Vec<_> = view.properties.iter().map(|p| p.name).collect();
        assert_eq!(names, ["Id", "Name"]);
        assert_eq!(view.collection_name, "Widgets");
        assert_eq!(view.route_path, "widgets");
    }

    #[test]
    fn test_view_model_keys() {
        let model = validate(&serde_json::from_str(WIDGET).unwrap()).unwrap();
        let settings = GeneratorSettings::default();
        let value = serde_json::to_value(ViewModel::new(&model, &settings)).unwrap();

        assert_eq!(value["EntityName"], "Widget");
        assert_eq!(value["Namespace"], "GeneratedApp");
        assert_eq!(value["DatabaseName"], "AppDb");
        assert_eq!(value["Properties"][0]["Type"], "int");
        assert_eq!(value["Properties"][0]["ConcreteType"], "int");
    }

    #[test]
    fn test_artifacts_in_order() {
        let result = generate(WIDGET).unwrap();
        let kinds: Vec<_> = result.artifacts().map(|file| file.kind).collect();
        assert_eq!(kinds, ArtifactKind::ALL);

        let first = result.artifacts().next().unwrap();
        assert_eq!(first.path, "Output/Domain/Entities/Widget.cs");
        assert_eq!(first.description, "Entity class for Widget");
    }

    #[test]
    fn test_custom_settings() {
        let generator = Generator::with_settings(
            GeneratorSettings::default()
                .with_namespace("Shop")
                .with_database_name("ShopDb"),
        )
        .unwrap();

        let result = generator.generate(WIDGET).unwrap();
        let program = result.get(ArtifactKind::Bootstrap).unwrap();
        assert!(program.contains("using Shop.Infrastructure.Persistence;"));
        assert!(program.contains("UseInMemoryDatabase(\"ShopDb\")"));
    }
}
