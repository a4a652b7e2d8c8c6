//! Artifact templates
//!
//! The six generated artifacts form a closed set. Each [`ArtifactKind`]
//! carries its template name, output path and description; the template
//! bodies live in [`files`] and are compiled once into a shared
//! [`TemplateRegistry`].

use crate::error::{GenerationError, Result};
use crate::helpers::TemplateHelpers;
use handlebars::Handlebars;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::fmt;

pub mod files;
pub use files::*;

/// Root directory of every generated path
pub const OUTPUT_ROOT: &str = "Output";

/// File extension of generated sources
pub const FILE_EXTENSION: &str = "cs";

static REGISTRY: OnceCell<TemplateRegistry> = OnceCell::new();

/// One of the six generated artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    /// Entity class with one property per field
    Entity,
    /// EF Core `AppDbContext`
    PersistenceContext,
    /// `I{Entity}Repository` interface
    RepositoryContract,
    /// `{Entity}Repository` implementation
    RepositoryImplementation,
    /// `{Entity}Controller` API controller
    ApiController,
    /// `Program` bootstrap
    Bootstrap,
}

impl ArtifactKind {
    /// All artifacts, in generation order.
    pub const ALL: [Self; 6] = [
        Self::Entity,
        Self::PersistenceContext,
        Self::RepositoryContract,
        Self::RepositoryImplementation,
        Self::ApiController,
        Self::Bootstrap,
    ];

    /// Name the template is registered under
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::PersistenceContext => "db_context",
            Self::RepositoryContract => "repository_interface",
            Self::RepositoryImplementation => "repository_implementation",
            Self::ApiController => "controller",
            Self::Bootstrap => "program",
        }
    }

    /// Template source
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Entity => ENTITY_TEMPLATE,
            Self::PersistenceContext => DB_CONTEXT_TEMPLATE,
            Self::RepositoryContract => REPOSITORY_INTERFACE_TEMPLATE,
            Self::RepositoryImplementation => REPOSITORY_IMPLEMENTATION_TEMPLATE,
            Self::ApiController => CONTROLLER_TEMPLATE,
            Self::Bootstrap => PROGRAM_TEMPLATE,
        }
    }

    /// Output path for an entity
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::ArtifactKind;
    /// assert_eq!(
    ///     ArtifactKind::RepositoryContract.path("Widget"),
    ///     "Output/Application/Repositories/IWidgetRepository.cs"
    /// );
    /// ```
    #[must_use]
    pub fn path(self, entity: &str) -> String {
        let entity = TemplateHelpers::to_path_segment(entity);
        match self {
            Self::Entity => format!("{OUTPUT_ROOT}/Domain/Entities/{entity}.{FILE_EXTENSION}"),
            Self::PersistenceContext => {
                format!("{OUTPUT_ROOT}/Infrastructure/Persistence/AppDbContext.{FILE_EXTENSION}")
            }
            Self::RepositoryContract => {
                format!("{OUTPUT_ROOT}/Application/Repositories/I{entity}Repository.{FILE_EXTENSION}")
            }
            Self::RepositoryImplementation => format!(
                "{OUTPUT_ROOT}/Infrastructure/Repositories/{entity}Repository.{FILE_EXTENSION}"
            ),
            Self::ApiController => {
                format!("{OUTPUT_ROOT}/Api/Controllers/{entity}Controller.{FILE_EXTENSION}")
            }
            Self::Bootstrap => format!("{OUTPUT_ROOT}/Api/Program.{FILE_EXTENSION}"),
        }
    }

    /// Human-readable description for an entity
    #[must_use]
    pub fn description(self, entity: &str) -> String {
        match self {
            Self::Entity => format!("Entity class for {entity}"),
            Self::PersistenceContext => format!("DbContext exposing {entity} set"),
            Self::RepositoryContract => format!("Repository interface for {entity}"),
            Self::RepositoryImplementation => format!("EF Core repository for {entity}"),
            Self::ApiController => format!("REST controller for {entity}"),
            Self::Bootstrap => "Application bootstrap".to_string(),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

/// Compiled artifact templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compile every artifact template
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Template`] if a template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        for kind in ArtifactKind::ALL {
            handlebars
                .register_template_string(kind.template_name(), kind.template())
                .map_err(|source| GenerationError::Template {
                    name: kind.template_name(),
                    source: Box::new(source),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Process-wide registry, compiled on first use
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Template`] if compilation fails.
    pub fn global() -> Result<&'static Self> {
        REGISTRY.get_or_try_init(Self::new)
    }

    /// Render one artifact
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Render`] if the data does not satisfy the
    /// template.
    pub fn render<T: Serialize>(&self, kind: ArtifactKind, data: &T) -> Result<String> {
        self.handlebars
            .render(kind.template_name(), data)
            .map_err(|source| GenerationError::Render {
                artifact: kind,
                source: Box::new(source),
            })
    }
}
