//! crudgen: layered CRUD module generator
//!
//! Turns a small declarative entity description into the source files of a
//! layered CRUD module: entity, persistence context, repository contract and
//! implementation, API controller and application bootstrap.
//!
//! # Example
//!
//! ```rust
//! let result = crudgen::generate(
//!     r#"{"EntityName":"Widget","Properties":[{"Name":"Id","Type":"int"}]}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(result.files.len(), 6);
//! assert!(result.files["Output/Domain/Entities/Widget.cs"].contains("public int Id"));
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod field_type;
pub mod generator;
pub mod helpers;
pub mod model;
pub mod schema;
pub mod templates;

pub use config::GeneratorSettings;
pub use error::{GenerationError, Result, ValidationError};
pub use field_type::{map_type, FieldType};
pub use generator::{generate, GeneratedFile, GenerationResult, Generator};
pub use helpers::TemplateHelpers;
pub use model::{validate, ModelDescription, PropertyDescription};
pub use templates::{ArtifactKind, TemplateRegistry};
