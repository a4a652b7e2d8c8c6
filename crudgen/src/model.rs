//! Model descriptions and their validation
//!
//! A model description names one entity and lists its properties:
//!
//! ```json
//! {
//!   "EntityName": "Product",
//!   "Properties": [
//!     { "Name": "Id", "Type": "int" },
//!     { "Name": "Name", "Type": "string" }
//!   ]
//! }
//! ```
//!
//! Validation is deliberately minimal. Only the entity name and the
//! presence of at least one property are checked; defects inside a
//! property are tolerated and surface as the `string` type fallback.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const ENTITY_NAME_KEY: &str = "EntityName";
const PROPERTIES_KEY: &str = "Properties";
const NAME_KEY: &str = "Name";
const TYPE_KEY: &str = "Type";

/// A validated model description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelDescription {
    /// Entity name (e.g., "Product")
    pub entity_name: String,
    /// Properties in declaration order
    pub properties: Vec<PropertyDescription>,
}

/// One property of the modelled entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyDescription {
    /// Property name (e.g., "Price")
    pub name: String,
    /// Abstract type tag (e.g., "decimal")
    #[serde(rename = "Type")]
    pub ty: String,
}

impl PropertyDescription {
    /// Create a property description
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Read a property leniently from a raw JSON element.
    fn from_value(value: &Value) -> Self {
        Self {
            name: lenient_string(value.get(NAME_KEY)),
            ty: lenient_string(value.get(TYPE_KEY)),
        }
    }
}

/// Validate a parsed model document.
///
/// Rules are checked in order and the first failure is returned:
///
/// 1. `EntityName` must be a string that is non-empty after trimming.
/// 2. `Properties` must be an array with at least one element.
///
/// # Errors
///
/// Returns [`ValidationError::MissingEntityName`] or
/// [`ValidationError::NoProperties`] for the first rule that fails.
///
/// # Examples
///
/// ```
/// # use crudgen::{validate, ValidationError};
/// let raw = serde_json::json!({ "EntityName": "Post", "Properties": [] });
/// assert_eq!(validate(&raw), Err(ValidationError::NoProperties));
/// ```
pub fn validate(raw: &Value) -> Result<ModelDescription, ValidationError> {
    let entity_name = raw
        .get(ENTITY_NAME_KEY)
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .ok_or(ValidationError::MissingEntityName)?;

    let properties = raw
        .get(PROPERTIES_KEY)
        .and_then(Value::as_array)
        .filter(|properties| !properties.is_empty())
        .ok_or(ValidationError::NoProperties)?;

    Ok(ModelDescription {
        entity_name: entity_name.to_string(),
        properties: properties.iter().map(PropertyDescription::from_value).collect(),
    })
}

/// Strings pass through, `null` and absent become empty, other scalars
/// become their JSON text.
fn lenient_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
