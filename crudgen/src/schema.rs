//! Model document schema and starter model
//!
//! The JSON Schema describes the strict authoring contract for editors and
//! linters. The generator itself is more forgiving: unknown `Type` values
//! and extra keys are accepted and defaulted.

use crate::field_type::FieldType;
use serde_json::{json, Value};

/// Schema identifier
pub const SCHEMA_ID: &str = "https://crudgen.dev/schemas/model.json";

/// Starter model written by `crudgen init`
pub const DEFAULT_MODEL_JSON: &str = r#"{
  "EntityName": "Product",
  "Properties": [
    { "Name": "Id", "Type": "int" },
    { "Name": "Name", "Type": "string" },
    { "Name": "Price", "Type": "decimal" },
    { "Name": "IsActive", "Type": "bool" }
  ]
}
"#;

/// Draft-07 JSON Schema for model documents
#[must_use]
pub fn model_schema() -> Value {
    let types: Vec<_> = FieldType::ALL.iter().map(|ty| ty.as_str()).collect();

    json!({
        "$id": SCHEMA_ID,
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["EntityName", "Properties"],
        "properties": {
            "EntityName": {
                "type": "string",
                "minLength": 1
            },
            "Properties": {
                "type": "array",
                "minItems": 1,
                "items": { "$ref": "#/definitions/property" }
            }
        },
        "definitions": {
            "property": {
                "type": "object",
                "required": ["Name", "Type"],
                "properties": {
                    "Name": {
                        "type": "string",
                        "minLength": 1
                    },
                    "Type": {
                        "type": "string",
                        "enum": types
                    }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false
    })
}
