//! Generator settings
//!
//! Values baked into every generated file that are not part of the model
//! description. Settings are fixed for a given [`Generator`](crate::Generator),
//! so output stays deterministic for a given input.
//!
//! # Example Configuration
//!
//! ```toml
//! [generator]
//! namespace = "GeneratedApp"
//! database_name = "AppDb"
//! ```

use serde::{Deserialize, Serialize};

/// Generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Root namespace of the generated C# sources
    pub namespace: String,

    /// Name of the in-memory database registered by `Program`
    pub database_name: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            namespace: "GeneratedApp".to_string(),
            database_name: "AppDb".to_string(),
        }
    }
}

impl GeneratorSettings {
    /// Override the root namespace
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Override the in-memory database name
    #[must_use]
    pub fn with_database_name(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = database_name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.namespace, "GeneratedApp");
        assert_eq!(settings.database_name, "AppDb");
    }

    #[test]
    fn test_builder() {
        let settings = GeneratorSettings::default()
            .with_namespace("Shop")
            .with_database_name("ShopDb");
        assert_eq!(settings.namespace, "Shop");
        assert_eq!(settings.database_name, "ShopDb");
    }

    #[test]
    fn test_partial_deserialize() {
        let settings: GeneratorSettings =
            serde_json::from_str(r#"{"namespace":"Billing"}"#).unwrap();
        assert_eq!(settings.namespace, "Billing");
        assert_eq!(settings.database_name, "AppDb");
    }
}
