/// Configuration module for gqlmongo
///
/// This module holds the fixed scalar-to-storage table and the optional user
/// configuration, which can add mappings for custom scalars and decide how
/// unmapped scalars are treated.
use crate::parser::error::{Error, Result};
use crate::types::StorageType;
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Name of the Relay marker interface that makes an object type a node
pub const NODE_INTERFACE: &str = "Node";

/// Name suffix of Relay connection types
pub const CONNECTION_SUFFIX: &str = "Connection";

/// Name suffix of Relay edge types
pub const EDGE_SUFFIX: &str = "Edge";

/// Translates a built-in scalar name to its storage primitive
#[inline(always)]
pub fn translate_scalar(scalar: &str) -> Option<StorageType> {
    match scalar {
        "Time" => Some(StorageType::Date),
        "ID" => Some(StorageType::ObjectId),
        "String" => Some(StorageType::String),
        "Int" => Some(StorageType::Number),
        "Float" => Some(StorageType::Number),
        "Boolean" => Some(StorageType::Boolean),
        _ => None,
    }
}

/// Compiler configuration, usually read from a JSON file
///
/// ```json
/// { "custom_scalars": { "Email": "String" }, "strict_scalars": true }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Storage mappings for custom scalars, on top of the built-in table
    pub custom_scalars: HashMap<String, StorageType>,

    /// Fail instead of warning when a declared scalar has no mapping
    pub strict_scalars: bool,
}

impl Config {
    /// Parses a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reads a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Builds the scalar lookup table used during translation
    pub fn scalar_map(&self) -> ScalarMap {
        let mut custom = HashMap::with_capacity(self.custom_scalars.len());
        for (name, storage_type) in &self.custom_scalars {
            if translate_scalar(name).is_some() {
                warn!(
                    "Ignoring custom mapping {} -> {}: built-in scalars cannot be remapped",
                    name, storage_type
                );
                continue;
            }
            custom.insert(name.clone(), *storage_type);
        }
        ScalarMap { custom }
    }
}

/// Scalar name to storage primitive lookup
///
/// Built-in entries always win over custom ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarMap {
    custom: HashMap<String, StorageType>,
}

impl ScalarMap {
    #[inline]
    pub fn get(&self, name: &str) -> Option<StorageType> {
        translate_scalar(name).or_else(|| self.custom.get(name).copied())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scalars() {
        assert_eq!(translate_scalar("Time"), Some(StorageType::Date));
        assert_eq!(translate_scalar("ID"), Some(StorageType::ObjectId));
        assert_eq!(translate_scalar("String"), Some(StorageType::String));
        assert_eq!(translate_scalar("Int"), Some(StorageType::Number));
        assert_eq!(translate_scalar("Float"), Some(StorageType::Number));
        assert_eq!(translate_scalar("Boolean"), Some(StorageType::Boolean));
        assert_eq!(translate_scalar("boolean"), None);
        assert_eq!(translate_scalar("Email"), None);
    }

    #[test]
    fn test_config_from_json() {
        let config =
            Config::from_json(r#"{ "custom_scalars": { "Email": "String", "Cents": "Number" } }"#)
                .unwrap();
        assert!(!config.strict_scalars);

        let scalars = config.scalar_map();
        assert_eq!(scalars.get("Email"), Some(StorageType::String));
        assert_eq!(scalars.get("Cents"), Some(StorageType::Number));
        assert_eq!(scalars.get("ID"), Some(StorageType::ObjectId));
        assert!(!scalars.contains("Url"));
    }

    #[test]
    fn test_custom_mapping_cannot_override_builtin() {
        let config = Config::from_json(r#"{ "custom_scalars": { "Time": "String" } }"#).unwrap();
        assert_eq!(config.scalar_map().get("Time"), Some(StorageType::Date));
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::from_json(r#"{ "custom_scalars": { "Email": "Text" } }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_json(r#"{ "strict": true }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
