//! Token document loading and typed access.
//!
//! A token document is one JSON object with `meta`, the five token
//! sections, and an optional `components` object. The document is parsed
//! once per invocation and never mutated; every later stage reads from
//! it and produces new structures.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{DstokError, Result};
use crate::types::Section;

/// Required top-level sections, in schema order (`meta` first, then the
/// token sections in emission order).
pub const REQUIRED_SECTIONS: [&str; 6] = [
    "meta",
    "color",
    "typography",
    "spacing",
    "borderRadius",
    "shadow",
];

/// Required fields of the `meta` object.
pub const REQUIRED_META_FIELDS: [&str; 4] = ["name", "source", "version", "generated"];

/// Document metadata, with the defaults generated headers fall back to.
#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    pub name: String,
    pub source: String,
    pub version: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            name: "Design System".to_string(),
            source: "Unknown".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

/// A parsed token document. Immutable after construction.
#[derive(Debug, Clone)]
pub struct TokenDocument {
    root: Map<String, Value>,
}

impl TokenDocument {
    /// Parse a document from JSON source.
    pub fn parse(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source).map_err(|e| DstokError::Parse {
            message: format!("Invalid JSON: {}", e),
            help: None,
        })?;

        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(DstokError::Parse {
                message: "Token file must contain a JSON object".to_string(),
                help: None,
            }),
        }
    }

    /// Read and parse a document from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| DstokError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read file: {}", e),
        })?;
        Self::parse(&source)
    }

    /// The root object.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// A top-level value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// A top-level object by key, if present and an object.
    pub fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.root.get(key).and_then(Value::as_object)
    }

    /// A token section's object, if present.
    pub fn section(&self, section: Section) -> Option<&Map<String, Value>> {
        self.object(section.key())
    }

    /// The optional `components` object.
    pub fn components(&self) -> Option<&Map<String, Value>> {
        self.object("components")
    }

    /// Metadata with defaults applied for absent fields.
    pub fn meta(&self) -> Meta {
        let defaults = Meta::default();
        let meta = self.object("meta");
        let field = |name: &str, default: &str| -> String {
            meta.and_then(|m| m.get(name))
                .and_then(Value::as_str)
                .unwrap_or(default)
                .to_string()
        };
        Meta {
            name: field("name", &defaults.name),
            source: field("source", &defaults.source),
            version: field("version", &defaults.version),
        }
    }
}
