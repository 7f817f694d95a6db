#![deny(missing_docs)]

//! # Specification Shims
//!
//! Generic structures acting as an Intermediate Deserialization Layer.
//! These structs map directly to the validated specification document:
//! a `paths` mapping of path templates to method maps, where each
//! operation carries parameters, responses, tags and `x-` extensions.
//!
//! Declaration order is preserved end to end (`IndexMap`), since the
//! catalog output must be stable for downstream diffing.

use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The validated specification document consumed as input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecDocument {
    /// Path templates mapped to their method maps, in declaration order.
    #[serde(default)]
    pub paths: IndexMap<String, RawPathItem>,
}

/// One path entry: lower-case HTTP method names mapped to operations.
#[derive(Debug, Clone, Default)]
pub struct RawPathItem {
    /// Parsed operations keyed by method, in declaration order.
    pub operations: IndexMap<String, RawOperation>,
    /// Spec extensions attached at the path level (x-...).
    pub extensions: IndexMap<String, Value>,
}

impl<'de> Deserialize<'de> for RawPathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut operations = IndexMap::new();
        let mut extensions = IndexMap::new();

        for (key, value) in raw {
            if key.starts_with("x-") {
                extensions.insert(key, value);
                continue;
            }
            let operation = serde_json::from_value::<RawOperation>(value).map_err(|e| {
                DeError::custom(format!("Failed to parse operation '{}': {}", key, e))
            })?;
            operations.insert(key, operation);
        }

        Ok(Self {
            operations,
            extensions,
        })
    }
}

/// One HTTP-method entry under one path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOperation {
    /// Explicit operation identifier.
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    /// Short summary; wins over `description` for the endpoint text.
    pub summary: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Declared parameter list.
    pub parameters: Option<Vec<RawParameter>>,
    /// Status code mapped to response object, in declaration order.
    pub responses: Option<IndexMap<String, RawResponse>>,
    /// Grouping tags, copied verbatim to the descriptor.
    pub tags: Option<Vec<String>>,
    /// Everything else, including the `x-` vendor extensions.
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// A raw parameter entry as declared on an operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParameter {
    /// Parameter name.
    #[serde(default)]
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Declared location ("query", "path", "body", ...).
    #[serde(rename = "in")]
    pub location: Option<String>,
    /// Declared required flag.
    pub required: Option<bool>,
    /// Declared primitive type name (non-body parameters).
    #[serde(rename = "type")]
    pub ty: Option<String>,
    /// Nested schema (body parameters).
    pub schema: Option<RawSchema>,
    /// Vendor example list.
    #[serde(rename = "x-examples")]
    pub examples: Option<Vec<Value>>,
}

/// A raw response entry keyed by status code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResponse {
    /// Description.
    pub description: Option<String>,
    /// Response body schema, if any.
    pub schema: Option<RawSchema>,
}

/// A node of the embedded JSON-Schema-like type grammar.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSchema {
    /// Declared type name; absent means "object".
    #[serde(rename = "type")]
    pub ty: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Declared properties, in declaration order.
    pub properties: Option<IndexMap<String, RawSchema>>,
    /// Element schema for arrays.
    pub items: Option<Box<RawSchema>>,
    /// Names of required properties; absent means all optional.
    pub required: Option<Vec<String>>,
    /// Example value; for objects this is a map keyed by property name.
    pub example: Option<Value>,
    /// Vendor example list.
    #[serde(rename = "x-examples")]
    pub examples: Option<Vec<Value>>,
}
