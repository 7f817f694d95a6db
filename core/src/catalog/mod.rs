#![deny(missing_docs)]

//! # Catalog Module
//!
//! Entry point for the specification-to-catalog transformation.
//!
//! - **shims**: Intermediate deserialization layer for the input document.
//! - **models**: Normalized descriptor structures (the output contract).
//! - **resolver**: Recursive schema-to-type resolution.
//! - **naming**: Heuristic operation naming.
//! - **builder**: Per-operation endpoint descriptor assembly.

pub mod builder;
pub mod models;
pub mod naming;
pub mod resolver;
pub mod shims;

use crate::error::{AppError, AppResult};

// Re-export public API to keep call sites on the module root
pub use builder::{build_endpoint, classify_parameter};
pub use models::{
    EndpointDescriptor, ParamSource, ParameterDescriptor, PropertyDescriptor, ResponseDescriptor,
    TypeDescriptor, TypeKind,
};
pub use naming::derive_name;
pub use resolver::{resolve_type, DEFAULT_SCHEMA_TYPE};
pub use shims::{RawOperation, RawParameter, RawPathItem, RawResponse, RawSchema, SpecDocument};

/// Parses a specification document from YAML or JSON text.
///
/// The document is assumed to be structurally valid already; this only
/// performs the deserialization needed to drive the transformation.
pub fn parse_spec_document(content: &str) -> AppResult<SpecDocument> {
    Ok(serde_yaml::from_str(content)?)
}

/// Builds the full ordered catalog of endpoint descriptors.
///
/// Iterates every path in the document, then every method under that
/// path, in declaration order, so downstream consumers get a stable
/// sequence for diffing. Fails with `EmptyCatalog` when the document
/// yields zero operations.
pub fn build_catalog(document: &SpecDocument) -> AppResult<Vec<EndpointDescriptor>> {
    let mut endpoints = Vec::new();

    for (path, path_item) in &document.paths {
        for (method, operation) in &path_item.operations {
            endpoints.push(build_endpoint(path, method, operation)?);
        }
    }

    if endpoints.is_empty() {
        return Err(AppError::EmptyCatalog);
    }

    Ok(endpoints)
}
