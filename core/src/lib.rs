#![deny(missing_docs)]

//! # Catalog Core
//!
//! Core library for transforming a validated API specification document
//! into a normalized catalog of endpoint descriptors.

/// Shared error types.
pub mod error;

/// Specification-to-catalog transformation.
pub mod catalog;

pub use catalog::{
    build_catalog, build_endpoint, derive_name, parse_spec_document, resolve_type,
    EndpointDescriptor, ParamSource, ParameterDescriptor, PropertyDescriptor, RawOperation,
    RawParameter, RawPathItem, RawResponse, RawSchema, ResponseDescriptor, SpecDocument,
    TypeDescriptor, TypeKind, DEFAULT_SCHEMA_TYPE,
};
pub use error::{AppError, AppResult};
