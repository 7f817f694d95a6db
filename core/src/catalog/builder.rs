#![deny(missing_docs)]

//! # Endpoint Builder
//!
//! Logic that assembles one `EndpointDescriptor` per (path, method)
//! operation: name precedence, parameter and response classification,
//! and vendor metadata extraction.

use crate::catalog::models::{
    EndpointDescriptor, ParamSource, ParameterDescriptor, ResponseDescriptor, TypeDescriptor,
};
use crate::catalog::naming::derive_name;
use crate::catalog::resolver::resolve_type;
use crate::catalog::shims::{RawOperation, RawParameter};
use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde_json::Value;

/// Vendor extension prefix marking tool-specific metadata.
const EXTENSION_PREFIX: &str = "x-";

/// Reserved extension key naming the operation; never copied to metadata.
const NAME_EXTENSION_KEY: &str = "x-name";

/// Builds the descriptor for one operation.
///
/// `path` and `method` are copied verbatim onto the descriptor. Missing
/// arguments (empty path or method) are non-recoverable caller errors
/// and fail with `InvalidInput`.
pub fn build_endpoint(
    path: &str,
    method: &str,
    operation: &RawOperation,
) -> AppResult<EndpointDescriptor> {
    if path.is_empty() {
        return Err(AppError::InvalidInput("Path is required".into()));
    }
    if method.is_empty() {
        return Err(AppError::InvalidInput("Method is required".into()));
    }

    // 1. Name (explicit identifier beats x-name beats the generated phrase)
    let name = endpoint_name(path, method, operation);

    // 2. Description (summary wins when both are present)
    let description = operation
        .summary
        .clone()
        .or_else(|| operation.description.clone());

    // 3. Parameters
    let parameters = classify_parameters(operation)?;

    // 4. Responses
    let responses = classify_responses(operation)?;

    // 5. Vendor metadata
    let metadata = extract_metadata(operation);

    // 6. Tags
    let tags = operation.tags.clone();

    Ok(EndpointDescriptor {
        route: path.to_string(),
        method: method.to_string(),
        name,
        description,
        parameters,
        responses,
        metadata,
        tags,
    })
}

fn endpoint_name(path: &str, method: &str, operation: &RawOperation) -> String {
    if let Some(id) = &operation.operation_id {
        return id.clone();
    }
    if let Some(name) = operation
        .extensions
        .get(NAME_EXTENSION_KEY)
        .and_then(Value::as_str)
    {
        return name.to_string();
    }
    derive_name(path, method)
}

/// Converts one raw parameter entry into a classified descriptor.
///
/// Body parameters get their nested schema resolved and carry no
/// optionality. Non-body parameters get a leaf type from the declared
/// primitive name; route segments are always present, so a route
/// parameter is never optional regardless of its declared flag.
pub fn classify_parameter(parameter: &RawParameter) -> AppResult<ParameterDescriptor> {
    let source = match parameter.location.as_deref() {
        Some("query") => ParamSource::Query,
        Some("body") => ParamSource::Body,
        Some("path") => ParamSource::Route,
        _ => ParamSource::Unknown,
    };

    if source == ParamSource::Body {
        return Ok(ParameterDescriptor {
            name: parameter.name.clone(),
            description: parameter.description.clone(),
            source,
            ty: resolve_type(parameter.schema.as_ref())?,
            is_optional: None,
            examples: None,
        });
    }

    let is_optional = source != ParamSource::Route && parameter.required != Some(true);

    Ok(ParameterDescriptor {
        name: parameter.name.clone(),
        description: parameter.description.clone(),
        source,
        ty: Some(TypeDescriptor::scalar(
            parameter.ty.clone().unwrap_or_default(),
        )),
        is_optional: Some(is_optional),
        examples: parameter.examples.clone(),
    })
}

fn classify_parameters(operation: &RawOperation) -> AppResult<Vec<ParameterDescriptor>> {
    let mut descriptors = Vec::new();
    if let Some(parameters) = &operation.parameters {
        for parameter in parameters {
            descriptors.push(classify_parameter(parameter)?);
        }
    }
    Ok(descriptors)
}

fn classify_responses(operation: &RawOperation) -> AppResult<Vec<ResponseDescriptor>> {
    let mut descriptors = Vec::new();
    if let Some(responses) = &operation.responses {
        for (code, response) in responses {
            descriptors.push(ResponseDescriptor {
                code: code.clone(),
                description: response.description.clone(),
                ty: resolve_type(response.schema.as_ref())?,
            });
        }
    }
    Ok(descriptors)
}

/// Harvests `x-` keys (except the reserved name key) into a metadata
/// map with the prefix stripped. Returns `None` when no such keys
/// exist, so callers never attach an empty metadata object.
fn extract_metadata(operation: &RawOperation) -> Option<IndexMap<String, Value>> {
    let mut metadata = IndexMap::new();
    for (key, value) in &operation.extensions {
        if key == NAME_EXTENSION_KEY || !key.starts_with(EXTENSION_PREFIX) {
            continue;
        }
        metadata.insert(key[EXTENSION_PREFIX.len()..].to_string(), value.clone());
    }

    if metadata.is_empty() {
        None
    } else {
        Some(metadata)
    }
}
