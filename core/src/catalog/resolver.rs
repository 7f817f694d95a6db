#![deny(missing_docs)]

//! # Type Resolver
//!
//! Logic for resolving embedded schema fragments into normalized
//! `TypeDescriptor` trees.
//!
//! Handles:
//! - Recursive object/array resolution with declaration-order properties.
//! - Required-list driven optionality.
//! - Example union across the three declared sources.
//! - A nesting bound that turns runaway recursion (the shape an inlined
//!   self-referential fragment takes) into an explicit `CyclicSchema` error.

use crate::catalog::models::{PropertyDescriptor, TypeDescriptor, TypeKind};
use crate::catalog::shims::RawSchema;
use crate::error::{AppError, AppResult};
use serde_json::Value;

/// Type name assumed for any schema node that declares no `type`.
pub const DEFAULT_SCHEMA_TYPE: &str = "object";

/// Maximum schema nesting accepted before resolution is treated as cyclic.
const MAX_SCHEMA_DEPTH: usize = 64;

/// Resolves one schema node into a normalized type descriptor.
///
/// Returns `Ok(None)` only when the node itself is absent (e.g. a
/// response with no schema). Unrecognized type names pass through as
/// opaque scalars; malformed fragments degrade to a best-effort leaf.
pub fn resolve_type(schema: Option<&RawSchema>) -> AppResult<Option<TypeDescriptor>> {
    match schema {
        Some(node) => Ok(Some(resolve_node(node, 0)?)),
        None => Ok(None),
    }
}

fn resolve_node(schema: &RawSchema, depth: usize) -> AppResult<TypeDescriptor> {
    if depth > MAX_SCHEMA_DEPTH {
        return Err(AppError::CyclicSchema(format!(
            "schema nesting exceeds {} levels",
            MAX_SCHEMA_DEPTH
        )));
    }

    let name = schema
        .ty
        .clone()
        .unwrap_or_else(|| DEFAULT_SCHEMA_TYPE.to_string());

    let kind = match name.to_lowercase().as_str() {
        "object" => TypeKind::Complex(resolve_properties(schema, depth)?),
        "array" => {
            let item = match schema.items.as_deref() {
                Some(items) => Some(Box::new(resolve_node(items, depth + 1)?)),
                None => None,
            };
            TypeKind::Collection(item)
        }
        _ => TypeKind::Scalar,
    };

    Ok(TypeDescriptor {
        name,
        description: schema.description.clone(),
        kind,
    })
}

fn resolve_properties(schema: &RawSchema, depth: usize) -> AppResult<Vec<PropertyDescriptor>> {
    let mut descriptors = Vec::new();
    let Some(properties) = &schema.properties else {
        return Ok(descriptors);
    };

    for (name, property) in properties {
        descriptors.push(PropertyDescriptor {
            name: name.clone(),
            description: property.description.clone(),
            ty: resolve_node(property, depth + 1)?,
            examples: gather_examples(schema, name, property),
            is_optional: is_optional(schema, name),
        });
    }

    Ok(descriptors)
}

/// Unions property examples in order: the parent schema's keyed `example`
/// entry, the property's own `example`, then its `x-examples` list. Only
/// the `x-examples` union step de-duplicates.
fn gather_examples(parent: &RawSchema, name: &str, property: &RawSchema) -> Vec<Value> {
    let mut examples = Vec::new();

    if let Some(keyed) = parent.example.as_ref().and_then(|e| e.get(name)) {
        examples.push(keyed.clone());
    }

    if let Some(own) = &property.example {
        examples.push(own.clone());
    }

    if let Some(extra) = &property.examples {
        for value in extra {
            if !examples.contains(value) {
                examples.push(value.clone());
            }
        }
    }

    examples
}

/// A property is optional unless the parent's `required` list names it.
fn is_optional(parent: &RawSchema, name: &str) -> bool {
    parent
        .required
        .as_ref()
        .is_none_or(|required| !required.iter().any(|r| r == name))
}
