#![deny(missing_docs)]

//! # Catalog Models
//!
//! Definition of the normalized, publish-ready descriptor structures.
//!
//! Serialized field names (`isComplex`, `collectionType`, ...) are part
//! of the downstream compatibility surface and must not be renamed.
//! `TypeDescriptor` keeps its shape as a closed tagged union so that a
//! type is structurally scalar, complex or a collection — never two at
//! once — while still serializing to the flat flag form.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// The normalized representation of a schema fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// The schema's declared type name ("object" when absent).
    pub name: String,
    /// Description carried over from the schema.
    pub description: Option<String>,
    /// Structural classification.
    pub kind: TypeKind,
}

/// Closed set of structural variants for a resolved type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// A leaf type with no nested structure.
    Scalar,
    /// An object type with ordered properties.
    Complex(Vec<PropertyDescriptor>),
    /// An array type with its element type (null when `items` is absent).
    Collection(Option<Box<TypeDescriptor>>),
}

impl TypeDescriptor {
    /// Builds a leaf descriptor carrying only a type name.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind: TypeKind::Scalar,
        }
    }

    /// True iff the resolved type is an object.
    pub fn is_complex(&self) -> bool {
        matches!(self.kind, TypeKind::Complex(_))
    }

    /// True iff the resolved type is an array.
    pub fn is_collection(&self) -> bool {
        matches!(self.kind, TypeKind::Collection(_))
    }

    /// Ordered properties, present iff complex.
    pub fn properties(&self) -> Option<&[PropertyDescriptor]> {
        match &self.kind {
            TypeKind::Complex(props) => Some(props),
            _ => None,
        }
    }

    /// Element type, present iff a collection with resolved items.
    pub fn collection_type(&self) -> Option<&TypeDescriptor> {
        match &self.kind {
            TypeKind::Collection(item) => item.as_deref(),
            _ => None,
        }
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        map.serialize_entry("isComplex", &self.is_complex())?;
        map.serialize_entry("isCollection", &self.is_collection())?;
        match &self.kind {
            TypeKind::Scalar => {}
            TypeKind::Complex(properties) => {
                map.serialize_entry("properties", properties)?;
            }
            TypeKind::Collection(item) => {
                map.serialize_entry("collectionType", item)?;
            }
        }
        map.end()
    }
}

/// One property of a complex type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    /// Property name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resolved property type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Ordered example values unioned from all declared sources.
    pub examples: Vec<Value>,
    /// False iff the parent schema lists this property as required.
    #[serde(rename = "isOptional")]
    pub is_optional: bool,
}

/// The source location of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSource {
    /// Query string.
    Query,
    /// Path segment ("path" in the document).
    Route,
    /// Request body.
    Body,
    /// Unrecognized declared location, carried through rather than rejected.
    Unknown,
}

/// One classified parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDescriptor {
    /// Parameter name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Classified source location.
    pub source: ParamSource,
    /// Resolved type; null for a body parameter declaring no schema.
    #[serde(rename = "type")]
    pub ty: Option<TypeDescriptor>,
    /// Optionality; omitted for body parameters, where it is undefined.
    #[serde(rename = "isOptional", skip_serializing_if = "Option::is_none")]
    pub is_optional: Option<bool>,
    /// Vendor example list, non-body parameters only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Value>>,
}

/// One declared response of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseDescriptor {
    /// Status code, verbatim.
    pub code: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resolved body type; null when the response declares no schema.
    #[serde(rename = "type")]
    pub ty: Option<TypeDescriptor>,
}

/// The normalized, publish-ready representation of one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointDescriptor {
    /// Path template, verbatim.
    pub route: String,
    /// HTTP method, verbatim.
    pub method: String,
    /// Operation name (explicit identifier, `x-name`, or generated).
    pub name: String,
    /// Summary if present, else the operation description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Classified parameters, in declaration order.
    pub parameters: Vec<ParameterDescriptor>,
    /// Responses, in declaration order.
    pub responses: Vec<ResponseDescriptor>,
    /// Vendor extension metadata; omitted when no extensions exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IndexMap<String, Value>>,
    /// Grouping tags; omitted when none are declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
