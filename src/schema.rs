//! Typed JSON Schema builders.
//!
//! This module provides both an abstract ([`Schema`](enum.Schema.html)) and a
//! serializable/deserializable ([`Document`](struct.Document.html))
//! representation of schemas. Builders validate their invariants up front, so
//! a constructed `Schema` always serializes into a well-formed document.

use crate::errors::ConfigurationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An abstract representation of a schema, covering every kind this crate can
/// build.
///
/// Each variant wraps its typed builder. Use the `From` impls to lift a
/// builder into a `Schema` when assembling property maps.
#[derive(Debug, PartialEq, Clone)]
pub enum Schema {
    /// A string schema, optionally constrained to an enumerated set of
    /// values.
    String(StringSchema),

    /// An object schema with declared properties, required names, and an
    /// additional-properties policy.
    Object(ObjectSchema),

    /// A schema matched only by one exact scalar value.
    Const(ConstSchema),
}

impl Schema {
    /// Serialize this schema into a [`Document`](struct.Document.html).
    ///
    /// This is a total function: every keyword relevant to the variant is
    /// emitted, absent optional fields are omitted entirely, and property
    /// order follows the insertion order of the builder's property map.
    pub fn to_document(&self) -> Document {
        match self {
            Schema::String(schema) => Document {
                typ: Some("string".to_owned()),
                enumeration: schema.enumeration.clone(),
                ..Document::default()
            },
            Schema::Object(schema) => {
                let props: IndexMap<String, Document> = schema
                    .properties
                    .iter()
                    .map(|(name, sub)| (name.clone(), sub.to_document()))
                    .collect();

                Document {
                    typ: Some("object".to_owned()),
                    props: if props.is_empty() { None } else { Some(props) },
                    required: if schema.required.is_empty() {
                        None
                    } else {
                        Some(schema.required.clone())
                    },
                    additional: Some(schema.additional_properties),
                    ..Document::default()
                }
            }
            Schema::Const(schema) => Document {
                constant: Some(schema.value.clone()),
                ..Document::default()
            },
        }
    }
}

impl From<StringSchema> for Schema {
    fn from(schema: StringSchema) -> Schema {
        Schema::String(schema)
    }
}

impl From<ObjectSchema> for Schema {
    fn from(schema: ObjectSchema) -> Schema {
        Schema::Object(schema)
    }
}

impl From<ConstSchema> for Schema {
    fn from(schema: ConstSchema) -> Schema {
        Schema::Const(schema)
    }
}

/// Builder for string schemas.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct StringSchema {
    enumeration: Option<Vec<String>>,
}

impl StringSchema {
    /// Construct a string schema that accepts any string.
    pub fn new() -> StringSchema {
        StringSchema::default()
    }

    /// Construct a string schema constrained to the given values.
    ///
    /// The values keep their order in the serialized `enum` keyword. Returns
    /// [`ConfigurationError::EmptyEnum`](../errors/enum.ConfigurationError.html)
    /// if `values` is empty.
    pub fn with_enum(values: Vec<String>) -> Result<StringSchema, ConfigurationError> {
        if values.is_empty() {
            return Err(ConfigurationError::EmptyEnum);
        }

        Ok(StringSchema {
            enumeration: Some(values),
        })
    }

    /// Get the enum constraint, if any.
    pub fn enumeration(&self) -> &Option<Vec<String>> {
        &self.enumeration
    }
}

/// Builder for object schemas.
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectSchema {
    properties: IndexMap<String, Schema>,
    required: Vec<String>,
    additional_properties: bool,
}

impl ObjectSchema {
    /// Construct an object schema.
    ///
    /// `properties` maps each declared property name to its sub-schema, and
    /// keeps insertion order through serialization. `required` lists the
    /// property names an instance must carry, in the order they should appear
    /// in the serialized `required` keyword. `additional_properties` controls
    /// whether instances may carry properties outside the declared set.
    ///
    /// Returns
    /// [`ConfigurationError::UndeclaredRequired`](../errors/enum.ConfigurationError.html)
    /// if any required name is absent from `properties`.
    pub fn new(
        properties: IndexMap<String, Schema>,
        required: Vec<String>,
        additional_properties: bool,
    ) -> Result<ObjectSchema, ConfigurationError> {
        for name in &required {
            if !properties.contains_key(name) {
                return Err(ConfigurationError::UndeclaredRequired {
                    property: name.clone(),
                });
            }
        }

        Ok(ObjectSchema {
            properties,
            required,
            additional_properties,
        })
    }

    /// Get the declared properties.
    pub fn properties(&self) -> &IndexMap<String, Schema> {
        &self.properties
    }

    /// Get the required property names.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Whether undeclared properties are permitted.
    pub fn additional_properties(&self) -> bool {
        self.additional_properties
    }
}

/// Builder for const schemas.
#[derive(Debug, PartialEq, Clone)]
pub struct ConstSchema {
    value: Value,
}

impl ConstSchema {
    /// Construct a schema matched only by `value`.
    ///
    /// Returns
    /// [`ConfigurationError::NonScalarConst`](../errors/enum.ConfigurationError.html)
    /// if `value` is an object or an array.
    pub fn new(value: Value) -> Result<ConstSchema, ConfigurationError> {
        match value {
            Value::Object(_) | Value::Array(_) => Err(ConfigurationError::NonScalarConst),
            _ => Ok(ConstSchema { value }),
        }
    }

    /// Get the constant value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A serialization/deserialization-friendly representation of a schema.
///
/// This struct is meant for use with the `serde` crate. It carries exactly
/// the keywords this crate emits: `type`, `enum`, `properties`, `required`,
/// `additionalProperties`, and `const`. Absent fields are omitted from the
/// output rather than serialized as `null`, and `properties` preserves
/// insertion order in both directions.
#[derive(Debug, PartialEq, Deserialize, Serialize, Default, Clone)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub typ: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "enum")]
    pub enumeration: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "properties")]
    pub props: Option<IndexMap<String, Document>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "additionalProperties")]
    pub additional: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "const")]
    pub constant: Option<Value>,
}
