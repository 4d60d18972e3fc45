//! Validate instances against built schemas.
//!
//! Validation itself is delegated to the external `jsonschema` engine. This
//! module serializes a [`Schema`](../schema/enum.Schema.html), compiles the
//! resulting document with the engine, and reshapes the engine's errors into
//! [`KeyError`](struct.KeyError.html) records without interpreting them.
//!
//! See the docs for [`Validator`](struct.Validator.html) for more.

use crate::schema::Schema;
use failure::{err_msg, Error};
use json_pointer::JsonPointer;
use serde_json::Value;

/// Validates instances against schemas.
#[derive(Debug, Default, Eq, PartialEq, Clone, Hash)]
pub struct Validator {
    config: Config,
}

impl Validator {
    /// Constructs a new validator using the default configuration.
    pub fn new() -> Self {
        Self::new_with_config(Config::default())
    }

    /// Constructs a new validator using a configuration.
    pub fn new_with_config(config: Config) -> Self {
        Self { config }
    }

    /// Validate an instance against a schema.
    ///
    /// Despite having "Error" in their name, the returned records are not
    /// Rust errors. A list of validation errors is the _successful_ result
    /// of running `validate`; an empty list means the instance satisfied the
    /// schema. Each record passes the engine's path, offending value, and
    /// message through verbatim.
    ///
    /// Returns an error only if the engine rejects the serialized document
    /// or reports an error at a path that is not valid JSON Pointer syntax.
    /// Neither happens for documents produced by
    /// [`Schema::to_document`](../schema/enum.Schema.html#method.to_document).
    pub fn validate(&self, schema: &Schema, instance: &Value) -> Result<Vec<KeyError>, Error> {
        let document = serde_json::to_value(schema.to_document())?;
        let compiled = jsonschema::validator_for(&document)
            .map_err(|err| err_msg(format!("schema did not compile: {}", err)))?;

        let errors = compiled.iter_errors(instance).map(|err| {
            // Render the message before moving the offending value out of
            // the engine error.
            let message = err.to_string();
            Ok(KeyError::new(
                parse_pointer(&err.instance_path.to_string())?,
                err.instance.into_owned(),
                message,
            ))
        });

        if self.config.max_errors == 0 {
            errors.collect()
        } else {
            errors.take(self.config.max_errors).collect()
        }
    }
}

/// Configuration for how validation should proceed.
#[derive(Debug, Default, Eq, PartialEq, Clone, Hash)]
pub struct Config {
    max_errors: usize,
}

impl Config {
    /// Create a new, default `Config`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of errors to return. 0, the default value,
    /// indicates that all errors should be returned.
    ///
    /// If your use-case doesn't care about errors, and you just want to know
    /// whether an instance is valid, you should set this value to 1.
    pub fn max_errors(&mut self, max_errors: usize) -> &mut Self {
        self.max_errors = max_errors;
        self
    }
}

/// Contains a single problem with an instance when evaluated against a
/// schema.
///
/// Note that, despite its name, `KeyError` is not an error in the usual Rust
/// sense. It is an ordinary struct, which happens to describe why some part
/// of an instance was unsatisfactory against a given schema.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyError {
    property_path: JsonPointer<String, Vec<String>>,
    invalid_value: Value,
    message: String,
}

impl KeyError {
    pub fn new(
        property_path: JsonPointer<String, Vec<String>>,
        invalid_value: Value,
        message: String,
    ) -> KeyError {
        KeyError {
            property_path,
            invalid_value,
            message,
        }
    }

    /// A pointer to the part of the instance which was rejected.
    pub fn property_path(&self) -> &JsonPointer<String, Vec<String>> {
        &self.property_path
    }

    /// The property path rendered in JSON Pointer syntax, with the instance
    /// root rendered as `"/"`.
    pub fn path(&self) -> String {
        let rendered = self.property_path.to_string();
        if rendered.is_empty() {
            "/".to_owned()
        } else {
            rendered
        }
    }

    /// The part of the instance which was rejected.
    pub fn invalid_value(&self) -> &Value {
        &self.invalid_value
    }

    /// The engine's human-readable description of the problem.
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn parse_pointer(path: &str) -> Result<JsonPointer<String, Vec<String>>, Error> {
    // The engine reports the instance root as the empty pointer.
    if path.is_empty() {
        return Ok(JsonPointer::new(Vec::new()));
    }

    path.parse().map_err(|err| {
        err_msg(format!(
            "engine produced an unparseable instance path {:?}: {:?}",
            path, err
        ))
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::schema::{ObjectSchema, StringSchema};
    use indexmap::IndexMap;
    use serde_json::json;

    #[test]
    fn root_error_path() -> Result<(), Error> {
        let validator = Validator::new();
        let errors = validator.validate(&StringSchema::new().into(), &json!(42))?;

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path(), "/");
        assert_eq!(errors[0].invalid_value(), &json!(42));
        assert!(errors[0].message().contains("is not of type"));

        Ok(())
    }

    #[test]
    fn nested_error_path() -> Result<(), Error> {
        let mut properties = IndexMap::new();
        properties.insert("field".to_owned(), StringSchema::new().into());
        let schema = ObjectSchema::new(properties, vec![], true)?.into();

        let validator = Validator::new();
        let errors = validator.validate(&schema, &json!({ "field": 42 }))?;

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path(), "/field");
        assert_eq!(errors[0].invalid_value(), &json!(42));

        Ok(())
    }

    #[test]
    fn pointer_parsing() -> Result<(), Error> {
        assert_eq!(parse_pointer("")?, JsonPointer::new(Vec::new()));
        assert_eq!(parse_pointer("/field")?.to_string(), "/field");

        // A malformed path must surface as an error, not collapse to the
        // instance root.
        assert!(parse_pointer("no-leading-slash").is_err());

        Ok(())
    }

    #[test]
    fn max_errors() -> Result<(), Error> {
        let mut properties = IndexMap::new();
        properties.insert("a".to_owned(), StringSchema::new().into());
        properties.insert("b".to_owned(), StringSchema::new().into());
        let schema =
            ObjectSchema::new(properties, vec!["a".to_owned(), "b".to_owned()], false)?.into();

        let instance = json!({ "c": 1 });

        let validator = Validator::new();
        assert_eq!(validator.validate(&schema, &instance)?.len(), 3);

        let mut config = Config::new();
        config.max_errors(2);

        let validator = Validator::new_with_config(config);
        assert_eq!(validator.validate(&schema, &instance)?.len(), 2);

        Ok(())
    }
}
