//! `jsb` is a typed builder for [JSON Schema][json-schema] documents.
//!
//! Schemas written as inline JSON are easy to typo and impossible for the
//! compiler to check. This crate instead builds schemas from typed values,
//! verifies their invariants at construction time, and serializes them into
//! canonical JSON Schema documents. Validation itself stays where it belongs,
//! in an existing standards-compliant engine (the [`jsonschema`
//! crate][jsonschema-crate]); `jsb` only hands documents to the engine and
//! passes its errors back through untouched.
//!
//! # Building and validating
//!
//! The most common use-case for this crate is building a schema and checking
//! instances against it. Here's how you'd achieve that use-case:
//!
//! ```
//! use failure::Error;
//! use indexmap::IndexMap;
//! use jsb::{ObjectSchema, Schema, StringSchema, Validator};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Error> {
//!     let mut properties = IndexMap::new();
//!     properties.insert("name".to_owned(), Schema::from(StringSchema::new()));
//!     properties.insert(
//!         "role".to_owned(),
//!         Schema::from(StringSchema::with_enum(vec![
//!             "admin".to_owned(),
//!             "member".to_owned(),
//!         ])?),
//!     );
//!
//!     // Builders check their invariants up front. Requiring a property that
//!     // isn't declared, for example, is a ConfigurationError here rather
//!     // than a surprise at validation time.
//!     let schema = Schema::from(ObjectSchema::new(
//!         properties,
//!         vec!["name".to_owned()],
//!         false,
//!     )?);
//!
//!     let validator = Validator::new();
//!     let input_ok = json!({
//!         "name": "John Doe",
//!         "role": "member",
//!     });
//!
//!     let validation_errors_ok = validator.validate(&schema, &input_ok)?;
//!     assert!(validation_errors_ok.is_empty());
//!
//!     let input_bad = json!({
//!         "nickname": "JD",
//!     });
//!
//!     // Each KeyError holds a path to the bad part of the input, the
//!     // offending value, and the engine's message. Here the instance is
//!     // missing "name" and carries an undeclared property, both reported
//!     // at the instance root.
//!     let validation_errors_bad = validator.validate(&schema, &input_bad)?;
//!     assert_eq!(validation_errors_bad.len(), 2);
//!     assert!(validation_errors_bad.iter().all(|err| err.path() == "/"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Serializing schemas
//!
//! [`Schema::to_document`](schema/enum.Schema.html#method.to_document)
//! produces a [`Document`](schema/struct.Document.html), a serde-friendly
//! value that serializes into a JSON Schema document using only the standard
//! keywords. Serialization is deterministic: object properties keep the
//! insertion order of the builder's property map, `required` keeps the
//! caller's order, and absent optional keywords are omitted rather than
//! emitted as `null`.
//!
//! [json-schema]: https://json-schema.org
//! [jsonschema-crate]: https://docs.rs/jsonschema

pub mod errors;
pub mod schema;
pub mod validator;

pub use crate::errors::ConfigurationError;
pub use crate::schema::{ConstSchema, Document, ObjectSchema, Schema, StringSchema};
pub use crate::validator::{Config, KeyError, Validator};
