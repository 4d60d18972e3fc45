//! An error type for schema construction.

use failure::Fail;

/// An enum of ways a schema builder can be misconfigured.
///
/// These errors arise at construction time only. Once a builder value exists,
/// serializing it cannot fail.
#[derive(Debug, Fail, PartialEq, Clone, Eq, Hash)]
pub enum ConfigurationError {
    /// An enum constraint was supplied without any values.
    ///
    /// An empty `enum` would reject every instance, which is never what the
    /// caller meant. Pass no enum at all to accept any string.
    #[fail(display = "enum must contain at least one value")]
    EmptyEnum,

    /// A required property was not declared.
    ///
    /// Every name in an object schema's `required` list must also appear in
    /// its property map. A name that does not is a configuration error, not
    /// a schema that requires an unconstrained property.
    #[fail(display = "required property is not declared: {}", property)]
    UndeclaredRequired { property: String },

    /// A const schema was given a composite value.
    ///
    /// Const schemas are restricted to JSON scalars: strings, numbers,
    /// booleans, and null.
    #[fail(display = "const value must be a JSON scalar")]
    NonScalarConst,
}
