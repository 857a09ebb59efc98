//! Error types for schema reading and type classification.

use thiserror::Error;

/// Validation error raised while reading a schema or generating from it.
///
/// The set of variants is closed. Every variant is terminal for the
/// generation call that produced it and none wraps another error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    /// The schema root is not a JSON object.
    #[error("schema root is not an object")]
    RootIsNotObject,

    /// A composite type description is not a JSON object.
    #[error("description of type '{type_name}' is not an object")]
    DescriptionIsNotObject {
        /// Type name.
        type_name: String,
    },

    /// A field's declared type is not a JSON string.
    #[error("type of field '{field}' in '{type_name}' is not a string")]
    FieldTypeIsNotString {
        /// Owning type name.
        type_name: String,
        /// Field name.
        field: String,
    },

    /// A type string (or one of its parts) is empty.
    #[error("no type information in '{type_str}'")]
    NoTypeInfo {
        /// Offending type string.
        type_str: String,
    },

    /// The `__is_ref` marker holds a non-boolean value.
    #[error("'__is_ref' of type '{type_name}' must be a boolean")]
    IsRefMustBeBool {
        /// Type name.
        type_name: String,
    },

    /// A dictionary type has no comma between key and value.
    #[error("missing comma in dictionary type '{type_str}'")]
    MissingCommaInDictionary {
        /// Offending type string.
        type_str: String,
    },

    /// A dictionary type has no closing angle bracket.
    #[error("missing closing '>' in dictionary type '{type_str}'")]
    MissingClosingInDictionary {
        /// Offending type string.
        type_str: String,
    },

    /// No shared conversion procedure can be emitted for this type.
    #[error("unsupported primitive '{type_str}'")]
    UnsupportedPrimitive {
        /// Offending type string.
        type_str: String,
    },

    /// The `__slaves` directive is not an array.
    #[error("'__slaves' must be an array")]
    SlaveInfoMustBeArray,

    /// An entry of `__slaves` is not a string.
    #[error("'__slaves' entry at index {index} is not a string")]
    SlaveMustBeString {
        /// Position in the `__slaves` array.
        index: usize,
    },

    /// An entry of `__slaves` names a non-primitive type.
    #[error("'__slaves' entry '{type_str}' is not a primitive type")]
    SlaveMustBePrimitive {
        /// Offending type string.
        type_str: String,
    },
}

impl MetaError {
    /// Returns the bare variant name, e.g. `"RootIsNotObject"`.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::RootIsNotObject => "RootIsNotObject",
            Self::DescriptionIsNotObject { .. } => "DescriptionIsNotObject",
            Self::FieldTypeIsNotString { .. } => "FieldTypeIsNotString",
            Self::NoTypeInfo { .. } => "NoTypeInfo",
            Self::IsRefMustBeBool { .. } => "IsRefMustBeBool",
            Self::MissingCommaInDictionary { .. } => "MissingCommaInDictionary",
            Self::MissingClosingInDictionary { .. } => "MissingClosingInDictionary",
            Self::UnsupportedPrimitive { .. } => "UnsupportedPrimitive",
            Self::SlaveInfoMustBeArray => "SlaveInfoMustBeArray",
            Self::SlaveMustBeString { .. } => "SlaveMustBeString",
            Self::SlaveMustBePrimitive { .. } => "SlaveMustBePrimitive",
        }
    }

    /// Creates a no-type-info error.
    pub fn no_type_info(type_str: impl Into<String>) -> Self {
        Self::NoTypeInfo {
            type_str: type_str.into(),
        }
    }

    /// Creates an unsupported primitive error.
    pub fn unsupported(type_str: impl Into<String>) -> Self {
        Self::UnsupportedPrimitive {
            type_str: type_str.into(),
        }
    }
}

/// Result type alias for schema and generation operations.
pub type Result<T> = std::result::Result<T, MetaError>;
