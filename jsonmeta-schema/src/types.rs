//! Type descriptor definitions.
//!
//! A [`TypeDescriptor`] is the structured form of a field's type string such
//! as `"int?"`, `"List<Job>"` or `"Dictionary<string, double[]>"`.

use std::fmt;

/// Built-in scalar types understood by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarType {
    /// Signed 8-bit integer.
    SByte,
    /// Unsigned 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    Short,
    /// Unsigned 16-bit integer.
    UShort,
    /// Signed 32-bit integer.
    Int,
    /// Unsigned 32-bit integer.
    UInt,
    /// Signed 64-bit integer.
    Long,
    /// Unsigned 64-bit integer.
    ULong,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// 128-bit decimal.
    Decimal,
    /// Boolean.
    Bool,
    /// UTF-16 string.
    String,
}

impl ScalarType {
    /// Every scalar type, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::SByte,
        Self::Byte,
        Self::Short,
        Self::UShort,
        Self::Int,
        Self::UInt,
        Self::Long,
        Self::ULong,
        Self::Float,
        Self::Double,
        Self::Decimal,
        Self::Bool,
        Self::String,
    ];

    /// Returns the type keyword used in schemas and generated code.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SByte => "sbyte",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Bool => "bool",
            Self::String => "string",
        }
    }

    /// Parses a scalar type from its keyword.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scalar| scalar.name() == name)
    }

    /// Returns true for the integer and floating point types.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Self::Bool | Self::String)
    }
}

/// Storage type behind every enum.
pub const ENUM_STORAGE: ScalarType = ScalarType::Int;

/// Kind of a type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Built-in scalar.
    Scalar(ScalarType),
    /// Enum identified by name, stored as [`ENUM_STORAGE`].
    Enum(String),
    /// Fixed-size array, `T[]`.
    Array(Box<TypeDescriptor>),
    /// Growable list, `List<T>`.
    List(Box<TypeDescriptor>),
    /// String-keyed dictionary, `Dictionary<K, V>`.
    Dictionary {
        /// Declared key type.
        key: Box<TypeDescriptor>,
        /// Value type.
        value: Box<TypeDescriptor>,
    },
    /// User-defined composite type.
    Composite(String),
}

/// Structured form of a type string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    /// Whether the type carries the nullable wrapper (`T?`).
    pub nullable: bool,
    /// The wrapped kind.
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Creates a non-nullable descriptor.
    #[must_use]
    pub const fn new(kind: TypeKind) -> Self {
        Self {
            nullable: false,
            kind,
        }
    }

    /// Creates a non-nullable scalar descriptor.
    #[must_use]
    pub const fn scalar(scalar: ScalarType) -> Self {
        Self::new(TypeKind::Scalar(scalar))
    }

    /// Returns a copy of this descriptor with the nullable wrapper removed.
    #[must_use]
    pub fn inner(&self) -> Self {
        Self {
            nullable: false,
            kind: self.kind.clone(),
        }
    }

    /// Returns true if this kind gets a shared conversion procedure.
    ///
    /// Everything except composite references qualifies. The nullable flag
    /// is not considered.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        !matches!(self.kind, TypeKind::Composite(_))
    }

    /// Normalized schema spelling, e.g. `enum Color` or `Dictionary<string, int>`.
    ///
    /// Two type strings that differ only in whitespace share one canonical form.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.render(true)
    }

    /// Spelling in generated code. Enums render as their bare identifier.
    #[must_use]
    pub fn cs_type(&self) -> String {
        self.render(false)
    }

    fn render(&self, schema_form: bool) -> String {
        let mut out = match &self.kind {
            TypeKind::Scalar(scalar) => scalar.name().to_string(),
            TypeKind::Enum(name) if schema_form => format!("enum {name}"),
            TypeKind::Enum(name) | TypeKind::Composite(name) => name.clone(),
            TypeKind::Array(elem) => format!("{}[]", elem.render(schema_form)),
            TypeKind::List(elem) => format!("List<{}>", elem.render(schema_form)),
            TypeKind::Dictionary { key, value } => format!(
                "Dictionary<{}, {}>",
                key.render(schema_form),
                value.render(schema_form)
            ),
        };
        if self.nullable {
            out.push('?');
        }
        out
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
