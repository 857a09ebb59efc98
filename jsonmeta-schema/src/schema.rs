//! Schema model.
//!
//! A [`Schema`] is the validated form of the input JSON: composite types in
//! declaration order plus the types force-listed by the `__slaves` directive.

use crate::types::TypeDescriptor;
use indexmap::IndexMap;

/// Top-level key listing extra shared-procedure types.
pub const SLAVES_KEY: &str = "__slaves";

/// Per-type key marking reference semantics.
pub const IS_REF_KEY: &str = "__is_ref";

/// Prefix of reserved directive keys inside a type description.
pub const DIRECTIVE_PREFIX: &str = "__";

/// Validated schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Composite types keyed by name, in declaration order.
    pub types: IndexMap<String, CompositeDef>,
    /// Types listed under `__slaves`, in declaration order.
    pub slaves: Vec<TypeDescriptor>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a composite type, replacing any earlier one with the same name.
    pub fn add_type(&mut self, composite: CompositeDef) {
        self.types.insert(composite.name.clone(), composite);
    }

    /// Looks up a composite type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&CompositeDef> {
        self.types.get(name)
    }

    /// Iterates composite types in declaration order.
    pub fn composites(&self) -> impl Iterator<Item = &CompositeDef> {
        self.types.values()
    }
}

/// User-declared composite type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeDef {
    /// Type name as written in the schema.
    pub name: String,
    /// True when the description carries `__is_ref`.
    pub is_ref: bool,
    /// Non-directive fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl CompositeDef {
    /// Creates a composite with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_ref: false,
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }
}

/// A field of a composite type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name, used both as JSON key and member name.
    pub name: String,
    /// Parsed type.
    pub ty: TypeDescriptor,
}

impl FieldDef {
    /// Creates a field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScalarType;

    #[test]
    fn test_schema_type_lookup() {
        let mut schema = Schema::new();
        let mut person = CompositeDef::new("Person");
        person.add_field(FieldDef::new("age", TypeDescriptor::scalar(ScalarType::Int)));
        schema.add_type(person);
        schema.add_type(CompositeDef::new("Job"));

        assert!(schema.get_type("Person").is_some());
        assert!(schema.get_type("Missing").is_none());
        let names: Vec<_> = schema.composites().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Person", "Job"]);
    }
}
