//! Slave type accumulation.
//!
//! A slave type is a primitive, collection or enum type that receives one
//! shared conversion procedure. The set is closed under dependency: a
//! collection pulls in its element type, an enum pulls in its storage type.

use jsonmeta_schema::{ENUM_STORAGE, MetaError, Result, TypeDescriptor, TypeKind};
use std::collections::{BTreeMap, BTreeSet};

/// Call-scoped set of slave types, ordered by canonical spelling.
#[derive(Debug, Clone, Default)]
pub struct SlaveSet {
    types: BTreeMap<String, TypeDescriptor>,
    /// Target spellings in use. Overloads are keyed by the target spelling,
    /// so each one belongs to exactly one slave.
    spellings: BTreeSet<String>,
}

impl SlaveSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the slave types needed by a field of the given type.
    ///
    /// The nullable wrapper of the field itself is handled inline by the
    /// composite procedure, so only the inner type is tracked.
    ///
    /// # Errors
    /// Returns `MetaError::UnsupportedPrimitive` for nullable collection elements.
    pub fn track_field(&mut self, ty: &TypeDescriptor) -> Result<()> {
        self.insert(&ty.inner())
    }

    /// Adds a type and everything its procedure depends on.
    ///
    /// Composite types are not slaves and are ignored.
    ///
    /// # Errors
    /// Returns `MetaError::UnsupportedPrimitive` if the type, or an element
    /// it depends on, is nullable, or if its target spelling is already
    /// taken by a different slave (`Color[]` and `enum Color[]`).
    pub fn insert(&mut self, ty: &TypeDescriptor) -> Result<()> {
        if ty.nullable {
            return Err(MetaError::unsupported(ty.canonical()));
        }
        if !ty.is_primitive() {
            return Ok(());
        }

        let key = ty.canonical();
        if self.types.contains_key(&key) {
            return Ok(());
        }
        let spelling = ty.cs_type();
        if !self.spellings.insert(spelling) {
            return Err(MetaError::unsupported(key));
        }
        self.types.insert(key, ty.clone());

        match &ty.kind {
            TypeKind::Enum(_) => self.insert(&TypeDescriptor::scalar(ENUM_STORAGE)),
            TypeKind::Array(elem) | TypeKind::List(elem) => self.insert(elem),
            TypeKind::Dictionary { value, .. } => self.insert(value),
            TypeKind::Scalar(_) | TypeKind::Composite(_) => Ok(()),
        }
    }

    /// Returns true if the canonical type string is present.
    #[must_use]
    pub fn contains(&self, canonical: &str) -> bool {
        self.types.contains_key(canonical)
    }

    /// Number of slave types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no slave type was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates slave types in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }
}
