//! Generation options.

use crate::generator::Direction;

/// Namespace used when none is given.
pub const DEFAULT_NAMESPACE: &str = "jonson.autogen";

/// Namespaces every generated unit imports before the user's own.
pub const BASE_USINGS: [&str; 2] = ["System.Collections.Generic", "System.Globalization"];

/// Options controlling the generated scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Namespace wrapping the generated class.
    pub namespace: String,
    /// Extra imported namespaces, in order, after [`BASE_USINGS`].
    pub usings: Vec<String>,
    /// Class name override. `None` picks the per-direction default.
    pub class_name: Option<String>,
}

impl GenerateOptions {
    /// Creates options for the given namespace.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            usings: Vec::new(),
            class_name: None,
        }
    }

    /// Adds an imported namespace.
    #[must_use]
    pub fn using(mut self, name: impl Into<String>) -> Self {
        self.usings.push(name.into());
        self
    }

    /// Adds several imported namespaces.
    #[must_use]
    pub fn usings<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.usings.extend(names.into_iter().map(Into::into));
        self
    }

    /// Overrides the generated class name.
    #[must_use]
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    /// Returns the full `using` list: base namespaces then the extra ones.
    #[must_use]
    pub fn all_usings(&self) -> Vec<String> {
        BASE_USINGS
            .iter()
            .map(ToString::to_string)
            .chain(self.usings.iter().cloned())
            .collect()
    }

    /// Returns the class name to emit for a direction.
    #[must_use]
    pub fn class_name_for(&self, direction: Direction) -> &str {
        self.class_name
            .as_deref()
            .unwrap_or_else(|| direction.default_class_name())
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
