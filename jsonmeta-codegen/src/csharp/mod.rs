//! C# conversion code generation.
//!
//! Both directions share one two-pass algorithm, see [`ConversionPass`]:
//! one procedure per composite type, then one shared procedure per slave
//! type collected along the way.

pub mod from_json;
pub mod slaves;
pub mod to_json;

pub use from_json::FromJsonGenerator;
pub use slaves::SlaveSet;
pub use to_json::ToJsonGenerator;

use crate::emit::Method;
use jsonmeta_schema::{CompositeDef, Result, ScalarType, Schema, TypeDescriptor};

/// Runtime JSON value type of the generated code.
pub(crate) const JSON_TYPE: &str = "JSONType";

/// Object representation inside [`JSON_TYPE`].
pub(crate) const JSON_OBJECT: &str = "Dictionary<string, JSONType>";

/// Array representation inside [`JSON_TYPE`].
pub(crate) const JSON_ARRAY: &str = "List<JSONType>";

/// Modifiers shared by every generated method.
pub(crate) const METHOD_MODIFIERS: &str = "public static";

/// One direction of conversion.
pub trait ConversionPass {
    /// Schema being generated.
    fn schema(&self) -> &Schema;

    /// Builds the procedure for one composite type.
    ///
    /// # Errors
    /// Returns `MetaError` if a field cannot be converted.
    fn composite_method(&self, composite: &CompositeDef) -> Result<Method>;

    /// Builds the shared procedure for one slave type.
    ///
    /// # Errors
    /// Returns `MetaError::UnsupportedPrimitive` for types with no conversion rule.
    fn slave_method(&self, slave: &TypeDescriptor) -> Result<Method>;

    /// Builds every procedure: composites in declaration order, then slaves.
    ///
    /// # Errors
    /// Returns the first `MetaError` encountered; no methods are returned then.
    fn methods(&self) -> Result<Vec<Method>> {
        let schema = self.schema();
        let mut slaves = SlaveSet::new();
        for forced in &schema.slaves {
            slaves.insert(forced)?;
        }

        let mut methods = Vec::with_capacity(schema.types.len());
        for composite in schema.composites() {
            for field in &composite.fields {
                slaves.track_field(&field.ty)?;
            }
            methods.push(self.composite_method(composite)?);
            tracing::trace!(type_name = %composite.name, "composite procedure built");
        }

        tracing::debug!(count = slaves.len(), "slave types collected");

        for slave in slaves.iter() {
            methods.push(self.slave_method(slave)?);
            tracing::trace!(slave = %slave, "slave procedure built");
        }

        Ok(methods)
    }
}

/// Spells `new T[count]` for an array whose element type is `elem`.
///
/// Jagged arrays place the count before the element's own rank suffixes:
/// an `int[]` element gives `new int[count][]`.
pub(crate) fn array_allocation(elem: &str, count: &str) -> String {
    let mut base = elem;
    let mut ranks = 0;
    while let Some(stripped) = base.strip_suffix("[]") {
        base = stripped;
        ranks += 1;
    }
    format!("new {base}[{count}]{}", "[]".repeat(ranks))
}

/// Format string passed to `ToString` for a numeric type, if any.
///
/// Binary floating point uses the round-trip format so the emitted text
/// parses back to the same value.
pub(crate) const fn number_format(scalar: ScalarType) -> Option<&'static str> {
    match scalar {
        ScalarType::Float | ScalarType::Double => Some("\"R\""),
        _ => None,
    }
}
