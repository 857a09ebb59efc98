//! Schema reader.
//!
//! Interprets the top-level JSON value of a schema document:
//!
//! ```json
//! {
//!     "__slaves": ["long"],
//!     "Person": { "name": "string", "age": "int?", "job": "Job" },
//!     "Job": { "__is_ref": true, "title": "string" }
//! }
//! ```

use crate::error::{MetaError, Result};
use crate::parser::parse_type;
use crate::schema::{CompositeDef, DIRECTIVE_PREFIX, FieldDef, IS_REF_KEY, SLAVES_KEY, Schema};
use crate::types::TypeDescriptor;
use serde_json::{Map, Value};

/// Reads a schema from a parsed JSON value.
///
/// # Arguments
/// * `root` - Parsed schema document
///
/// # Returns
/// The validated schema, with types and fields in document order.
///
/// # Errors
/// Returns the first `MetaError` found while walking the document.
pub fn read_schema(root: &Value) -> Result<Schema> {
    let Some(entries) = root.as_object() else {
        return Err(MetaError::RootIsNotObject);
    };

    let mut schema = Schema::new();

    for (type_name, description) in entries {
        if type_name == SLAVES_KEY {
            schema.slaves.extend(read_slaves(description)?);
            continue;
        }

        let Some(description) = description.as_object() else {
            return Err(MetaError::DescriptionIsNotObject {
                type_name: type_name.clone(),
            });
        };

        schema.add_type(read_composite(type_name, description)?);
    }

    tracing::debug!(
        types = schema.types.len(),
        slaves = schema.slaves.len(),
        "schema read"
    );

    Ok(schema)
}

/// Reads one composite type description.
fn read_composite(type_name: &str, description: &Map<String, Value>) -> Result<CompositeDef> {
    let mut composite = CompositeDef::new(type_name);

    if let Some(marker) = description.get(IS_REF_KEY) {
        if !marker.is_boolean() {
            return Err(MetaError::IsRefMustBeBool {
                type_name: type_name.to_string(),
            });
        }
        composite.is_ref = true;
    }

    for (field, type_json) in description {
        if field.starts_with(DIRECTIVE_PREFIX) {
            continue;
        }

        let Some(type_str) = type_json.as_str() else {
            return Err(MetaError::FieldTypeIsNotString {
                type_name: type_name.to_string(),
                field: field.clone(),
            });
        };

        composite.add_field(FieldDef::new(field.clone(), parse_type(type_str)?));
    }

    Ok(composite)
}

/// Reads the `__slaves` directive.
fn read_slaves(value: &Value) -> Result<Vec<TypeDescriptor>> {
    let Some(entries) = value.as_array() else {
        return Err(MetaError::SlaveInfoMustBeArray);
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let type_str = entry
                .as_str()
                .ok_or(MetaError::SlaveMustBeString { index })?;
            let desc = parse_type(type_str)?;
            if !desc.is_primitive() {
                return Err(MetaError::SlaveMustBePrimitive {
                    type_str: type_str.to_string(),
                });
            }
            if desc.nullable {
                return Err(MetaError::unsupported(type_str));
            }
            Ok(desc)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ScalarType, TypeKind};
    use serde_json::json;

    #[test]
    fn test_read_person() {
        let schema = read_schema(&json!({
            "Person": { "name": "string", "age": "int" }
        }))
        .expect("Failed to read");

        let person = schema.get_type("Person").expect("Person missing");
        assert!(!person.is_ref);
        assert_eq!(person.fields.len(), 2);
        assert_eq!(person.fields[0].name, "name");
        assert_eq!(person.fields[0].ty, TypeDescriptor::scalar(ScalarType::String));
        assert_eq!(person.fields[1].name, "age");
        assert_eq!(person.fields[1].ty, TypeDescriptor::scalar(ScalarType::Int));
    }

    #[test]
    fn test_read_preserves_declaration_order() {
        let schema = read_schema(&json!({
            "Zeta": { "z": "int", "a": "int" },
            "Alpha": {}
        }))
        .unwrap();

        let names: Vec<_> = schema.composites().map(|c| c.name.clone()).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
        let fields: Vec<_> = schema.types["Zeta"]
            .fields
            .iter()
            .map(|f| f.name.clone())
            .collect();
        assert_eq!(fields, ["z", "a"]);
    }

    #[test]
    fn test_read_skips_directive_fields() {
        let schema = read_schema(&json!({
            "Job": { "__is_ref": true, "__comment": 5, "title": "string" }
        }))
        .unwrap();

        let job = &schema.types["Job"];
        assert!(job.is_ref);
        assert_eq!(job.fields.len(), 1);
        assert_eq!(job.fields[0].name, "title");
    }

    #[test]
    fn test_read_is_ref_false_still_marks() {
        let schema = read_schema(&json!({ "Job": { "__is_ref": false } })).unwrap();
        assert!(schema.types["Job"].is_ref);
    }

    #[test]
    fn test_read_is_ref_must_be_bool() {
        let err = read_schema(&json!({ "Job": { "__is_ref": 1 } })).unwrap_err();
        assert_eq!(
            err,
            MetaError::IsRefMustBeBool {
                type_name: "Job".to_string()
            }
        );
    }

    #[test]
    fn test_read_root_not_object() {
        assert_eq!(
            read_schema(&json!([1, 2])).unwrap_err(),
            MetaError::RootIsNotObject
        );
        assert_eq!(
            read_schema(&json!("Person")).unwrap_err(),
            MetaError::RootIsNotObject
        );
    }

    #[test]
    fn test_read_description_not_object() {
        let err = read_schema(&json!({ "Person": "string" })).unwrap_err();
        assert_eq!(err.kind_name(), "DescriptionIsNotObject");
    }

    #[test]
    fn test_read_field_type_not_string() {
        let err = read_schema(&json!({ "Person": { "age": 42 } })).unwrap_err();
        assert_eq!(
            err,
            MetaError::FieldTypeIsNotString {
                type_name: "Person".to_string(),
                field: "age".to_string()
            }
        );
    }

    #[test]
    fn test_read_field_type_error_propagates() {
        let err = read_schema(&json!({ "Person": { "tags": "Dictionary<string>" } }))
            .unwrap_err();
        assert_eq!(err.kind_name(), "MissingCommaInDictionary");
    }

    #[test]
    fn test_read_slaves() {
        let schema = read_schema(&json!({
            "__slaves": ["long", "List<string>", "enum Color"]
        }))
        .unwrap();

        assert!(schema.types.is_empty());
        assert_eq!(schema.slaves.len(), 3);
        assert_eq!(schema.slaves[0], TypeDescriptor::scalar(ScalarType::Long));
        assert_eq!(
            schema.slaves[2].kind,
            TypeKind::Enum("Color".to_string())
        );
    }

    #[test]
    fn test_read_slaves_must_be_array() {
        let err = read_schema(&json!({ "__slaves": "int" })).unwrap_err();
        assert_eq!(err, MetaError::SlaveInfoMustBeArray);

        let err = read_schema(&json!({ "__slaves": { "int": "int" } })).unwrap_err();
        assert_eq!(err, MetaError::SlaveInfoMustBeArray);
    }

    #[test]
    fn test_read_slave_must_be_string() {
        let err = read_schema(&json!({ "__slaves": ["int", 5] })).unwrap_err();
        assert_eq!(err, MetaError::SlaveMustBeString { index: 1 });
    }

    #[test]
    fn test_read_slave_must_be_primitive() {
        let err = read_schema(&json!({ "__slaves": ["int", "bool", "NotAType"] })).unwrap_err();
        assert_eq!(
            err,
            MetaError::SlaveMustBePrimitive {
                type_str: "NotAType".to_string()
            }
        );
    }

    #[test]
    fn test_read_nullable_slave_unsupported() {
        let err = read_schema(&json!({ "__slaves": ["int?"] })).unwrap_err();
        assert_eq!(err.kind_name(), "UnsupportedPrimitive");
    }

    #[test]
    fn test_read_first_error_wins() {
        let err = read_schema(&json!({
            "A": { "x": 1 },
            "B": "nope"
        }))
        .unwrap_err();
        assert_eq!(err.kind_name(), "FieldTypeIsNotString");
    }
}
