//! # jsonmeta Codegen
//!
//! C# JSON conversion code generation from jsonmeta schemas.
//!
//! This crate provides:
//! - A statement tree and depth-tracking printer for the generated text
//! - The `FromJSON` and `ToJSON` passes over a schema
//! - Shared slave-type procedures, emitted once per type
//! - String and file entry points

pub mod csharp;
pub mod emit;
pub mod error;
pub mod generator;
pub mod options;

pub use error::CodegenError;
pub use generator::{Direction, Generator};
pub use options::{BASE_USINGS, DEFAULT_NAMESPACE, GenerateOptions};

use jsonmeta_schema::MetaError;
use serde_json::Value;

/// Generates one conversion class from a schema value.
///
/// # Arguments
/// * `schema` - Parsed schema JSON
/// * `direction` - Which conversion to emit
/// * `options` - Namespace, imports and class name
///
/// # Returns
/// Generated C# code as a string.
///
/// # Errors
/// Returns the first `MetaError` found; no partial output is produced.
pub fn generate(
    schema: &Value,
    direction: Direction,
    options: &GenerateOptions,
) -> Result<String, MetaError> {
    let schema = jsonmeta_schema::read_schema(schema)?;
    Generator::new(&schema, options).generate(direction)
}

/// Generates the `FromJSON` class for a schema value.
///
/// # Errors
/// See [`generate`].
pub fn generate_from_json(schema: &Value, options: &GenerateOptions) -> Result<String, MetaError> {
    generate(schema, Direction::FromJson, options)
}

/// Generates the `ToJSON` class for a schema value.
///
/// # Errors
/// See [`generate`].
pub fn generate_to_json(schema: &Value, options: &GenerateOptions) -> Result<String, MetaError> {
    generate(schema, Direction::ToJson, options)
}

/// Generates C# code from schema JSON text.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_str(
    json: &str,
    direction: Direction,
    options: &GenerateOptions,
) -> Result<String, CodegenError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(generate(&value, direction, options)?)
}

/// Generates C# code from a schema file.
///
/// # Arguments
/// * `path` - Path to the schema JSON file
/// * `direction` - Which conversion to emit
/// * `options` - Namespace, imports and class name
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    direction: Direction,
    options: &GenerateOptions,
) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_str(&json, direction, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    const PERSON: &str = r#"{
        "Person": { "name": "string", "tags": "List<string>", "job": "Job?" },
        "Job": { "__is_ref": true, "title": "string" }
    }"#;

    #[test]
    fn test_generate_both_directions() {
        let schema: Value = serde_json::from_str(PERSON).unwrap();
        let options = GenerateOptions::default();

        let from = generate_from_json(&schema, &options).unwrap();
        assert!(from.contains("namespace jonson.autogen {"));
        assert!(from.contains("public static class FromJSONExtensions {"));
        assert!(from.contains("ref List<string> val)"));

        let to = generate_to_json(&schema, &options).unwrap();
        assert!(to.contains("public static class ToJSONExtensions {"));
        assert!(to.contains("root[\"job\"] = val.job.ToJSON();"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let schema: Value = serde_json::from_str(PERSON).unwrap();
        let options = GenerateOptions::new("app").using("jonson");
        let first = generate(&schema, Direction::ToJson, &options).unwrap();
        let second = generate(&schema, Direction::ToJson, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_rejects_non_object() {
        let err = generate(&json!([1, 2]), Direction::FromJson, &GenerateOptions::default())
            .unwrap_err();
        assert_eq!(err, MetaError::RootIsNotObject);
    }

    #[test]
    fn test_generate_from_str_errors() {
        let options = GenerateOptions::default();
        let err = generate_from_str("{ not json", Direction::FromJson, &options).unwrap_err();
        assert!(matches!(err, CodegenError::Json(_)));

        let err = generate_from_str(r#"{"A": 5}"#, Direction::FromJson, &options).unwrap_err();
        assert_eq!(
            err.as_meta().map(MetaError::kind_name),
            Some("DescriptionIsNotObject")
        );
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PERSON.as_bytes()).unwrap();

        let text = generate_from_file(file.path(), Direction::FromJson, &GenerateOptions::default())
            .unwrap();
        assert!(text.starts_with("using System.Collections.Generic;\n"));
        assert!(text.ends_with("    }\n}"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_from_file(
            &dir.path().join("missing.json"),
            Direction::FromJson,
            &GenerateOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
