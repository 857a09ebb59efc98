//! # jsonmeta Bench
//!
//! Schema fixtures shared by the jsonmeta benchmarks.

use serde_json::{Map, Value, json};

/// Type strings covering every classification rule.
pub const TYPE_STRINGS: [&str; 10] = [
    "int",
    "string?",
    "double",
    "enum Color",
    "int[]",
    "int[][]",
    "List<Job>",
    "List<string>?",
    "Dictionary<string, double>",
    "Dictionary< string , List<int> >",
];

/// Builds a schema with `types` composite types.
///
/// Every type mixes scalars, nullables, collections and an enum, and all
/// but the last reference the next one, so the slave set stays small while
/// the composite pass grows linearly.
#[must_use]
pub fn sample_schema(types: usize) -> Value {
    let mut root = Map::new();
    for index in 0..types {
        let mut fields = json!({
            "id": "long",
            "name": "string",
            "score": "double?",
            "tags": "List<string>",
            "grid": "int[][]",
            "metrics": "Dictionary<string, decimal>",
            "color": "enum Color",
        });
        if index + 1 < types {
            fields["next"] = Value::String(format!("Type{}", index + 1));
        }
        if index % 2 == 0 {
            fields["__is_ref"] = Value::Bool(true);
        }
        root.insert(format!("Type{index}"), fields);
    }
    Value::Object(root)
}
