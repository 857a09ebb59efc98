//! Prints both conversion classes for a small schema.
//!
//! Run with: cargo run --example person

use jsonmeta::prelude::*;
use serde_json::json;

fn main() -> Result<(), MetaError> {
    tracing_subscriber::fmt()
        .with_env_filter("jsonmeta_codegen=debug")
        .with_writer(std::io::stderr)
        .init();

    let schema = json!({
        "Person": {
            "name": "string",
            "age": "int?",
            "tags": "List<string>",
            "scores": "Dictionary<string, double>",
            "favorite": "enum Color",
            "job": "Job"
        },
        "Job": {
            "__is_ref": true,
            "title": "string",
            "grades": "int[][]"
        },
        "__slaves": ["long"]
    });

    let options = GenerateOptions::new("demo.models").using("jonson");

    println!("{}\n", generate(&schema, Direction::FromJson, &options)?);
    println!("{}", generate(&schema, Direction::ToJson, &options)?);

    Ok(())
}
