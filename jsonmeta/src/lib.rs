//! # jsonmeta
//!
//! Schema-driven generator of C# JSON conversion code.
//!
//! A schema is a JSON object mapping type names to field maps, each field
//! tagged by a type string (`int`, `string?`, `List<Job>`,
//! `Dictionary<string, double>`, `enum Color`, or another declared type).
//! From it jsonmeta emits one static class of `FromJSON` (JSON → typed) or
//! `ToJSON` (typed → JSON) extension methods.
//!
//! ## Features
//!
//! - **Type-string classification** - Recursive parser into a typed descriptor
//! - **Two conversion passes** - One procedure per composite type
//! - **Slave-type closure** - Shared primitive procedures emitted exactly once
//! - **Deterministic output** - Same schema and options give the same text
//!
//! ## Quick Start
//!
//! ```ignore
//! use jsonmeta::prelude::*;
//!
//! let schema = serde_json::json!({
//!     "Person": { "name": "string", "age": "int?" }
//! });
//! let options = GenerateOptions::new("app.models").using("jonson");
//! let code = generate(&schema, Direction::FromJson, &options)?;
//! println!("{code}");
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Error model, type descriptors, type parser and schema reader
//! - [`codegen`] - Emission toolkit, conversion passes and entry points

pub mod prelude;

/// Error model, type descriptors and schema reading.
pub mod schema {
    pub use jsonmeta_schema::*;
}

/// C# code generation from schemas.
pub mod codegen {
    pub use jsonmeta_codegen::*;
}

// Re-export commonly used items at the crate root
pub use jsonmeta_codegen::{
    CodegenError, Direction, GenerateOptions, Generator, generate, generate_from_file,
    generate_from_json, generate_from_str, generate_to_json,
};
pub use jsonmeta_schema::{MetaError, Schema, TypeDescriptor, parse_type, read_schema};
