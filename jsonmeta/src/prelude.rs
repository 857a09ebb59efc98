//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use jsonmeta::prelude::*;
//! ```

// Schema types
pub use jsonmeta_schema::{
    CompositeDef, FieldDef, MetaError, ScalarType, Schema, TypeDescriptor, TypeKind, parse_type,
    read_schema,
};

// Generation
pub use jsonmeta_codegen::{
    CodegenError, Direction, GenerateOptions, Generator, generate, generate_from_file,
    generate_from_str,
};
