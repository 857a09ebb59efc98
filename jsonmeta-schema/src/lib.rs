//! # jsonmeta Schema
//!
//! Schema reading and type classification for the jsonmeta generator.
//!
//! This crate provides:
//! - The closed [`MetaError`] taxonomy
//! - [`TypeDescriptor`], the structured form of a field type string
//! - A recursive-descent parser for type strings
//! - A reader turning a JSON document into a validated [`Schema`]

pub mod error;
pub mod parser;
pub mod reader;
pub mod schema;
pub mod types;

pub use error::{MetaError, Result};
pub use parser::parse_type;
pub use reader::read_schema;
pub use schema::{CompositeDef, FieldDef, IS_REF_KEY, SLAVES_KEY, Schema};
pub use types::{ENUM_STORAGE, ScalarType, TypeDescriptor, TypeKind};
