//! Code emission toolkit.
//!
//! Generators build a [`Unit`] out of [`Method`]s and [`Stmt`]s, then hand it
//! to [`render`]. The toolkit knows nothing about schemas or JSON.

pub mod ast;
pub mod printer;

pub use ast::{Declare, If, Method, Stmt, Unit};
pub use printer::{INDENT, Printer, render};
