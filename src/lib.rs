//! slimtab: lossless storage narrowing for in-memory columnar tables
//!
//! Walks a table's columns and rewrites each one to the narrowest storage
//! kind that still represents its observed values exactly: i64 down to the
//! smallest signed/unsigned width that fits the range, f64 down to f32 when
//! exact, and (optionally) low-cardinality text down to a dictionary
//! encoding. Everything else passes through untouched.

pub mod shrink;
pub mod table;

pub use shrink::{narrow, narrow_with, NarrowOptions, ShrinkError};
pub use table::{Column, DType, Table, Value};
