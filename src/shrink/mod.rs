//! Column-wise storage narrowing
//!
//! The one operation this crate exists for: walk a table's columns and
//! rewrite each one to the narrowest storage kind that still holds its
//! observed values exactly.

pub mod categorical;
pub mod narrow;

pub use narrow::{narrow, narrow_with, NarrowOptions};

use thiserror::Error;

/// Failures surfaced by the narrowing entry points.
///
/// The narrowing rules themselves never fail (a column that cannot narrow is
/// simply left alone); the only error is the up-front precondition check on
/// table shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShrinkError {
    #[error("column `{column}` has {len} rows, expected {expected}")]
    InvalidTableShape {
        column: String,
        len: usize,
        expected: usize,
    },
}
