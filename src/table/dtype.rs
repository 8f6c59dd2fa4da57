//! Storage-kind tags for columns
//!
//! A `DType` names the physical representation of a column's values,
//! independent of its logical meaning. Narrowing replaces one tag with a
//! smaller-width tag; it never crosses a logical-kind boundary.

/// Physical storage kind of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 64-bit signed integer (the only logical-integer input kind)
    I64,
    I32,
    I16,
    I8,
    U32,
    U16,
    U8,
    /// 64-bit float with embedded NaN for missing values
    F64,
    F32,
    /// Free-form owned strings
    Str,
    /// Dictionary-encoded strings (distinct-value dictionary + u32 codes)
    Categorical,
    Bool,
    /// Days since epoch (1970-01-01) as i32
    Date,
    /// Nanoseconds since epoch as i64
    Timestamp,
}

impl DType {
    /// Fixed per-value storage width in bytes.
    ///
    /// Variable-width kinds (`Str`) report the width of their per-row
    /// handle; `Categorical` reports the per-row code width. This is the
    /// quantity the monotonic-size guarantee is stated against: narrowing
    /// never increases it.
    pub fn value_width(&self) -> usize {
        match self {
            DType::I64 | DType::F64 | DType::Timestamp => 8,
            DType::I32 | DType::U32 | DType::F32 | DType::Date => 4,
            DType::I16 | DType::U16 => 2,
            DType::I8 | DType::U8 | DType::Bool => 1,
            // Vec<String> stores a (ptr, cap, len) handle per row
            DType::Str => std::mem::size_of::<String>(),
            DType::Categorical => 4,
        }
    }
}
