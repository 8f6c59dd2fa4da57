//! Typed column with embedded null sentinels (kdb-style)
//!
//! One enum variant per physical storage kind. Float columns embed NaN for
//! missing values instead of carrying a validity bitmap, which keeps range
//! scans pure and vectorizable. Narrowing swaps a column for another variant
//! of the same logical kind and a smaller width.

use super::dtype::DType;

/// A typed column of data.
///
/// Integer columns enter the system as `I64`; the narrower may rewrite them
/// to any of the narrower integer variants. Float columns enter as `F64` and
/// may narrow to `F32`. Text enters as `Str` and may be re-encoded as
/// `Categorical`. `Bool`, `Date` and `Timestamp` are carried through
/// untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    I64(Vec<i64>),
    I32(Vec<i32>),
    I16(Vec<i16>),
    I8(Vec<i8>),
    U32(Vec<u32>),
    U16(Vec<u16>),
    U8(Vec<u8>),
    /// F64 column: data with embedded NaN for missing values
    F64(Vec<f64>),
    F32(Vec<f32>),
    /// Free-form text column
    Str(Vec<String>),
    /// Dictionary-encoded text: per-row code into a dictionary of distinct
    /// values, dictionary ordered by first appearance
    Categorical { dict: Vec<String>, codes: Vec<u32> },
    Bool(Vec<bool>),
    /// Date column: days since epoch (1970-01-01) as i32
    Date(Vec<i32>),
    /// Timestamp column: nanoseconds since epoch as i64
    Timestamp(Vec<i64>),
}

/// A single decoded cell, used to state value preservation across storage
/// kinds: two columns are value-equal when every row decodes to the same
/// `Value`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    Int(i64),
    Float(f64),
    Str(&'a str),
    Bool(bool),
    Date(i32),
    Timestamp(i64),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::I64(d) => d.len(),
            Column::I32(d) => d.len(),
            Column::I16(d) => d.len(),
            Column::I8(d) => d.len(),
            Column::U32(d) => d.len(),
            Column::U16(d) => d.len(),
            Column::U8(d) => d.len(),
            Column::F64(d) => d.len(),
            Column::F32(d) => d.len(),
            Column::Str(d) => d.len(),
            Column::Categorical { codes, .. } => codes.len(),
            Column::Bool(d) => d.len(),
            Column::Date(d) => d.len(),
            Column::Timestamp(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current storage kind tag.
    pub fn dtype(&self) -> DType {
        match self {
            Column::I64(_) => DType::I64,
            Column::I32(_) => DType::I32,
            Column::I16(_) => DType::I16,
            Column::I8(_) => DType::I8,
            Column::U32(_) => DType::U32,
            Column::U16(_) => DType::U16,
            Column::U8(_) => DType::U8,
            Column::F64(_) => DType::F64,
            Column::F32(_) => DType::F32,
            Column::Str(_) => DType::Str,
            Column::Categorical { .. } => DType::Categorical,
            Column::Bool(_) => DType::Bool,
            Column::Date(_) => DType::Date,
            Column::Timestamp(_) => DType::Timestamp,
        }
    }

    /// Decode the cell at row `i`.
    ///
    /// Every integer storage kind decodes to `Value::Int`, every float kind
    /// to `Value::Float` (f32 -> f64 widening is exact), and `Categorical`
    /// decodes through its dictionary. Panics on out-of-range `i`, like
    /// slice indexing.
    pub fn get(&self, i: usize) -> Value<'_> {
        match self {
            Column::I64(d) => Value::Int(d[i]),
            Column::I32(d) => Value::Int(d[i] as i64),
            Column::I16(d) => Value::Int(d[i] as i64),
            Column::I8(d) => Value::Int(d[i] as i64),
            Column::U32(d) => Value::Int(d[i] as i64),
            Column::U16(d) => Value::Int(d[i] as i64),
            Column::U8(d) => Value::Int(d[i] as i64),
            Column::F64(d) => Value::Float(d[i]),
            Column::F32(d) => Value::Float(d[i] as f64),
            Column::Str(d) => Value::Str(&d[i]),
            Column::Categorical { dict, codes } => Value::Str(&dict[codes[i] as usize]),
            Column::Bool(d) => Value::Bool(d[i]),
            Column::Date(d) => Value::Date(d[i]),
            Column::Timestamp(d) => Value::Timestamp(d[i]),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_dtype() {
        let col = Column::I64(vec![1, 2, 3]);
        assert_eq!(col.len(), 3);
        assert_eq!(col.dtype(), DType::I64);
        assert!(!col.is_empty());
    }

    #[test]
    fn test_get_decodes_across_widths() {
        assert_eq!(Column::I64(vec![42]).get(0), Value::Int(42));
        assert_eq!(Column::U8(vec![42]).get(0), Value::Int(42));
        assert_eq!(Column::I8(vec![-42]).get(0), Value::Int(-42));
        assert_eq!(Column::F32(vec![1.5]).get(0), Value::Float(1.5));
    }

    #[test]
    fn test_categorical_decodes_through_dict() {
        let col = Column::Categorical {
            dict: vec!["a".to_string(), "b".to_string()],
            codes: vec![0, 1, 0],
        };
        assert_eq!(col.len(), 3);
        assert_eq!(col.get(0), Value::Str("a"));
        assert_eq!(col.get(1), Value::Str("b"));
        assert_eq!(col.get(2), Value::Str("a"));
    }

}
