//! Core table and column types

pub mod column;
pub mod dtype;

pub use column::{Column, Value};
pub use dtype::DType;

/// A table is a collection of named, typed columns
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub names: Vec<String>,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(names: Vec<String>, columns: Vec<Column>) -> Self {
        assert_eq!(names.len(), columns.len());
        Self { names, columns }
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_and_col_counts() {
        let t = Table::new(
            vec!["a".to_string(), "b".to_string()],
            vec![Column::I64(vec![1, 2, 3]), Column::F64(vec![0.5, 1.5, 2.5])],
        );
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.col_count(), 2);
    }

    #[test]
    fn test_column_lookup() {
        let t = Table::new(
            vec!["px".to_string()],
            vec![Column::F64(vec![101.5])],
        );
        assert!(t.column("px").is_some());
        assert!(t.column("qty").is_none());
    }

    #[test]
    fn test_empty_table_has_zero_rows() {
        let t = Table::new(vec![], vec![]);
        assert_eq!(t.row_count(), 0);
        assert_eq!(t.col_count(), 0);
    }
}
