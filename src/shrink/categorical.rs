//! Dictionary encoding for low-cardinality text columns
//!
//! A text column with few distinct values is rewritten as a dictionary of
//! the distinct strings plus a u32 code per row. Decoding a code through the
//! dictionary reproduces the original sequence exactly.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::table::Column;

/// Number of distinct values in a text column.
pub fn distinct_count(values: &[String]) -> usize {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for v in values {
        seen.insert(v.as_str());
    }
    seen.len()
}

/// Re-encode a text column as `Categorical` if its cardinality is strictly
/// below half the row count; otherwise hand the column back unchanged.
///
/// Two passes: one to count distinct values, one to build the dictionary and
/// codes. The dictionary is ordered by first appearance.
pub fn maybe_encode(values: Vec<String>) -> Column {
    // Strict threshold: distinct < rows / 2. An empty column never passes.
    if 2 * distinct_count(&values) < values.len() {
        encode(values)
    } else {
        Column::Str(values)
    }
}

fn encode(values: Vec<String>) -> Column {
    let mut codes = Vec::with_capacity(values.len());
    let mut dict: Vec<String> = Vec::new();
    let mut index: FxHashMap<String, u32> = FxHashMap::default();

    for v in values {
        match index.get(&v) {
            Some(&code) => codes.push(code),
            None => {
                let code = dict.len() as u32;
                index.insert(v.clone(), code);
                dict.push(v);
                codes.push(code);
            }
        }
    }

    Column::Categorical { dict, codes }
}
