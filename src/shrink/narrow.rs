//! Type-narrowing ladders and the per-column narrowing pass
//!
//! Each column is visited independently: classify by storage kind, scan its
//! value range, then pick the first fit from a fixed ladder of candidate
//! widths. Ladders are scanned narrowest-first, so the first qualifying
//! entry is the narrowest safe representation.
//!
//! Boundary comparisons are strict (`<` / `>` against a candidate's extreme
//! values), and unsigned narrowing tops out at 32 bits. Both quirks are kept
//! for compatibility with the reductions this ladder was lifted from; a
//! value exactly equal to a type's max promotes to the next rung.

use tracing::debug;

use crate::table::{Column, DType, Table};

use super::categorical;
use super::ShrinkError;

/// Narrowing configuration.
///
/// `text_to_categorical` additionally considers `Str` columns for
/// dictionary encoding. Off by default; numeric narrowing always runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NarrowOptions {
    pub text_to_categorical: bool,
}

/// Unsigned candidate ladder, narrowest first.
///
/// A nonnegative column qualifies for the first entry whose bound strictly
/// exceeds its max. There is deliberately no 64-bit rung.
const UNSIGNED_LADDER: [(i64, DType); 3] = [
    (u8::MAX as i64, DType::U8),
    (u16::MAX as i64, DType::U16),
    (u32::MAX as i64, DType::U32),
];

/// Signed candidate ladder, narrowest first: (lower bound, upper bound, kind).
///
/// A column qualifies when its min is strictly above the lower bound and its
/// max strictly below the upper bound.
const SIGNED_LADDER: [(i64, i64, DType); 3] = [
    (i8::MIN as i64, i8::MAX as i64, DType::I8),
    (i16::MIN as i64, i16::MAX as i64, DType::I16),
    (i32::MIN as i64, i32::MAX as i64, DType::I32),
];

fn pick_unsigned(max: i64) -> Option<DType> {
    UNSIGNED_LADDER
        .iter()
        .find(|(bound, _)| max < *bound)
        .map(|&(_, kind)| kind)
}

fn pick_signed(min: i64, max: i64) -> Option<DType> {
    SIGNED_LADDER
        .iter()
        .find(|(lo, hi, _)| min > *lo && max < *hi)
        .map(|&(_, _, kind)| kind)
}

/// Narrow an i64 column to the smallest integer kind that holds its range.
///
/// Empty columns have no range and pass through. A column that fits no rung
/// (e.g. max at or above u32::MAX) keeps its original width.
fn narrow_i64(data: Vec<i64>) -> Column {
    let (Some(&min), Some(&max)) = (data.iter().min(), data.iter().max()) else {
        return Column::I64(data);
    };

    let target = if min >= 0 {
        pick_unsigned(max)
    } else {
        pick_signed(min, max)
    };

    // Casts below are exact: the ladder check proved every value fits.
    match target {
        Some(DType::U8) => Column::U8(data.into_iter().map(|v| v as u8).collect()),
        Some(DType::U16) => Column::U16(data.into_iter().map(|v| v as u16).collect()),
        Some(DType::U32) => Column::U32(data.into_iter().map(|v| v as u32).collect()),
        Some(DType::I8) => Column::I8(data.into_iter().map(|v| v as i8).collect()),
        Some(DType::I16) => Column::I16(data.into_iter().map(|v| v as i16).collect()),
        Some(DType::I32) => Column::I32(data.into_iter().map(|v| v as i32).collect()),
        _ => Column::I64(data),
    }
}

/// Narrow an f64 column to f32 when that is exact.
///
/// NaN is the embedded null and is skipped by the range scan; an empty or
/// all-NaN column passes through. Two conditions gate the rewrite: the
/// observed range must sit strictly inside the f32 range (so infinities pin
/// a column at 64 bits), and every value must survive an f32 round trip
/// unchanged, which keeps the no-precision-loss guarantee that a bare range
/// check would not.
fn narrow_f64(data: Vec<f64>) -> Column {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut exact = true;
    let mut seen = false;

    for &v in &data {
        if v.is_nan() {
            continue;
        }
        seen = true;
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
        if (v as f32) as f64 != v {
            exact = false;
        }
    }

    if seen && exact && min > f32::MIN as f64 && max < f32::MAX as f64 {
        Column::F32(data.into_iter().map(|v| v as f32).collect())
    } else {
        Column::F64(data)
    }
}

fn narrow_column(col: Column, opts: &NarrowOptions) -> Column {
    match col {
        Column::I64(data) => narrow_i64(data),
        Column::F64(data) => narrow_f64(data),
        Column::Str(data) if opts.text_to_categorical => categorical::maybe_encode(data),
        // Already-narrow kinds and non-numeric kinds pass through, which is
        // also what makes the whole operation idempotent.
        other => other,
    }
}

fn validate_shape(table: &Table) -> Result<(), ShrinkError> {
    let expected = table.row_count();
    for (name, col) in table.names.iter().zip(table.columns.iter()) {
        if col.len() != expected {
            return Err(ShrinkError::InvalidTableShape {
                column: name.clone(),
                len: col.len(),
                expected,
            });
        }
    }
    Ok(())
}

/// Narrow every column of `table` with default options (numeric narrowing
/// only, text left alone).
pub fn narrow(table: Table) -> Result<Table, ShrinkError> {
    narrow_with(table, &NarrowOptions::default())
}

/// Narrow every column of `table`.
///
/// Columns are independent; each is rewritten to the narrowest storage kind
/// that decodes to identical values, or moved through untouched. Row count,
/// column order and column names are preserved. Fails only on ragged input,
/// before any column is touched.
pub fn narrow_with(table: Table, opts: &NarrowOptions) -> Result<Table, ShrinkError> {
    validate_shape(&table)?;

    let Table { names, columns } = table;
    let mut narrowed = Vec::with_capacity(columns.len());

    for (name, col) in names.iter().zip(columns) {
        let before = col.dtype();
        let col = narrow_column(col, opts);
        let after = col.dtype();
        if after != before {
            debug!(column = %name, ?before, ?after, "narrowed column storage");
        }
        narrowed.push(col);
    }

    Ok(Table {
        names,
        columns: narrowed,
    })
}
