//! The single-column sort stage.
//!
//! Rows are compared by one field at a time. When both cell values
//! parse as numbers they compare numerically, otherwise they compare as
//! case-insensitive text; rows missing the field sort after rows that
//! have it. Descending order is the exact mirror of ascending. The
//! table sorts with `sort_by`, which is stable, so rows that compare
//! equal keep their relative order and repeated sorts do not shuffle
//! row identity under the selection set.

use super::types::{SortColumn, SortDirection, TableRow};
use std::cmp::Ordering;

/// Compares two rows under the given sort column.
pub(super) fn compare_rows<R: TableRow>(a: &R, b: &R, sort: &SortColumn) -> Ordering {
    let result = match (a.field(&sort.field), b.field(&sort.field)) {
        (Some(a), Some(b)) => compare_values(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    match sort.direction {
        SortDirection::Ascending => result,
        SortDirection::Descending => result.reverse(),
    }
}

fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(a), Ok(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}
