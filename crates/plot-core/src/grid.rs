// File: crates/plot-core/src/grid.rs
// Summary: Integer tick enumeration for grid lines and axis labels.

use crate::types::MAX_GRID_LINES;

// 2^63: the first f64 past i64::MAX; -2^63 is i64::MIN exactly.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Integers strictly between `min` and `max`. Empty when there are more than
/// `MAX_GRID_LINES` of them or they do not fit in an `i64`.
pub fn integers_between(min: f64, max: f64) -> Vec<i64> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Vec::new();
    }
    let first = min.floor() + 1.0;
    let last = max.ceil() - 1.0;
    if last < first || first < -I64_BOUND || last >= I64_BOUND {
        return Vec::new();
    }
    let (first, last) = (first as i64, last as i64);
    match last.checked_sub(first) {
        Some(n) if n < MAX_GRID_LINES as i64 => (first..=last).collect(),
        _ => Vec::new(),
    }
}

/// Tick values for labels: the grid integers without zero (the axes cross there).
pub fn label_ticks(min: f64, max: f64) -> Vec<i64> {
    integers_between(min, max).into_iter().filter(|&i| i != 0).collect()
}
