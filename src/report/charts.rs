//! Chart-shaped datasets derived from the usage statistics.
//!
//! Rendering is left to whatever frontend consumes these; the types here fix
//! the data each chart needs: pie slices with small-share folding, a
//! zero-filled monthly line series over a fixed calendar window, and the
//! half-year stacked-bar matrix.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

/// Calendar window of the monthly check-in-day series.
pub const CALENDAR_YEARS: RangeInclusive<i32> = 2022..=2024;

/// Label of the slice that absorbs folded small shares.
pub const REMAINDER_LABEL: &str = "其他";

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    /// Slice label
    pub label: String,
    /// Absolute count backing the slice
    pub value: usize,
}

/// Pie slices over a grouping, small shares folded into a remainder.
///
/// Shares below 2% of the total (`value * 50 < total`) collapse into one
/// trailing [`REMAINDER_LABEL`] slice; the kept slices sort ascending by
/// value. The remainder slice is always present, even when empty.
pub fn pie_slices(counts: &BTreeMap<String, usize>) -> Vec<PieSlice> {
    let total: usize = counts.values().sum();

    let mut kept: Vec<(usize, &str)> = Vec::new();
    let mut remainder = 0;
    for (label, &value) in counts {
        if value * 50 >= total {
            kept.push((value, label.as_str()));
        } else {
            remainder += value;
        }
    }
    kept.sort();

    let mut slices: Vec<PieSlice> = kept
        .into_iter()
        .map(|(value, label)| PieSlice {
            label: label.to_string(),
            value,
        })
        .collect();
    slices.push(PieSlice {
        label: REMAINDER_LABEL.to_string(),
        value: remainder,
    });
    slices
}

/// Bar series over a grouping, in ascending key order.
pub fn bar_series(counts: &BTreeMap<String, usize>) -> Vec<(String, usize)> {
    counts.iter().map(|(k, &v)| (k.clone(), v)).collect()
}

/// Monthly check-in-day line series, zero-filled across the calendar window.
///
/// Observed months outside the window are kept; every month inside the
/// window appears, gaps filled with 0. Sorted by month key.
pub fn monthly_line_series(
    days_by_month: &BTreeMap<String, usize>,
    years: RangeInclusive<i32>,
) -> Vec<(String, usize)> {
    let mut filled = days_by_month.clone();
    for year in years {
        for month in 1..=12u32 {
            filled.entry(format!("{year}-{month:02}")).or_insert(0);
        }
    }
    filled.into_iter().collect()
}

/// Dense matrix behind the stacked half-year bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfYearMatrix {
    /// Half-year bucket labels, ascending (`2022-H1`, `2022-H2`, ...)
    pub buckets: Vec<String>,
    /// Library names, ascending; one stacked segment per name
    pub libraries: Vec<String>,
    /// `values[bucket][library]` counts, zero-filled
    pub values: Vec<Vec<usize>>,
}

/// Build the stacked-bar matrix from the sparse half-year counts.
pub fn stacked_half_year(
    half_year_by_library: &BTreeMap<String, BTreeMap<String, usize>>,
) -> HalfYearMatrix {
    let libraries: BTreeSet<&str> = half_year_by_library
        .values()
        .flat_map(|counts| counts.keys().map(String::as_str))
        .collect();
    let libraries: Vec<String> = libraries.into_iter().map(str::to_string).collect();

    let buckets: Vec<String> = half_year_by_library.keys().cloned().collect();
    let values = half_year_by_library
        .values()
        .map(|counts| {
            libraries
                .iter()
                .map(|lib| counts.get(lib).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    HalfYearMatrix {
        buckets,
        libraries,
        values,
    }
}
