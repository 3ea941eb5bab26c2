// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zero-offset stack layout for stacked bar charts.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use rosterviz_core::Selection;

use crate::builder::build_stat_table;
use crate::table::TableFrame;

/// Stacked spans computed from a [`TableFrame`].
///
/// Each frame column becomes a category (one bar) and each frame row a series (one segment of
/// every bar). `start[s][c]` / `end[s][c]` are the span of series `s` in category `c`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StackLayout {
    /// Category labels (the frame's columns).
    pub categories: Vec<Arc<str>>,
    /// Series labels (the frame's rows), in stacking order.
    pub series: Vec<Arc<str>>,
    /// Segment start offsets, indexed `[series][category]`.
    pub start: Vec<Vec<f64>>,
    /// Segment end offsets, indexed `[series][category]`.
    pub end: Vec<Vec<f64>>,
}

impl StackLayout {
    /// Returns the `(start, end)` span of one segment.
    pub fn span(&self, series: usize, category: usize) -> Option<(f64, f64)> {
        let start = *self.start.get(series)?.get(category)?;
        let end = *self.end.get(series)?.get(category)?;
        Some((start, end))
    }

    /// Returns the top of each category's positive stack.
    pub fn totals(&self) -> Vec<f64> {
        (0..self.categories.len())
            .map(|c| {
                self.end
                    .iter()
                    .filter_map(|row| row.get(c).copied())
                    .fold(0.0, f64::max)
            })
            .collect()
    }
}

/// Computes a "zero" stack layout over a frame.
///
/// Within each category, rows are stacked in frame order. Positive values stack upward from 0,
/// negative values downward from 0. Non-finite values yield an empty segment at the current top
/// of the positive stack.
pub fn stack_zero(frame: &TableFrame) -> StackLayout {
    let rows = frame.row_count();
    let cols = frame.column_count();
    let mut start = alloc::vec![alloc::vec![0.0; cols]; rows];
    let mut end = alloc::vec![alloc::vec![0.0; cols]; rows];

    for (c, column) in frame.data.iter().enumerate() {
        let mut pos = 0.0_f64;
        let mut neg = 0.0_f64;
        for (r, &v) in column.iter().enumerate().take(rows) {
            let (s, e) = if !v.is_finite() {
                (pos, pos)
            } else if v >= 0.0 {
                let s = pos;
                pos += v;
                (s, pos)
            } else {
                let s = neg;
                neg += v;
                (s, neg)
            };
            start[r][c] = s;
            end[r][c] = e;
        }
    }

    StackLayout {
        categories: frame.columns.clone(),
        series: frame.row_labels.clone(),
        start,
        end,
    }
}

/// Stacks the selection's stats: one bar per stat, one segment per entity.
pub fn build_stat_stack(selection: &Selection<'_>) -> StackLayout {
    stack_zero(&build_stat_table(selection))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn stacks_rows_in_order_per_column() {
        let mut frame = TableFrame::new(vec![Arc::from("a"), Arc::from("b")]);
        frame.push_row(Arc::from("r0"), [2.0, 1.0]);
        frame.push_row(Arc::from("r1"), [3.0, -4.0]);
        frame.push_row(Arc::from("r2"), [f64::NAN, 5.0]);

        let stack = stack_zero(&frame);
        assert_eq!(stack.span(0, 0), Some((0.0, 2.0)));
        assert_eq!(stack.span(1, 0), Some((2.0, 5.0)));
        assert_eq!(stack.span(2, 0), Some((5.0, 5.0)));
        assert_eq!(stack.span(0, 1), Some((0.0, 1.0)));
        assert_eq!(stack.span(1, 1), Some((0.0, -4.0)));
        assert_eq!(stack.span(2, 1), Some((1.0, 6.0)));
        assert_eq!(stack.totals(), vec![5.0, 6.0]);
        assert_eq!(stack.span(3, 0), None);
    }
}
