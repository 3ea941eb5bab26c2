// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned, labelled table representation handed to renderers.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

/// An owned numeric table with labelled rows and columns.
///
/// This is a deliberately small representation:
/// - `row_labels` name each row (entity names, or `Mean`),
/// - `columns` name each column (stat headers or matchup fields), and
/// - `data` is columnar, one `Vec<f64>` per column aligned to `row_labels`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableFrame {
    /// Label of each row.
    pub row_labels: Vec<Arc<str>>,
    /// Label of each column.
    pub columns: Vec<Arc<str>>,
    /// Columnar numeric data, aligned to `columns`.
    pub data: Vec<Vec<f64>>,
}

impl TableFrame {
    /// Creates an empty frame with the given columns.
    pub fn new(columns: Vec<Arc<str>>) -> Self {
        let data = columns.iter().map(|_| Vec::new()).collect();
        Self {
            row_labels: Vec::new(),
            columns,
            data,
        }
    }

    /// Appends a row.
    ///
    /// Values are taken in column order. Missing values are stored as `NaN`; extra values are
    /// ignored.
    pub fn push_row(&mut self, label: Arc<str>, values: impl IntoIterator<Item = f64>) {
        let mut values = values.into_iter();
        for column in &mut self.data {
            column.push(values.next().unwrap_or(f64::NAN));
        }
        self.row_labels.push(label);
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns a column index for a label, if present.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| &**c == label)
    }

    /// Returns a row index for a label, if present.
    pub fn row_index(&self, label: &str) -> Option<usize> {
        self.row_labels.iter().position(|r| &**r == label)
    }

    /// Returns one column's values, if present.
    pub fn column(&self, label: &str) -> Option<&[f64]> {
        let ci = self.column_index(label)?;
        self.data.get(ci).map(Vec::as_slice)
    }

    /// Gets a numeric value by row position and column label.
    pub fn f64(&self, row: usize, col: &str) -> Option<f64> {
        let ci = self.column_index(col)?;
        self.data.get(ci)?.get(row).copied()
    }

    /// Iterates the values of one row, in column order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = f64> + '_ {
        self.data
            .iter()
            .map(move |column| column.get(row).copied().unwrap_or(f64::NAN))
    }

    /// Returns the values as rows (one `Vec` per row), the layout heatmap renderers expect.
    pub fn to_row_major(&self) -> Vec<Vec<f64>> {
        (0..self.row_count()).map(|r| self.row(r).collect()).collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn labels(names: &[&str]) -> Vec<Arc<str>> {
        names.iter().map(|&n| Arc::from(n)).collect()
    }

    #[test]
    fn push_row_pads_with_nan_and_drops_extras() {
        let mut frame = TableFrame::new(labels(&["a", "b"]));
        frame.push_row(Arc::from("r0"), [1.0, 2.0, 3.0]);
        frame.push_row(Arc::from("r1"), [4.0]);

        assert_eq!(frame.row_count(), 2);
        assert_eq!(frame.column("a"), Some(&[1.0, 4.0][..]));
        assert_eq!(frame.f64(0, "b"), Some(2.0));
        assert!(frame.f64(1, "b").unwrap().is_nan());
        assert_eq!(frame.f64(0, "c"), None);
    }

    #[test]
    fn row_major_transposes_columns() {
        let mut frame = TableFrame::new(labels(&["x", "y", "z"]));
        frame.push_row(Arc::from("first"), [1.0, 2.0, 3.0]);
        frame.push_row(Arc::from("second"), [4.0, 5.0, 6.0]);
        assert_eq!(
            frame.to_row_major(),
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]
        );
        assert_eq!(frame.row_index("second"), Some(1));
    }
}
