// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Equal-width histogram binning.

extern crate alloc;

use alloc::vec::Vec;

use rosterviz_core::{Dataset, PrimaryStat};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Bin count used for dataset-wide stat histograms.
pub const DEFAULT_BIN_COUNT: usize = 20;

/// One histogram bucket, `[start, end)` (the last bucket of a histogram is closed).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub start: f64,
    /// Upper edge.
    pub end: f64,
    /// Number of values in the bucket.
    pub count: usize,
}

/// Bucketed counts of a set of values, ordered by ascending `start`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    /// Buckets in ascending order. Empty buckets are kept so the x axis stays continuous.
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bins `values` into `bin_count` equal-width buckets spanning `[min, max]`.
    ///
    /// Non-finite values are skipped. If no finite value remains, or `bin_count` is zero, the
    /// histogram is empty. If every value is equal, a single bucket of width `1` holds them all.
    pub fn equal_width(values: &[f64], bin_count: usize) -> Self {
        let finite = || values.iter().copied().filter(|v| v.is_finite());

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in finite() {
            min = min.min(v);
            max = max.max(v);
        }
        if bin_count == 0 || !min.is_finite() {
            return Self::default();
        }

        if max == min {
            return Self {
                bins: alloc::vec![HistogramBin {
                    start: min,
                    end: min + 1.0,
                    count: finite().count(),
                }],
            };
        }

        let step = (max - min) / bin_count as f64;
        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                start: min + step * i as f64,
                end: if i + 1 == bin_count {
                    max
                } else {
                    min + step * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        let last = (bin_count - 1) as f64;
        for v in finite() {
            let i = ((v - min) / step).floor().clamp(0.0, last);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "clamped to the bin index range"
            )]
            let i = i as usize;
            bins[i].count += 1;
        }

        Self { bins }
    }

    /// Returns the number of binned values.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Returns `true` if there are no buckets.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

/// A histogram of one stat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatHistogram {
    /// The binned stat.
    pub stat: PrimaryStat,
    /// Its histogram.
    pub histogram: Histogram,
}

/// Bins every stat across the whole dataset, one histogram per stat in canonical order.
pub fn build_dataset_histograms(dataset: &Dataset, bin_count: usize) -> Vec<StatHistogram> {
    PrimaryStat::ALL
        .iter()
        .map(|&stat| {
            let values: Vec<f64> = dataset.records().iter().map(|r| r.stat(stat)).collect();
            StatHistogram {
                stat,
                histogram: Histogram::equal_width(&values, bin_count),
            }
        })
        .collect()
}
