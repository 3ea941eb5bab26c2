// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-table projections for rosterviz.
//!
//! Every function here is a pure projection from a resolved
//! [`Selection`](rosterviz_core::Selection) (or a whole dataset) to a chart-ready table:
//! - [`build_matchup_table`]: entities x matchup fields (heatmap grid),
//! - [`build_stat_table`]: entities x primary stats (radar / grouped bars),
//! - [`build_mean_stat_row`]: one row of per-stat means (mean radar),
//! - [`build_stat_distribution`]: per-stat multisets (overlaid histogram),
//! - [`build_per_entity_stat_tables`] and [`build_per_entity_matchup_tables`]: one single-row
//!   table per entity,
//! - [`build_stat_stack`]: zero-offset stack spans (stacked bar chart), and
//! - [`build_dataset_histograms`]: dataset-wide per-stat histograms.
//!
//! [`ChartTables::build`] runs every per-selection projection at once.
//!
//! Nothing is cached: tables are recomputed from the immutable dataset on every call and are
//! owned by the caller.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod builder;
mod bundle;
#[cfg(not(feature = "std"))]
mod float;
mod histogram;
mod stack;
mod table;

pub use builder::{
    MATCHUP_DOMAIN, MEAN_ROW_LABEL, StatDistribution, StatSamples, build_matchup_table,
    build_mean_stat_row, build_per_entity_matchup_tables, build_per_entity_stat_tables,
    build_stat_distribution, build_stat_table,
};
pub use bundle::ChartTables;
pub use histogram::{
    DEFAULT_BIN_COUNT, Histogram, HistogramBin, StatHistogram, build_dataset_histograms,
};
pub use stack::{StackLayout, build_stat_stack, stack_zero};
pub use table::TableFrame;
