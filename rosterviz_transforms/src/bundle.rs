// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Every per-selection chart table, built in one call.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use rosterviz_core::Selection;

use crate::builder::{
    MATCHUP_DOMAIN, StatDistribution, build_matchup_table, build_mean_stat_row,
    build_per_entity_matchup_tables, build_per_entity_stat_tables, build_stat_distribution,
    build_stat_table,
};
use crate::stack::{StackLayout, build_stat_stack};
use crate::table::TableFrame;

/// All chart tables for one selection, ready to hand to a renderer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartTables {
    /// Selected names, in dataset order.
    pub names: Vec<Arc<str>>,
    /// Matchup heatmap grid.
    pub matchups: TableFrame,
    /// Colour-scale domain for [`ChartTables::matchups`].
    pub matchup_domain: (f64, f64),
    /// Stat table (radar chart).
    pub stats: TableFrame,
    /// Mean stat row (mean radar chart).
    pub mean_stats: TableFrame,
    /// Per-stat value multisets (overlaid histogram).
    pub distribution: StatDistribution,
    /// Stacked stat spans (stacked bar chart).
    pub stacked_stats: StackLayout,
    /// One stat table per entity (individual bar charts).
    pub per_entity_stats: Vec<TableFrame>,
    /// One matchup table per entity (individual weakness charts).
    pub per_entity_matchups: Vec<TableFrame>,
}

impl ChartTables {
    /// Runs every per-selection projection.
    pub fn build(selection: &Selection<'_>) -> Self {
        Self {
            names: selection.iter().map(|r| r.name.clone()).collect(),
            matchups: build_matchup_table(selection),
            matchup_domain: MATCHUP_DOMAIN,
            stats: build_stat_table(selection),
            mean_stats: build_mean_stat_row(selection),
            distribution: build_stat_distribution(selection),
            stacked_stats: build_stat_stack(selection),
            per_entity_stats: build_per_entity_stat_tables(selection),
            per_entity_matchups: build_per_entity_matchup_tables(selection),
        }
    }
}
