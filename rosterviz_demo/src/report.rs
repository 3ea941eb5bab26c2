// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON hand-off documents for an external renderer.

use std::sync::Arc;

use anyhow::{Context, Result};
use rosterviz_core::{Dataset, PrimaryStat};
use rosterviz_transforms::{ChartTables, StatHistogram};
use serde::Serialize;
use tracing::info;

use crate::OutputArgs;

/// Axis title for one stat column.
#[derive(Debug, Serialize)]
pub(crate) struct StatAxis {
    pub(crate) column: &'static str,
    pub(crate) title: &'static str,
}

fn stat_axes() -> Vec<StatAxis> {
    PrimaryStat::ALL
        .iter()
        .map(|stat| StatAxis {
            column: stat.column(),
            title: stat.display_name(),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub(crate) struct CompareReport {
    /// Rows in the dataset the selection came from.
    pub(crate) dataset_rows: usize,
    /// Matchup fields in column order (shared by every matchup table).
    pub(crate) matchup_fields: Vec<Arc<str>>,
    /// Axis titles for the stat columns, in canonical order.
    pub(crate) stat_axes: Vec<StatAxis>,
    pub(crate) tables: ChartTables,
}

impl CompareReport {
    pub(crate) fn new(dataset: &Dataset, tables: ChartTables) -> Self {
        Self {
            dataset_rows: dataset.len(),
            matchup_fields: dataset.matchup_field_names().to_vec(),
            stat_axes: stat_axes(),
            tables,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ExploreReport {
    pub(crate) rows: usize,
    pub(crate) bins: usize,
    pub(crate) stat_axes: Vec<StatAxis>,
    pub(crate) histograms: Vec<StatHistogram>,
}

impl ExploreReport {
    pub(crate) fn new(dataset: &Dataset, bins: usize, histograms: Vec<StatHistogram>) -> Self {
        Self {
            rows: dataset.len(),
            bins,
            stat_axes: stat_axes(),
            histograms,
        }
    }
}

pub(crate) fn write_json<T: Serialize>(output: &OutputArgs, value: &T) -> Result<()> {
    let json = if output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match &output.out {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote chart tables");
        }
        None => println!("{json}"),
    }
    Ok(())
}
