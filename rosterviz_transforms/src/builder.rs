// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-selection chart tables.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::iter;

use rosterviz_core::{EntityRecord, PrimaryStat, SELECTION_SIZE, Selection};
use smallvec::SmallVec;

use crate::histogram::Histogram;
use crate::table::TableFrame;

/// Shared colour-scale domain for matchup heatmaps.
///
/// Multipliers in the source data lie in `[0, 4]`; fixing the domain keeps colours comparable
/// between requests.
pub const MATCHUP_DOMAIN: (f64, f64) = (0.0, 4.0);

/// Row label of the table produced by [`build_mean_stat_row`].
pub const MEAN_ROW_LABEL: &str = "Mean";

/// Values of one stat across a selection.
pub type StatSamples = SmallVec<[f64; SELECTION_SIZE]>;

/// Builds the matchup grid: one row per selected entity, one column per matchup field.
///
/// Columns follow the dataset's matchup field order, so two selections from the same dataset
/// always produce the same column order. Values are the raw multipliers.
pub fn build_matchup_table(selection: &Selection<'_>) -> TableFrame {
    matchup_frame(selection.matchup_field_names(), selection.iter())
}

/// Builds the stat table: one row per selected entity, columns in canonical stat order.
pub fn build_stat_table(selection: &Selection<'_>) -> TableFrame {
    stat_frame(selection.iter())
}

/// Builds the single-row table of per-stat means across the selection.
///
/// The divisor is always [`SELECTION_SIZE`].
pub fn build_mean_stat_row(selection: &Selection<'_>) -> TableFrame {
    let mut sums = [0.0_f64; PrimaryStat::COUNT];
    for record in selection.iter() {
        for (sum, value) in sums.iter_mut().zip(record.stats.0) {
            *sum += value;
        }
    }
    let mut frame = TableFrame::new(stat_columns());
    frame.push_row(
        Arc::from(MEAN_ROW_LABEL),
        sums.map(|sum| sum / SELECTION_SIZE as f64),
    );
    frame
}

/// Builds one multiset of values per stat.
pub fn build_stat_distribution(selection: &Selection<'_>) -> StatDistribution {
    StatDistribution {
        samples: PrimaryStat::ALL.map(|stat| selection.iter().map(|r| r.stat(stat)).collect()),
    }
}

/// Builds one single-row stat table per selected entity, in selection order.
///
/// Each table's only row label is the entity name, for chart titles.
pub fn build_per_entity_stat_tables(selection: &Selection<'_>) -> Vec<TableFrame> {
    selection
        .iter()
        .map(|record| stat_frame(iter::once(record)))
        .collect()
}

/// Builds one single-row matchup table per selected entity, in selection order.
///
/// The matchup counterpart of [`build_per_entity_stat_tables`], for individual weakness charts.
pub fn build_per_entity_matchup_tables(selection: &Selection<'_>) -> Vec<TableFrame> {
    let fields = selection.matchup_field_names();
    selection
        .iter()
        .map(|record| matchup_frame(fields, iter::once(record)))
        .collect()
}

/// Per-stat multisets of a selection's values.
///
/// Values for different stats are kept apart; order within a stat carries no meaning.
#[derive(Clone, Debug, PartialEq)]
pub struct StatDistribution {
    samples: [StatSamples; PrimaryStat::COUNT],
}

impl StatDistribution {
    /// Returns the values recorded for `stat`.
    pub fn samples(&self, stat: PrimaryStat) -> &[f64] {
        &self.samples[stat.index()]
    }

    /// Iterates `(stat, values)` in canonical stat order.
    pub fn iter(&self) -> impl Iterator<Item = (PrimaryStat, &[f64])> + '_ {
        PrimaryStat::ALL
            .iter()
            .map(|&stat| (stat, self.samples(stat)))
    }

    /// Bins one stat's values into an equal-width histogram.
    pub fn histogram(&self, stat: PrimaryStat, bin_count: usize) -> Histogram {
        Histogram::equal_width(self.samples(stat), bin_count)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StatDistribution {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(PrimaryStat::COUNT))?;
        for (stat, values) in self.iter() {
            map.serialize_entry(stat.column(), values)?;
        }
        map.end()
    }
}

fn stat_columns() -> Vec<Arc<str>> {
    PrimaryStat::ALL
        .iter()
        .map(|stat| Arc::from(stat.column()))
        .collect()
}

fn stat_frame<'r>(rows: impl Iterator<Item = &'r EntityRecord>) -> TableFrame {
    let mut frame = TableFrame::new(stat_columns());
    for record in rows {
        frame.push_row(record.name.clone(), record.stats.0);
    }
    frame
}

fn matchup_frame<'r>(
    fields: &[Arc<str>],
    rows: impl Iterator<Item = &'r EntityRecord>,
) -> TableFrame {
    let mut frame = TableFrame::new(fields.to_vec());
    for record in rows {
        frame.push_row(record.name.clone(), record.matchups.iter().copied());
    }
    frame
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;
    use alloc::vec;

    use rosterviz_core::{Dataset, MatchupValues, StatValues};

    use super::*;

    fn dataset() -> Dataset {
        // Stats are laid out so that HP of monN is 10 * (N + 1) and every other stat is offset
        // from it; matchups are distinct per record.
        Dataset::from_records(
            ["Fire", "Water", "Grass"].map(Arc::<str>::from),
            (0..8).map(|i| {
                let hp = 10.0 * f64::from(i + 1);
                EntityRecord::new(
                    format!("mon{i}"),
                    StatValues([hp, hp + 1.0, hp + 2.0, hp + 3.0, hp + 4.0, hp + 5.0]),
                    MatchupValues::from_slice(&[f64::from(i) * 0.5, 1.0, 2.0]),
                )
            }),
        )
        .unwrap()
    }

    const FIRST_SIX: [&str; 6] = ["mon0", "mon1", "mon2", "mon3", "mon4", "mon5"];

    #[test]
    fn mean_row_divides_by_selection_size() {
        let ds = dataset();
        let sel = ds.resolve_selection(&FIRST_SIX).unwrap();
        let mean = build_mean_stat_row(&sel);
        assert_eq!(mean.row_count(), 1);
        assert_eq!(mean.column_count(), 6);
        assert_eq!(&*mean.row_labels[0], MEAN_ROW_LABEL);
        // HP = [10, 20, 30, 40, 50, 60]
        assert_eq!(mean.f64(0, "HP"), Some(35.0));
        assert_eq!(mean.f64(0, "Spe"), Some(40.0));
    }

    #[test]
    fn stat_table_uses_canonical_column_order() {
        let ds = dataset();
        let sel = ds.resolve_selection(&FIRST_SIX).unwrap();
        let table = build_stat_table(&sel);
        let columns: Vec<&str> = table.columns.iter().map(|c| &**c).collect();
        assert_eq!(columns, vec!["HP", "Att", "Def", "Spa", "Spd", "Spe"]);
        assert_eq!(table.row_count(), 6);
        let row: Vec<f64> = table.row(2).collect();
        assert_eq!(row, vec![30.0, 31.0, 32.0, 33.0, 34.0, 35.0]);
    }

    #[test]
    fn matchup_columns_are_a_dataset_property() {
        let ds = dataset();
        let a = ds.resolve_selection(&FIRST_SIX).unwrap();
        let b = ds
            .resolve_selection(&["mon7", "mon6", "mon5", "mon4", "mon3", "mon2"])
            .unwrap();
        let ta = build_matchup_table(&a);
        let tb = build_matchup_table(&b);
        assert_eq!(ta.columns, tb.columns);
        assert_eq!(ta.column("Fire"), Some(&[0.0, 0.5, 1.0, 1.5, 2.0, 2.5][..]));
        let rows: Vec<&str> = tb.row_labels.iter().map(|r| &**r).collect();
        assert_eq!(rows, vec!["mon2", "mon3", "mon4", "mon5", "mon6", "mon7"]);
    }

    #[test]
    fn distribution_keeps_stats_apart() {
        let ds = dataset();
        let sel = ds.resolve_selection(&FIRST_SIX).unwrap();
        let dist = build_stat_distribution(&sel);
        assert_eq!(
            dist.samples(PrimaryStat::Hp),
            &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]
        );
        assert_eq!(
            dist.samples(PrimaryStat::Speed),
            &[15.0, 25.0, 35.0, 45.0, 55.0, 65.0]
        );
        assert_eq!(dist.iter().count(), PrimaryStat::COUNT);
        assert_eq!(dist.histogram(PrimaryStat::Hp, 5).total(), 6);
    }

    #[test]
    fn per_entity_tables_are_single_rows_in_selection_order() {
        let ds = dataset();
        let sel = ds.resolve_selection(&FIRST_SIX).unwrap();
        let stats = build_per_entity_stat_tables(&sel);
        let matchups = build_per_entity_matchup_tables(&sel);
        assert_eq!(stats.len(), 6);
        assert_eq!(matchups.len(), 6);
        for ((name, s), m) in sel.names().zip(&stats).zip(&matchups) {
            assert_eq!(s.row_count(), 1);
            assert_eq!(&*s.row_labels[0], name);
            assert_eq!(&*m.row_labels[0], name);
            assert_eq!(m.column_count(), 3);
        }
    }

    #[test]
    fn builders_are_idempotent() {
        let ds = dataset();
        let sel = ds.resolve_selection(&FIRST_SIX).unwrap();
        assert_eq!(build_matchup_table(&sel), build_matchup_table(&sel));
        assert_eq!(build_stat_table(&sel), build_stat_table(&sel));
        assert_eq!(build_mean_stat_row(&sel), build_mean_stat_row(&sel));
        assert_eq!(build_stat_distribution(&sel), build_stat_distribution(&sel));
        assert_eq!(
            build_per_entity_stat_tables(&sel),
            build_per_entity_stat_tables(&sel)
        );
    }
}
