// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column discovery.
//!
//! A [`Schema`] names the columns a dataset must have (the name column and the six stat columns)
//! and the header prefix that marks a matchup column. [`Schema::discover`] runs once over the
//! header row and produces a [`ColumnLayout`]: resolved column positions plus the ordered list of
//! matchup field labels. Every record is then read through that layout, so the matchup field
//! order is fixed for the lifetime of the dataset.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::record::{EntityRecord, MatchupValues};
use crate::stat::{PrimaryStat, StatValues};

/// Errors returned by [`Schema::discover`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A required column is absent from the header row.
    #[error("missing required column `{0}`")]
    MissingColumn(String),
}

/// Errors returned when reading one record through a [`ColumnLayout`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// The row is shorter than the header row.
    #[error("row has no value for column `{column}`")]
    MissingField {
        /// Header of the absent column.
        column: String,
    },
    /// The name field is blank.
    #[error("row has an empty name")]
    EmptyName,
    /// A numeric field does not parse as a number.
    #[error("column `{column}`: `{value}` is not a number")]
    InvalidNumber {
        /// Header of the offending column.
        column: String,
        /// Raw field text.
        value: String,
    },
    /// A numeric field is negative or not finite.
    #[error("column `{column}`: {value} is not a finite, non-negative number")]
    OutOfRange {
        /// Header of the offending column.
        column: String,
        /// Parsed value.
        value: f64,
    },
}

/// Column naming rules for a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Header of the unique name column.
    pub name_column: String,
    /// Headers of the six stat columns, in canonical stat order.
    pub stat_columns: [String; PrimaryStat::COUNT],
    /// Header prefix marking a matchup column.
    ///
    /// The matchup field label is the header with this prefix (and following whitespace)
    /// removed.
    pub matchup_prefix: String,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            name_column: String::from("Name"),
            stat_columns: PrimaryStat::ALL.map(|stat| String::from(stat.column())),
            matchup_prefix: String::from("Against"),
        }
    }
}

impl Schema {
    /// Creates the default schema (`Name`, `HP`/`Att`/`Def`/`Spa`/`Spd`/`Spe`, `Against*`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name column header.
    #[must_use]
    pub fn with_name_column(mut self, header: impl Into<String>) -> Self {
        self.name_column = header.into();
        self
    }

    /// Sets the header for one stat column.
    #[must_use]
    pub fn with_stat_column(mut self, stat: PrimaryStat, header: impl Into<String>) -> Self {
        self.stat_columns[stat.index()] = header.into();
        self
    }

    /// Sets the matchup column prefix.
    #[must_use]
    pub fn with_matchup_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.matchup_prefix = prefix.into();
        self
    }

    /// Returns the matchup field label for `header`, or `None` if it is not a matchup column.
    ///
    /// A header qualifies when it starts with the prefix and something other than whitespace
    /// follows it.
    pub fn matchup_label<'h>(&self, header: &'h str) -> Option<&'h str> {
        let rest = header.trim().strip_prefix(self.matchup_prefix.as_str())?;
        let label = rest.trim_start();
        (!label.is_empty()).then_some(label)
    }

    /// Resolves column positions from a header row.
    ///
    /// Headers are compared after trimming surrounding whitespace. Matchup columns are collected
    /// in header order; the name and stat columns never count as matchup columns.
    pub fn discover<'h>(
        &self,
        headers: impl IntoIterator<Item = &'h str>,
    ) -> Result<ColumnLayout, SchemaError> {
        let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
        let position = |wanted: &str| headers.iter().position(|h| *h == wanted);

        let name = position(&self.name_column)
            .ok_or_else(|| SchemaError::MissingColumn(self.name_column.clone()))?;

        let mut stats = [0_usize; PrimaryStat::COUNT];
        for stat in PrimaryStat::ALL {
            let header = &self.stat_columns[stat.index()];
            stats[stat.index()] =
                position(header).ok_or_else(|| SchemaError::MissingColumn(header.clone()))?;
        }

        let matchups = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != name && !stats.contains(i))
            .filter_map(|(index, header)| {
                let label = self.matchup_label(header)?;
                Some(MatchupColumn {
                    index,
                    header: Arc::from(*header),
                    label: Arc::from(label),
                })
            })
            .collect();

        Ok(ColumnLayout {
            name: Column {
                index: name,
                header: Arc::from(headers[name]),
            },
            stats: stats.map(|index| Column {
                index,
                header: Arc::from(headers[index]),
            }),
            matchups,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Column {
    index: usize,
    header: Arc<str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MatchupColumn {
    index: usize,
    header: Arc<str>,
    label: Arc<str>,
}

/// Column positions resolved once from a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    name: Column,
    stats: [Column; PrimaryStat::COUNT],
    matchups: Vec<MatchupColumn>,
}

impl ColumnLayout {
    /// Returns the matchup field labels, in header order.
    pub fn matchup_fields(&self) -> impl ExactSizeIterator<Item = &Arc<str>> + '_ {
        self.matchups.iter().map(|m| &m.label)
    }

    /// Returns the position of a stat column in the header row.
    #[must_use]
    pub fn stat_index(&self, stat: PrimaryStat) -> usize {
        self.stats[stat.index()].index
    }

    /// Reads one record.
    ///
    /// `field` returns the raw text at a column position, or `None` if the row is too short.
    pub fn read_record<'f>(
        &self,
        field: impl Fn(usize) -> Option<&'f str>,
    ) -> Result<EntityRecord, RecordError> {
        let get = |column: &Column| {
            field(column.index).ok_or_else(|| RecordError::MissingField {
                column: column.header.to_string(),
            })
        };

        let name = get(&self.name)?.trim();
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }

        let mut stats = StatValues::default();
        for stat in PrimaryStat::ALL {
            let column = &self.stats[stat.index()];
            stats.0[stat.index()] = parse_value(&column.header, get(column)?)?;
        }

        let mut matchups = MatchupValues::with_capacity(self.matchups.len());
        for m in &self.matchups {
            let raw = field(m.index).ok_or_else(|| RecordError::MissingField {
                column: m.header.to_string(),
            })?;
            matchups.push(parse_value(&m.header, raw)?);
        }

        Ok(EntityRecord::new(name, stats, matchups))
    }
}

fn parse_value(column: &str, raw: &str) -> Result<f64, RecordError> {
    let raw = raw.trim();
    let value: f64 = raw.parse().map_err(|_| RecordError::InvalidNumber {
        column: String::from(column),
        value: String::from(raw),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(RecordError::OutOfRange {
            column: String::from(column),
            value,
        });
    }
    Ok(value)
}
