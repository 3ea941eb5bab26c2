// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable, in-memory dataset.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::record::EntityRecord;
use crate::schema::ColumnLayout;

/// Errors returned while assembling a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// A record reuses a name that is already present.
    #[error("duplicate name `{0}`")]
    DuplicateName(String),
    /// A record's matchup values do not line up with the dataset's matchup fields.
    #[error("`{name}` has {found} matchup values, expected {expected}")]
    MatchupWidth {
        /// Name of the offending record.
        name: String,
        /// Number of matchup fields in the dataset.
        expected: usize,
        /// Number of values the record carries.
        found: usize,
    },
}

/// Incrementally assembles a [`Dataset`], enforcing its invariants on every push.
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    records: Vec<EntityRecord>,
    index: HashMap<Arc<str>, usize>,
    matchup_fields: Vec<Arc<str>>,
}

impl DatasetBuilder {
    /// Creates a builder for records carrying the given matchup fields (in order).
    pub fn new(matchup_fields: impl IntoIterator<Item = Arc<str>>) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            matchup_fields: matchup_fields.into_iter().collect(),
        }
    }

    /// Creates a builder whose matchup fields come from a discovered column layout.
    pub fn from_layout(layout: &ColumnLayout) -> Self {
        Self::new(layout.matchup_fields().cloned())
    }

    /// Appends a record.
    ///
    /// Fails (leaving the builder unchanged) if the name is already present or the matchup width
    /// does not match.
    pub fn push(&mut self, record: EntityRecord) -> Result<(), DatasetError> {
        if record.matchups.len() != self.matchup_fields.len() {
            return Err(DatasetError::MatchupWidth {
                name: record.name.to_string(),
                expected: self.matchup_fields.len(),
                found: record.matchups.len(),
            });
        }
        match self.index.entry(record.name.clone()) {
            Entry::Occupied(e) => Err(DatasetError::DuplicateName(e.key().to_string())),
            Entry::Vacant(e) => {
                e.insert(self.records.len());
                self.records.push(record);
                Ok(())
            }
        }
    }

    /// Returns the number of records pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no record has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Freezes the builder into a dataset.
    #[must_use]
    pub fn build(self) -> Dataset {
        Dataset {
            records: self.records,
            index: self.index,
            matchup_fields: self.matchup_fields,
        }
    }
}

/// An ordered, immutable collection of [`EntityRecord`]s keyed by unique name.
///
/// A dataset is built once and then only read; it is `Send + Sync` and can be shared by reference
/// (or behind an `Arc`) between any number of concurrent readers.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<EntityRecord>,
    index: HashMap<Arc<str>, usize>,
    matchup_fields: Vec<Arc<str>>,
}

impl Dataset {
    /// Builds a dataset from records in load order.
    pub fn from_records(
        matchup_fields: impl IntoIterator<Item = Arc<str>>,
        records: impl IntoIterator<Item = EntityRecord>,
    ) -> Result<Self, DatasetError> {
        let mut builder = DatasetBuilder::new(matchup_fields);
        for record in records {
            builder.push(record)?;
        }
        Ok(builder.build())
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all records in load order.
    #[must_use]
    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }

    /// Iterates every name in load order.
    pub fn all_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.records.iter().map(|r| &*r.name)
    }

    /// Returns the matchup field labels discovered at load, in column order.
    #[must_use]
    pub fn matchup_field_names(&self) -> &[Arc<str>] {
        &self.matchup_fields
    }

    /// Returns the record named `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntityRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// Returns `true` if a record named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the records for `names` that exist, in dataset order.
    ///
    /// Caller order is not preserved, repeated names yield one record, and unknown names are
    /// skipped. Use [`Dataset::resolve_selection`] when every name must resolve.
    pub fn lookup<S: AsRef<str>>(&self, names: impl IntoIterator<Item = S>) -> Vec<&EntityRecord> {
        let mut rows: Vec<usize> = names
            .into_iter()
            .filter_map(|name| self.index.get(name.as_ref()).copied())
            .collect();
        rows.sort_unstable();
        rows.dedup();
        rows.into_iter().map(|i| &self.records[i]).collect()
    }
}
