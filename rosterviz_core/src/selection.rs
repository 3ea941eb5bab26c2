// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving a caller's six names into records.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::dataset::Dataset;
use crate::record::EntityRecord;

/// Number of entities in every selection.
pub const SELECTION_SIZE: usize = 6;

/// Errors returned by [`Dataset::resolve_selection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The caller supplied too few or too many names.
    #[error("expected exactly {expected} names, got {found}")]
    WrongCount {
        /// Required number of names.
        expected: usize,
        /// Number of names supplied.
        found: usize,
    },
    /// A slot was left empty (1-based position).
    #[error("selection slot {slot} is empty")]
    BlankName {
        /// 1-based position of the blank name.
        slot: usize,
    },
    /// The same name appears more than once.
    #[error("`{0}` is selected more than once")]
    DuplicateName(String),
    /// A name does not resolve to a record.
    #[error("`{0}` is not in the dataset")]
    UnknownName(String),
}

/// Exactly [`SELECTION_SIZE`] distinct records of one dataset, in dataset order.
///
/// Only [`Dataset::resolve_selection`] constructs a selection, so code holding one can rely on
/// the cardinality without re-checking it.
#[derive(Clone, Copy)]
pub struct Selection<'a> {
    dataset: &'a Dataset,
    rows: [&'a EntityRecord; SELECTION_SIZE],
}

impl core::fmt::Debug for Selection<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Selection")
            .field("names", &self.rows.map(|r| &*r.name))
            .finish_non_exhaustive()
    }
}

impl<'a> Selection<'a> {
    /// Returns the selected records, in dataset order.
    #[must_use]
    pub fn rows(&self) -> &[&'a EntityRecord; SELECTION_SIZE] {
        &self.rows
    }

    /// Iterates the selected records, in dataset order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a EntityRecord> + '_ {
        self.rows.iter().copied()
    }

    /// Iterates the selected names, in dataset order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &'a str> + '_ {
        self.rows.iter().map(|r| &*r.name)
    }

    /// Returns the dataset this selection was resolved against.
    #[must_use]
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Returns the dataset's matchup field labels.
    #[must_use]
    pub fn matchup_field_names(&self) -> &'a [Arc<str>] {
        self.dataset.matchup_field_names()
    }
}

impl Dataset {
    /// Validates `names` and resolves them into a [`Selection`].
    ///
    /// Names are trimmed before matching. Fails unless there are exactly [`SELECTION_SIZE`]
    /// non-blank, distinct names that all exist in the dataset. Rows come back in dataset order,
    /// not in the order supplied.
    pub fn resolve_selection<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Selection<'_>, SelectionError> {
        if names.len() != SELECTION_SIZE {
            return Err(SelectionError::WrongCount {
                expected: SELECTION_SIZE,
                found: names.len(),
            });
        }

        let names: Vec<&str> = names.iter().map(|n| n.as_ref().trim()).collect();
        if let Some(i) = names.iter().position(|n| n.is_empty()) {
            return Err(SelectionError::BlankName { slot: i + 1 });
        }

        let mut seen = HashSet::with_capacity(SELECTION_SIZE);
        for &name in &names {
            if !seen.insert(name) {
                return Err(SelectionError::DuplicateName(name.to_string()));
            }
        }

        // `lookup` drops unknown names, so recount before trusting the result.
        let rows = self.lookup(names.iter().copied());
        if rows.len() != SELECTION_SIZE {
            let missing = names
                .iter()
                .find(|n| !self.contains(n))
                .copied()
                .unwrap_or_default();
            return Err(SelectionError::UnknownName(missing.to_string()));
        }

        let rows = <[&EntityRecord; SELECTION_SIZE]>::try_from(rows).map_err(|rows| {
            SelectionError::WrongCount {
                expected: SELECTION_SIZE,
                found: rows.len(),
            }
        })?;
        Ok(Selection {
            dataset: self,
            rows,
        })
    }
}
