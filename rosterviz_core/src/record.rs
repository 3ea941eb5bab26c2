// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity records.

extern crate alloc;

use alloc::sync::Arc;

use smallvec::SmallVec;

use crate::stat::{PrimaryStat, StatValues};

/// Matchup multipliers for one record, aligned to the dataset's matchup fields.
///
/// Inline capacity covers the usual eighteen opposing types without a heap allocation.
pub type MatchupValues = SmallVec<[f64; 18]>;

/// One row of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    /// Unique name; the dataset key.
    pub name: Arc<str>,
    /// Primary stats in canonical order.
    pub stats: StatValues,
    /// Matchup multipliers, in the dataset's matchup field order.
    pub matchups: MatchupValues,
}

impl EntityRecord {
    /// Creates a record.
    pub fn new(name: impl Into<Arc<str>>, stats: StatValues, matchups: MatchupValues) -> Self {
        Self {
            name: name.into(),
            stats,
            matchups,
        }
    }

    /// Returns the value of one primary stat.
    #[must_use]
    pub fn stat(&self, stat: PrimaryStat) -> f64 {
        self.stats.get(stat)
    }
}
