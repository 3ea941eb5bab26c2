// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset model for rosterviz.
//!
//! A rosterviz dataset is a static table of creatures: one row per creature, six primary stats,
//! and a variable number of type-matchup multipliers whose columns are discovered from the
//! header row. This crate owns:
//! - the record types ([`EntityRecord`], [`StatValues`], [`PrimaryStat`]),
//! - one-time column discovery ([`Schema`] -> [`ColumnLayout`]),
//! - the immutable, shareable [`Dataset`], and
//! - selection resolution ([`Dataset::resolve_selection`] -> [`Selection`]).
//!
//! Parsing delimited text is left to adapter crates; this crate only sees header strings and
//! field strings, so it stays `no_std` (it uses `alloc` for owned names and rows).

#![no_std]

extern crate alloc;

mod dataset;
mod record;
mod schema;
mod selection;
mod stat;

pub use dataset::{Dataset, DatasetBuilder, DatasetError};
pub use record::{EntityRecord, MatchupValues};
pub use schema::{ColumnLayout, RecordError, Schema, SchemaError};
pub use selection::{SELECTION_SIZE, Selection, SelectionError};
pub use stat::{PrimaryStat, StatValues};
