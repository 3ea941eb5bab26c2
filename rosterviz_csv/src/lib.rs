// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV loading adapter for rosterviz.
//!
//! This crate turns delimited text into a [`rosterviz_core::Dataset`] using the `csv` crate for
//! tokenizing. Column discovery and record validation are delegated to
//! [`rosterviz_core::Schema`], so the rules are the same whatever the source.
//!
//! Loading happens once at startup; a [`DataLoadError`] means there is no dataset to serve.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rosterviz_core::{Dataset, DatasetBuilder, DatasetError, RecordError, Schema, SchemaError};
use tracing::{debug, info, warn};

/// Errors returned while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The source file could not be opened.
    #[error("failed to open {}", .path.display())]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The source is not valid delimited text.
    #[error("malformed delimited text")]
    Csv(#[from] csv::Error),
    /// The header row lacks a required column.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// A row has a missing, blank or malformed field.
    #[error("invalid row at line {line}")]
    Record {
        /// 1-based line of the offending row.
        line: u64,
        /// What was wrong with it.
        source: RecordError,
    },
    /// A row does not fit the dataset (wrong number of matchup values).
    #[error("inconsistent row at line {line}")]
    Dataset {
        /// 1-based line of the offending row.
        line: u64,
        /// What was wrong with it.
        source: DatasetError,
    },
    /// The source has a header row but no data rows.
    #[error("dataset has no rows")]
    NoRows,
}

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Column naming rules.
    pub schema: Schema,
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            schema: Schema::default(),
            delimiter: b',',
        }
    }
}

impl LoadOptions {
    /// Sets the column naming rules.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Loads a dataset from a file.
pub fn load_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Dataset, DataLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file, options)?;
    info!(
        path = %path.display(),
        rows = dataset.len(),
        matchup_fields = dataset.matchup_field_names().len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Loads a dataset from any reader.
///
/// The first row is the header. Rows whose name repeats an earlier row are skipped with a
/// warning; any other bad row fails the whole load.
pub fn load_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Dataset, DataLoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let layout = options.schema.discover(rdr.headers()?.iter())?;
    debug!(
        fields = ?layout.matchup_fields().collect::<Vec<_>>(),
        "discovered matchup columns"
    );

    let mut builder = DatasetBuilder::from_layout(&layout);
    for result in rdr.records() {
        let row = result?;
        let line = row.position().map_or(0, |p| p.line());
        let record = layout
            .read_record(|i| row.get(i))
            .map_err(|source| DataLoadError::Record { line, source })?;
        match builder.push(record) {
            Ok(()) => {}
            Err(DatasetError::DuplicateName(name)) => {
                warn!(line, %name, "skipping duplicate name, keeping the first row");
            }
            Err(source) => return Err(DataLoadError::Dataset { line, source }),
        }
    }

    if builder.is_empty() {
        return Err(DataLoadError::NoRows);
    }
    Ok(builder.build())
}
