// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line front end for rosterviz.
//!
//! The dataset is loaded once per process, before any command runs; a load failure exits
//! non-zero. Each command is then one request against that read-only dataset:
//! - `names` / `fields` list what a picker needs,
//! - `compare` resolves six names and emits every chart table as JSON, and
//! - `explore` emits dataset-wide stat histograms as JSON.

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rosterviz_core::{Dataset, Schema};
use rosterviz_csv::LoadOptions;
use rosterviz_transforms::{ChartTables, DEFAULT_BIN_COUNT, build_dataset_histograms};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Compare six creatures: emit chart-ready tables for a renderer.
#[derive(Parser, Debug)]
#[command(name = "rosterviz", version, about)]
struct Cli {
    /// Dataset CSV path.
    #[arg(
        long,
        global = true,
        env = "ROSTERVIZ_DATA",
        default_value = "static/data/All_Pokemon.csv"
    )]
    data: PathBuf,

    /// Header prefix marking matchup columns.
    #[arg(long, global = true, default_value = "Against")]
    matchup_prefix: String,

    /// Field delimiter (one ASCII character).
    #[arg(long, global = true, default_value_t = ',')]
    delimiter: char,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every name in dataset order, one per line.
    Names,
    /// Print the discovered matchup fields, one per line.
    Fields,
    /// Build every chart table for a selection of six names.
    Compare {
        /// The six distinct names to compare.
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Bin every stat across the whole dataset.
    Explore {
        /// Number of equal-width bins per stat.
        #[arg(long, default_value_t = DEFAULT_BIN_COUNT)]
        bins: usize,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output file for the JSON tables. Defaults to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let dataset = load_dataset(&cli)?;

    match &cli.command {
        Command::Names => {
            for name in dataset.all_names() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Fields => {
            for field in dataset.matchup_field_names() {
                println!("{field}");
            }
            Ok(())
        }
        Command::Compare { names, output } => cmd_compare(&dataset, names, output),
        Command::Explore { bins, output } => cmd_explore(&dataset, *bins, output),
    }
}

fn load_dataset(cli: &Cli) -> Result<Dataset> {
    let delimiter = u8::try_from(cli.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("delimiter {:?} is not one ASCII character", cli.delimiter))?;
    let options = LoadOptions::default()
        .with_delimiter(delimiter)
        .with_schema(Schema::new().with_matchup_prefix(cli.matchup_prefix.as_str()));
    rosterviz_csv::load_path(&cli.data, &options)
        .with_context(|| format!("loading dataset from {}", cli.data.display()))
}

fn cmd_compare(dataset: &Dataset, names: &[String], output: &OutputArgs) -> Result<()> {
    let selection = match dataset.resolve_selection(names) {
        Ok(selection) => selection,
        Err(err) => {
            warn!(%err, "rejected selection");
            return Err(err).context("invalid selection");
        }
    };
    info!(names = ?selection.names().collect::<Vec<_>>(), "building chart tables");
    let tables = ChartTables::build(&selection);
    report::write_json(output, &report::CompareReport::new(dataset, tables))
}

fn cmd_explore(dataset: &Dataset, bins: usize, output: &OutputArgs) -> Result<()> {
    if bins == 0 {
        anyhow::bail!("--bins must be at least 1");
    }
    let histograms = build_dataset_histograms(dataset, bins);
    report::write_json(
        output,
        &report::ExploreReport::new(dataset, bins, histograms),
    )
}
