// Copyright 2025 the Rosterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run the `rosterviz` binary against the shared CSV fixture.

use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

const PICK: [&str; 6] = [
    "Snorlax",
    "Pikachu",
    "Venusaur",
    "Gengar",
    "Blastoise",
    "Charizard",
];

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rosterviz"))
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../rosterviz_csv/tests/data/roster.csv")
}

fn tmp_path(filename: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "rosterviz_cli_{}_{}_{}",
        std::process::id(),
        nanos,
        filename
    ))
}

fn run(args: &[&str]) -> Output {
    let data = fixture();
    Command::new(bin_path())
        .arg("--data")
        .arg(&data)
        .args(args)
        .env_remove("ROSTERVIZ_DATA")
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn assert_rejected(out: &Output, needle: &str) {
    assert!(
        !out.status.success(),
        "expected failure, stdout={}",
        String::from_utf8_lossy(&out.stdout)
    );
    assert!(out.stdout.is_empty(), "nothing should reach stdout on failure");
    let err = stderr(out);
    assert!(err.contains(needle), "stderr lacks {needle:?}: {err}");
}

#[test]
fn names_and_fields_list_the_dataset() {
    let out = run(&["names"]);
    assert!(out.status.success(), "names failed, stderr={}", stderr(&out));
    let names: Vec<String> = String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(String::from)
        .collect();
    assert_eq!(names.len(), 8);
    assert_eq!(names.first().map(String::as_str), Some("Venusaur"));
    assert_eq!(names.last().map(String::as_str), Some("Dragonite"));

    let out = run(&["fields"]);
    assert!(out.status.success(), "fields failed, stderr={}", stderr(&out));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).lines().collect::<Vec<_>>(),
        ["Normal", "Fire", "Water", "Electric", "Grass", "Ice"]
    );
}

#[test]
fn compare_emits_chart_tables_as_json() {
    let mut args = vec!["compare"];
    args.extend(PICK);
    let out = run(&args);
    assert!(out.status.success(), "compare failed, stderr={}", stderr(&out));

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    assert_eq!(v["dataset_rows"].as_u64(), Some(8));
    assert_eq!(v["matchup_fields"].as_array().map(Vec::len), Some(6));

    let axes = v["stat_axes"].as_array().expect("stat_axes array");
    assert_eq!(axes.len(), 6);
    assert_eq!(axes[3]["column"], "Spa");
    assert_eq!(axes[3]["title"], "Special Attack");

    let tables = &v["tables"];
    assert_eq!(
        tables["names"],
        serde_json::json!([
            "Venusaur",
            "Charizard",
            "Blastoise",
            "Pikachu",
            "Gengar",
            "Snorlax"
        ])
    );
    assert_eq!(tables["matchup_domain"], serde_json::json!([0.0, 4.0]));
    assert_eq!(
        tables["stats"]["columns"],
        serde_json::json!(["HP", "Att", "Def", "Spa", "Spd", "Spe"])
    );
    assert_eq!(tables["mean_stats"]["row_labels"], serde_json::json!(["Mean"]));
    assert_eq!(tables["mean_stats"]["data"][0][0].as_f64(), Some(82.0));
    assert_eq!(tables["distribution"]["HP"].as_array().map(Vec::len), Some(6));
    assert_eq!(tables["per_entity_stats"].as_array().map(Vec::len), Some(6));
    assert_eq!(tables["per_entity_matchups"].as_array().map(Vec::len), Some(6));
}

#[test]
fn compare_writes_to_out_file() {
    let path = tmp_path("compare.json");
    let path_arg = path.to_string_lossy().into_owned();
    let mut args = vec!["compare", "--pretty", "--out", path_arg.as_str()];
    args.extend(PICK);
    let out = run(&args);
    assert!(out.status.success(), "compare --out failed, stderr={}", stderr(&out));
    assert!(out.stdout.is_empty(), "JSON should go to the file only");

    let text = std::fs::read_to_string(&path).expect("output file written");
    let v: serde_json::Value = serde_json::from_str(&text).expect("file should be valid JSON");
    assert_eq!(v["tables"]["names"].as_array().map(Vec::len), Some(6));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn rejected_selections_exit_non_zero() {
    let out = run(&[
        "compare", "Gengar", "Gengar", "Pikachu", "Snorlax", "Lapras", "Venusaur",
    ]);
    assert_rejected(&out, "`Gengar` is selected more than once");

    let out = run(&[
        "compare", "Mewtwo", "Gengar", "Pikachu", "Snorlax", "Lapras", "Venusaur",
    ]);
    assert_rejected(&out, "`Mewtwo` is not in the dataset");

    let out = run(&["compare", "Gengar", "Pikachu"]);
    assert_rejected(&out, "expected exactly 6 names, got 2");
}

#[test]
fn load_failure_exits_before_serving() {
    let out = Command::new(bin_path())
        .args(["--data", "/nonexistent/rosterviz.csv", "names"])
        .env_remove("ROSTERVIZ_DATA")
        .output()
        .expect("binary runs");
    assert_rejected(&out, "loading dataset from /nonexistent/rosterviz.csv");
}

#[test]
fn explore_bins_every_stat() {
    let out = run(&["explore", "--bins", "5"]);
    assert!(out.status.success(), "explore failed, stderr={}", stderr(&out));
    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    assert_eq!(v["rows"].as_u64(), Some(8));
    assert_eq!(v["bins"].as_u64(), Some(5));
    let histograms = v["histograms"].as_array().expect("histograms array");
    assert_eq!(histograms.len(), 6);
    for h in histograms {
        let counts: u64 = h["histogram"]["bins"]
            .as_array()
            .expect("bins array")
            .iter()
            .filter_map(|b| b["count"].as_u64())
            .sum();
        assert_eq!(counts, 8, "every row lands in a bin: {h}");
    }
}

#[test]
fn bad_options_are_rejected() {
    let out = run(&["explore", "--bins", "0"]);
    assert_rejected(&out, "--bins must be at least 1");

    let out = run(&["--delimiter", "é", "names"]);
    assert_rejected(&out, "is not one ASCII character");
}
