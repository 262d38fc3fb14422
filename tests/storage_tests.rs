// SPDX-License-Identifier: PMPL-1.0-or-later

//! Snapshot export and retrieval

use portfolio_catalog::catalog::Catalog;
use portfolio_catalog::config::SiteConfig;
use portfolio_catalog::export::{ExportBundle, EXPORT_SCHEMA};
use portfolio_catalog::render::OutputFormat;
use portfolio_catalog::storage::{latest_snapshots, persist_snapshot};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_persist_snapshot_writes_each_format() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::builtin().unwrap();
    let config = SiteConfig::default();
    let loc = config.localizer(Some("en-US"));
    let bundle = ExportBundle::build(&catalog, &config, &loc).unwrap();

    let written = persist_snapshot(
        &bundle,
        Some(dir.path()),
        &[OutputFormat::Json, OutputFormat::Yaml],
    )
    .unwrap();
    assert_eq!(written.len(), 2);

    let json_name = written[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(json_name.starts_with("portfolio-en-US-"));
    assert!(json_name.ends_with(".json"));
    assert!(written[1].to_string_lossy().ends_with(".yaml"));

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
    assert_eq!(parsed["schema"], EXPORT_SCHEMA);
    assert_eq!(parsed["locale"], "en-US");
    assert_eq!(parsed["details"].as_array().unwrap().len(), catalog.len());
    assert_eq!(parsed["grid"]["cards"][0]["id"], "todo-list");
    assert_eq!(
        parsed["details"][0]["document_title"],
        "Full Stack Task Manager | Valentin Yuge"
    );
}

#[test]
fn test_back_to_back_snapshots_are_kept() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::builtin().unwrap();
    let config = SiteConfig::default();
    let loc = config.localizer(None);
    let bundle = ExportBundle::build(&catalog, &config, &loc).unwrap();

    let first = persist_snapshot(&bundle, Some(dir.path()), &[OutputFormat::Json]).unwrap();
    let second = persist_snapshot(&bundle, Some(dir.path()), &[OutputFormat::Json]).unwrap();
    assert_ne!(first, second);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);

    let latest = latest_snapshots(dir.path(), 2).unwrap();
    assert_eq!(latest, [first[0].clone(), second[0].clone()]);
}

#[test]
fn test_latest_snapshots_order_by_time_across_locales() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("portfolio-es-20250101000000.json"), "{}").unwrap();
    fs::write(dir.path().join("portfolio-en-20260101000000.json"), "{}").unwrap();
    fs::write(dir.path().join("portfolio-en-US-20250601000000000.json"), "{}").unwrap();

    let newest = latest_snapshots(dir.path(), 1).unwrap();
    assert!(newest[0].ends_with("portfolio-en-20260101000000.json"));

    let names: Vec<String> = latest_snapshots(dir.path(), 3)
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "portfolio-es-20250101000000.json",
            "portfolio-en-US-20250601000000000.json",
            "portfolio-en-20260101000000.json"
        ]
    );
}

#[test]
fn test_latest_snapshots_in_time_order() {
    let dir = TempDir::new().unwrap();
    for stamp in ["20260101000000", "20260301000000", "20260201000000"] {
        fs::write(dir.path().join(format!("portfolio-es-{}.json", stamp)), "{}").unwrap();
    }
    fs::write(dir.path().join("portfolio-es-20260401000000.yaml"), "").unwrap();

    let latest = latest_snapshots(dir.path(), 2).unwrap();
    let names: Vec<String> = latest
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "portfolio-es-20260201000000.json",
            "portfolio-es-20260301000000.json"
        ]
    );
}

#[test]
fn test_latest_snapshots_needs_enough_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("portfolio-es-20260101000000.json"), "{}").unwrap();
    assert!(latest_snapshots(dir.path(), 2).is_err());
    assert!(latest_snapshots(&dir.path().join("absent"), 1).is_err());
}
