// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading catalogs and site configuration from disk

use portfolio_catalog::catalog::{Catalog, CatalogError, ValidationIssue};
use portfolio_catalog::config::{ConfigSource, SiteConfig};
use portfolio_catalog::i18n::Lang;
use portfolio_catalog::types::Category;
use std::fs;
use tempfile::TempDir;

const YAML_CATALOG: &str = r#"
- id: synth
  title: Sintetizador modular
  titleAlt: Modular synth
  summary: Patch de audio generativo.
  body: Sintetizador armado en Pure Data.
  startPeriod: 2024-02
  endPeriod: 2024-05
  technologies: [Pure Data]
  category: Multimedia
- id: plataformas
  title: Juego de plataformas
  summary: Plataformas 2D.
  body: Hecho en Godot.
  startPeriod: 2024-06
  endPeriod: 2024-09
  category: Videojuegos
  externalUrl: https://example.com/plataformas
"#;

#[test]
fn test_load_yaml_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.yaml");
    fs::write(&path, YAML_CATALOG).unwrap();

    let catalog = Catalog::load(&path).expect("catalog should load");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.projects()[0].id, "synth");
    let game = catalog.find("plataformas").unwrap();
    assert_eq!(game.category, Category::Games);
    assert!(game.technologies.is_empty());
    assert_eq!(game.localized_title("en"), "Juego de plataformas");
}

#[test]
fn test_load_json_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.json");
    let json = serde_json::json!([{
        "id": "web-app",
        "title": "Aplicación web",
        "summary": "Resumen",
        "body": "Cuerpo",
        "startPeriod": "2025-01",
        "endPeriod": "2025-03",
        "technologies": ["Rust", "Axum"],
        "category": "Web",
        "caseStudyUrl": "https://example.com/case"
    }]);
    fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.projects()[0].case_study_url.as_deref(),
        Some("https://example.com/case")
    );
}

#[test]
fn test_invalid_catalog_is_refused() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.yaml");
    let broken = YAML_CATALOG
        .replace("endPeriod: 2024-05", "endPeriod: 2024-13")
        .replace("id: plataformas", "id: synth");
    fs::write(&path, broken).unwrap();

    match Catalog::load(&path) {
        Err(CatalogError::Invalid { issues }) => {
            assert!(issues
                .iter()
                .any(|i| matches!(i, ValidationIssue::DuplicateId { id } if id == "synth")));
            assert!(issues
                .iter()
                .any(|i| matches!(i, ValidationIssue::MalformedPeriod { .. })));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_unreadable_and_unparseable_catalogs() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yaml");
    assert!(matches!(Catalog::load(&missing), Err(CatalogError::Io { .. })));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "{ not json").unwrap();
    assert!(matches!(Catalog::load(&garbage), Err(CatalogError::Parse { .. })));
}

#[test]
fn test_explicit_config_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.yaml");
    fs::write(
        &path,
        "owner: Ada\ndefault_locale: en\ntag_preview_limit: 2\n",
    )
    .unwrap();

    let (config, source) = SiteConfig::discover(Some(&path)).unwrap();
    assert_eq!(source, ConfigSource::Explicit(path.clone()));
    assert_eq!(config.owner, "Ada");
    assert_eq!(config.default_lang(), Lang::En);
    assert_eq!(config.tag_preview_limit, 2);
    assert_eq!(config.placeholder_image, "/proyectos/{id}.png");
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(SiteConfig::discover(Some(&dir.path().join("nope.yaml"))).is_err());
}
