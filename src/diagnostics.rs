// SPDX-License-Identifier: PMPL-1.0-or-later

//! `portfolio doctor`: checks that the configuration, catalog and asset
//! directory agree with each other.

use crate::catalog::{Catalog, CatalogError};
use crate::config::{ConfigSource, SiteConfig, DEFAULT_CONFIG_FILE};
use crate::i18n::{base_subtag, language_name};
use crate::view::{resolve_media, Media};
use anyhow::{anyhow, Result};
use colored::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MEDIA_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "png", "jpg", "jpeg", "webp", "gif"];

pub fn run_self_diagnostics(
    config: &SiteConfig,
    source: &ConfigSource,
    catalog: Result<&Catalog, &CatalogError>,
) -> Result<()> {
    println!("portfolio self-diagnostics");

    let checks = collect(config, source, catalog);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect(
    config: &SiteConfig,
    source: &ConfigSource,
    catalog: Result<&Catalog, &CatalogError>,
) -> Vec<Diagnostic> {
    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("portfolio {}", env!("CARGO_PKG_VERSION")),
    )];
    checks.push(check_config_source(source));
    checks.push(check_default_locale(&config.default_locale));

    let catalog = match catalog {
        Ok(catalog) => {
            let digest = catalog
                .digest()
                .map(|d| d.chars().take(12).collect::<String>())
                .unwrap_or_else(|_| "?".to_string());
            checks.push(Diagnostic::ok(
                "catalog",
                format!("{} projects (sha256 {})", catalog.len(), digest),
            ));
            Some(catalog)
        }
        Err(err) => {
            checks.push(Diagnostic::error("catalog", err.to_string()));
            None
        }
    };

    let assets = check_assets_directory(&config.assets_dir);
    let assets_ok = assets.level == Level::Ok;
    checks.push(assets);

    match catalog {
        Some(catalog) if assets_ok => {
            let refs = media_references(catalog, config);
            checks.push(check_present("local videos", &refs.videos, Level::Error));
            checks.push(check_present(
                "placeholder images",
                &refs.images,
                Level::Warn,
            ));
            checks.push(check_orphans(&config.assets_dir, &refs));
        }
        Some(_) => {
            tracing::warn!(
                dir = %config.assets_dir.display(),
                "assets directory unavailable, media checks skipped"
            );
        }
        None => {}
    }

    checks
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:20} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

fn check_config_source(source: &ConfigSource) -> Diagnostic {
    match source {
        ConfigSource::Explicit(path) => {
            Diagnostic::ok("configuration", format!("{} (--config)", path.display()))
        }
        ConfigSource::Environment(path) => Diagnostic::ok(
            "configuration",
            format!("{} ({})", path.display(), crate::config::CONFIG_ENV),
        ),
        ConfigSource::WorkingDirectory(path) => {
            Diagnostic::ok("configuration", path.display().to_string())
        }
        ConfigSource::Defaults => Diagnostic::warning(
            "configuration",
            format!("built-in defaults (create {} to override)", DEFAULT_CONFIG_FILE),
        ),
    }
}

fn check_default_locale(tag: &str) -> Diagnostic {
    match language_name(&base_subtag(tag)) {
        Some(name) => Diagnostic::ok("default locale", format!("{} ({})", tag, name)),
        None => Diagnostic::warning("default locale", format!("{} (unknown language)", tag)),
    }
}

fn check_assets_directory(path: &Path) -> Diagnostic {
    if path.is_dir() {
        Diagnostic::ok("assets directory", format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::warning(
            "assets directory",
            format!("{} exists but is not a directory", path.display()),
        )
    } else {
        Diagnostic::warning(
            "assets directory",
            format!("{} missing, media checks skipped", path.display()),
        )
    }
}

/// Local files the rendered pages point at, keyed by project id.
#[derive(Debug, Default)]
struct MediaReferences {
    videos: Vec<(String, PathBuf)>,
    images: Vec<(String, PathBuf)>,
}

impl MediaReferences {
    fn contains(&self, path: &Path) -> bool {
        self.videos
            .iter()
            .chain(&self.images)
            .any(|(_, referenced)| referenced == path)
    }
}

fn media_references(catalog: &Catalog, config: &SiteConfig) -> MediaReferences {
    let mut refs = MediaReferences::default();
    for project in catalog {
        match resolve_media(project, &config.placeholder_image) {
            Media::HostedVideo { .. } => {}
            Media::DirectVideo { src } => {
                if let Some(path) = config.local_asset_path(src) {
                    refs.videos.push((project.id.clone(), path));
                }
            }
            Media::Placeholder { image } => {
                if let Some(path) = config.local_asset_path(&image) {
                    refs.images.push((project.id.clone(), path));
                }
            }
        }
    }
    refs
}

fn check_present(label: &'static str, files: &[(String, PathBuf)], missing: Level) -> Diagnostic {
    let absent: Vec<&str> = files
        .iter()
        .filter(|(_, path)| !path.is_file())
        .map(|(id, _)| id.as_str())
        .collect();

    if absent.is_empty() {
        Diagnostic::ok(label, format!("{}/{} present", files.len(), files.len()))
    } else {
        Diagnostic::new(
            label,
            missing,
            format!(
                "{}/{} present, missing for: {}",
                files.len() - absent.len(),
                files.len(),
                absent.join(", ")
            ),
        )
    }
}

fn check_orphans(assets_dir: &Path, refs: &MediaReferences) -> Diagnostic {
    let orphans: BTreeSet<PathBuf> = WalkDir::new(assets_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_media_file(path))
        .filter(|path| !refs.contains(path))
        .collect();

    if orphans.is_empty() {
        return Diagnostic::ok("orphaned media", "none".to_string());
    }
    let names: Vec<String> = orphans
        .iter()
        .map(|path| {
            path.strip_prefix(assets_dir)
                .unwrap_or(path)
                .display()
                .to_string()
        })
        .collect();
    Diagnostic::warning(
        "orphaned media",
        format!("{} unreferenced: {}", names.len(), names.join(", ")),
    )
}

fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            MEDIA_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
