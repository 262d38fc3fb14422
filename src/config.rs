// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration
//!
//! Read from YAML or JSON (chosen by file extension). Lookup order is an
//! explicit path, then `$PORTFOLIO_CONFIG`, then `portfolio.yaml` in the
//! working directory, then built-in defaults.

use crate::i18n::{Lang, Localizer};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "PORTFOLIO_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("default_locale '{0}' is not a supported language (expected es or en)")]
    UnsupportedLocale(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site owner, appended to document titles.
    pub owner: String,
    pub default_locale: String,
    /// Technologies shown on a grid card before the `+ N` overflow.
    pub tag_preview_limit: usize,
    /// Directory that local asset paths (`/proyectos/x.mp4`) resolve against.
    pub assets_dir: PathBuf,
    /// Image used when a project has no video; `{id}` is substituted.
    pub placeholder_image: String,
    pub contact: Vec<ContactLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Valentin Yuge".to_string(),
            default_locale: "es".to_string(),
            tag_preview_limit: 4,
            assets_dir: PathBuf::from("public"),
            placeholder_image: "/proyectos/{id}.png".to_string(),
            contact: vec![
                ContactLink {
                    label: "Email".to_string(),
                    url: "mailto:valentinyuge@gmail.com".to_string(),
                },
                ContactLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/valentinyuge".to_string(),
                },
                ContactLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/valenyuge".to_string(),
                },
            ],
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Environment(PathBuf),
    WorkingDirectory(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p)
            | ConfigSource::Environment(p)
            | ConfigSource::WorkingDirectory(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SiteConfig =
            parse_by_extension(path, &raw).map_err(|message| ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            })?;
        config.check()?;
        Ok(config)
    }

    /// Resolve and load the active configuration.
    ///
    /// An explicit or environment-provided path must be readable; the
    /// working-directory file is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfigSource::Explicit(path.to_path_buf())));
        }
        if let Ok(value) = env::var(CONFIG_ENV) {
            if !value.trim().is_empty() {
                let path = PathBuf::from(value.trim());
                return Ok((Self::load(&path)?, ConfigSource::Environment(path)));
            }
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load(&local)?, ConfigSource::WorkingDirectory(local)));
        }
        tracing::debug!("no config file found, using defaults");
        Ok((Self::default(), ConfigSource::Defaults))
    }

    fn check(&self) -> Result<(), ConfigError> {
        if Lang::from_tag(&self.default_locale).is_none() {
            return Err(ConfigError::UnsupportedLocale(self.default_locale.clone()));
        }
        Ok(())
    }

    pub fn default_lang(&self) -> Lang {
        Lang::from_tag(&self.default_locale).unwrap_or_default()
    }

    /// Localizer for this render; `requested` overrides the default locale.
    pub fn localizer(&self, requested: Option<&str>) -> Localizer {
        let tag = requested.unwrap_or(&self.default_locale);
        Localizer::new(tag, self.default_lang())
    }

    /// Map a site-absolute asset path (`/proyectos/x.mp4`) into `assets_dir`.
    /// Remote URLs map to `None`.
    pub fn local_asset_path(&self, asset: &str) -> Option<PathBuf> {
        if asset.contains("://") {
            return None;
        }
        Some(self.assets_dir.join(asset.trim_start_matches('/')))
    }
}

/// Deserialize `raw` as YAML for `.yaml`/`.yml` paths, JSON otherwise.
pub(crate) fn parse_by_extension<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<T, String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str::<T>(raw).map_err(|e| e.to_string()),
        _ => serde_json::from_str::<T>(raw).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.yaml");
        fs::write(&path, "owner: Ada\ntag_preview_limit: 2\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.owner, "Ada");
        assert_eq!(config.tag_preview_limit, 2);
        assert_eq!(config.default_locale, "es");
        assert_eq!(config.contact.len(), 3);
    }

    #[test]
    fn json_config_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        fs::write(&path, r#"{"default_locale": "en-US", "contact": []}"#).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.default_lang(), Lang::En);
        assert!(config.contact.is_empty());
    }

    #[test]
    fn unsupported_default_locale_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.yaml");
        fs::write(&path, "default_locale: fr\n").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedLocale(ref l) if l == "fr"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = SiteConfig::discover(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn asset_paths_map_into_assets_dir() {
        let config = SiteConfig::default();
        assert_eq!(
            config.local_asset_path("/proyectos/VR.mp4"),
            Some(PathBuf::from("public/proyectos/VR.mp4"))
        );
        assert_eq!(config.local_asset_path("https://youtu.be/x"), None);
    }

    #[test]
    fn requested_locale_overrides_default() {
        let config = SiteConfig::default();
        assert_eq!(config.localizer(None).lang(), Lang::Es);
        assert_eq!(config.localizer(Some("en")).lang(), Lang::En);
        assert_eq!(config.localizer(Some("de")).tag(), "de");
    }
}
