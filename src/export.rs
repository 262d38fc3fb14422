// SPDX-License-Identifier: PMPL-1.0-or-later

//! Snapshot bundle: every page of the site for one locale, plus enough
//! metadata to tell two snapshots of different catalogs apart.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::i18n::Localizer;
use crate::types::CategoryFilter;
use crate::view::{build_grid, detail_page, sort_by_end_date_descending, DetailPage, GridPage};
use anyhow::{Context, Result};
use serde::Serialize;

pub const EXPORT_SCHEMA: &str = "portfolio.catalog-export";
pub const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct ExportBundle<'a> {
    pub schema: &'static str,
    pub version: u32,
    pub exported_at: String,
    pub locale: String,
    pub catalog_digest: String,
    pub project_count: usize,
    pub grid: GridPage<'a>,
    /// Detail pages in grid order.
    pub details: Vec<DetailPage<'a>>,
}

impl<'a> ExportBundle<'a> {
    pub fn build(catalog: &'a Catalog, config: &'a SiteConfig, loc: &Localizer) -> Result<Self> {
        let catalog_digest = catalog.digest().context("hashing catalog")?;
        let details = sort_by_end_date_descending(catalog)
            .into_iter()
            .map(|p| detail_page(p, config, loc))
            .collect();

        Ok(Self {
            schema: EXPORT_SCHEMA,
            version: EXPORT_VERSION,
            exported_at: chrono::Utc::now().to_rfc3339(),
            locale: loc.tag().to_string(),
            catalog_digest,
            project_count: catalog.len(),
            grid: build_grid(catalog, &CategoryFilter::All, config, loc),
            details,
        })
    }
}
