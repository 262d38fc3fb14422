// SPDX-License-Identifier: PMPL-1.0-or-later

//! portfolio-catalog: the project catalog and bilingual view-model behind a
//! personal portfolio site.
//!
//! The site shows a grid of project cards and a detail page per project,
//! in Spanish by default and English when asked. Everything it displays is
//! derived here:
//!
//! 1. **Catalog**: the validated, ordered list of projects (embedded
//!    reference data or an external JSON/YAML file).
//! 2. **View**: locale field resolution, period formatting, newest-first
//!    ordering, category filtering, call-to-action and embed resolution,
//!    and full page assembly.
//! 3. **I18n**: the static UI string tables and ISO 639-1 helpers.
//!
//! `render`, `export`, `storage` and `diagnostics` back the `portfolio`
//! command-line front end.

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod export;
pub mod i18n;
pub mod render;
pub mod storage;
pub mod types;
pub mod view;
