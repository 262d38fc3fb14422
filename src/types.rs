// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for the portfolio catalog
//!
//! A [`Project`] is the only entity. Localized attributes come in pairs: the
//! primary field holds default-locale (Spanish) text and the `*_alt` field an
//! optional alternate-locale (English) translation.

use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project category. Closed set; drives grid filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Web,
    #[serde(alias = "Videojuegos")]
    Games,
    Multimedia,
}

impl Category {
    /// Parse a category name exactly as it appears in catalog data or UI state.
    ///
    /// Accepts the English names and the Spanish `Videojuegos`. Matching is
    /// case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Web" => Some(Category::Web),
            "Games" | "Videojuegos" => Some(Category::Games),
            "Multimedia" => Some(Category::Multimedia),
            _ => None,
        }
    }

    /// All categories, in filter-bar order.
    pub fn all() -> &'static [Category] {
        &[Category::Web, Category::Games, Category::Multimedia]
    }

    /// Display label in the given UI language.
    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Category::Web, _) => "Web",
            (Category::Games, Lang::Es) => "Videojuegos",
            (Category::Games, Lang::En) => "Games",
            (Category::Multimedia, _) => "Multimedia",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Web => "Web",
            Category::Games => "Games",
            Category::Multimedia => "Multimedia",
        };
        write!(f, "{}", name)
    }
}

/// Category filter held by the grid front end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Sentinel: every category.
    #[default]
    All,
    Only(Category),
    /// A value that names no category. Matches nothing.
    Unmatched(String),
}

impl CategoryFilter {
    /// Parse a raw filter value. `All` and `Todos` are the sentinel; anything
    /// that is neither the sentinel nor a category name becomes `Unmatched`.
    pub fn parse(value: &str) -> Self {
        match value {
            "All" | "Todos" => CategoryFilter::All,
            other => match Category::parse(other) {
                Some(category) => CategoryFilter::Only(category),
                None => CategoryFilter::Unmatched(other.to_string()),
            },
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
            CategoryFilter::Unmatched(_) => false,
        }
    }

    pub fn label(&self, lang: Lang) -> String {
        match self {
            CategoryFilter::All => match lang {
                Lang::Es => "Todos".to_string(),
                Lang::En => "All".to_string(),
            },
            CategoryFilter::Only(category) => category.label(lang).to_string(),
            CategoryFilter::Unmatched(raw) => raw.clone(),
        }
    }
}

/// A single portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_alt: Option<String>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_alt: Option<String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_alt: Option<String>,
    /// `YYYY-MM`
    pub start_period: String,
    /// `YYYY-MM`; sort key.
    pub end_period: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_fallback_url: Option<String>,
}

/// Returns the value when it holds something other than whitespace.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
