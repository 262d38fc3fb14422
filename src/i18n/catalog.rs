// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for the portfolio chrome.
//!
//! Embeds every user-facing string that is not project content as a
//! compile-time static table. Lookup is a linear scan over a few dozen keys,
//! done a handful of times per rendered page.
//!
//! ## Adding a new key
//!
//! 1. Add the Spanish entry to `ES` (source language, every key lives there)
//! 2. Add the English entry to `EN` (missing keys fall back to Spanish)

use serde::{Deserialize, Serialize};

/// Supported UI languages.
///
/// Spanish is the source language of both the catalog data and this table;
/// English is the alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Es,
    En,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// Match a language tag by prefix, so regional variants such as `es-AR`
    /// or `en_GB` resolve to their base language. Case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Lang> {
        let tag = tag.trim().to_ascii_lowercase();
        Lang::all()
            .iter()
            .copied()
            .find(|lang| tag.starts_with(lang.code()))
    }

    /// All supported languages, in selector order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Es, Lang::En]
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Es
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the specified language.
///
/// Falls back to Spanish if the key is not found in the requested language.
/// Unknown keys yield the empty string.
///
/// # Examples
///
/// ```
/// use portfolio_catalog::i18n::{t, Lang};
/// assert_eq!(t(Lang::Es, "detail.back"), "← Volver a la grilla");
/// assert_eq!(t(Lang::En, "detail.back"), "← Back to grid");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::Es {
        if let Some(value) = lookup(ES, key) {
            return value;
        }
    }
    ""
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Es => ES,
        Lang::En => EN,
    }
}

// ─── Spanish (source language, all keys defined here) ───────────────

const ES: &[(&str, &str)] = &[
    ("grid.subtitle", "Estudiante de Diseño Multimedial @ UNLP | Desarrollador"),
    ("grid.details", "VER DETALLES →"),
    ("grid.empty", "No hay proyectos en esta categoría"),
    ("detail.back", "← Volver a la grilla"),
    ("detail.about", "Sobre el proyecto"),
    ("detail.technologies", "Tecnologías utilizadas"),
    ("detail.embed_title", "Memoria Técnica y Proceso de Diseño"),
    ("detail.not_found", "404 - Proyecto no encontrado"),
    ("detail.video_of", "Video de"),
    ("cta.case_study", "LEER BITÁCORA / PROCESO ↗"),
    ("cta.external", "VER PROYECTO ↗"),
    ("cta.offline", "* Proyecto de hardware/offline - Documentación en video"),
    ("contact.title", "Contacto"),
    ("contact.description", "¿Tenés un proyecto en mente? Escribime."),
    ("page.default_suffix", "Portfolio"),
];

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("grid.subtitle", "Multimedia Design Student @ UNLP | Developer"),
    ("grid.details", "VIEW DETAILS →"),
    ("grid.empty", "No projects in this category"),
    ("detail.back", "← Back to grid"),
    ("detail.about", "About the project"),
    ("detail.technologies", "Technologies used"),
    ("detail.embed_title", "Technical Report & Design Process"),
    ("detail.not_found", "404 - Project not found"),
    ("detail.video_of", "Video of"),
    ("cta.case_study", "READ CASE STUDY / LOG ↗"),
    ("cta.external", "VIEW PROJECT ↗"),
    ("cta.offline", "* Hardware/Offline project - Video documentation only"),
    ("contact.title", "Contact"),
    ("contact.description", "Have a project in mind? Get in touch."),
    ("page.default_suffix", "Portfolio"),
];
