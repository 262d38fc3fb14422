// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the portfolio.
//!
//! Two separate concerns live here:
//!
//! - **Chrome strings** (headings, button labels, notes) come from a static
//!   table keyed by dotted names such as `"detail.about"`. See [`t`].
//! - **Project content** is resolved per field by
//!   [`crate::view::resolve_localized_field`] against the raw locale tag.
//!
//! A [`Localizer`] is built once at startup from configuration and the
//! requested tag, then handed to whatever renders pages.
//!
//! | Code | Language | Role                         |
//! |------|----------|------------------------------|
//! | es   | Spanish  | default, primary fields      |
//! | en   | English  | alternate, `*_alt` fields    |

mod catalog;
mod iso639;

pub use catalog::{t, Lang};
pub use iso639::{base_subtag, is_valid_iso639_1, language_name, native_name};

/// Active locale for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localizer {
    tag: String,
    lang: Lang,
}

impl Localizer {
    /// Build from a requested tag. Tags with no chrome translation use
    /// `fallback` for chrome strings but keep the tag for content resolution.
    pub fn new(tag: &str, fallback: Lang) -> Self {
        let lang = match Lang::from_tag(tag) {
            Some(lang) => lang,
            None => {
                tracing::debug!(tag, fallback = %fallback, "no chrome catalog for tag, using fallback");
                fallback
            }
        };
        Self {
            tag: tag.trim().to_string(),
            lang,
        }
    }

    pub fn for_lang(lang: Lang) -> Self {
        Self {
            tag: lang.code().to_string(),
            lang,
        }
    }

    /// Raw locale tag, used for content-field resolution.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Language used for chrome strings and labels.
    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn t(&self, key: &str) -> &'static str {
        t(self.lang, key)
    }
}
