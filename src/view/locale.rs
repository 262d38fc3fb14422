// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale-fallback resolution for bilingual project fields.

use crate::types::{non_empty, Project};

/// Base code of the locale whose text lives in the primary fields.
pub const DEFAULT_LOCALE_PREFIX: &str = "es";

/// True when `locale` denotes the default locale. Prefix match, so `es`,
/// `es-AR` and `ES` all qualify.
pub fn is_default_locale(locale: &str) -> bool {
    locale
        .trim()
        .to_ascii_lowercase()
        .starts_with(DEFAULT_LOCALE_PREFIX)
}

/// Pick the text to show for one localized attribute.
///
/// The default locale always gets `primary`. Any other locale gets
/// `alternate` when it holds text, else `primary`.
///
/// # Examples
///
/// ```
/// use portfolio_catalog::view::resolve_localized_field;
/// assert_eq!(resolve_localized_field("Hola", Some("Hello"), "es-AR"), "Hola");
/// assert_eq!(resolve_localized_field("Hola", Some("Hello"), "en"), "Hello");
/// assert_eq!(resolve_localized_field("Hola", None, "en"), "Hola");
/// ```
pub fn resolve_localized_field<'a>(
    primary: &'a str,
    alternate: Option<&'a str>,
    locale: &str,
) -> &'a str {
    if is_default_locale(locale) {
        return primary;
    }
    non_empty(alternate).unwrap_or(primary)
}

impl Project {
    pub fn localized_title(&self, locale: &str) -> &str {
        resolve_localized_field(&self.title, self.title_alt.as_deref(), locale)
    }

    pub fn localized_summary(&self, locale: &str) -> &str {
        resolve_localized_field(&self.summary, self.summary_alt.as_deref(), locale)
    }

    pub fn localized_body(&self, locale: &str) -> &str {
        resolve_localized_field(&self.body, self.body_alt.as_deref(), locale)
    }
}
