// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code validation and metadata.
//!
//! Used by the `--lang` flag: a tag is accepted when its base subtag is a
//! known two-letter code, even if the portfolio has no chrome translation for
//! it (such visitors get default-locale chrome and alternate-locale content).
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// # Examples
/// ```
/// assert!(portfolio_catalog::i18n::is_valid_iso639_1("es"));
/// assert!(!portfolio_catalog::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    // Every two-letter code in the ISO 639-1 column of the Library of
    // Congress ISO 639-2 code list, lowercase only.
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// Base subtag of a language tag, lowercased (`es-AR` → `es`).
pub fn base_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// English name of an ISO 639-1 code, for the codes a visitor is likely to
/// arrive with.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "es" => Some("Spanish"),
        "en" => Some("English"),
        "pt" => Some("Portuguese"),
        "fr" => Some("French"),
        "it" => Some("Italian"),
        "de" => Some("German"),
        _ => None,
    }
}

/// Native name of an ISO 639-1 code, as shown on the language selector.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "es" => Some("Español"),
        "en" => Some("English"),
        "pt" => Some("Português"),
        "fr" => Some("Français"),
        "it" => Some("Italiano"),
        "de" => Some("Deutsch"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_iso639_1("es"));
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("pt"));
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("spa"));
        assert!(!is_valid_iso639_1("ES"));
    }

    #[test]
    fn base_subtag_strips_region() {
        assert_eq!(base_subtag("es-AR"), "es");
        assert_eq!(base_subtag("EN_gb"), "en");
        assert_eq!(base_subtag("pt"), "pt");
        assert_eq!(base_subtag(""), "");
    }

    #[test]
    fn names_resolve() {
        assert_eq!(language_name("es"), Some("Spanish"));
        assert_eq!(native_name("es"), Some("Español"));
        assert_eq!(native_name("xx"), None);
    }
}
