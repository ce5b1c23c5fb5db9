// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language tag normalization.
//!
//! Every code that enters or leaves the crate passes through
//! [`normalize_lang_code`], so `"en-US"`, `"en_GB"` and `"EN"` all compare
//! equal as `"en"`.

/// Reduces a language tag to its lower-cased primary subtag.
///
/// Underscores are treated as hyphens. Never fails: an empty tag yields an
/// empty code.
///
/// # Examples
/// ```
/// assert_eq!(keyloc::normalize_lang_code("en-US"), "en");
/// assert_eq!(keyloc::normalize_lang_code("ZH-Hant"), "zh");
/// assert_eq!(keyloc::normalize_lang_code(""), "");
/// ```
pub fn normalize_lang_code(tag: &str) -> String {
    let lower = tag.to_lowercase().replace('_', "-");
    lower.split('-').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_region_and_script() {
        assert_eq!(normalize_lang_code("en-US"), "en");
        assert_eq!(normalize_lang_code("fr_CA"), "fr");
        assert_eq!(normalize_lang_code("ZH-Hant"), "zh");
        assert_eq!(normalize_lang_code("zh-Hans-CN"), "zh");
    }

    #[test]
    fn lowercases_bare_codes() {
        assert_eq!(normalize_lang_code("es"), "es");
        assert_eq!(normalize_lang_code("DE"), "de");
        assert_eq!(normalize_lang_code("Fil"), "fil");
    }

    #[test]
    fn case_and_separator_insensitive() {
        let expected = normalize_lang_code("EN");
        assert_eq!(expected, "en");
        assert_eq!(normalize_lang_code("en-US"), expected);
        assert_eq!(normalize_lang_code("en_GB"), expected);
    }

    #[test]
    fn idempotent() {
        for tag in ["en-US", "pt_BR", "ZH-Hant", "", "-", "_x", "sr-Latn-RS", "kok"] {
            let once = normalize_lang_code(tag);
            assert_eq!(normalize_lang_code(&once), once, "tag {:?}", tag);
        }
    }

    #[test]
    fn degenerate_input_does_not_fail() {
        assert_eq!(normalize_lang_code(""), "");
        assert_eq!(normalize_lang_code("-US"), "");
        assert_eq!(normalize_lang_code("_"), "");
    }
}
