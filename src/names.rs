// SPDX-License-Identifier: PMPL-1.0-or-later

//! English display names for language codes.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// English name of a language code, for CLI listings.
///
/// Covers the codes the built-in tables can produce most often; `None`
/// otherwise.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "ja" => Some("Japanese"),
        "pt" => Some("Portuguese"),
        "zh" => Some("Chinese"),
        "ko" => Some("Korean"),
        "it" => Some("Italian"),
        "ru" => Some("Russian"),
        "ar" => Some("Arabic"),
        "hi" => Some("Hindi"),
        "bn" => Some("Bengali"),
        "pa" => Some("Punjabi"),
        "gu" => Some("Gujarati"),
        "ta" => Some("Tamil"),
        "te" => Some("Telugu"),
        "kn" => Some("Kannada"),
        "ml" => Some("Malayalam"),
        "nl" => Some("Dutch"),
        "sv" => Some("Swedish"),
        "pl" => Some("Polish"),
        "tr" => Some("Turkish"),
        "vi" => Some("Vietnamese"),
        "th" => Some("Thai"),
        "uk" => Some("Ukrainian"),
        "be" => Some("Belarusian"),
        "cs" => Some("Czech"),
        "sk" => Some("Slovak"),
        "el" => Some("Greek"),
        "he" => Some("Hebrew"),
        "fa" => Some("Persian"),
        "da" => Some("Danish"),
        "fi" => Some("Finnish"),
        "no" => Some("Norwegian"),
        "nb" => Some("Norwegian Bokmål"),
        "nn" => Some("Norwegian Nynorsk"),
        "hu" => Some("Hungarian"),
        "ro" => Some("Romanian"),
        "bg" => Some("Bulgarian"),
        "hr" => Some("Croatian"),
        "sr" => Some("Serbian"),
        "sl" => Some("Slovenian"),
        "et" => Some("Estonian"),
        "lv" => Some("Latvian"),
        "lt" => Some("Lithuanian"),
        "id" => Some("Indonesian"),
        "ms" => Some("Malay"),
        "fil" => Some("Filipino"),
        "ka" => Some("Georgian"),
        "hy" => Some("Armenian"),
        "kk" => Some("Kazakh"),
        "ky" => Some("Kyrgyz"),
        "ur" => Some("Urdu"),
        "sq" => Some("Albanian"),
        "is" => Some("Icelandic"),
        "ca" => Some("Catalan"),
        "eu" => Some("Basque"),
        "gl" => Some("Galician"),
        _ => None,
    }
}
