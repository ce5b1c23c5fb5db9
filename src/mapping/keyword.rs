// SPDX-License-Identifier: PMPL-1.0-or-later

//! macOS input source names to language codes
//!
//! Identifiers such as `"2-Set Korean"`, `"U.S."` or
//! `"com.apple.inputmethod.SCIM.ITABC"` have no fixed structure, so they are
//! matched by keyword. Rules are checked top to bottom and the first hit wins.

/// (keywords, language) in priority order. Keywords are lower-case.
static INPUT_SOURCE_RULES: &[(&[&str], &str)] = &[
    (&["korean", "hangul"], "ko"),
    // SCIM.ITABC (Pinyin) contains "abc"
    (&["inputmethod.scim", "inputmethod.tcim", "itabc"], "zh"),
    (&["u.s.", "abc", "english"], "en"),
    (&["russian", "cyrillic"], "ru"),
    (&["japanese", "kana", "romaji"], "ja"),
    (&["french"], "fr"),
    (&["german"], "de"),
    (&["spanish"], "es"),
    (&["chinese", "pinyin", "zhuyin", "cangjie"], "zh"),
    (&["italian"], "it"),
    (&["portuguese"], "pt"),
    (&["dutch"], "nl"),
    (&["swedish"], "sv"),
    (&["danish"], "da"),
    (&["norwegian"], "no"),
    (&["finnish"], "fi"),
    (&["polish"], "pl"),
    (&["turkish"], "tr"),
    (&["arabic"], "ar"),
    (&["hebrew"], "he"),
    (&["greek"], "el"),
    (&["thai"], "th"),
    (&["vietnamese"], "vi"),
    (&["hindi"], "hi"),
    (&["bengali"], "bn"),
    (&["punjabi"], "pa"),
    (&["gujarati"], "gu"),
    (&["tamil"], "ta"),
    (&["telugu"], "te"),
    (&["kannada"], "kn"),
    (&["malayalam"], "ml"),
    (&["indonesian"], "id"),
    // after malayalam, which contains it
    (&["malay"], "ms"),
    (&["filipino"], "fil"),
    (&["ukrainian"], "uk"),
    (&["czech"], "cs"),
    (&["slovak"], "sk"),
    (&["hungarian"], "hu"),
    (&["romanian"], "ro"),
    (&["bulgarian"], "bg"),
    (&["croatian"], "hr"),
    (&["serbian"], "sr"),
    (&["slovenian"], "sl"),
    (&["estonian"], "et"),
    (&["latvian"], "lv"),
    (&["lithuanian"], "lt"),
];

/// Maps a free-text input source identifier to a language code.
///
/// Returns `None` when no keyword matches; such identifiers are left out of
/// the result rather than guessed at.
pub fn input_source_language(identifier: &str) -> Option<&'static str> {
    let lower = identifier.to_lowercase();
    INPUT_SOURCE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, lang)| *lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_layouts() {
        assert_eq!(input_source_language("U.S."), Some("en"));
        assert_eq!(input_source_language("ABC"), Some("en"));
        assert_eq!(input_source_language("com.apple.keylayout.ABC"), Some("en"));
        assert_eq!(input_source_language("British English"), Some("en"));
    }

    #[test]
    fn korean_layouts() {
        assert_eq!(input_source_language("2-Set Korean"), Some("ko"));
        assert_eq!(input_source_language("com.apple.inputmethod.Korean"), Some("ko"));
        assert_eq!(input_source_language("Hangul"), Some("ko"));
    }

    #[test]
    fn first_rule_wins() {
        // Both "korean" and "abc" appear; korean is checked first.
        assert_eq!(input_source_language("Korean ABC"), Some("ko"));
    }

    #[test]
    fn malayalam_is_not_malay() {
        assert_eq!(input_source_language("Malayalam"), Some("ml"));
        assert_eq!(input_source_language("Malay"), Some("ms"));
    }

    #[test]
    fn chinese_input_methods() {
        assert_eq!(input_source_language("com.apple.inputmethod.TCIM.Cangjie"), Some("zh"));
        assert_eq!(input_source_language("Pinyin - Simplified"), Some("zh"));
    }

    #[test]
    fn pinyin_input_mode_is_not_english() {
        assert_eq!(input_source_language("com.apple.inputmethod.SCIM.ITABC"), Some("zh"));
        assert_eq!(input_source_language("com.apple.inputmethod.SCIM"), Some("zh"));
        assert_eq!(input_source_language("com.apple.inputmethod.TCIM.Zhuyin"), Some("zh"));
        assert_eq!(input_source_language("com.apple.keylayout.ABC"), Some("en"));
    }

    #[test]
    fn unmatched_identifier_is_none() {
        assert_eq!(input_source_language("com.apple.CharacterPaletteIM"), None);
        assert_eq!(input_source_language(""), None);
    }
}
