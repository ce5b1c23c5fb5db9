// SPDX-License-Identifier: PMPL-1.0-or-later

//! X11 keyboard layout codes to language codes

/// Maps an X11 layout code (`us`, `kr`, `de`, ...) to a language code.
///
/// Unknown layouts come back unchanged: many X11 layout names are already
/// the language code (`fr`, `ru`, `lt`), so an unlisted one is a better
/// guess than nothing.
pub fn layout_language(layout: &str) -> &str {
    match layout {
        "us" | "gb" | "ca" | "au" | "ie" | "nz" => "en",
        "kr" => "ko",
        "jp" => "ja",
        "cn" | "tw" => "zh",
        "br" | "pt" => "pt",
        "latam" | "es" => "es",
        "at" => "de",
        "ua" => "uk",
        "se" => "sv",
        "dk" => "da",
        "cz" => "cs",
        "gr" => "el",
        "il" => "he",
        "ir" => "fa",
        "by" => "be",
        "vn" => "vi",
        "in" => "hi",
        "ara" => "ar",
        "ge" => "ka",
        "am" => "hy",
        "rs" => "sr",
        "si" => "sl",
        "ee" => "et",
        "al" => "sq",
        "dz" => "ar",
        "pk" => "ur",
        "bd" => "bn",
        "kz" => "kk",
        "kg" => "ky",
        _ => layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_layouts() {
        for layout in ["us", "gb", "ca", "au"] {
            assert_eq!(layout_language(layout), "en", "layout {}", layout);
        }
    }

    #[test]
    fn country_codes_become_languages() {
        assert_eq!(layout_language("kr"), "ko");
        assert_eq!(layout_language("jp"), "ja");
        assert_eq!(layout_language("cn"), "zh");
        assert_eq!(layout_language("ua"), "uk");
        assert_eq!(layout_language("br"), "pt");
    }

    #[test]
    fn language_named_layouts_are_kept() {
        assert_eq!(layout_language("ru"), "ru");
        assert_eq!(layout_language("de"), "de");
        assert_eq!(layout_language("fr"), "fr");
    }

    #[test]
    fn unknown_layout_passes_through() {
        assert_eq!(layout_language("xx"), "xx");
        assert_eq!(layout_language("dvorak"), "dvorak");
    }
}
