// SPDX-License-Identifier: PMPL-1.0-or-later

//! macOS user defaults: input sources, preferred languages, installed voices
//!
//! All three readers parse the property-list text printed by `defaults read`.

use super::SourceReader;
use crate::command::CommandRunner;
use crate::error::Result;
use crate::mapping::RawIdentifier;
use regex::Regex;
use std::sync::LazyLock;

// `"KeyboardLayout Name" = "U.S.";`, `"Bundle ID" = com.apple.inputmethod.Korean;`
static INPUT_SOURCE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""?(?:KeyboardLayout Name|Bundle ID|Input Mode)"?\s*=\s*(?:"([^"]*)"|([^;\s]+))\s*;"#)
        .expect("input source pattern is valid")
});

// One list item per line: `"en-US",` or bare `en`.
static LIST_ITEM_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*"?([A-Za-z]{1,8}(?:[-_][A-Za-z0-9]{1,8})*)"?[ \t]*,?[ \t]*\r?$"#)
        .expect("list item pattern is valid")
});

// `Languages = ( "en-US", "ko-KR" );`, possibly spanning lines.
static LANGUAGES_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"Languages"?\s*=\s*\(([^)]*)\)"#).expect("languages pattern is valid")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{1,8}(?:[-_][A-Za-z0-9]{1,8})*$").expect("tag pattern is valid")
});

/// Enabled keyboard layouts and input methods (`AppleEnabledInputSources`).
pub struct InputSourcesReader;

impl SourceReader for InputSourcesReader {
    fn name(&self) -> &'static str {
        "input-sources"
    }

    fn read(&self, runner: &dyn CommandRunner) -> Result<Vec<RawIdentifier>> {
        let output = runner.run(
            "defaults",
            &["read", "com.apple.HIToolbox", "AppleEnabledInputSources"],
        )?;
        Ok(parse_input_sources(&output))
    }
}

/// The user's ordered language preference list (`AppleLanguages`).
pub struct PreferredLanguagesReader;

impl SourceReader for PreferredLanguagesReader {
    fn name(&self) -> &'static str {
        "preferred-languages"
    }

    fn read(&self, runner: &dyn CommandRunner) -> Result<Vec<RawIdentifier>> {
        let output = runner.run("defaults", &["read", "-g", "AppleLanguages"])?;
        Ok(parse_preferred_languages(&output))
    }
}

/// Languages of installed speech voices (`com.apple.voiceservices`).
pub struct VoiceLanguagesReader;

impl SourceReader for VoiceLanguagesReader {
    fn name(&self) -> &'static str {
        "voice-languages"
    }

    fn read(&self, runner: &dyn CommandRunner) -> Result<Vec<RawIdentifier>> {
        let output = runner.run("defaults", &["read", "com.apple.voiceservices"])?;
        Ok(parse_voice_languages(&output))
    }
}

pub fn parse_input_sources(output: &str) -> Vec<RawIdentifier> {
    INPUT_SOURCE_FIELD
        .captures_iter(output)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|value| value.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(|value| RawIdentifier::InputSource(value.to_string()))
        .collect()
}

pub fn parse_preferred_languages(output: &str) -> Vec<RawIdentifier> {
    LIST_ITEM_TAG
        .captures_iter(output)
        .map(|caps| RawIdentifier::LocaleTag(caps[1].to_string()))
        .collect()
}

pub fn parse_voice_languages(output: &str) -> Vec<RawIdentifier> {
    LANGUAGES_LIST
        .captures_iter(output)
        .flat_map(|caps| {
            caps[1]
                .split(',')
                .map(|item| item.trim().trim_matches('"').to_string())
                .collect::<Vec<_>>()
        })
        .filter(|item| TAG.is_match(item))
        .map(RawIdentifier::LocaleTag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ScriptedRunner;

    const INPUT_SOURCES: &str = r#"(
        {
        InputSourceKind = "Keyboard Layout";
        "KeyboardLayout ID" = 0;
        "KeyboardLayout Name" = "U.S.";
    },
        {
        InputSourceKind = "Keyboard Layout";
        "KeyboardLayout ID" = 252;
        "KeyboardLayout Name" = ABC;
    },
        {
        "Bundle ID" = "com.apple.inputmethod.Korean";
        "Input Mode" = "com.apple.inputmethod.Korean.2SetKorean";
        InputSourceKind = "Input Mode";
    },
        {
        "Bundle ID" = "com.apple.CharacterPaletteIM";
        InputSourceKind = "Non Keyboard Input Method";
    }
)
"#;

    const APPLE_LANGUAGES: &str = "(\n    \"en-US\",\n    \"ko-KR\",\n    \"zh-Hant-TW\",\n    ja\n)\n";

    const VOICE_SERVICES: &str = r#"{
    VoiceServicesInstalledVoices =     (
                {
            Languages =             (
                "en-US"
            );
            Name = Samantha;
        },
                {
            Languages =             (
                "ko-KR",
                "ko"
            );
            Name = Yuna;
        }
    );
}
"#;

    fn strings(ids: &[RawIdentifier]) -> Vec<String> {
        ids.iter()
            .map(|id| match id {
                RawIdentifier::InputSource(s) | RawIdentifier::LocaleTag(s) => s.clone(),
                other => panic!("unexpected identifier {:?}", other),
            })
            .collect()
    }

    #[test]
    fn input_source_fields_quoted_and_bare() {
        let ids = parse_input_sources(INPUT_SOURCES);
        assert_eq!(
            strings(&ids),
            vec![
                "U.S.",
                "ABC",
                "com.apple.inputmethod.Korean",
                "com.apple.inputmethod.Korean.2SetKorean",
                "com.apple.CharacterPaletteIM",
            ]
        );
        assert!(ids
            .iter()
            .all(|id| matches!(id, RawIdentifier::InputSource(_))));
    }

    #[test]
    fn input_source_kind_is_not_a_field() {
        let ids = parse_input_sources(r#"{ InputSourceKind = "Input Mode"; }"#);
        assert!(ids.is_empty());
    }

    #[test]
    fn input_source_names_with_spaces() {
        let ids = parse_input_sources(r#""KeyboardLayout Name" = "2-Set Korean";"#);
        assert_eq!(strings(&ids), vec!["2-Set Korean"]);
    }

    #[test]
    fn preferred_languages_quoted_and_bare() {
        let ids = parse_preferred_languages(APPLE_LANGUAGES);
        assert_eq!(strings(&ids), vec!["en-US", "ko-KR", "zh-Hant-TW", "ja"]);
    }

    #[test]
    fn preferred_languages_ignores_brackets() {
        assert!(parse_preferred_languages("(\n)\n").is_empty());
    }

    #[test]
    fn voice_languages_from_nested_lists() {
        let ids = parse_voice_languages(VOICE_SERVICES);
        assert_eq!(strings(&ids), vec!["en-US", "ko-KR", "ko"]);
    }

    #[test]
    fn voice_languages_single_line() {
        let ids = parse_voice_languages(r#"Languages = ( "fr-CA" );"#);
        assert_eq!(strings(&ids), vec!["fr-CA"]);
    }

    #[test]
    fn readers_issue_defaults_commands() {
        let runner = ScriptedRunner::new()
            .stdout(
                "defaults read com.apple.HIToolbox AppleEnabledInputSources",
                INPUT_SOURCES,
            )
            .stdout("defaults read -g AppleLanguages", APPLE_LANGUAGES);

        assert_eq!(InputSourcesReader.read(&runner).unwrap().len(), 5);
        assert_eq!(PreferredLanguagesReader.read(&runner).unwrap().len(), 4);
        assert!(VoiceLanguagesReader
            .read(&runner)
            .unwrap_err()
            .is_source_unavailable());
    }
}
