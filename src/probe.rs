// SPDX-License-Identifier: PMPL-1.0-or-later

//! Aggregation of all sources into one language set
//!
//! A [`LanguageProbe`] runs every reader for its platform, resolves what
//! they return and merges the codes into a sorted, deduplicated set. Nothing
//! is cached: each call re-reads the OS.

use crate::command::{CommandRunner, SystemCommandRunner};
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::mapping::RawIdentifier;
use crate::normalize::normalize_lang_code;
use crate::sources::{Platform, SourceReader};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Ok,
    Unavailable,
}

/// What a single reader contributed to a survey.
#[derive(Debug, Clone, Serialize)]
pub struct SourceOutcome {
    pub source: &'static str,
    pub status: SourceStatus,
    pub languages: Vec<String>,
    /// Identifiers the reader found but no table could map.
    pub unmapped: Vec<RawIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full result of one probe run.
#[derive(Debug, Clone, Serialize)]
pub struct Survey {
    pub platform: Option<Platform>,
    pub languages: BTreeSet<String>,
    pub sources: Vec<SourceOutcome>,
}

impl Survey {
    pub fn contains(&self, tag: &str) -> bool {
        let wanted = normalize_lang_code(tag);
        !wanted.is_empty() && self.languages.contains(&wanted)
    }
}

pub struct LanguageProbe {
    platform: Option<Platform>,
    readers: Vec<Box<dyn SourceReader>>,
    runner: Box<dyn CommandRunner>,
    parallel: bool,
}

impl LanguageProbe {
    /// Probe for `platform` using `runner` for every OS command.
    ///
    /// A `None` platform has no readers and always reports an empty set.
    pub fn new(platform: Option<Platform>, runner: impl CommandRunner + 'static) -> Self {
        Self {
            platform,
            readers: platform.map(|p| p.readers()).unwrap_or_default(),
            runner: Box::new(runner),
            parallel: false,
        }
    }

    /// Host platform, real commands, no timeout.
    pub fn detect() -> Self {
        Self::new(Platform::current(), SystemCommandRunner::new())
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        let runner = match config.command_timeout {
            Some(timeout) => SystemCommandRunner::with_timeout(timeout),
            None => SystemCommandRunner::new(),
        };
        let platform = config.platform.or_else(Platform::current);
        Self::new(platform, runner).with_parallel(config.parallel)
    }

    /// Run readers on the rayon pool instead of one after another.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reads every source and reports per-source detail.
    ///
    /// Unavailable sources are recorded and skipped. Only a broken
    /// invocation layer makes this fail.
    pub fn survey(&self) -> Result<Survey> {
        let runner = self.runner.as_ref();
        let readings: Vec<(&'static str, Result<Vec<RawIdentifier>>)> = if self.parallel {
            self.readers
                .par_iter()
                .map(|reader| (reader.name(), reader.read(runner)))
                .collect()
        } else {
            self.readers
                .iter()
                .map(|reader| (reader.name(), reader.read(runner)))
                .collect()
        };

        let mut languages = BTreeSet::new();
        let mut sources = Vec::with_capacity(readings.len());

        for (source, reading) in readings {
            let outcome = match reading {
                Ok(ids) => resolve_all(source, ids),
                Err(err) if err.is_source_unavailable() => {
                    debug!(source, error = %err, "source unavailable");
                    SourceOutcome {
                        source,
                        status: SourceStatus::Unavailable,
                        languages: Vec::new(),
                        unmapped: Vec::new(),
                        error: Some(err.to_string()),
                    }
                }
                Err(err) => return Err(err),
            };
            languages.extend(outcome.languages.iter().cloned());
            sources.push(outcome);
        }

        Ok(Survey {
            platform: self.platform,
            languages,
            sources,
        })
    }

    /// Sorted, deduplicated language codes usable for input.
    pub fn languages(&self) -> Result<Vec<String>> {
        Ok(self.survey()?.languages.into_iter().collect())
    }

    /// Whether `tag` (any case or region form) is among [`languages`](Self::languages).
    pub fn check(&self, tag: &str) -> Result<bool> {
        let languages = self.languages()?;
        if languages.is_empty() {
            return Ok(false);
        }
        let wanted = normalize_lang_code(tag);
        Ok(languages
            .iter()
            .any(|lang| normalize_lang_code(lang) == wanted))
    }
}

fn resolve_all(source: &'static str, ids: Vec<RawIdentifier>) -> SourceOutcome {
    let mut languages = BTreeSet::new();
    let mut unmapped = Vec::new();

    for id in ids {
        match id.resolve() {
            Some(code) => {
                languages.insert(code);
            }
            None => {
                debug!(source, identifier = %id, "no language for identifier");
                unmapped.push(id);
            }
        }
    }

    debug!(source, count = languages.len(), "source read");
    SourceOutcome {
        source,
        status: SourceStatus::Ok,
        languages: languages.into_iter().collect(),
        unmapped,
        error: None,
    }
}

impl std::fmt::Debug for LanguageProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageProbe")
            .field("platform", &self.platform)
            .field(
                "readers",
                &self.readers.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("parallel", &self.parallel)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Scripted, ScriptedRunner};
    use crate::error::Error;

    const LOCALECTL: &str = "      X11 Layout: us,kr,xx\n";

    fn linux(runner: ScriptedRunner) -> LanguageProbe {
        LanguageProbe::new(Some(Platform::Linux), runner)
    }

    #[test]
    fn merges_and_sorts() {
        let probe = linux(ScriptedRunner::new().stdout("localectl status", LOCALECTL));
        assert_eq!(probe.languages().unwrap(), vec!["en", "ko", "xx"]);
    }

    #[test]
    fn check_normalizes_input() {
        let probe = linux(ScriptedRunner::new().stdout("localectl status", LOCALECTL));
        assert!(probe.check("ko-KR").unwrap());
        assert!(probe.check("EN").unwrap());
        assert!(probe.check("en_GB").unwrap());
        assert!(!probe.check("ja").unwrap());
        assert!(!probe.check("").unwrap());
    }

    #[test]
    fn all_sources_missing_is_empty_not_error() {
        let probe = LanguageProbe::new(Some(Platform::MacOs), ScriptedRunner::new());
        let survey = probe.survey().unwrap();
        assert!(survey.languages.is_empty());
        assert_eq!(survey.sources.len(), 3);
        assert!(survey
            .sources
            .iter()
            .all(|s| s.status == SourceStatus::Unavailable && s.error.is_some()));
        assert!(!probe.check("en").unwrap());
    }

    #[test]
    fn no_platform_has_no_sources() {
        let probe = LanguageProbe::new(None, ScriptedRunner::new());
        let survey = probe.survey().unwrap();
        assert!(survey.sources.is_empty());
        assert!(survey.languages.is_empty());
    }

    #[test]
    fn plumbing_error_propagates() {
        let runner = ScriptedRunner::new().respond("localectl status", Scripted::Broken);
        let err = linux(runner).languages().unwrap_err();
        assert!(matches!(err, Error::Invocation { .. }));
    }

    #[test]
    fn unmapped_lang_ids_are_reported_not_returned() {
        let runner = ScriptedRunner::new().stdout(
            "powershell -NoProfile -NonInteractive -Command Get-WinUserLanguageList | ForEach-Object { $_.InputMethodTips }",
            "0409:00000409\n00ff:000000ff\n",
        );
        let survey = LanguageProbe::new(Some(Platform::Windows), runner)
            .survey()
            .unwrap();
        assert_eq!(survey.languages.iter().collect::<Vec<_>>(), vec!["en"]);
        assert_eq!(survey.sources[0].unmapped, vec![RawIdentifier::LangId(0x00ff)]);
        assert!(!survey.languages.contains("unknown"));
    }

    #[test]
    fn parallel_matches_sequential() {
        let script = || {
            ScriptedRunner::new()
                .stdout(
                    "defaults read com.apple.HIToolbox AppleEnabledInputSources",
                    "\"KeyboardLayout Name\" = \"U.S.\";\n\"KeyboardLayout Name\" = \"2-Set Korean\";\n",
                )
                .stdout("defaults read -g AppleLanguages", "(\n    \"fr-CA\"\n)\n")
        };
        let sequential = LanguageProbe::new(Some(Platform::MacOs), script());
        let parallel = LanguageProbe::new(Some(Platform::MacOs), script()).with_parallel(true);
        assert_eq!(sequential.languages().unwrap(), vec!["en", "fr", "ko"]);
        assert_eq!(parallel.languages().unwrap(), sequential.languages().unwrap());
    }

    #[test]
    fn survey_contains_normalizes() {
        let probe = linux(ScriptedRunner::new().stdout("localectl status", LOCALECTL));
        let survey = probe.survey().unwrap();
        assert!(survey.contains("KO_kr"));
        assert!(!survey.contains(""));
    }
}
