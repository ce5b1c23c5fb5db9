// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of surveys for the command line

use crate::mapping::lcid::is_known_language;
use crate::names::language_name;
use crate::probe::{SourceStatus, Survey};
use anyhow::Result;
use chrono::Utc;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Serialize)]
struct Document<'a> {
    generated_at: String,
    #[serde(flatten)]
    survey: &'a Survey,
}

impl OutputFormat {
    /// Renders the language list. `with_names` only affects text output.
    pub fn render(&self, survey: &Survey, with_names: bool) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(languages_as_text(survey, with_names)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&document(survey))?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(&document(survey))?),
        }
    }
}

fn document(survey: &Survey) -> Document<'_> {
    Document {
        generated_at: Utc::now().to_rfc3339(),
        survey,
    }
}

fn languages_as_text(survey: &Survey, with_names: bool) -> String {
    let mut out = String::new();
    for lang in &survey.languages {
        match language_name(lang).filter(|_| with_names) {
            Some(name) => {
                let _ = writeln!(out, "{:<4} {}", lang, name);
            }
            None => {
                let _ = writeln!(out, "{}", lang);
            }
        }
    }
    out
}

/// Per-source diagnostics, one block per reader.
pub fn sources_as_text(survey: &Survey) -> String {
    let mut out = String::new();
    let platform = survey
        .platform
        .map(|p| p.to_string())
        .unwrap_or_else(|| "unsupported".to_string());
    let _ = writeln!(out, "{} {}", "platform:".bold(), platform);

    if survey.sources.is_empty() {
        let _ = writeln!(out, "  no sources for this platform");
    }

    for source in &survey.sources {
        let tag = match source.status {
            SourceStatus::Ok if source.languages.is_empty() => "WARN".yellow(),
            SourceStatus::Ok => "OK".green(),
            SourceStatus::Unavailable => "SKIP".red(),
        };
        let detail = match &source.error {
            Some(err) => err.clone(),
            None if source.languages.is_empty() => "no languages found".to_string(),
            None => source.languages.join(", "),
        };
        let _ = writeln!(out, "  [{}] {:22} {}", tag, source.source, detail);

        for id in &source.unmapped {
            let _ = writeln!(out, "         unmapped {}", id);
        }
        for lang in source
            .languages
            .iter()
            .filter(|l| !is_known_language(l) && language_name(l).is_none())
        {
            let _ = writeln!(out, "         {:?} is not a known language code", lang);
        }
    }

    let languages: Vec<&str> = survey.languages.iter().map(String::as_str).collect();
    let _ = writeln!(out, "{} {}", "languages:".bold(), languages.join(", "));
    out
}
