// SPDX-License-Identifier: PMPL-1.0-or-later

//! Windows keyboard layouts as language ids

use super::SourceReader;
use crate::command::CommandRunner;
use crate::error::Result;
use crate::mapping::RawIdentifier;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

const INPUT_METHOD_TIPS: &str = "Get-WinUserLanguageList | ForEach-Object { $_.InputMethodTips }";
const PRELOAD_KEY: &str = r"HKCU\Keyboard Layout\Preload";

// `0409:00000409` or `0412:{GUID}{GUID}`; the LANGID precedes the colon.
static TIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*([0-9A-Fa-f]{4}):").expect("input method tip pattern is valid")
});

// `    1    REG_SZ    00000409`; the LANGID is the low word of the KLID.
static PRELOAD_KLID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"REG_SZ\s+([0-9A-Fa-f]{8})\b").expect("preload pattern is valid")
});

/// Installed keyboard layouts for the current user.
///
/// Uses the input method tips PowerShell reports for the user language
/// list. When PowerShell is absent or reports nothing, falls back to the
/// registry's layout preload list.
pub struct KeyboardLayoutReader;

impl SourceReader for KeyboardLayoutReader {
    fn name(&self) -> &'static str {
        "keyboard-layouts"
    }

    fn read(&self, runner: &dyn CommandRunner) -> Result<Vec<RawIdentifier>> {
        match runner.run(
            "powershell",
            &["-NoProfile", "-NonInteractive", "-Command", INPUT_METHOD_TIPS],
        ) {
            Ok(output) => {
                let ids = parse_input_method_tips(&output);
                if !ids.is_empty() {
                    return Ok(ids);
                }
                debug!("powershell listed no input method tips, reading registry");
            }
            Err(err) if err.is_source_unavailable() => {
                debug!(error = %err, "powershell unavailable, reading registry");
            }
            Err(err) => return Err(err),
        }

        let output = runner.run("reg", &["query", PRELOAD_KEY])?;
        Ok(parse_preload(&output))
    }
}

pub fn parse_input_method_tips(output: &str) -> Vec<RawIdentifier> {
    TIP.captures_iter(output)
        .filter_map(|caps| u16::from_str_radix(&caps[1], 16).ok())
        .map(RawIdentifier::LangId)
        .collect()
}

pub fn parse_preload(output: &str) -> Vec<RawIdentifier> {
    PRELOAD_KLID
        .captures_iter(output)
        .filter_map(|caps| u32::from_str_radix(&caps[1], 16).ok())
        .map(|klid| RawIdentifier::LangId((klid & 0xffff) as u16))
        .collect()
}
