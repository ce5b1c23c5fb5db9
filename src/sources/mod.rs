// SPDX-License-Identifier: PMPL-1.0-or-later

//! OS data sources for keyboard and locale information
//!
//! A [`Platform`] owns the set of [`SourceReader`]s that make sense on that
//! OS. Selection happens at runtime so every reader can be exercised from
//! any host with canned command output.

pub mod linux;
pub mod macos;
pub mod windows;

use crate::command::CommandRunner;
use crate::error::Result;
use crate::mapping::RawIdentifier;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Queries one OS data source and returns the identifiers it lists.
///
/// An empty list is a valid answer. Errors for which
/// [`Error::is_source_unavailable`](crate::Error::is_source_unavailable)
/// holds mean the source could not be read at all.
pub trait SourceReader: Send + Sync {
    /// Short stable name used in logs and reports.
    fn name(&self) -> &'static str;

    fn read(&self, runner: &dyn CommandRunner) -> Result<Vec<RawIdentifier>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    #[value(name = "macos")]
    MacOs,
    Windows,
}

impl Platform {
    /// The platform this binary was built for, if it has readers.
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "macos") {
            Some(Platform::MacOs)
        } else if cfg!(target_os = "windows") {
            Some(Platform::Windows)
        } else if cfg!(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        )) {
            Some(Platform::Linux)
        } else {
            None
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "linux" | "x11" | "unix" => Some(Platform::Linux),
            "macos" | "darwin" | "osx" | "mac" => Some(Platform::MacOs),
            "windows" | "win" | "win32" => Some(Platform::Windows),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
        }
    }

    /// Readers for this platform, in the order their results are merged.
    pub fn readers(&self) -> Vec<Box<dyn SourceReader>> {
        match self {
            Platform::Linux => vec![Box::new(linux::X11LayoutReader)],
            Platform::MacOs => vec![
                Box::new(macos::InputSourcesReader),
                Box::new(macos::PreferredLanguagesReader),
                Box::new(macos::VoiceLanguagesReader),
            ],
            Platform::Windows => vec![Box::new(windows::KeyboardLayoutReader)],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(Platform::parse("darwin"), Some(Platform::MacOs));
        assert_eq!(Platform::parse(" Windows "), Some(Platform::Windows));
        assert_eq!(Platform::parse("linux"), Some(Platform::Linux));
        assert_eq!(Platform::parse("beos"), None);
    }

    #[test]
    fn parse_round_trips_display() {
        for platform in [Platform::Linux, Platform::MacOs, Platform::Windows] {
            assert_eq!(Platform::parse(&platform.to_string()), Some(platform));
        }
    }

    #[test]
    fn reader_sets_per_platform() {
        let names = |p: Platform| p.readers().iter().map(|r| r.name()).collect::<Vec<_>>();
        assert_eq!(names(Platform::Linux), vec!["x11-layouts"]);
        assert_eq!(
            names(Platform::MacOs),
            vec!["input-sources", "preferred-languages", "voice-languages"]
        );
        assert_eq!(names(Platform::Windows), vec!["keyboard-layouts"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn current_platform_on_linux() {
        assert_eq!(Platform::current(), Some(Platform::Linux));
    }
}
