// SPDX-License-Identifier: PMPL-1.0-or-later

//! keyloc: which natural languages can this machine type in?
//!
//! The crate reads OS keyboard and locale configuration and reduces it to a
//! set of primary language codes (`"en"`, `"ko"`, `"zh"`, ...).
//!
//! SOURCES:
//! 1. **Linux / BSD**: X11 layouts from `localectl`, or `setxkbmap`.
//! 2. **macOS**: enabled input sources, preferred languages and installed
//!    voices from `defaults`.
//! 3. **Windows**: keyboard layout language ids from PowerShell, or the
//!    registry preload list.
//!
//! A source that cannot be read is skipped; a machine with no readable
//! source simply has no languages. Every call re-reads the OS.
//!
//! ```no_run
//! let langs = keyloc::get_languages()?;
//! let korean = keyloc::check_language("ko-KR")?;
//! # Ok::<(), keyloc::Error>(())
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod mapping;
pub mod names;
pub mod normalize;
pub mod probe;
pub mod report;
pub mod sources;

pub use config::ProbeConfig;
pub use error::{Error, Result};
pub use normalize::normalize_lang_code;
pub use probe::{LanguageProbe, SourceOutcome, SourceStatus, Survey};
pub use sources::Platform;

/// Languages usable for input on this machine, sorted and deduplicated.
pub fn get_languages() -> Result<Vec<String>> {
    LanguageProbe::detect().languages()
}

/// Whether `code` (`"en"`, `"en-US"`, `"EN_gb"`, ...) is among
/// [`get_languages`].
pub fn check_language(code: &str) -> Result<bool> {
    LanguageProbe::detect().check(code)
}
