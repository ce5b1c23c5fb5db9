// SPDX-License-Identifier: PMPL-1.0-or-later

//! Platform identifiers and their translation to language codes
//!
//! Each OS names its keyboard layouts and locales differently. Readers hand
//! back [`RawIdentifier`]s tagged with the scheme they came from, and
//! [`RawIdentifier::resolve`] picks the matching table:
//!
//! | Scheme | Table | On a miss |
//! |--------|-------|-----------|
//! | macOS input source | [`keyword`] | excluded |
//! | X11 layout code | [`xkb`] | passed through |
//! | Windows LANGID | [`lcid`] | excluded |
//! | locale tag | none | normalized as is |

pub mod keyword;
pub mod lcid;
pub mod xkb;

use crate::normalize::normalize_lang_code;
use serde::Serialize;
use std::fmt;

/// A platform-native identifier as read from the OS, before mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RawIdentifier {
    /// macOS keyboard layout name, bundle id or input mode.
    InputSource(String),
    /// X11 keyboard layout code.
    LayoutCode(String),
    /// Locale tag such as `en-US` or `zh-Hant`.
    LocaleTag(String),
    /// Windows 16-bit language id.
    LangId(u16),
}

impl RawIdentifier {
    /// Maps and normalizes the identifier.
    ///
    /// `None` when the identifier has no mapping; the caller drops it.
    pub fn resolve(&self) -> Option<String> {
        let code = match self {
            RawIdentifier::InputSource(name) => {
                normalize_lang_code(keyword::input_source_language(name)?)
            }
            RawIdentifier::LayoutCode(layout) => {
                normalize_lang_code(xkb::layout_language(layout.trim()))
            }
            RawIdentifier::LocaleTag(tag) => normalize_lang_code(tag.trim()),
            RawIdentifier::LangId(id) => normalize_lang_code(lcid::resolve_lang_id(*id)?),
        };

        if code.is_empty() || code == lcid::UNKNOWN {
            None
        } else {
            Some(code)
        }
    }
}

impl fmt::Display for RawIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawIdentifier::InputSource(name) => write!(f, "input source {:?}", name),
            RawIdentifier::LayoutCode(layout) => write!(f, "layout {:?}", layout),
            RawIdentifier::LocaleTag(tag) => write!(f, "locale {:?}", tag),
            RawIdentifier::LangId(id) => write!(f, "langid 0x{:04x}", id),
        }
    }
}
