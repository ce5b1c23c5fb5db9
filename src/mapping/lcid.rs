// SPDX-License-Identifier: PMPL-1.0-or-later

//! Windows language identifiers (LANGID) to language tags
//!
//! Table follows [MS-LCID] v20240423. Only the 16-bit LANGID half of an LCID
//! is used; keyboard layout handles carry it in their low word.

use crate::normalize::normalize_lang_code;

/// Sentinel returned by [`lang_code`] for ids missing from the table.
pub const UNKNOWN: &str = "unknown";

/// Mask selecting the primary language bits of a LANGID.
pub const PRIMARY_LANG_MASK: u16 = 0x03ff;

/// Sorted by id so lookups can binary search.
static LANG_IDS: &[(u16, &str)] = &[
    // primary language ids
    (0x0001, "ar"), (0x0002, "bg"), (0x0003, "ca"), (0x0004, "zh-CN"),
    (0x0005, "cs"), (0x0006, "da"), (0x0007, "de"), (0x0008, "el"),
    (0x0009, "en"), (0x000a, "es"), (0x000b, "fi"), (0x000c, "fr"),
    (0x000d, "he"), (0x000e, "hu"), (0x000f, "is"), (0x0010, "it"),
    (0x0011, "ja"), (0x0012, "ko"), (0x0013, "nl"), (0x0014, "no"),
    (0x0015, "pl"), (0x0016, "pt"), (0x0017, "rm"), (0x0018, "ro"),
    (0x0019, "ru"), (0x001a, "hr"), (0x001b, "sk"), (0x001c, "sq"),
    (0x001d, "sv"), (0x001e, "th"), (0x001f, "tr"), (0x0020, "ur"),
    (0x0021, "id"), (0x0022, "uk"), (0x0023, "be"), (0x0024, "sl"),
    (0x0025, "et"), (0x0026, "lv"), (0x0027, "lt"), (0x0028, "tg"),
    (0x0029, "fa"), (0x002a, "vi"), (0x002b, "hy"), (0x002c, "az"),
    (0x002d, "eu"), (0x002e, "hsb"), (0x002f, "mk"), (0x0036, "af"),
    (0x0037, "ka"), (0x0038, "fo"), (0x0039, "hi"), (0x003a, "mt"),
    (0x003b, "se"), (0x003c, "ga"), (0x003e, "ms"), (0x003f, "kk"),
    (0x0040, "ky"), (0x0041, "sw"), (0x0042, "tk"), (0x0043, "uz"),
    (0x0044, "tt"), (0x0045, "bn"), (0x0046, "pa"), (0x0047, "gu"),
    (0x0048, "or"), (0x0049, "ta"), (0x004a, "te"), (0x004b, "kn"),
    (0x004c, "ml"), (0x004d, "as"), (0x004e, "mr"), (0x004f, "sa"),
    (0x0050, "mn"), (0x0051, "bo"), (0x0052, "cy"), (0x0053, "km"),
    (0x0054, "lo"), (0x0056, "gl"), (0x0057, "kok"), (0x005a, "syr"),
    (0x005b, "si"), (0x005c, "chr"), (0x005d, "iu"), (0x005e, "am"),
    (0x005f, "tzm"), (0x0061, "ne"), (0x0062, "fy"), (0x0063, "ps"),
    (0x0064, "fil"), (0x0065, "dv"), (0x0067, "ff"), (0x0068, "ha"),
    (0x006a, "yo"), (0x006b, "quz"), (0x006c, "nso"), (0x006d, "ba"),
    (0x006e, "lb"), (0x006f, "kl"), (0x0070, "ig"), (0x0073, "ti"),
    (0x0078, "ii"), (0x007a, "arn"), (0x007e, "br"), (0x0080, "ug"),
    (0x0081, "mi"), (0x0082, "oc"), (0x0083, "co"), (0x0084, "gsw"),
    (0x0085, "sah"), (0x0087, "rw"), (0x0088, "wo"), (0x008c, "prs"),
    (0x0091, "gd"), (0x0092, "ku"),
    // locale-specific ids
    (0x0401, "ar"), (0x0402, "bg"), (0x0403, "ca"), (0x0404, "zh-TW"),
    (0x0405, "cs"), (0x0406, "da"), (0x0407, "de"), (0x0408, "el"),
    (0x0409, "en"), (0x040a, "es"), (0x040b, "fi"), (0x040c, "fr"),
    (0x040d, "he"), (0x040e, "hu"), (0x040f, "is"), (0x0410, "it"),
    (0x0411, "ja"), (0x0412, "ko"), (0x0413, "nl"), (0x0414, "nb"),
    (0x0415, "pl"), (0x0416, "pt"), (0x0417, "rm"), (0x0418, "ro"),
    (0x0419, "ru"), (0x041a, "hr"), (0x041b, "sk"), (0x041c, "sq"),
    (0x041d, "sv"), (0x041e, "th"), (0x041f, "tr"), (0x0420, "ur"),
    (0x0421, "id"), (0x0422, "uk"), (0x0423, "be"), (0x0424, "sl"),
    (0x0425, "et"), (0x0426, "lv"), (0x0427, "lt"), (0x0428, "tg"),
    (0x0429, "fa"), (0x042a, "vi"), (0x042b, "hy"), (0x042c, "az"),
    (0x042d, "eu"), (0x042e, "hsb"), (0x042f, "mk"), (0x0436, "af"),
    (0x0437, "ka"), (0x0438, "fo"), (0x0439, "hi"), (0x043a, "mt"),
    (0x043b, "se"), (0x043e, "ms"), (0x043f, "kk"), (0x0440, "ky"),
    (0x0441, "sw"), (0x0442, "tk"), (0x0443, "uz"), (0x0444, "tt"),
    (0x0445, "bn"), (0x0446, "pa"), (0x0447, "gu"), (0x0448, "or"),
    (0x0449, "ta"), (0x044a, "te"), (0x044b, "kn"), (0x044c, "ml"),
    (0x044d, "as"), (0x044e, "mr"), (0x044f, "sa"), (0x0450, "mn"),
    (0x0451, "bo"), (0x0452, "cy"), (0x0453, "km"), (0x0454, "lo"),
    (0x0456, "gl"), (0x0457, "kok"), (0x045a, "syr"), (0x045b, "si"),
    (0x045c, "chr"), (0x045d, "iu"), (0x045e, "am"), (0x0461, "ne"),
    (0x0462, "fy"), (0x0463, "ps"), (0x0464, "fil"), (0x0465, "dv"),
    (0x0467, "ff"), (0x0468, "ha"), (0x046a, "yo"), (0x046b, "quz"),
    (0x046c, "nso"), (0x046d, "ba"), (0x046e, "lb"), (0x046f, "kl"),
    (0x0470, "ig"), (0x0473, "ti"), (0x0475, "haw"), (0x0478, "ii"),
    (0x047a, "arn"), (0x047c, "moh"), (0x047e, "br"), (0x0480, "ug"),
    (0x0481, "mi"), (0x0482, "oc"), (0x0483, "co"), (0x0484, "gsw"),
    (0x0485, "sah"), (0x0487, "rw"), (0x0488, "wo"), (0x048c, "prs"),
    (0x0491, "gd"), (0x0492, "ku"), (0x0801, "ar"), (0x0804, "zh-CN"),
    (0x0807, "de"), (0x0809, "en"), (0x080a, "es"), (0x080c, "fr"),
    (0x0810, "it"), (0x0813, "nl"), (0x0814, "nn"), (0x0816, "pt"),
    (0x081a, "sr"), (0x081d, "sv"), (0x082c, "az"), (0x082e, "dsb"),
    (0x083b, "se"), (0x083c, "ga"), (0x083e, "ms"), (0x0843, "uz"),
    (0x0845, "bn"), (0x0846, "pa"), (0x0849, "ta"), (0x0850, "mn"),
    (0x0859, "sd"), (0x085d, "iu"), (0x085f, "tzm"), (0x0861, "ne"),
    (0x0867, "ff"), (0x086b, "quz"), (0x0873, "ti"), (0x0c01, "ar"),
    (0x0c04, "zh-HK"), (0x0c07, "de"), (0x0c09, "en"), (0x0c0a, "es"),
    (0x0c0c, "fr"), (0x0c1a, "sr"), (0x0c3b, "se"), (0x0c51, "dz"),
    (0x0c6b, "quz"), (0x1001, "ar"), (0x1004, "zh-SG"), (0x1007, "de"),
    (0x1009, "en"), (0x100a, "es"), (0x100c, "fr"), (0x101a, "hr"),
    (0x103b, "smj"), (0x1401, "ar"), (0x1404, "zh-MO"), (0x1407, "de"),
    (0x1409, "en"), (0x140a, "es"), (0x140c, "fr"), (0x141a, "bs"),
    (0x143b, "smj"), (0x1801, "ar"), (0x1809, "en"), (0x180a, "es"),
    (0x180c, "fr"), (0x181a, "sr"), (0x183b, "sma"), (0x1c01, "ar"),
    (0x1c09, "en"), (0x1c0a, "es"), (0x1c1a, "sr"), (0x1c3b, "sma"),
    (0x2001, "ar"), (0x2009, "en"), (0x200a, "es"), (0x201a, "bs"),
    (0x203b, "sms"), (0x2401, "ar"), (0x2409, "en"), (0x240a, "es"),
    (0x240c, "fr"), (0x241a, "sr"), (0x243b, "smn"), (0x2801, "ar"),
    (0x2809, "en"), (0x280a, "es"), (0x280c, "fr"), (0x281a, "sr"),
    (0x2c01, "ar"), (0x2c09, "en"), (0x2c0a, "es"), (0x2c0c, "fr"),
    (0x2c1a, "sr"), (0x3001, "ar"), (0x3009, "en"), (0x300a, "es"),
    (0x300c, "fr"), (0x301a, "sr"), (0x3401, "ar"), (0x3409, "en"),
    (0x340a, "es"), (0x340c, "fr"), (0x3801, "ar"), (0x380a, "es"),
    (0x380c, "fr"), (0x3c01, "ar"), (0x3c09, "en"), (0x3c0a, "es"),
    (0x3c0c, "fr"), (0x4001, "ar"), (0x4009, "en"), (0x400a, "es"),
    (0x4409, "en"), (0x440a, "es"), (0x4809, "en"), (0x480a, "es"),
    (0x4c09, "en"), (0x4c0a, "es"), (0x500a, "es"), (0x540a, "es"),
    (0x580a, "es"), (0x5c0a, "es"), (0x7c04, "zh-TW"), (0x7c14, "nb"),
    (0x7c1a, "sr"), (0x7c28, "tg"), (0x7c2e, "dsb"), (0x7c3b, "smj"),
    (0x7c43, "uz"), (0x7c46, "pa"), (0x7c50, "mn"), (0x7c59, "sd"),
    (0x7c5c, "chr"), (0x7c5d, "iu"), (0x7c5f, "tzm"), (0x7c67, "ff"),
    (0x7c68, "ha"), (0x7c92, "ku"),
];

/// Looks up an exact LANGID. Returns [`UNKNOWN`] when the id is not listed.
pub fn lang_code(id: u16) -> &'static str {
    LANG_IDS
        .binary_search_by_key(&id, |(key, _)| *key)
        .map(|idx| LANG_IDS[idx].1)
        .unwrap_or(UNKNOWN)
}

/// Resolves a LANGID, retrying with only its primary language bits.
///
/// `None` means neither the full id nor its primary id is known.
pub fn resolve_lang_id(id: u16) -> Option<&'static str> {
    [id, id & PRIMARY_LANG_MASK]
        .into_iter()
        .map(lang_code)
        .find(|code| *code != UNKNOWN)
}

/// Whether `code` is the primary subtag of some language in the LANGID table.
///
/// Layout codes that fall through the X11 table unchanged are not always
/// languages (`dvorak`, `xx`); this lets diagnostics point them out.
pub fn is_known_language(code: &str) -> bool {
    LANG_IDS
        .iter()
        .any(|(_, tag)| normalize_lang_code(tag) == code)
}
