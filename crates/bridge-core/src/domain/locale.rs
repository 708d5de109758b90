//! Culture contexts for converting textual configuration values.
//!
//! Every numeric and boolean setting is stored as text, and the way text is
//! read depends on a culture.  For the integer settings the only culture rule
//! that matters is the negative sign.  A [`Locale`] is resolved
//! from the document's `locale` element and then passed explicitly into each
//! conversion.  Nothing is installed as process-wide state, so two loads with
//! different locales can never observe each other's culture.
//!
//! # How resolution works
//!
//! `CULTURES` is a compile-time table of supported language-region tags.
//! Resolution is case-insensitive and accepts `_` in place of `-`
//! (`de_de` resolves to `de-DE`).  A neutral tag with no region (`de`)
//! resolves to the first culture of that language in the table.
//!
//! # Integer rules
//!
//! Integers are plain in every culture: optional surrounding whitespace, an
//! optional leading sign, then ASCII digits.  Group separators are rejected
//! even in cultures that use them for display, so `"1,000"` is malformed under
//! `en-US` and `"1.000"` is malformed under `de-DE`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Locale used before any document has been read, and for every log message
/// emitted before a document's locale is resolved.
pub const FALLBACK_LOCALE: &str = "en-US";

/// Errors produced while resolving a locale identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    /// The identifier is not a recognised culture tag.
    #[error("unsupported locale identifier {0:?}")]
    Unsupported(String),
}

/// Formatting rules for one language-region culture.
#[derive(Debug, PartialEq, Eq)]
struct Culture {
    tag: &'static str,
    negative_sign: char,
}

impl Culture {
    fn language(&self) -> &'static str {
        self.tag.split_once('-').map_or(self.tag, |(language, _)| language)
    }
}

const fn culture(tag: &'static str, negative_sign: char) -> Culture {
    Culture { tag, negative_sign }
}

/// Supported cultures.  The first entry of each language is its primary
/// culture; the first entry overall must be [`FALLBACK_LOCALE`].
const CULTURES: &[Culture] = &[
    culture("en-US", '-'),
    culture("en-GB", '-'),
    culture("en-AU", '-'),
    culture("en-CA", '-'),
    culture("de-DE", '-'),
    culture("de-AT", '-'),
    culture("de-CH", '-'),
    culture("fr-FR", '-'),
    culture("fr-CA", '-'),
    culture("es-ES", '-'),
    culture("es-MX", '-'),
    culture("it-IT", '-'),
    culture("pt-BR", '-'),
    culture("pt-PT", '-'),
    culture("nl-NL", '-'),
    culture("pl-PL", '-'),
    culture("ru-RU", '-'),
    culture("uk-UA", '-'),
    culture("sv-SE", '\u{2212}'),
    culture("nb-NO", '\u{2212}'),
    culture("fi-FI", '\u{2212}'),
    culture("da-DK", '-'),
    culture("tr-TR", '-'),
    culture("ja-JP", '-'),
    culture("zh-CN", '-'),
    culture("ko-KR", '-'),
];

/// A resolved culture context.
///
/// Cheap to copy; all instances point into the static culture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    culture: &'static Culture,
}

impl Locale {
    /// Resolves a locale identifier such as `"en-US"` or `"pt_br"`.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Unsupported`] when the identifier matches no
    /// culture in the table.
    pub fn resolve(identifier: &str) -> Result<Self, LocaleError> {
        let normalized = identifier.trim().replace('_', "-");
        let found = if normalized.contains('-') {
            CULTURES
                .iter()
                .find(|c| c.tag.eq_ignore_ascii_case(&normalized))
        } else if normalized.is_empty() {
            None
        } else {
            CULTURES
                .iter()
                .find(|c| c.language().eq_ignore_ascii_case(&normalized))
        };

        found
            .map(|culture| Self { culture })
            .ok_or_else(|| LocaleError::Unsupported(identifier.to_string()))
    }

    /// Returns the [`FALLBACK_LOCALE`] culture.
    pub fn fallback() -> Self {
        Self {
            culture: &CULTURES[0],
        }
    }

    /// Canonical tag of this culture, e.g. `"de-DE"`.
    pub fn tag(&self) -> &'static str {
        self.culture.tag
    }

    pub fn negative_sign(&self) -> char {
        self.culture.negative_sign
    }

    /// Parses a plain integer and narrows it to `T`.
    ///
    /// Accepts the culture's negative sign as well as ASCII `-` and `+`.
    /// Returns `None` for empty input, any non-digit character (group
    /// separators included), or a value outside the range of `T`.
    pub fn parse_integer<T: TryFrom<i128>>(&self, text: &str) -> Option<T> {
        let trimmed = text.trim();
        let (negative, digits) = if let Some(rest) = trimmed
            .strip_prefix(self.culture.negative_sign)
            .or_else(|| trimmed.strip_prefix('-'))
        {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            (false, rest)
        } else {
            (false, trimmed)
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let mut value: i128 = 0;
        for b in digits.bytes() {
            value = value.checked_mul(10)?.checked_add(i128::from(b - b'0'))?;
        }
        if negative {
            value = -value;
        }
        T::try_from(value).ok()
    }

    /// Parses `true` or `false`, ignoring ASCII case and surrounding
    /// whitespace.
    ///
    /// Casing is compared with ASCII rules in every culture so that, for
    /// example, `"TRUE"` still parses under `tr-TR`.
    pub fn parse_bool(&self, text: &str) -> Option<bool> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Some(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    /// Formats an integer using this culture's negative sign, without grouping.
    pub fn format_integer(&self, value: impl Into<i128>) -> String {
        let value = value.into();
        if value < 0 {
            format!("{}{}", self.culture.negative_sign, value.unsigned_abs())
        } else {
            value.to_string()
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::fallback()
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.culture.tag)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
