//! Language codes and text direction.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// Thai
    Th,
    /// English (the fallback language)
    En,
    /// Japanese
    Jp,
    /// Chinese
    Cn,
    /// Arabic, the only right-to-left language
    Ar,
}

/// Writing direction of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right
    Ltr,
    /// Right to left
    Rtl,
}

impl Direction {
    /// Value of the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry of the navbar language dropdown.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LanguageOption {
    /// Language this entry selects
    pub code: LanguageCode,
    /// Short label shown in the collapsed navbar
    pub label: &'static str,
    /// Native language name
    pub full_label: &'static str,
}

/// Dropdown order of the navbar language selector.
pub const LANGUAGE_OPTIONS: [LanguageOption; 5] = [
    LanguageOption {
        code: LanguageCode::En,
        label: "EN",
        full_label: "English",
    },
    LanguageOption {
        code: LanguageCode::Th,
        label: "TH",
        full_label: "ไทย",
    },
    LanguageOption {
        code: LanguageCode::Cn,
        label: "CN",
        full_label: "中文",
    },
    LanguageOption {
        code: LanguageCode::Jp,
        label: "JP",
        full_label: "日本語",
    },
    LanguageOption {
        code: LanguageCode::Ar,
        label: "AR",
        full_label: "العربية",
    },
];

impl LanguageCode {
    /// Every supported language, in catalog order.
    pub const ALL: [LanguageCode; 5] = [
        LanguageCode::Th,
        LanguageCode::En,
        LanguageCode::Jp,
        LanguageCode::Cn,
        LanguageCode::Ar,
    ];

    /// The language used whenever a code is not recognized.
    pub const FALLBACK: LanguageCode = LanguageCode::En;

    /// The wire code (`th`, `en`, `jp`, `cn`, `ar`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Th => "th",
            LanguageCode::En => "en",
            LanguageCode::Jp => "jp",
            LanguageCode::Cn => "cn",
            LanguageCode::Ar => "ar",
        }
    }

    /// Parse a code, falling back to English when it is not recognized.
    pub fn parse_or_fallback(code: &str) -> LanguageCode {
        code.parse().unwrap_or(Self::FALLBACK)
    }

    /// Writing direction for this language.
    pub fn direction(&self) -> Direction {
        match self {
            LanguageCode::Ar => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }

    /// BCP 47 tag for the `lang` attribute of the page.
    pub fn html_lang(&self) -> &'static str {
        match self {
            LanguageCode::Th => "th",
            LanguageCode::En => "en",
            LanguageCode::Jp => "ja",
            LanguageCode::Cn => "zh",
            LanguageCode::Ar => "ar",
        }
    }
}

impl FromStr for LanguageCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "th" => Ok(LanguageCode::Th),
            "en" => Ok(LanguageCode::En),
            "jp" => Ok(LanguageCode::Jp),
            "cn" => Ok(LanguageCode::Cn),
            "ar" => Ok(LanguageCode::Ar),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction for a raw code: `ar` is right-to-left, anything else,
/// unrecognized codes included, is left-to-right.
pub fn direction_for(code: &str) -> Direction {
    match code.parse::<LanguageCode>() {
        Ok(lang) => lang.direction(),
        Err(_) => Direction::Ltr,
    }
}
