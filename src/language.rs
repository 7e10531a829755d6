//! Supported language codes.
//!
//! The dataset is authored in a closed set of ten languages. Everything that
//! indexes a record by language goes through [`Language`], so an unknown code
//! can only enter the system through [`Language::from_code`], which returns
//! `None` instead of failing.

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Number of supported languages. Records are fixed arrays of this length.
pub const LANGUAGE_COUNT: usize = 10;

/// Codes of right-to-left scripts, including ones outside the supported set.
pub const RTL_CODES: &[&str] = &[
    "ur", "ar", "he", "fa", "ps", "ckb", "sd", "ug", "dv", "ks", "yi",
];

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ValueEnum,
    schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cs,
    En,
    Zh,
    Hi,
    Es,
    Fr,
    Pt,
    Ru,
    Ur,
    Bn,
}

impl Language {
    /// All languages in canonical order.
    pub const ALL: [Language; LANGUAGE_COUNT] = [
        Language::Cs,
        Language::En,
        Language::Zh,
        Language::Hi,
        Language::Es,
        Language::Fr,
        Language::Pt,
        Language::Ru,
        Language::Ur,
        Language::Bn,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::Cs => "cs",
            Language::En => "en",
            Language::Zh => "zh",
            Language::Hi => "hi",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Ur => "ur",
            Language::Bn => "bn",
        }
    }

    /// Parse a language code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Position of this language in [`Language::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The name of the language in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Cs => "Čeština",
            Language::En => "English",
            Language::Zh => "中文",
            Language::Hi => "हिंदी",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::Pt => "Português",
            Language::Ru => "Русский",
            Language::Ur => "اردو",
            Language::Bn => "বাংলা",
        }
    }

    pub fn is_rtl(self) -> bool {
        is_rtl_code(self.code())
    }
}

/// Checks whether a language code is written right-to-left.
pub fn is_rtl_code(code: &str) -> bool {
    RTL_CODES.contains(&code)
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: \"{0}\"")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
