//! Localized text resolution.
//!
//! [`Resolver::resolve`] turns a multilingual record into the string shown to
//! the user. It never fails: when the requested language has no real
//! translation it walks a fallback chain.
//!
//! 1. the requested language, unless it is missing or a tagged placeholder;
//! 2. the fallback language (English), under the same condition;
//! 3. the reference language, patched through the overlay store when the
//!    overlay has a translation for its canonical key; a blank reference or
//!    one that cleans up to nothing is skipped;
//! 4. the first real translation in canonical order, then the first value of
//!    any kind, skipping values that clean up to nothing, then the empty
//!    string.
//!
//! [`Resolver::require_text`] is the strict variant used by validation tools.

use thiserror::Error;

use crate::{
    dataset::{Record, Slot},
    language::Language,
    overlay::OverlayStore,
    text::{normalize, strip},
};

/// Immutable resolution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Language the dataset is authored in. Overlay keys derive from it.
    pub reference: Language,
    /// Most complete secondary language, tried right after the requested one.
    pub fallback: Language,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            reference: Language::Cs,
            fallback: Language::En,
        }
    }
}

/// The requested language has no usable value in a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing '{language}' translation for {}", .record.preview())]
pub struct MissingTranslationError {
    pub record: Record,
    pub language: Language,
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    overlays: &'a OverlayStore,
    options: ResolveOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(overlays: &'a OverlayStore, options: ResolveOptions) -> Self {
        Self { overlays, options }
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Best available display string for `language`.
    pub fn resolve(&self, record: &Record, language: Language) -> String {
        self.resolve_inner(record, Some(language))
    }

    /// Same as [`Resolver::resolve`] for a raw language code.
    ///
    /// An unsupported code is not an error; it simply never matches, so the
    /// chain continues with the fallback language.
    pub fn resolve_code(&self, record: &Record, code: &str) -> String {
        let language = Language::from_code(code);
        if language.is_none() {
            tracing::debug!(code, "unsupported language code, using fallback chain");
        }
        self.resolve_inner(record, language)
    }

    fn resolve_inner(&self, record: &Record, language: Option<Language>) -> String {
        let ResolveOptions {
            reference,
            fallback,
        } = self.options;

        if let Some(text) = language.and_then(|lang| record.slot(lang).text()) {
            return strip(text);
        }

        if let Some(text) = record.slot(fallback).text() {
            return strip(text);
        }

        if let Slot::Text(base) | Slot::Placeholder(base) = record.slot(reference) {
            let key = normalize(base);
            let overlay = language
                .filter(|_| !key.is_empty())
                .and_then(|lang| self.overlays.lookup_non_blank(lang, &key));
            if let Some(text) = overlay {
                return text.to_string();
            }
            // A bare tag strips to nothing; keep looking.
            let stripped = strip(base);
            if !stripped.is_empty() {
                return stripped;
            }
        }

        let first_real = Language::ALL
            .into_iter()
            .filter_map(|lang| record.slot(lang).text())
            .map(strip)
            .find(|text| !text.is_empty());
        if let Some(text) = first_real {
            return text;
        }

        record
            .iter()
            .map(|(_, value)| strip(value))
            .find(|text| !text.is_empty())
            .unwrap_or_default()
    }

    /// Raw trimmed value for `language`, or an error when it is absent or blank.
    ///
    /// Placeholders are returned as-is: this checks presence, not quality.
    pub fn require_text<'r>(
        &self,
        record: &'r Record,
        language: Language,
    ) -> Result<&'r str, MissingTranslationError> {
        match record.slot(language) {
            Slot::Text(s) | Slot::Placeholder(s) => Ok(s.trim()),
            Slot::Absent | Slot::Blank => Err(MissingTranslationError {
                record: record.clone(),
                language,
            }),
        }
    }
}
