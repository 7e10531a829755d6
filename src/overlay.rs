//! Overlay dictionaries.
//!
//! An overlay maps the canonical (normalized) reference-language text of a
//! record to a human translation. Overlays patch holes in minor languages
//! without editing the dataset file. Keys must already be in [`normalize`]
//! form; lookups are exact.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::{language::Language, text::normalize};

/// Canonical key -> translation.
pub type OverlayDictionary = HashMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct OverlayStore {
    dictionaries: HashMap<Language, OverlayDictionary>,
}

#[derive(Debug, Default)]
pub struct LoadOverlaysResult {
    pub store: OverlayStore,
    pub warnings: Vec<String>,
}

/// An overlay key that does not match its own normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayKeyIssue {
    pub language: Language,
    pub key: String,
    pub normalized: String,
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dictionary for a language.
    pub fn insert(&mut self, language: Language, dictionary: OverlayDictionary) {
        self.dictionaries.insert(language, dictionary);
    }

    /// Builder-style insert of a single entry.
    pub fn with_entry(
        mut self,
        language: Language,
        key: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.dictionaries
            .entry(language)
            .or_default()
            .insert(key.into(), translation.into());
        self
    }

    /// Exact lookup. `None` means no overlay, which is different from an
    /// overlay whose value is an empty string.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.dictionaries
            .get(&language)
            .and_then(|dictionary| dictionary.get(key))
            .map(String::as_str)
    }

    /// Lookup that only accepts overlays with visible text.
    pub fn lookup_non_blank(&self, language: Language, key: &str) -> Option<&str> {
        self.lookup(language, key)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Languages with a loaded dictionary, in canonical order.
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.dictionaries.contains_key(lang))
            .collect()
    }

    /// Total number of entries across all dictionaries.
    pub fn len(&self) -> usize {
        self.dictionaries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys that are not in normalized form and would therefore never match.
    ///
    /// Sorted by language, then key.
    pub fn key_issues(&self) -> Vec<OverlayKeyIssue> {
        let mut issues: Vec<OverlayKeyIssue> = self
            .dictionaries
            .iter()
            .flat_map(|(language, dictionary)| {
                dictionary.keys().filter_map(move |key| {
                    let normalized = normalize(key);
                    (normalized != *key).then(|| OverlayKeyIssue {
                        language: *language,
                        key: key.clone(),
                        normalized,
                    })
                })
            })
            .collect();
        issues.sort_by(|a, b| a.language.cmp(&b.language).then_with(|| a.key.cmp(&b.key)));
        issues
    }

    /// Load `<dir>/<code>.json` overlays.
    ///
    /// The reference language never has an overlay. Files that fail to parse,
    /// files named after unsupported codes and a missing directory are reported
    /// as warnings. Overlays are optional, so none of these is fatal.
    pub fn load_dir(dir: &Path, reference: Language) -> LoadOverlaysResult {
        let mut result = LoadOverlaysResult::default();

        if !dir.is_dir() {
            result.warnings.push(format!(
                "Overlay directory '{}' does not exist, continuing without overlays.",
                dir.display()
            ));
            return result;
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                result
                    .warnings
                    .push(format!("Failed to read overlay directory {:?}: {}", dir, e));
                return result;
            }
        };

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();
        paths.sort();

        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Some(language) = Language::from_code(stem) else {
                result.warnings.push(format!(
                    "Ignoring overlay {:?}: \"{}\" is not a supported language code",
                    path, stem
                ));
                continue;
            };
            if language == reference {
                result.warnings.push(format!(
                    "Ignoring overlay {:?}: {} is the reference language",
                    path, language
                ));
                continue;
            }

            match parse_overlay_file(&path) {
                Ok((dictionary, skipped)) => {
                    if skipped > 0 {
                        result.warnings.push(format!(
                            "Skipped {} non-string value(s) in {:?}",
                            skipped, path
                        ));
                    }
                    tracing::debug!(
                        language = %language,
                        entries = dictionary.len(),
                        "loaded overlay {}",
                        path.display()
                    );
                    result.store.insert(language, dictionary);
                }
                Err(e) => {
                    result
                        .warnings
                        .push(format!("Failed to parse {:?}: {:#}", path, e));
                }
            }
        }

        result
    }
}

/// Parse a flat `{ key: translation }` JSON file.
///
/// Returns the dictionary and the number of entries skipped because their
/// value was not a string.
pub fn parse_overlay_file(path: &Path) -> Result<(OverlayDictionary, usize)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read overlay file: {:?}", path))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse overlay file: {:?}", path))?;
    let Value::Object(map) = json else {
        anyhow::bail!("Overlay file {:?} must contain a JSON object", path);
    };

    let mut dictionary = OverlayDictionary::with_capacity(map.len());
    let mut skipped = 0;
    for (key, value) in map {
        match value {
            Value::String(translation) => {
                dictionary.insert(key, translation);
            }
            _ => skipped += 1,
        }
    }
    Ok((dictionary, skipped))
}

/// Entry counts per language, for reporting.
pub fn overlay_counts(store: &OverlayStore) -> BTreeMap<Language, usize> {
    store
        .dictionaries
        .iter()
        .map(|(language, dictionary)| (*language, dictionary.len()))
        .collect()
}
