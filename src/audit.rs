//! Dataset completeness audits.
//!
//! Two read-only scans over a [`Dataset`]:
//!
//! - [`audit`] produces dataset-wide statistics: record totals, per-language
//!   missing and placeholder counts, and approximate duplicates;
//! - [`list_missing`] collects the canonical reference strings that still need
//!   a human translation in one language, after taking overlays into account;
//! - [`strict_gaps`] reports every record without its own value in a language.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    dataset::{Category, Dataset, Record, Slot},
    language::Language,
    overlay::OverlayStore,
    resolve::{MissingTranslationError, ResolveOptions, Resolver},
    text::{duplicate_key, normalize},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    pub questions: usize,
    pub crazy_questions: usize,
    pub challenges: usize,
}

impl CategoryTotals {
    fn add(&mut self, category: Category, count: usize) {
        match category {
            Category::Questions => self.questions += count,
            Category::CrazyQuestions => self.crazy_questions += count,
            Category::Challenges => self.challenges += count,
        }
    }

    pub fn sum(&self) -> usize {
        self.questions + self.crazy_questions + self.challenges
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStats {
    pub language: Language,
    /// Records with any value for this language, placeholders included.
    pub present: usize,
    /// Absent, blank or placeholder values.
    pub missing: usize,
    /// Placeholder values. Always a subset of `missing`.
    pub tagged: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub total: usize,
    pub topics: usize,
    pub categories: CategoryTotals,
    pub missing_translations: usize,
    pub tagged_placeholders: usize,
    /// Records whose duplicate key matches an earlier record.
    pub duplicates: usize,
    pub languages: Vec<LanguageStats>,
}

impl AuditReport {
    /// True when any audited language has missing or placeholder values.
    pub fn has_gaps(&self) -> bool {
        self.missing_translations > 0 || self.tagged_placeholders > 0
    }
}

/// Scan the whole dataset and tally translation coverage for `languages`.
///
/// Duplicate detection keys on the reference text, falling back to the
/// fallback language and then to the first value present.
pub fn audit(dataset: &Dataset, languages: &[Language], options: ResolveOptions) -> AuditReport {
    let mut categories = CategoryTotals::default();
    let mut stats: Vec<LanguageStats> = languages
        .iter()
        .map(|&language| LanguageStats {
            language,
            present: 0,
            missing: 0,
            tagged: 0,
        })
        .collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicates = 0;

    for topic in &dataset.topics {
        for category in Category::ALL {
            categories.add(category, topic.records(category).len());
        }

        for (_, record) in topic.iter() {
            for entry in stats.iter_mut() {
                let slot = record.slot(entry.language);
                if slot != Slot::Absent {
                    entry.present += 1;
                }
                if slot.is_missing() {
                    entry.missing += 1;
                }
                if matches!(slot, Slot::Placeholder(_)) {
                    entry.tagged += 1;
                }
            }

            let key = duplicate_key(canonical_source(record, options));
            if !key.is_empty() && !seen.insert(key) {
                duplicates += 1;
            }
        }
    }

    AuditReport {
        total: categories.sum(),
        topics: dataset.topics.len(),
        missing_translations: stats.iter().map(|s| s.missing).sum(),
        tagged_placeholders: stats.iter().map(|s| s.tagged).sum(),
        categories,
        duplicates,
        languages: stats,
    }
}

fn canonical_source(record: &Record, options: ResolveOptions) -> &str {
    record
        .get(options.reference)
        .or_else(|| record.get(options.fallback))
        .or_else(|| record.iter().next().map(|(_, value)| value))
        .unwrap_or("")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingList {
    pub lang: Language,
    pub count: usize,
    pub items: Vec<String>,
}

/// Canonical reference strings still lacking a translation in `language`.
///
/// A record counts when its `language` value is absent, blank or a
/// placeholder and no non-blank overlay exists for its canonical key. Items
/// are deduplicated and keep first-seen order.
pub fn list_missing(
    dataset: &Dataset,
    overlays: &OverlayStore,
    language: Language,
    reference: Language,
) -> MissingList {
    let mut seen: HashSet<String> = HashSet::new();
    let mut items = Vec::new();

    for (_, _, record) in dataset.iter() {
        if !record.slot(language).is_missing() {
            continue;
        }
        let key = normalize(record.get(reference).unwrap_or(""));
        if key.is_empty() || overlays.lookup_non_blank(language, &key).is_some() {
            continue;
        }
        if seen.insert(key.clone()) {
            items.push(key);
        }
    }

    MissingList {
        lang: language,
        count: items.len(),
        items,
    }
}

/// Records whose `language` value is absent or blank.
///
/// Placeholders count as present and overlays are not consulted.
pub fn strict_gaps(
    dataset: &Dataset,
    resolver: &Resolver<'_>,
    language: Language,
) -> Vec<MissingTranslationError> {
    dataset
        .iter()
        .filter_map(|(_, _, record)| resolver.require_text(record, language).err())
        .collect()
}
