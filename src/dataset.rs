//! Question dataset model and loading.
//!
//! A dataset is a flat list of topics. Each topic holds three categorized
//! lists of multilingual records. Loading is lenient: malformed topics and
//! entries are skipped and counted so that a single bad entry never stops an
//! audit.

use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    language::{LANGUAGE_COUNT, Language},
    text::is_tagged_placeholder,
};

// ============================================================
// Record
// ============================================================

/// State of one language field of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    /// No value, or an empty string.
    Absent,
    /// Whitespace only.
    Blank,
    /// Machine-filled value starting with a `[XX]` tag.
    Placeholder(&'a str),
    /// A real translation.
    Text(&'a str),
}

impl<'a> Slot<'a> {
    pub fn text(self) -> Option<&'a str> {
        match self {
            Slot::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for absent, blank and placeholder values.
    pub fn is_missing(self) -> bool {
        !matches!(self, Slot::Text(_))
    }
}

/// A single question or challenge, with one optional string per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Record {
    values: [Option<String>; LANGUAGE_COUNT],
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly useful for tests and fixtures.
    pub fn with(mut self, language: Language, value: impl Into<String>) -> Self {
        self.set(language, value);
        self
    }

    pub fn set(&mut self, language: Language, value: impl Into<String>) {
        let value = value.into();
        self.values[language.index()] = if value.is_empty() { None } else { Some(value) };
    }

    /// Raw value for a language. Empty strings are stored as absent.
    pub fn get(&self, language: Language) -> Option<&str> {
        self.values[language.index()].as_deref()
    }

    pub fn slot(&self, language: Language) -> Slot<'_> {
        match self.get(language) {
            None => Slot::Absent,
            Some(s) if s.trim().is_empty() => Slot::Blank,
            Some(s) if is_tagged_placeholder(s) => Slot::Placeholder(s),
            Some(s) => Slot::Text(s),
        }
    }

    /// Present values in canonical language order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        Language::ALL
            .into_iter()
            .filter_map(|lang| self.get(lang).map(|value| (lang, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Build a record from a JSON value. Returns `None` if it is not an object.
    pub fn from_value(value: &Value) -> Option<Record> {
        value.as_object().map(Record::from_map)
    }

    fn from_map(map: &Map<String, Value>) -> Record {
        let mut record = Record::new();
        for (key, value) in map {
            if let (Some(lang), Some(text)) = (Language::from_code(key), value.as_str()) {
                record.set(lang, text);
            }
        }
        record
    }

    /// Short human-readable label, used in error messages.
    pub fn preview(&self) -> String {
        const MAX_CHARS: usize = 40;
        let Some((lang, text)) = self.iter().next() else {
            return "<empty record>".to_string();
        };
        let mut preview: String = text.chars().take(MAX_CHARS).collect();
        if text.chars().count() > MAX_CHARS {
            preview.push('…');
        }
        format!("{}: \"{}\"", lang, preview)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record::from_map(&map)
    }
}

impl From<Record> for Map<String, Value> {
    fn from(record: Record) -> Self {
        record
            .iter()
            .map(|(lang, value)| (lang.code().to_string(), Value::String(value.to_string())))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(Language, S)> for Record {
    fn from_iter<I: IntoIterator<Item = (Language, S)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (lang, value) in iter {
            record.set(lang, value);
        }
        record
    }
}

// ============================================================
// Topic and Category
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Questions,
    CrazyQuestions,
    Challenges,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Questions,
        Category::CrazyQuestions,
        Category::Challenges,
    ];

    /// Member name in the dataset JSON.
    pub fn key(self) -> &'static str {
        match self {
            Category::Questions => "questions",
            Category::CrazyQuestions => "crazy_questions",
            Category::Challenges => "challenges",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub questions: Vec<Record>,
    pub crazy_questions: Vec<Record>,
    pub challenges: Vec<Record>,
}

impl Topic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn records(&self, category: Category) -> &[Record] {
        match category {
            Category::Questions => &self.questions,
            Category::CrazyQuestions => &self.crazy_questions,
            Category::Challenges => &self.challenges,
        }
    }

    pub fn records_mut(&mut self, category: Category) -> &mut Vec<Record> {
        match category {
            Category::Questions => &mut self.questions,
            Category::CrazyQuestions => &mut self.crazy_questions,
            Category::Challenges => &mut self.challenges,
        }
    }

    /// All records with their category, in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Record)> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.records(category).iter().map(move |r| (category, r)))
    }

    pub fn len(&self) -> usize {
        self.questions.len() + self.crazy_questions.len() + self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================
// Dataset
// ============================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub topics: Vec<Topic>,
    /// Number of topics and entries dropped because they were not objects.
    pub skipped: usize,
}

impl Dataset {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics, skipped: 0 }
    }

    /// Build a dataset from parsed JSON.
    ///
    /// Accepts a top-level array of topics, or an object whose `dataset`
    /// (or `default`) member is that array. Anything else is an empty dataset.
    pub fn from_value(value: &Value) -> Dataset {
        let topics = match value {
            Value::Array(topics) => Some(topics),
            Value::Object(map) => map
                .get("dataset")
                .or_else(|| map.get("default"))
                .and_then(Value::as_array),
            _ => None,
        };

        let mut dataset = Dataset::default();
        for topic in topics.into_iter().flatten() {
            let Some(map) = topic.as_object() else {
                dataset.skipped += 1;
                continue;
            };

            let mut parsed = Topic::new(map.get("topic").and_then(Value::as_str).unwrap_or(""));
            for category in Category::ALL {
                let entries = map.get(category.key()).and_then(Value::as_array);
                for entry in entries.into_iter().flatten() {
                    match Record::from_value(entry) {
                        Some(record) => parsed.records_mut(category).push(record),
                        None => dataset.skipped += 1,
                    }
                }
            }
            dataset.topics.push(parsed);
        }
        dataset
    }

    /// Every record with its topic index and category.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Category, &Record)> {
        self.topics
            .iter()
            .enumerate()
            .flat_map(|(i, topic)| topic.iter().map(move |(category, r)| (i, category, r)))
    }

    /// Total number of records across all topics and categories.
    pub fn len(&self) -> usize {
        self.topics.iter().map(Topic::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load a dataset JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {:?}", path))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse dataset file: {:?}", path))?;

    let dataset = Dataset::from_value(&json);
    tracing::debug!(
        path = %path.display(),
        topics = dataset.topics.len(),
        records = dataset.len(),
        "loaded dataset"
    );
    if dataset.skipped > 0 {
        tracing::warn!(
            skipped = dataset.skipped,
            "skipped malformed dataset entries in {}",
            path.display()
        );
    }
    Ok(dataset)
}
