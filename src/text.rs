//! String cleanup for dataset text.
//!
//! Raw dataset strings can carry two kinds of authoring markers:
//!
//! - a leading language tag such as `[EN] `, left behind by machine-filled
//!   placeholders that were never translated by a human;
//! - a parenthesized numeric id such as `(12)`, used to tell near-identical
//!   questions apart while authoring.
//!
//! [`strip`] is the cosmetic cleanup applied before display. [`normalize`] is
//! the stricter transform that produces overlay dictionary keys. Both are
//! idempotent.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[[A-Z]{2}\]\s*").unwrap());

/// Terminal id group. The optional punctuation after it is captured and kept.
static TRAILING_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([0-9]+\)([?.!]?)$").unwrap());

static ANY_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\([0-9]+\)").unwrap());

static SPACE_BEFORE_PUNCT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([?.!:,;])").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Checks whether a string is a tagged placeholder (starts with `[XX]`).
///
/// ```
/// use otazo::text::is_tagged_placeholder;
///
/// assert!(is_tagged_placeholder("[EN] What's up?"));
/// assert!(is_tagged_placeholder("  [CS]Ahoj"));
/// assert!(!is_tagged_placeholder("What's up?"));
/// assert!(!is_tagged_placeholder("[en] lower-case tags are text"));
/// ```
pub fn is_tagged_placeholder(raw: &str) -> bool {
    LEADING_TAG_REGEX.is_match(raw)
}

/// Removes the leading language tag and the terminal numeric id.
///
/// Punctuation following the id is kept, so `"Hello there (12)?"` becomes
/// `"Hello there?"`. Markers anywhere else in the string are left alone.
///
/// ```
/// use otazo::text::strip;
///
/// assert_eq!(strip("[EN] Hello there (12)?"), "Hello there?");
/// assert_eq!(strip("No markers here"), "No markers here");
/// assert_eq!(strip(""), "");
/// ```
pub fn strip(raw: &str) -> String {
    to_fixed_point(raw, strip_once)
}

fn strip_once(raw: &str) -> String {
    let without_tag = LEADING_TAG_REGEX.replace(raw, "");
    let without_id = TRAILING_ID_REGEX.replace(&without_tag, "$1");
    without_id.trim().to_string()
}

/// Derives the canonical overlay key for a reference-language string.
///
/// Unlike [`strip`], every id group is removed, whitespace before
/// `? . ! : , ;` is dropped and whitespace runs collapse to a single space.
///
/// ```
/// use otazo::text::normalize;
///
/// assert_eq!(normalize("[CS] Jak se jmenuješ (5) ?"), "Jak se jmenuješ?");
/// assert_eq!(normalize("Co (1) rád  jíš ,  a proč (2)?"), "Co rád jíš, a proč?");
/// ```
pub fn normalize(raw: &str) -> String {
    to_fixed_point(raw, normalize_once)
}

fn normalize_once(raw: &str) -> String {
    let text = LEADING_TAG_REGEX.replace(raw, "");
    let text = ANY_ID_REGEX.replace_all(&text, "");
    let text = SPACE_BEFORE_PUNCT_REGEX.replace_all(&text, "$1");
    let text = WHITESPACE_REGEX.replace_all(&text, " ");
    text.trim().to_string()
}

/// Key used to detect near-duplicate records: whitespace collapsed, trimmed,
/// lower-cased. Markers are not removed.
pub fn duplicate_key(raw: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(raw, " ")
        .trim()
        .to_lowercase()
}

/// Applies `step` until the output stops changing.
///
/// Every step only removes or shrinks text, so this terminates.
fn to_fixed_point(raw: &str, step: fn(&str) -> String) -> String {
    let mut current = step(raw);
    loop {
        let next = step(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}
