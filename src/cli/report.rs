//! Report formatting and printing utilities.
//!
//! Machine-readable output is pretty JSON on stdout. The text renderings use
//! `colored`, which honors `NO_COLOR`. Every printer has a `_to` variant that
//! takes a writer so the output can be tested.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::{
    audit::AuditReport, draw::DrawnQuestion, language::Language, overlay::OverlayKeyIssue,
    resolve::MissingTranslationError,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print `value` as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    print_json_to(value, &mut io::stdout().lock())
}

pub fn print_json_to<T: Serialize, W: Write>(value: &T, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    writeln!(writer, "{}", json).context("Failed to write output")?;
    Ok(())
}

/// Print `value` as a single compact JSON line.
pub fn print_json_line_to<T: Serialize, W: Write>(value: &T, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string(value).context("Failed to serialize output")?;
    writeln!(writer, "{}", json).context("Failed to write output")?;
    Ok(())
}

/// Print the audit report as a colored table.
pub fn print_audit(report: &AuditReport) {
    print_audit_to(report, &mut io::stdout().lock());
}

pub fn print_audit_to<W: Write>(report: &AuditReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} records in {} {} (questions {}, crazy questions {}, challenges {})",
        "dataset:".bold(),
        report.total,
        report.topics,
        if report.topics == 1 { "topic" } else { "topics" },
        report.categories.questions,
        report.categories.crazy_questions,
        report.categories.challenges,
    );

    let name_width = report
        .languages
        .iter()
        .map(|stats| stats.language.native_name().width())
        .max()
        .unwrap_or(0)
        .max("name".len());

    let _ = writeln!(writer);
    let header = format!(
        "  {:<4}  {}  {:>7}  {:>7}  {:>6}",
        "lang",
        pad_to_width("name", name_width),
        "present",
        "missing",
        "tagged",
    );
    let _ = writeln!(writer, "{}", header.dimmed());
    for stats in &report.languages {
        let missing = format!("{:>7}", stats.missing);
        let tagged = format!("{:>6}", stats.tagged);
        let _ = writeln!(
            writer,
            "  {:<4}  {}  {:>7}  {}  {}",
            stats.language.code(),
            pad_to_width(stats.language.native_name(), name_width),
            stats.present,
            if stats.missing > 0 { missing.red() } else { missing.normal() },
            if stats.tagged > 0 { tagged.yellow() } else { tagged.normal() },
        );
    }
    let _ = writeln!(writer);

    if report.duplicates > 0 {
        let _ = writeln!(
            writer,
            "{} {} duplicate {}",
            "warning:".bold().yellow(),
            report.duplicates,
            if report.duplicates == 1 { "record" } else { "records" }
        );
    }

    if report.has_gaps() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} missing {}, {} tagged {}",
                report.missing_translations,
                if report.missing_translations == 1 { "translation" } else { "translations" },
                report.tagged_placeholders,
                if report.tagged_placeholders == 1 { "placeholder" } else { "placeholders" },
            )
            .red()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All audited languages are complete".green()
        );
    }
}

/// Print overlay keys that are not in normalized form.
pub fn print_overlay_issues(issues: &[OverlayKeyIssue], overlay_entries: usize) {
    print_overlay_issues_to(issues, overlay_entries, &mut io::stdout().lock());
}

pub fn print_overlay_issues_to<W: Write>(
    issues: &[OverlayKeyIssue],
    overlay_entries: usize,
    writer: &mut W,
) {
    if issues.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} overlay {} - all keys normalized",
                overlay_entries,
                if overlay_entries == 1 { "entry" } else { "entries" }
            )
            .green()
        );
        return;
    }

    for issue in issues {
        let _ = writeln!(
            writer,
            "{} key is not normalized {}",
            "error:".bold().red(),
            format!("[{}]", issue.language).dimmed()
        );
        let _ = writeln!(writer, "  {} \"{}\"", "found:".cyan(), issue.key);
        let _ = writeln!(writer, "  {} \"{}\"", "expected:".cyan(), issue.normalized);
        let _ = writeln!(writer);
    }

    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} overlay {} will never match",
            issues.len(),
            if issues.len() == 1 { "key" } else { "keys" }
        )
        .red()
    );
}

/// Print each record lacking its own translation to stderr.
pub fn print_missing_translations(errors: &[MissingTranslationError]) {
    print_missing_translations_to(errors, &mut io::stderr().lock());
}

pub fn print_missing_translations_to<W: Write>(
    errors: &[MissingTranslationError],
    writer: &mut W,
) {
    for error in errors {
        let _ = writeln!(writer, "{} {}", "error:".bold().red(), error);
    }
    if !errors.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} {} without a translation",
                errors.len(),
                if errors.len() == 1 { "record" } else { "records" }
            )
            .red()
        );
    }
}

/// Print the supported languages with their native names.
pub fn print_languages() {
    print_languages_to(&mut io::stdout().lock());
}

pub fn print_languages_to<W: Write>(writer: &mut W) {
    let name_width = Language::ALL
        .iter()
        .map(|lang| lang.native_name().width())
        .max()
        .unwrap_or(0);

    for lang in Language::ALL {
        let _ = writeln!(
            writer,
            "{}{}{}",
            format!("{:<4}", lang.code()).bold(),
            pad_to_width(lang.native_name(), name_width),
            if lang.is_rtl() { "  rtl".dimmed() } else { "".normal() }
        );
    }
}

/// Print a drawn question.
pub fn print_drawn(drawn: &DrawnQuestion) {
    print_drawn_to(drawn, &mut io::stdout().lock());
}

pub fn print_drawn_to<W: Write>(drawn: &DrawnQuestion, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        drawn.topic_name.bold(),
        format!("({} #{})", drawn.category, drawn.index).dimmed()
    );
    let _ = writeln!(writer, "{}", drawn.text);
}

/// Right-pad `text` with spaces to `width` display columns.
fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}
