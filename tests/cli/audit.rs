use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, exit_code, stderr, stdout, stdout_json};

#[test]
fn test_audit_json_report() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["audit"])?;
    assert_eq!(exit_code(&output), 1);

    let report = stdout_json(&output)?;
    assert_eq!(
        report,
        json!({
            "total": 4,
            "topics": 2,
            "categories": { "questions": 3, "crazyQuestions": 1, "challenges": 0 },
            "missingTranslations": 4,
            "taggedPlaceholders": 2,
            "duplicates": 1,
            "languages": [
                { "language": "cs", "present": 4, "missing": 0, "tagged": 0 },
                { "language": "en", "present": 3, "missing": 2, "tagged": 1 },
                { "language": "es", "present": 3, "missing": 2, "tagged": 1 }
            ]
        })
    );

    Ok(())
}

#[test]
fn test_audit_complete_dataset_succeeds() -> Result<()> {
    let test = CliTest::with_file(
        "full_dataset.json",
        r#"[{ "topic": "T", "questions": [{ "cs": "Ahoj", "en": "Hi" }] }]"#,
    )?;
    test.write_file(".otazorc.json", r#"{ "languages": ["cs", "en"] }"#)?;

    let output = test.run(&["audit"])?;
    assert_eq!(exit_code(&output), 0);
    assert_eq!(stdout_json(&output)?["missingTranslations"], 0);

    Ok(())
}

#[test]
fn test_audit_text_format() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["audit", "--format", "text"])?;
    assert_eq!(exit_code(&output), 1);

    let out = stdout(&output);
    assert!(out.contains("dataset: 4 records in 2 topics"));
    assert!(out.contains("warning: 1 duplicate record"));
    assert!(out.contains("4 missing translations, 2 tagged placeholders"));

    Ok(())
}

#[test]
fn test_audit_dataset_override() -> Result<()> {
    let test = CliTest::with_sample()?;
    test.write_file(
        "data/other.json",
        r#"{ "dataset": [{ "topic": "T", "challenges": [{ "cs": "Zpívej", "en": "Sing", "es": "Canta" }] }] }"#,
    )?;

    let output = test.run(&["audit", "--dataset", "data/other.json"])?;
    assert_eq!(exit_code(&output), 0);

    let report = stdout_json(&output)?;
    assert_eq!(report["total"], 1);
    assert_eq!(report["categories"]["challenges"], 1);

    Ok(())
}

#[test]
fn test_audit_missing_dataset_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["audit"])?;
    assert_eq!(exit_code(&output), 2);
    assert!(stderr(&output).contains("Failed to read dataset file"));

    Ok(())
}

#[test]
fn test_audit_invalid_config_is_error() -> Result<()> {
    let test = CliTest::with_sample()?;
    test.write_file(".otazorc.json", r#"{ "languages": ["en", "es"] }"#)?;

    let output = test.run(&["audit"])?;
    assert_eq!(exit_code(&output), 2);
    assert!(stderr(&output).contains("referenceLanguage"));

    Ok(())
}
