use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, exit_code, stderr, stdout_json};

#[test]
fn test_missing_lists_normalized_reference_text() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["missing", "en"])?;
    assert_eq!(exit_code(&output), 0);
    assert_eq!(
        stdout_json(&output)?,
        json!({ "lang": "en", "count": 2, "items": ["Ahoj", "Bláznivá otázka"] })
    );

    Ok(())
}

#[test]
fn test_missing_skips_overlay_translations() -> Result<()> {
    let test = CliTest::with_sample()?;
    test.write_overlay("es", r#"{ "Ahoj": "Hola amigo" }"#)?;

    let output = test.run(&["missing", "es"])?;
    assert_eq!(
        stdout_json(&output)?,
        json!({ "lang": "es", "count": 1, "items": ["Kam jedeš?"] })
    );

    Ok(())
}

#[test]
fn test_missing_blank_overlay_does_not_count() -> Result<()> {
    let test = CliTest::with_sample()?;
    test.write_overlay("es", r#"{ "Ahoj": "   " }"#)?;

    let output = test.run(&["missing", "es"])?;
    assert_eq!(stdout_json(&output)?["count"], 2);

    Ok(())
}

#[test]
fn test_missing_fail_on_missing() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["missing", "es", "--fail-on-missing"])?;
    assert_eq!(exit_code(&output), 1);

    test.write_overlay("es", r#"{ "Ahoj": "Hola", "Kam jedeš?": "¿A dónde vas?" }"#)?;
    let output = test.run(&["missing", "es", "--fail-on-missing"])?;
    assert_eq!(exit_code(&output), 0);
    assert_eq!(stdout_json(&output)?["items"], json!([]));

    Ok(())
}

#[test]
fn test_missing_rejects_unknown_language() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["missing", "de"])?;
    assert_eq!(exit_code(&output), 2);

    Ok(())
}

#[test]
fn test_missing_strict_reports_records_without_value() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["missing", "es", "--strict"])?;
    assert_eq!(exit_code(&output), 1);
    assert_eq!(stdout_json(&output)?["count"], 2);
    let errors = stderr(&output);
    assert!(errors.contains("error: missing 'es' translation for cs: \"Ahoj (2)\""));
    assert!(errors.contains("1 record without a translation"));
    assert!(!errors.contains("Kam jedeš"));

    Ok(())
}

#[test]
fn test_missing_strict_passes_when_every_record_has_value() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["missing", "cs", "--strict"])?;
    assert_eq!(exit_code(&output), 0);
    assert!(!stderr(&output).contains("error:"));

    Ok(())
}
