use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, exit_code, stdout};

fn json_lines(out: &str) -> Vec<Value> {
    out.lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn texts(out: &str) -> Vec<String> {
    json_lines(out)
        .into_iter()
        .map(|line| line["text"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_resolve_uses_fallback_and_overlays() -> Result<()> {
    let test = CliTest::with_sample()?;
    test.write_overlay("es", r#"{ "Ahoj": "Hola amigo" }"#)?;

    let output = test.run(&["resolve", "es"])?;
    assert_eq!(exit_code(&output), 0);
    assert_eq!(
        texts(&stdout(&output)),
        vec!["Where are you going?", "Hola amigo", "Pregunta loca", "Hola"]
    );

    Ok(())
}

#[test]
fn test_resolve_line_shape() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["resolve", "cs", "--topic", "0", "--category", "crazy-questions"])?;
    assert_eq!(
        json_lines(&stdout(&output)),
        vec![json!({
            "topic": 0,
            "category": "crazy_questions",
            "index": 0,
            "text": "Bláznivá otázka"
        })]
    );

    Ok(())
}

#[test]
fn test_resolve_unknown_code_uses_fallback_chain() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["resolve", "xx"])?;
    assert_eq!(exit_code(&output), 0);
    assert_eq!(
        texts(&stdout(&output)),
        vec!["Where are you going?", "Ahoj", "Bláznivá otázka", "Hello"]
    );

    Ok(())
}

#[test]
fn test_resolve_topic_out_of_range() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["resolve", "en", "--topic", "5"])?;
    assert_eq!(exit_code(&output), 2);

    Ok(())
}
