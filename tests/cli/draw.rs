use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, exit_code, stdout};

#[test]
fn test_draw_with_seed_is_reproducible() -> Result<()> {
    let test = CliTest::with_sample()?;

    let first = test.run(&["draw", "en", "--seed", "42"])?;
    let second = test.run(&["draw", "en", "--seed", "42"])?;
    assert_eq!(exit_code(&first), 0);
    assert_eq!(stdout(&first), stdout(&second));

    let out = stdout(&first);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Travel") || lines[0].starts_with("Food"));
    assert!(
        ["Where are you going?", "Ahoj", "Bláznivá otázka", "Hello"].contains(&lines[1]),
        "unexpected draw: {}",
        lines[1]
    );

    Ok(())
}

#[test]
fn test_draw_empty_dataset_fails() -> Result<()> {
    let test = CliTest::with_file("full_dataset.json", r#"[{ "topic": "Empty" }]"#)?;

    let output = test.run(&["draw", "en"])?;
    assert_eq!(exit_code(&output), 1);
    assert!(stdout(&output).is_empty());

    Ok(())
}
