use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use tempfile::TempDir;

mod audit;
mod draw;
mod missing;
mod resolve;

const BIN_NAME: &str = "otazo";

/// Two topics, four records. Czech is the reference language.
///
/// - `en` lacks the second question and has one `[EN]` placeholder.
/// - `es` has one `[ES]` placeholder and lacks the second question.
/// - The Food question repeats the Travel greeting (a duplicate).
pub const SAMPLE_DATASET: &str = r#"[
  {
    "topic": "Travel",
    "questions": [
      { "cs": "Kam jedeš? (1)", "en": "Where are you going?", "es": "[ES] Kam jedeš? (1)" },
      { "cs": "Ahoj (2)" }
    ],
    "crazy_questions": [
      { "cs": "Bláznivá otázka", "en": "[EN] Bláznivá otázka", "es": "Pregunta loca" }
    ],
    "challenges": []
  },
  {
    "topic": "Food",
    "questions": [
      { "cs": "Ahoj  (2)", "en": "Hello", "es": "Hola" }
    ]
  }
]"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops config discovery at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// Sample dataset at the default location, audited in cs, en and es.
    pub fn with_sample() -> Result<Self> {
        let test = Self::with_file("full_dataset.json", SAMPLE_DATASET)?;
        test.write_file(".otazorc.json", r#"{ "languages": ["cs", "en", "es"] }"#)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write an overlay dictionary at the default locales root.
    pub fn write_overlay(&self, language: &str, content: &str) -> Result<()> {
        self.write_file(&format!("content/locales/{}.json", language), content)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<Output> {
        self.command()
            .args(args)
            .output()
            .with_context(|| format!("Failed to run {} {:?}", BIN_NAME, args))
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout should be valid JSON")
}

pub fn exit_code(output: &Output) -> i32 {
    output.status.code().unwrap_or(-1)
}
