use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::InitCommand, exit_status::ExitStatus, report::SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, Config, config_json};

/// Write `.otazorc.json` into the project directory, seeded from the flags.
pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let config_path = cmd.path.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", config_path.display());
        return Ok(ExitStatus::Failure);
    }

    let mut config = Config::default();
    if let Some(dataset) = cmd.dataset {
        config.dataset_path = dataset;
    }
    if let Some(locales_root) = cmd.locales_root {
        config.locales_root = locales_root;
    }
    if let Some(reference) = cmd.reference_language {
        config.reference_language = reference.code().to_string();
    }
    config.validate()?;

    fs::create_dir_all(&cmd.path)
        .with_context(|| format!("Failed to create directory: {}", cmd.path.display()))?;
    fs::write(&config_path, config_json(&config)?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", config_path.display()).green()
    );

    Ok(ExitStatus::Success)
}
