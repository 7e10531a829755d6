use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::{language::Language, resolve::ResolveOptions};

pub const CONFIG_FILE_NAME: &str = ".otazorc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    #[serde(default = "default_reference_language")]
    pub reference_language: String,
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

fn default_dataset_path() -> String {
    "./full_dataset.json".to_string()
}

fn default_locales_root() -> String {
    "./content/locales".to_string()
}

fn default_reference_language() -> String {
    Language::Cs.code().to_string()
}

fn default_fallback_language() -> String {
    Language::En.code().to_string()
}

fn default_languages() -> Vec<String> {
    Language::ALL
        .iter()
        .map(|lang| lang.code().to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            locales_root: default_locales_root(),
            reference_language: default_reference_language(),
            fallback_language: default_fallback_language(),
            languages: default_languages(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Every language code must be supported, and the reference and fallback
    /// languages must be among the audited `languages`.
    pub fn validate(&self) -> Result<()> {
        for code in &self.languages {
            code.parse::<Language>()
                .with_context(|| format!("Invalid entry in 'languages': \"{}\"", code))?;
        }

        let reference = parse_field(&self.reference_language, "referenceLanguage")?;
        let fallback = parse_field(&self.fallback_language, "fallbackLanguage")?;

        let required = [("referenceLanguage", reference), ("fallbackLanguage", fallback)];
        for (field, language) in required {
            if !self.languages.iter().any(|code| code == language.code()) {
                anyhow::bail!(
                    "'{}' is set to \"{}\", which is not listed in 'languages'",
                    field,
                    language
                );
            }
        }

        Ok(())
    }

    /// Audited languages. Call after [`Config::validate`]; unknown codes are dropped.
    pub fn language_list(&self) -> Vec<Language> {
        self.languages
            .iter()
            .filter_map(|code| Language::from_code(code))
            .collect()
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        let defaults = ResolveOptions::default();
        ResolveOptions {
            reference: Language::from_code(&self.reference_language).unwrap_or(defaults.reference),
            fallback: Language::from_code(&self.fallback_language).unwrap_or(defaults.fallback),
        }
    }
}

fn parse_field(code: &str, field: &str) -> Result<Language> {
    code.parse::<Language>()
        .with_context(|| format!("Invalid value for '{}': \"{}\"", field, code))
}

pub fn config_json(config: &Config) -> Result<String> {
    serde_json::to_string_pretty(config).context("Failed to generate config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!("loaded config from {}", path.display());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
