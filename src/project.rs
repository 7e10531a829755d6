//! Project loading shared by the CLI and the MCP server.
//!
//! A project is a directory holding the dataset file and the overlay
//! directory, optionally configured through `.otazorc.json`. Loading happens
//! once; everything after that reads the loaded data.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{
    config::{Config, ConfigLoadResult, load_config},
    dataset::{Dataset, load_dataset},
    language::Language,
    overlay::{LoadOverlaysResult, OverlayStore},
    resolve::{ResolveOptions, Resolver},
};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ProjectOverrides {
    pub dataset: Option<PathBuf>,
    pub locales_root: Option<PathBuf>,
    pub reference_language: Option<Language>,
}

pub struct Project {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    pub root_dir: PathBuf,
    pub dataset_path: PathBuf,
    pub locales_root: PathBuf,
    pub dataset: Dataset,
    pub overlays: OverlayStore,
    /// Non-fatal problems found while loading overlays.
    pub warnings: Vec<String>,
}

impl Project {
    pub fn load(root_dir: &Path, overrides: &ProjectOverrides) -> Result<Self> {
        let ConfigLoadResult {
            mut config,
            from_file,
        } = load_config(root_dir)?;

        if !from_file {
            tracing::debug!("No .otazorc.json found, using default configuration");
        }

        if let Some(reference) = overrides.reference_language {
            config.reference_language = reference.code().to_string();
            config.validate()?;
        }

        let dataset_path = root_dir.join(
            overrides
                .dataset
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.dataset_path)),
        );
        let locales_root = root_dir.join(
            overrides
                .locales_root
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.locales_root)),
        );

        let reference = config.resolve_options().reference;
        let (dataset, overlay_result) = rayon::join(
            || load_dataset(&dataset_path),
            || OverlayStore::load_dir(&locales_root, reference),
        );
        let dataset = dataset?;
        let LoadOverlaysResult {
            store: overlays,
            warnings,
        } = overlay_result;

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        Ok(Self {
            config,
            from_file,
            root_dir: root_dir.to_path_buf(),
            dataset_path,
            locales_root,
            dataset,
            overlays,
            warnings,
        })
    }

    pub fn options(&self) -> ResolveOptions {
        self.config.resolve_options()
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.overlays, self.options())
    }

    /// Languages covered by audits.
    pub fn languages(&self) -> Vec<Language> {
        self.config.language_list()
    }
}
