use std::collections::{BTreeMap, HashMap};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{audit::AuditReport, language::Language, overlay::OverlayKeyIssue};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetConfigParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AuditDatasetParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListMissingParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
    /// Target language code, e.g. "es"
    pub language: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ResolveTextParams {
    /// Language code -> text. Unsupported codes are ignored.
    pub record: HashMap<String, String>,
    /// Language code to resolve for
    pub language: String,
    /// Project root to load configuration and overlay dictionaries from.
    /// Without it the defaults are used and no overlays apply.
    pub project_root_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CheckOverlayKeysParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub dataset_path: String,
    pub locales_root: String,
    pub reference_language: String,
    pub fallback_language: String,
    pub languages: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            dataset_path: c.dataset_path,
            locales_root: c.locales_root,
            reference_language: c.reference_language,
            fallback_language: c.fallback_language,
            languages: c.languages,
        }
    }
}

// ============================================================
// Result Types
// ============================================================

/// Result of audit_dataset
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDatasetResult {
    pub dataset_path: String,
    /// Records dropped while loading because they were not JSON objects
    pub skipped_entries: usize,
    #[serde(flatten)]
    pub report: AuditReport,
}

/// Result of resolve_text
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveTextResult {
    pub language: String,
    /// False when the code is not one of the supported languages
    pub supported: bool,
    pub text: String,
}

/// Result of check_overlay_keys
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayKeysResult {
    pub locales_root: String,
    /// Entries per overlay language
    pub entries: BTreeMap<Language, usize>,
    pub issues: Vec<OverlayKeyIssue>,
    /// Files that were skipped or partially loaded
    pub warnings: Vec<String>,
}
