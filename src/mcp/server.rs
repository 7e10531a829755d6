use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    audit::{audit, list_missing},
    config::{Config, load_config},
    dataset::Record,
    language::Language,
    overlay::{LoadOverlaysResult, OverlayStore, overlay_counts},
    project::{Project, ProjectOverrides},
    resolve::Resolver,
};

use super::types::{
    AuditDatasetParams, AuditDatasetResult, CheckOverlayKeysParams, ConfigDto, ConfigValues,
    GetConfigParams, ListMissingParams, OverlayKeysResult, ResolveTextParams, ResolveTextResult,
};

#[derive(Clone)]
pub struct OtazoMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for OtazoMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl OtazoMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current otazo configuration
    #[tool(description = "Get the current otazo configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path).map_err(|e| {
            McpError::internal_error(format!("Failed to load config: {:#}", e), None)
        })?;

        success_json(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Audit translation coverage of the whole dataset
    #[tool(
        description = "Audit the question dataset: record totals per category, missing and placeholder translations per language, and duplicate records. Use this first to see which languages need work."
    )]
    pub async fn audit_dataset(
        &self,
        params: Parameters<AuditDatasetParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = load_project(&params.0.project_root_path)?;
        let report = audit(&project.dataset, &project.languages(), project.options());

        success_json(&AuditDatasetResult {
            dataset_path: project.dataset_path.to_string_lossy().to_string(),
            skipped_entries: project.dataset.skipped,
            report,
        })
    }

    /// List canonical strings that still need a translation
    #[tool(
        description = "List the normalized reference strings that still have no translation in one language, neither in the dataset nor in its overlay dictionary. Each item is the exact key to add to the overlay file <localesRoot>/<language>.json."
    )]
    pub async fn list_missing(
        &self,
        params: Parameters<ListMissingParams>,
    ) -> Result<CallToolResult, McpError> {
        let language = parse_language(&params.0.language)?;
        let project = load_project(&params.0.project_root_path)?;

        let list = list_missing(
            &project.dataset,
            &project.overlays,
            language,
            project.options().reference,
        );
        success_json(&list)
    }

    /// Resolve one record for a language
    #[tool(
        description = "Resolve the display text of one multilingual record (language code -> text) for a language, applying placeholder stripping, overlay dictionaries and the fallback chain. Pass project_root_path to use the project's config and overlays."
    )]
    pub async fn resolve_text(
        &self,
        params: Parameters<ResolveTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let record: Record = params
            .record
            .iter()
            .filter_map(|(code, text)| Language::from_code(code).map(|lang| (lang, text.as_str())))
            .collect();

        let (config, overlays) = match &params.project_root_path {
            Some(root) => {
                let (config, _, loaded) = load_overlays(Path::new(root))?;
                (config, loaded.store)
            }
            None => (Config::default(), OverlayStore::new()),
        };

        let resolver = Resolver::new(&overlays, config.resolve_options());
        success_json(&ResolveTextResult {
            supported: Language::from_code(&params.language).is_some(),
            text: resolver.resolve_code(&record, &params.language),
            language: params.language,
        })
    }

    /// Check overlay dictionary keys
    #[tool(
        description = "Check overlay dictionary files: entry counts per language, keys that are not in normalized form (they can never match), and files that were skipped."
    )]
    pub async fn check_overlay_keys(
        &self,
        params: Parameters<CheckOverlayKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let (_, locales_root, loaded) = load_overlays(Path::new(&params.0.project_root_path))?;

        success_json(&OverlayKeysResult {
            locales_root: locales_root.to_string_lossy().to_string(),
            entries: overlay_counts(&loaded.store),
            issues: loaded.store.key_issues(),
            warnings: loaded.warnings,
        })
    }
}

#[tool_handler]
impl ServerHandler for OtazoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Otazo MCP helps AI agents complete the translation of a multilingual question dataset.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. audit_dataset - Get translation coverage statistics per language\n\
                 3. list_missing - Get reference strings still lacking a translation in one language\n\
                 4. resolve_text - Resolve one record for a language\n\
                 5. check_overlay_keys - Check overlay dictionary keys\n\n\
                 Recommended Workflow:\n\
                 1. Use audit_dataset to find languages with gaps\n\
                 2. Use list_missing for one language and translate each item\n\
                 3. Add translations to <localesRoot>/<language>.json using the items as keys\n\
                 4. Run check_overlay_keys to confirm every key is normalized\n\
                 5. Run list_missing again; the list should be empty"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn success_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

fn parse_language(code: &str) -> Result<Language, McpError> {
    code.parse::<Language>()
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

fn load_project(root: &str) -> Result<Project, McpError> {
    Project::load(Path::new(root), &ProjectOverrides::default())
        .map_err(|e| McpError::internal_error(format!("Failed to load project: {:#}", e), None))
}

/// Load configuration and overlays without reading the dataset.
fn load_overlays(root: &Path) -> Result<(Config, PathBuf, LoadOverlaysResult), McpError> {
    let config = load_config(root)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?
        .config;
    let locales_root = root.join(&config.locales_root);
    let loaded = OverlayStore::load_dir(&locales_root, config.resolve_options().reference);
    Ok((config, locales_root, loaded))
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = OtazoMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
