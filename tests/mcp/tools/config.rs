use otazo::mcp::{OtazoMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = OtazoMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["datasetPath"], "./full_dataset.json");
    assert_eq!(json_result["config"]["localesRoot"], "./content/locales");
    assert_eq!(json_result["config"]["referenceLanguage"], "cs");
    assert_eq!(json_result["config"]["languages"].as_array().unwrap().len(), 10);
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_otazorc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "datasetPath": "data/cards.json",
            "referenceLanguage": "en",
            "fallbackLanguage": "cs",
            "languages": ["en", "cs"]
        }))
        .unwrap();

    let server = OtazoMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["datasetPath"], "data/cards.json");
    assert_eq!(json_result["config"]["referenceLanguage"], "en");
    assert_eq!(json_result["config"]["languages"], json!(["en", "cs"]));
}

#[tokio::test]
async fn test_get_config_invalid_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "languages": ["cs", "en", "tlh"] }))
        .unwrap();

    let server = OtazoMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await;
    assert!(result.is_err());
}
