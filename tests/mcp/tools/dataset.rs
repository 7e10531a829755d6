use std::collections::HashMap;

use otazo::mcp::{
    OtazoMcpServer,
    types::{AuditDatasetParams, ListMissingParams, ResolveTextParams},
};
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_partial_spanish};

fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(code, text)| (code.to_string(), text.to_string()))
        .collect()
}

// ============================================================================
// audit_dataset tests
// ============================================================================

#[tokio::test]
async fn test_audit_dataset() {
    let fixture = fixture_partial_spanish().unwrap();
    let server = OtazoMcpServer::new();

    let params = Parameters(AuditDatasetParams {
        project_root_path: fixture.root(),
    });
    let result = server.audit_dataset(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["total"], 3);
    assert_eq!(json_result["skippedEntries"], 0);
    assert_eq!(json_result["missingTranslations"], 3);
    assert_eq!(json_result["taggedPlaceholders"], 2);
    assert_eq!(
        json_result["languages"][2],
        json!({ "language": "es", "present": 2, "missing": 2, "tagged": 1 })
    );
    assert!(
        json_result["datasetPath"]
            .as_str()
            .unwrap()
            .ends_with("full_dataset.json")
    );
}

#[tokio::test]
async fn test_audit_dataset_without_dataset_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    let server = OtazoMcpServer::new();

    let params = Parameters(AuditDatasetParams {
        project_root_path: fixture.root(),
    });
    assert!(server.audit_dataset(params).await.is_err());
}

// ============================================================================
// list_missing tests
// ============================================================================

#[tokio::test]
async fn test_list_missing() {
    let fixture = fixture_partial_spanish().unwrap();
    fixture
        .write_overlay("es", &json!({ "Máš psa?": "¿Tienes perro?" }))
        .unwrap();
    let server = OtazoMcpServer::new();

    let params = Parameters(ListMissingParams {
        project_root_path: fixture.root(),
        language: "es".to_string(),
    });
    let result = server.list_missing(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result,
        json!({ "lang": "es", "count": 1, "items": ["Kde bydlíš?"] })
    );
}

#[tokio::test]
async fn test_list_missing_unknown_language() {
    let fixture = fixture_partial_spanish().unwrap();
    let server = OtazoMcpServer::new();

    let params = Parameters(ListMissingParams {
        project_root_path: fixture.root(),
        language: "de".to_string(),
    });
    assert!(server.list_missing(params).await.is_err());
}

// ============================================================================
// resolve_text tests
// ============================================================================

#[tokio::test]
async fn test_resolve_text_without_project() {
    let server = OtazoMcpServer::new();

    let params = Parameters(ResolveTextParams {
        record: record(&[("cs", "Ahoj (7)"), ("en", "[EN] Hello there (12)?")]),
        language: "en".to_string(),
        project_root_path: None,
    });
    let result = server.resolve_text(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result,
        json!({ "language": "en", "supported": true, "text": "Ahoj" })
    );
}

#[tokio::test]
async fn test_resolve_text_with_overlays() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_overlay("fr", &json!({ "Jak se jmenuješ?": "Comment tu t'appelles ?" }))
        .unwrap();
    let server = OtazoMcpServer::new();

    let params = Parameters(ResolveTextParams {
        record: record(&[("cs", "Jak se jmenuješ? (5)"), ("fr", "[FR] Jak se jmenuješ?")]),
        language: "fr".to_string(),
        project_root_path: Some(fixture.root()),
    });
    let result = server.resolve_text(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Comment tu t'appelles ?");
}

#[tokio::test]
async fn test_resolve_text_unsupported_language() {
    let server = OtazoMcpServer::new();

    let params = Parameters(ResolveTextParams {
        record: record(&[("cs", "Ahoj"), ("en", "Hi"), ("xx", "ignored")]),
        language: "xx".to_string(),
        project_root_path: None,
    });
    let result = server.resolve_text(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["supported"], false);
    assert_eq!(json_result["text"], "Hi");
}
