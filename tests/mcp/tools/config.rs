use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use sheetlift::mcp::{SheetliftMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = SheetliftMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["defaultNamePrefix"], "myStyle");
    assert_eq!(json_result["config"]["preferredRegistryName"], "styles");
    assert_eq!(json_result["config"]["autoImport"], true);
    assert_eq!(json_result["config"]["insertionPolicy"], "bottom");
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "defaultNamePrefix": "box",
            "insertionPolicy": "afterImports"
        }))
        .unwrap();

    let server = SheetliftMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["defaultNamePrefix"], "box");
    assert_eq!(json_result["config"]["insertionPolicy"], "afterImports");
    // Unset keys keep their defaults
    assert_eq!(json_result["config"]["preferredRegistryName"], "styles");
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "defaultNamePrefix": "1st" }))
        .unwrap();

    let server = SheetliftMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await;
    assert!(result.is_err());
}
