use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use sheetlift::mcp::{
    SheetliftMcpServer,
    types::{ExtractAllStylesParams, ExtractStyleParams},
};

use crate::{McpTestFixture, extract_tool_result_json};

const APP: &str = "import { View } from 'react-native';\n\nexport const App = () => <View style={{ backgroundColor: 'red', width: 100 }} />;\n";

const EXTRACTED: &str = "import { View, StyleSheet } from 'react-native';\n\nexport const App = () => <View style={styles.myStyle1} />;\n\nconst styles = StyleSheet.create({\n\tmyStyle1: {\n\t\tbackgroundColor: 'red',\n\t\twidth: 100,\n\t},\n});\n";

fn extract_params(fixture: &McpTestFixture, line: u32, column: u32) -> ExtractStyleParams {
    ExtractStyleParams {
        file_path: fixture.path("App.tsx"),
        line,
        column,
        name: None,
        apply: None,
    }
}

// ============================================================================
// extract_style tests
// ============================================================================

#[tokio::test]
async fn test_extract_style_dry_run() {
    let fixture = McpTestFixture::with_file("App.tsx", APP).unwrap();
    let server = SheetliftMcpServer::new();

    let result = server
        .extract_style(Parameters(extract_params(&fixture, 3, 45)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "extracted");
    assert_eq!(json_result["applied"], false);
    assert_eq!(json_result["registryName"], "styles");
    assert_eq!(json_result["createdRegistry"], true);
    assert_eq!(json_result["styleNames"], json!(["myStyle1"]));
    assert_eq!(json_result["text"], EXTRACTED);
    assert!(!json_result["edits"].as_array().unwrap().is_empty());

    // Dry run leaves the file alone
    assert_eq!(fixture.read_file("App.tsx").unwrap(), APP);
}

#[tokio::test]
async fn test_extract_style_apply() {
    let fixture = McpTestFixture::with_file("App.tsx", APP).unwrap();
    let server = SheetliftMcpServer::new();

    let mut params = extract_params(&fixture, 3, 45);
    params.apply = Some(true);

    let result = server.extract_style(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "extracted");
    assert_eq!(json_result["applied"], true);
    assert!(json_result.get("text").is_none());
    assert_eq!(fixture.read_file("App.tsx").unwrap(), EXTRACTED);
}

#[tokio::test]
async fn test_extract_style_custom_name() {
    let fixture = McpTestFixture::with_file("App.tsx", APP).unwrap();
    let server = SheetliftMcpServer::new();

    let mut params = extract_params(&fixture, 3, 45);
    params.name = Some("banner".to_string());

    let result = server.extract_style(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["styleNames"], json!(["banner"]));
    assert!(
        json_result["text"]
            .as_str()
            .unwrap()
            .contains("<View style={styles.banner} />")
    );
}

#[tokio::test]
async fn test_extract_style_invalid_name_is_retryable() {
    let fixture = McpTestFixture::with_file("App.tsx", APP).unwrap();
    let server = SheetliftMcpServer::new();

    let mut params = extract_params(&fixture, 3, 45);
    params.name = Some("my-style".to_string());

    let result = server.extract_style(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "notice");
    assert_eq!(json_result["applied"], false);
    assert_eq!(json_result["notice"]["rule"], "name-invalid");
    assert_eq!(json_result["notice"]["severity"], "error");
    assert_eq!(json_result["notice"]["retryable"], true);
    assert!(json_result.get("text").is_none());
}

#[tokio::test]
async fn test_extract_style_not_found() {
    let fixture = McpTestFixture::with_file("App.tsx", APP).unwrap();
    let server = SheetliftMcpServer::new();

    let result = server
        .extract_style(Parameters(extract_params(&fixture, 1, 1)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "notice");
    assert_eq!(json_result["notice"]["rule"], "not-found");
    assert_eq!(json_result["notice"]["severity"], "info");
    assert_eq!(json_result["notice"]["retryable"], false);
    assert_eq!(fixture.read_file("App.tsx").unwrap(), APP);
}

#[tokio::test]
async fn test_extract_style_uses_project_config() {
    let fixture = McpTestFixture::with_file("src/App.tsx", APP).unwrap();
    fixture
        .write_config(&json!({ "defaultNamePrefix": "box", "autoImport": false }))
        .unwrap();
    let server = SheetliftMcpServer::new();

    let params = ExtractStyleParams {
        file_path: fixture.path("src/App.tsx"),
        line: 3,
        column: 45,
        name: None,
        apply: None,
    };
    let result = server.extract_style(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["styleNames"], json!(["box1"]));
    assert!(
        json_result["text"]
            .as_str()
            .unwrap()
            .starts_with("import { View } from 'react-native';")
    );
}

#[tokio::test]
async fn test_extract_style_missing_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    let server = SheetliftMcpServer::new();

    let result = server
        .extract_style(Parameters(extract_params(&fixture, 1, 1)))
        .await;
    assert!(result.is_err());
}

// ============================================================================
// extract_all_styles tests
// ============================================================================

#[tokio::test]
async fn test_extract_all_styles_apply() {
    let source = "const List = () => (\n\t<View style={{ flex: 1 }}>\n\t\t<Text style={{ color: 'red' }} />\n\t</View>\n);\n";
    let fixture = McpTestFixture::with_file("List.jsx", source).unwrap();
    let server = SheetliftMcpServer::new();

    let params = ExtractAllStylesParams {
        file_path: fixture.path("List.jsx"),
        apply: Some(true),
    };
    let result = server.extract_all_styles(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "extracted");
    assert_eq!(json_result["styleNames"], json!(["myStyle1", "myStyle2"]));

    let written = fixture.read_file("List.jsx").unwrap();
    assert!(written.starts_with("import { StyleSheet } from 'react-native';\n"));
    assert!(written.contains("<View style={styles.myStyle1}>"));
    assert!(written.contains("<Text style={styles.myStyle2} />"));
}

#[tokio::test]
async fn test_extract_all_styles_no_targets() {
    let fixture =
        McpTestFixture::with_file("List.jsx", "const List = () => <View />;\n").unwrap();
    let server = SheetliftMcpServer::new();

    let params = ExtractAllStylesParams {
        file_path: fixture.path("List.jsx"),
        apply: None,
    };
    let result = server.extract_all_styles(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "notice");
    assert_eq!(json_result["notice"]["rule"], "no-targets");
    assert_eq!(
        json_result["notice"]["message"],
        "No style objects found to extract."
    );
}
