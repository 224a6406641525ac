use rmcp::handler::server::wrapper::Parameters;
use sheetlift::mcp::{SheetliftMcpServer, types::InspectFileParams};

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_inspect_file() {
    let source = "import { View } from 'react-native';\n\nexport const App = () => (\n\t<View style={{ flex: 1, opacity: fade }} />\n);\n\nconst styles = StyleSheet.create({\n\tmyStyle1: { flex: 2 },\n});\n";
    let fixture = McpTestFixture::with_file("App.tsx", source).unwrap();
    let server = SheetliftMcpServer::new();

    let params = InspectFileParams {
        file_path: fixture.path("App.tsx"),
        line: Some(4),
    };
    let result = server.inspect_file(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["languageId"], "typescriptreact");
    assert_eq!(json_result["advice"]["languageSupported"], true);
    assert_eq!(json_result["advice"]["looksLikeDialect"], true);
    assert_eq!(json_result["advice"]["lineHasInlineStyle"], true);

    let registries = json_result["registries"].as_array().unwrap();
    assert_eq!(registries.len(), 1);
    assert_eq!(registries[0]["name"], "styles");
    assert_eq!(registries[0]["line"], 7);

    let targets = json_result["targets"].as_array().unwrap();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0]["line"], 4);
    assert_eq!(targets[0]["column"], 8);
    assert_eq!(targets[0]["kind"], "attribute");
    assert_eq!(targets[0]["staticCount"], 1);
    assert_eq!(targets[0]["dynamicCount"], 1);

    assert_eq!(json_result["suggestedName"], "myStyle2");
    assert!(json_result["parseError"].is_null());
}

#[tokio::test]
async fn test_inspect_file_parse_error() {
    let fixture = McpTestFixture::with_file("Broken.jsx", "const A = () => <View style={{ flex: 1 }}\n").unwrap();
    let server = SheetliftMcpServer::new();

    let params = InspectFileParams {
        file_path: fixture.path("Broken.jsx"),
        line: None,
    };
    let result = server.inspect_file(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(json_result["parseError"].is_string());
    assert!(json_result["targets"].as_array().unwrap().is_empty());
    assert!(json_result["advice"]["lineHasInlineStyle"].is_null());
}
