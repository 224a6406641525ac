use std::fs;
use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::debug;

use crate::config::{Config, load_config};
use crate::core::{LineIndex, Outcome, extract_all, extract_one, inspect};

use super::types::{
    ConfigDto, ExtractAllStylesParams, ExtractStyleParams, ExtractionResult, GetConfigParams,
    InspectFileParams,
};

#[derive(Clone)]
pub struct SheetliftMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for SheetliftMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

fn read_source(file_path: &str) -> Result<String, McpError> {
    fs::read_to_string(file_path).map_err(|e| {
        McpError::internal_error(format!("Failed to read {}: {}", file_path, e), None)
    })
}

/// Config for a source file, searched from the file's directory.
fn config_for(file_path: &str) -> Result<Config, McpError> {
    let dir = Path::new(file_path)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    load_config(dir)
        .map(|result| result.config)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))
}

fn finish(file_path: &str, outcome: Outcome, apply: bool) -> Result<CallToolResult, McpError> {
    let result = match outcome {
        Outcome::Skipped(notice) => ExtractionResult::notice(file_path, notice),
        Outcome::Extracted(extraction) => {
            if apply {
                fs::write(file_path, &extraction.text).map_err(|e| {
                    McpError::internal_error(format!("Failed to write {}: {}", file_path, e), None)
                })?;
            }
            ExtractionResult::extracted(file_path, extraction, apply)
        }
    };
    to_json_result(&result)
}

#[tool_router]
impl SheetliftMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Extract the inline style at a position
    #[tool(
        description = "Extract the inline style object at a cursor position (1-based line/column) into a StyleSheet.create entry. Static properties move to the registry; dynamic ones stay inline. Returns the edits, or a notice explaining why nothing was extracted."
    )]
    pub async fn extract_style(
        &self,
        params: Parameters<ExtractStyleParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let text = read_source(&params.file_path)?;
        let config = config_for(&params.file_path)?;

        let offset = LineIndex::new(&text).offset_at(
            (params.line as usize).saturating_sub(1),
            (params.column as usize).saturating_sub(1),
        );
        debug!(file_path = %params.file_path, offset, "extract_style");

        let outcome = extract_one(
            &text,
            &params.file_path,
            offset,
            params.name.as_deref(),
            &config,
        )
        .map_err(|e| McpError::internal_error(format!("Extraction failed: {}", e), None))?;
        finish(&params.file_path, outcome, params.apply.unwrap_or(false))
    }

    /// Extract every inline style in a file
    #[tool(
        description = "Extract every inline style object in a file into StyleSheet.create entries with generated names. Styles with no static properties are left alone."
    )]
    pub async fn extract_all_styles(
        &self,
        params: Parameters<ExtractAllStylesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let text = read_source(&params.file_path)?;
        let config = config_for(&params.file_path)?;

        let outcome = extract_all(&text, &params.file_path, &config)
            .map_err(|e| McpError::internal_error(format!("Extraction failed: {}", e), None))?;
        finish(&params.file_path, outcome, params.apply.unwrap_or(false))
    }

    /// Summarize registries and inline styles in a file
    #[tool(
        description = "Inspect a file: whether it looks like React Native, existing StyleSheet registries with their entry names, extractable inline styles with positions, and the next free style name."
    )]
    pub async fn inspect_file(
        &self,
        params: Parameters<InspectFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let text = read_source(&params.file_path)?;
        let config = config_for(&params.file_path)?;

        let inspection = inspect(
            &text,
            &params.file_path,
            params.line.map(|line| line as usize),
            &config,
        );
        to_json_result(&inspection)
    }

    /// Get project configuration
    #[tool(description = "Get the sheetlift configuration in effect for a project directory.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_json_result(&ConfigDto {
            from_file: result.from_file,
            config: result.config,
        })
    }
}

#[tool_handler]
impl ServerHandler for SheetliftMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Sheetlift MCP moves inline React Native styles into StyleSheet.create registries.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. inspect_file - List registries, entry names and extractable inline styles\n\
                 3. extract_style - Extract the inline style at a line/column\n\
                 4. extract_all_styles - Extract every inline style in a file\n\n\
                 Recommended Workflow:\n\
                 1. Use inspect_file to find inline styles and the next free name\n\
                 2. Call an extract tool without apply to review the rewritten text\n\
                 3. Call it again with apply: true to write the file\n\n\
                 A result with status \"notice\" means the file was not changed. If the notice is\n\
                 retryable, call again with a different name."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = SheetliftMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
