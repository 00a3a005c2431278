//! `rmcp` server handler wiring the tool registry to the dispatcher.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Implementation, ListResourcesResult, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use tacobell_api::TacoBellClient;

use crate::dispatch::dispatch;
use crate::tools::tool_definitions;

pub const SERVER_NAME: &str = "taco-bell-mcp";

const INSTRUCTIONS: &str = "Taco Bell tools: call search_locations with latitude/longitude to find \
nearby stores, then get_restaurant_menu with a store_id from the results. Zipcode-only search is \
not supported.";

/// MCP handler. Stateless apart from the shared HTTP client, so clones are
/// cheap and calls may run concurrently.
#[derive(Debug, Clone)]
pub struct TacoBellServer {
    client: Arc<TacoBellClient>,
}

impl TacoBellServer {
    #[must_use]
    pub fn new(client: TacoBellClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl ServerHandler for TacoBellServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(Vec::new()))
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(tool_definitions()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request.arguments.unwrap_or_default();
        Ok(dispatch(&self.client, &request.name, &arguments).await)
    }
}
