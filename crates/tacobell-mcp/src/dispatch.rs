//! Routes a tool call to the upstream client and renders the outcome.
//!
//! Internally every call produces `Result<ToolOutput, ApiError>`; it is
//! turned into text only in [`dispatch`]. Failures never escape as protocol
//! errors: the host always receives exactly one text block.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use tacobell_api::{ApiError, LocationQuery, LocationRecord, MenuQuery, TacoBellClient};

use crate::tools::ToolName;

/// Successful payload of a tool call, serialized as the response text.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Locations(Vec<LocationRecord>),
    /// Upstream menu JSON, unmodified.
    Menu(serde_json::Value),
}

/// Runs the named tool and renders the result as a single text block.
///
/// - success: pretty-printed JSON;
/// - failure: `Error <action>: <message>`, flagged with `is_error`;
/// - unknown tool: `Unknown tool: <name>`, not flagged as an error.
///
/// Hosts that ignore `is_error` still see the failure in the text; setting
/// the flag is the only difference from a plain text result.
pub async fn dispatch(
    client: &TacoBellClient,
    name: &str,
    arguments: &JsonObject,
) -> CallToolResult {
    let Some(tool) = ToolName::from_name(name) else {
        tracing::info!(tool = name, "unknown tool requested");
        return CallToolResult::success(vec![Content::text(format!("Unknown tool: {name}"))]);
    };

    tracing::info!(%tool, "tool call");
    let rendered = run(client, tool, arguments)
        .await
        .map_err(|e| e.to_string())
        .and_then(|output| serde_json::to_string_pretty(&output).map_err(|e| e.to_string()));

    match rendered {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(message) => {
            tracing::warn!(%tool, error = %message, "tool call failed");
            CallToolResult::error(vec![Content::text(format!(
                "Error {}: {message}",
                tool.action()
            ))])
        }
    }
}

/// Parses the arguments for `tool` and performs the upstream call.
///
/// # Errors
///
/// Propagates argument and upstream errors from `tacobell_api`.
pub async fn run(
    client: &TacoBellClient,
    tool: ToolName,
    arguments: &JsonObject,
) -> Result<ToolOutput, ApiError> {
    match tool {
        ToolName::SearchLocations => {
            let query = LocationQuery::from_arguments(arguments)?;
            client
                .search_locations(&query)
                .await
                .map(ToolOutput::Locations)
        }
        ToolName::GetRestaurantMenu => {
            let query = MenuQuery::from_arguments(arguments)?;
            client.get_menu(&query.store_id).await.map(ToolOutput::Menu)
        }
    }
}
