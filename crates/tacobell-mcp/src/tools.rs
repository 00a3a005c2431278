//! Tool registry: the names and input schemas advertised by `tools/list`.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::json;

pub const SEARCH_LOCATIONS: &str = "search_locations";
pub const GET_RESTAURANT_MENU: &str = "get_restaurant_menu";

/// The tools this server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    SearchLocations,
    GetRestaurantMenu,
}

impl ToolName {
    /// Resolves a wire name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            SEARCH_LOCATIONS => Some(Self::SearchLocations),
            GET_RESTAURANT_MENU => Some(Self::GetRestaurantMenu),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SearchLocations => SEARCH_LOCATIONS,
            Self::GetRestaurantMenu => GET_RESTAURANT_MENU,
        }
    }

    /// Gerund phrase used in error text: `Error <action>: <message>`.
    #[must_use]
    pub fn action(self) -> &'static str {
        match self {
            Self::SearchLocations => "searching locations",
            Self::GetRestaurantMenu => "fetching menu",
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptors returned by `tools/list`, in a stable order.
#[must_use]
pub fn tool_definitions() -> Vec<Tool> {
    vec![
        Tool::new(
            SEARCH_LOCATIONS,
            "Search for Taco Bell locations by zipcode or coordinates",
            schema(json!({
                "type": "object",
                "properties": {
                    "zipcode": {
                        "type": "string",
                        "description": "5-digit US zipcode"
                    },
                    "latitude": {
                        "type": "number",
                        "description": "Latitude coordinate"
                    },
                    "longitude": {
                        "type": "number",
                        "description": "Longitude coordinate"
                    },
                    "radius": {
                        "type": "number",
                        "description": "Search radius in miles (default: 10)",
                        "default": 10
                    }
                },
                "oneOf": [
                    { "required": ["zipcode"] },
                    { "required": ["latitude", "longitude"] }
                ]
            })),
        ),
        Tool::new(
            GET_RESTAURANT_MENU,
            "Get the full menu for a specific Taco Bell location",
            schema(json!({
                "type": "object",
                "properties": {
                    "store_id": {
                        "type": "string",
                        "description": "The store ID from location search"
                    }
                },
                "required": ["store_id"]
            })),
        ),
    ]
}

fn schema(value: serde_json::Value) -> Arc<JsonObject> {
    match value {
        serde_json::Value::Object(map) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_two_tools_in_order() {
        let names: Vec<String> = tool_definitions()
            .into_iter()
            .map(|t| t.name.into_owned())
            .collect();
        assert_eq!(names, vec![SEARCH_LOCATIONS, GET_RESTAURANT_MENU]);
    }

    #[test]
    fn search_locations_schema_requires_zipcode_or_coordinates() {
        let tool = tool_definitions().remove(0);
        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert_eq!(
            schema["oneOf"],
            json!([
                { "required": ["zipcode"] },
                { "required": ["latitude", "longitude"] }
            ])
        );
        assert_eq!(schema["properties"]["radius"]["default"], json!(10));
        assert_eq!(schema["properties"]["zipcode"]["type"], json!("string"));
    }

    #[test]
    fn menu_schema_requires_store_id() {
        let tool = tool_definitions().remove(1);
        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert_eq!(schema["required"], json!(["store_id"]));
        assert_eq!(
            schema["properties"]["store_id"]["type"],
            json!("string")
        );
    }

    #[test]
    fn tool_names_round_trip() {
        for tool in [ToolName::SearchLocations, ToolName::GetRestaurantMenu] {
            assert_eq!(ToolName::from_name(tool.as_str()), Some(tool));
        }
        assert_eq!(ToolName::from_name("nonexistent_tool"), None);
    }
}
