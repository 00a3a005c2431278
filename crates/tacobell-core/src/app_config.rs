/// Production origin of the Taco Bell web services.
pub const DEFAULT_BASE_URL: &str = "https://www.tacobell.com/";

/// Runtime settings for the MCP server process.
///
/// Every field has a default, so an empty environment yields a usable config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `EnvFilter` directive applied when `RUST_LOG` is not set.
    pub log_level: String,
    /// Base URL the upstream client resolves its endpoint paths against.
    pub base_url: String,
    /// Whole-request timeout for each upstream call.
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}
