use thiserror::Error;

/// Errors returned by the Taco Bell API client and argument parsing.
///
/// The `Display` text of each variant is user-facing: the MCP dispatcher
/// renders it verbatim after an action prefix.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A zipcode was supplied without a coordinate pair. There is no
    /// geocoder, so the search cannot be performed.
    #[error("Zipcode search not yet implemented. Please use latitude/longitude.")]
    UnsupportedZipcodeSearch { zipcode: String },

    /// Arguments are missing or have the wrong type.
    #[error("{0}")]
    InvalidArgument(String),

    /// The upstream answered with anything other than `200 OK`.
    #[error("API request failed with status {status}")]
    UpstreamStatus { status: u16 },

    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {}", describe_transport(.0))]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded as JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot be parsed or cannot carry a path.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Renders a transport failure by its innermost cause rather than the
/// top-level `reqwest` message, which only names the request URL.
fn describe_transport(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "request timed out".to_string();
    }

    let mut root: &dyn std::error::Error = err;
    while let Some(source) = root.source() {
        root = source;
    }

    if err.is_connect() {
        format!("connection failed: {root}")
    } else {
        root.to_string()
    }
}
