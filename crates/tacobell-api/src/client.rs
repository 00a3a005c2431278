//! HTTP client for the Taco Bell web services.
//!
//! Requests mimic the headers a browser sends from tacobell.com; the
//! endpoints reject clients that look automated.

use std::time::Duration;

use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, PRAGMA, REFERER, USER_AGENT,
};
use reqwest::{Client, RequestBuilder, StatusCode, Url};

use crate::error::ApiError;
use crate::normalize::normalize_stores;
use crate::query::{LocationQuery, LocationTarget};
use crate::types::LocationRecord;

pub use tacobell_core::DEFAULT_BASE_URL;

const STORES_PATH: &str = "tacobellwebservices/v4/tacobell/stores";
const MENU_PATH: &str = "tacobellwebservices/v4/tacobell/products/menu";

const LOCATIONS_REFERER: &str = "https://www.tacobell.com/locations";
const MENU_REFERER_PREFIX: &str = "https://www.tacobell.com/food?store=";

const DESKTOP_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const MOBILE_UA: &str = "Mozilla/5.0 (Linux; Android 6.0; Nexus 5 Build/MRA58N) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Mobile Safari/537.36";

/// Client for the store locator and menu endpoints.
///
/// Holds one `reqwest::Client` so connections are pooled across tool calls.
/// Use [`TacoBellClient::new`] for production or
/// [`TacoBellClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct TacoBellClient {
    client: Client,
    base_url: Url,
}

impl TacoBellClient {
    /// Creates a client pointed at the production web services.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        // Exactly one trailing slash, so `Url::join` appends endpoint paths
        // instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Searches for stores near the query's coordinates.
    ///
    /// `radius_miles` is not forwarded: the endpoint has no radius parameter.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UnsupportedZipcodeSearch`] for a zipcode target.
    /// - [`ApiError::UpstreamStatus`] for any status other than 200.
    /// - [`ApiError::Transport`] on network failure or timeout.
    /// - [`ApiError::Deserialize`] if the body is not JSON.
    pub async fn search_locations(
        &self,
        query: &LocationQuery,
    ) -> Result<Vec<LocationRecord>, ApiError> {
        let (latitude, longitude) = match &query.target {
            LocationTarget::Coordinates {
                latitude,
                longitude,
            } => (*latitude, *longitude),
            LocationTarget::Zipcode(zipcode) => {
                tracing::debug!(zipcode, "zipcode search requested without coordinates");
                return Err(ApiError::UnsupportedZipcodeSearch {
                    zipcode: zipcode.clone(),
                });
            }
        };

        let url = self.stores_url(latitude, longitude, chrono::Utc::now().timestamp_millis())?;
        tracing::debug!(
            latitude,
            longitude,
            radius_miles = query.radius_miles,
            "searching store locations"
        );

        let request = self
            .client
            .get(url)
            .header(REFERER, LOCATIONS_REFERER)
            .header(USER_AGENT, DESKTOP_UA);
        let body = Self::request_json(with_browser_headers(request), "stores").await?;

        let stores = normalize_stores(&body);
        tracing::debug!(count = stores.len(), "store search returned");
        Ok(stores)
    }

    /// Fetches the full menu for one store and returns the body verbatim.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidArgument`] if `store_id` is blank.
    /// - [`ApiError::UpstreamStatus`] for any status other than 200.
    /// - [`ApiError::Transport`] on network failure or timeout.
    /// - [`ApiError::Deserialize`] if the body is not JSON.
    pub async fn get_menu(&self, store_id: &str) -> Result<serde_json::Value, ApiError> {
        if store_id.trim().is_empty() {
            return Err(ApiError::InvalidArgument("store_id is required".to_string()));
        }

        let url = self.menu_url(store_id)?;
        tracing::debug!(store_id, "fetching store menu");

        let request = self
            .client
            .get(url)
            .header(REFERER, format!("{MENU_REFERER_PREFIX}{store_id}"))
            .header(USER_AGENT, MOBILE_UA);
        Self::request_json(with_browser_headers(request), &format!("menu(store={store_id})"))
            .await
    }

    /// Builds the `stores` URL with the coordinates and the `_` cache-buster
    /// (milliseconds since the Unix epoch).
    fn stores_url(&self, latitude: f64, longitude: f64, now_ms: i64) -> Result<Url, ApiError> {
        let mut url = self.endpoint(STORES_PATH)?;
        url.query_pairs_mut()
            .append_pair("latitude", &format_coordinate(latitude))
            .append_pair("longitude", &format_coordinate(longitude))
            .append_pair("_", &now_ms.to_string());
        Ok(url)
    }

    /// Builds the per-store menu URL. The store id is pushed as a single
    /// percent-encoded path segment.
    fn menu_url(&self, store_id: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(MENU_PATH)?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .push(store_id);
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Sends the request, requires `200 OK`, and parses the body as JSON.
    async fn request_json(
        request: RequestBuilder,
        context: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), context, "upstream request failed");
            return Err(ApiError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// Formats a coordinate so whole degrees keep their fractional part
/// (`33.0`, not `33`).
fn format_coordinate(value: f64) -> String {
    format!("{value:?}")
}

/// Headers shared by both endpoints.
fn with_browser_headers(request: RequestBuilder) -> RequestBuilder {
    request
        .header(ACCEPT, "*/*")
        .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
