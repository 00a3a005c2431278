//! Normalized store types returned by location search.
//!
//! ## Observed shape of the upstream `stores` response
//!
//! The endpoint returns `{ "nearByStores": [ ... ] }`. Each store carries a
//! `storeNumber` (usually a numeric string), a nested `address` whose state
//! lives under `region.isocode`, a `geoPoint`, and `todayBusinessHours` with
//! pre-formatted `openingTime`/`closingTime` strings. Any of the nested
//! objects may be missing for stores that are closed or newly opened, so
//! every field below is optional.
//!
//! `pickupStoreStatusForLocation` is a status string; only `"Activated"`
//! means pickup orders are accepted.

use serde::{Deserialize, Serialize};

/// A single store as exposed to tool callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Upstream `storeNumber`; the id accepted by the menu endpoint.
    pub store_id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Distance from the query point, already formatted upstream
    /// (e.g. `"0.8 mi"`).
    pub distance: Option<String>,
    pub status: Option<String>,
    pub address: Address,
    pub coordinates: Coordinates,
    pub hours: TodayHours,
    /// Upstream capability flags, passed through as-is. `{}` when absent.
    pub capabilities: serde_json::Value,
    pub delivery_available: bool,
    pub pickup_available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    /// Two-letter state code taken from `region.isocode`.
    pub state: Option<String>,
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Opening hours for the current day only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodayHours {
    pub opening: Option<String>,
    pub closing: Option<String>,
    pub day: Option<String>,
}
