//! Reshaping of raw upstream store objects into [`LocationRecord`]s.
//!
//! Works on `serde_json::Value` rather than typed structs so a single
//! malformed store never fails the whole response: a missing or wrongly
//! typed field becomes `None`.

use serde_json::{Map, Value};

use crate::types::{Address, Coordinates, LocationRecord, TodayHours};

/// Value of `pickupStoreStatusForLocation` that means pickup is enabled.
const PICKUP_ACTIVATED: &str = "Activated";

/// Extracts and normalizes the `nearByStores` array of a `stores` response.
///
/// Returns an empty list when the array is absent or not an array.
#[must_use]
pub fn normalize_stores(body: &Value) -> Vec<LocationRecord> {
    body.get("nearByStores")
        .and_then(Value::as_array)
        .map(|stores| stores.iter().map(to_location_record).collect())
        .unwrap_or_default()
}

/// Converts one raw store object into a [`LocationRecord`].
///
/// Never fails: absent nested objects (`address`, `geoPoint`,
/// `todayBusinessHours`, ...) yield `None` at exactly the fields they feed.
#[must_use]
pub fn to_location_record(store: &Value) -> LocationRecord {
    LocationRecord {
        store_id: string_at(store, "/storeNumber"),
        name: string_at(store, "/name"),
        phone: string_at(store, "/phoneNumber"),
        distance: string_at(store, "/formattedDistance"),
        status: string_at(store, "/storeStatus"),
        address: Address {
            street: string_at(store, "/address/line1"),
            city: string_at(store, "/address/town"),
            state: string_at(store, "/address/region/isocode"),
            zip: string_at(store, "/address/postalCode"),
        },
        coordinates: Coordinates {
            latitude: number_at(store, "/geoPoint/latitude"),
            longitude: number_at(store, "/geoPoint/longitude"),
        },
        hours: TodayHours {
            opening: string_at(store, "/todayBusinessHours/openingTime/formattedHour"),
            closing: string_at(store, "/todayBusinessHours/closingTime/formattedHour"),
            day: string_at(store, "/todayBusinessHours/weekDay"),
        },
        capabilities: store
            .get("capabilities")
            .filter(|v| !v.is_null())
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new())),
        delivery_available: store
            .get("delivery")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        pickup_available: store
            .get("pickupStoreStatusForLocation")
            .and_then(Value::as_str)
            == Some(PICKUP_ACTIVATED),
    }
}

/// Reads a scalar at `pointer` as a string. Numbers are rendered in their
/// JSON form (store numbers occasionally arrive unquoted).
fn string_at(value: &Value, pointer: &str) -> Option<String> {
    match value.pointer(pointer)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a number at `pointer`, accepting numeric strings.
fn number_at(value: &Value, pointer: &str) -> Option<f64> {
    match value.pointer(pointer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
