//! Typed requests parsed from loosely typed tool arguments.
//!
//! Tool hosts send a JSON object whose fields are only constrained by the
//! advertised schema. Parsing happens once here so the client only ever
//! sees a resolved [`LocationTarget`] or a non-blank store id.

use serde_json::{Map, Value};

use crate::error::ApiError;

/// Search radius applied when the caller does not send one.
pub const DEFAULT_RADIUS_MILES: f64 = 10.0;

/// How a location search identifies the area to search around.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationTarget {
    /// Postal code only. Accepted by the schema but not resolvable without
    /// a geocoder.
    Zipcode(String),
    Coordinates { latitude: f64, longitude: f64 },
}

/// A validated `search_locations` request.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationQuery {
    pub target: LocationTarget,
    /// Requested radius in miles. The upstream endpoint picks its own
    /// radius, so this value is carried for logging only.
    pub radius_miles: f64,
}

impl LocationQuery {
    #[must_use]
    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            target: LocationTarget::Coordinates {
                latitude,
                longitude,
            },
            radius_miles: DEFAULT_RADIUS_MILES,
        }
    }

    #[must_use]
    pub fn zipcode(zipcode: impl Into<String>) -> Self {
        Self {
            target: LocationTarget::Zipcode(zipcode.into()),
            radius_miles: DEFAULT_RADIUS_MILES,
        }
    }

    /// Parses `search_locations` arguments.
    ///
    /// A complete coordinate pair wins over a zipcode when both are sent.
    /// A zipcode without a complete pair yields [`LocationTarget::Zipcode`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] when neither a zipcode nor a
    /// complete coordinate pair is present, or when a field has the wrong
    /// type.
    pub fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, ApiError> {
        let zipcode = optional_string(arguments, "zipcode")?;
        let latitude = optional_number(arguments, "latitude")?;
        let longitude = optional_number(arguments, "longitude")?;
        let radius_miles = optional_number(arguments, "radius")?.unwrap_or(DEFAULT_RADIUS_MILES);

        let target = match (zipcode, latitude, longitude) {
            (_, Some(latitude), Some(longitude)) => LocationTarget::Coordinates {
                latitude,
                longitude,
            },
            (Some(zipcode), _, _) => LocationTarget::Zipcode(zipcode),
            _ => {
                return Err(ApiError::InvalidArgument(
                    "Either zipcode or latitude/longitude must be provided".to_string(),
                ))
            }
        };

        Ok(Self {
            target,
            radius_miles,
        })
    }
}

/// A validated `get_restaurant_menu` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuQuery {
    pub store_id: String,
}

impl MenuQuery {
    /// Parses `get_restaurant_menu` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] when `store_id` is missing,
    /// blank, or not a string/number.
    pub fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, ApiError> {
        let store_id = match arguments.get("store_id") {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            None | Some(Value::Null) => String::new(),
            Some(_) => {
                return Err(ApiError::InvalidArgument(
                    "store_id must be a string".to_string(),
                ))
            }
        };
        if store_id.is_empty() {
            return Err(ApiError::InvalidArgument("store_id is required".to_string()));
        }
        Ok(Self { store_id })
    }
}

/// Blank strings count as absent.
fn optional_string(arguments: &Map<String, Value>, key: &str) -> Result<Option<String>, ApiError> {
    match arguments.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Some(_) => Err(ApiError::InvalidArgument(format!("{key} must be a string"))),
    }
}

/// Numbers may also arrive as numeric strings from hosts that stringify
/// arguments.
fn optional_number(arguments: &Map<String, Value>, key: &str) -> Result<Option<f64>, ApiError> {
    let invalid = || ApiError::InvalidArgument(format!("{key} must be a number"));
    match arguments.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(invalid),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Some)
            .ok_or_else(invalid),
        Some(_) => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test arguments must be an object")
    }

    #[test]
    fn coordinates_resolve_to_coordinate_target() {
        let query =
            LocationQuery::from_arguments(&args(json!({ "latitude": 33.68, "longitude": -117.82 })))
                .unwrap();
        assert_eq!(query, LocationQuery::coordinates(33.68, -117.82));
    }

    #[test]
    fn coordinates_win_over_zipcode() {
        let query = LocationQuery::from_arguments(&args(
            json!({ "zipcode": "92618", "latitude": 33.68, "longitude": -117.82 }),
        ))
        .unwrap();
        assert!(matches!(query.target, LocationTarget::Coordinates { .. }));
    }

    #[test]
    fn zipcode_with_partial_coordinates_is_zipcode_target() {
        let query =
            LocationQuery::from_arguments(&args(json!({ "zipcode": "92618", "latitude": 33.68 })))
                .unwrap();
        assert_eq!(query.target, LocationTarget::Zipcode("92618".to_string()));
    }

    #[test]
    fn zero_coordinates_are_valid() {
        let query =
            LocationQuery::from_arguments(&args(json!({ "latitude": 0.0, "longitude": 0 })))
                .unwrap();
        assert_eq!(query, LocationQuery::coordinates(0.0, 0.0));
    }

    #[test]
    fn missing_everything_is_invalid() {
        let err = LocationQuery::from_arguments(&Map::new()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "Either zipcode or latitude/longitude must be provided"
        );
    }

    #[test]
    fn lone_latitude_is_invalid() {
        let err = LocationQuery::from_arguments(&args(json!({ "latitude": 33.68 }))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn blank_zipcode_counts_as_absent() {
        let err = LocationQuery::from_arguments(&args(json!({ "zipcode": "  " }))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn numeric_strings_are_accepted_for_coordinates() {
        let query = LocationQuery::from_arguments(&args(
            json!({ "latitude": "33.5", "longitude": "-117.25", "radius": "5" }),
        ))
        .unwrap();
        assert_eq!(
            query.target,
            LocationTarget::Coordinates {
                latitude: 33.5,
                longitude: -117.25
            }
        );
        assert!((query.radius_miles - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wrong_coordinate_type_is_invalid() {
        let err = LocationQuery::from_arguments(&args(
            json!({ "latitude": [1], "longitude": -117.25 }),
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "latitude must be a number");
    }

    #[test]
    fn radius_defaults_to_ten_miles() {
        let query =
            LocationQuery::from_arguments(&args(json!({ "latitude": 1.0, "longitude": 2.0 })))
                .unwrap();
        assert!((query.radius_miles - DEFAULT_RADIUS_MILES).abs() < f64::EPSILON);
    }

    #[test]
    fn menu_query_requires_store_id() {
        let err = MenuQuery::from_arguments(&Map::new()).unwrap_err();
        assert_eq!(err.to_string(), "store_id is required");

        let err = MenuQuery::from_arguments(&args(json!({ "store_id": "   " }))).unwrap_err();
        assert_eq!(err.to_string(), "store_id is required");
    }

    #[test]
    fn menu_query_accepts_numeric_store_id() {
        let query = MenuQuery::from_arguments(&args(json!({ "store_id": 31250 }))).unwrap();
        assert_eq!(query.store_id, "31250");
    }

    #[test]
    fn menu_query_rejects_object_store_id() {
        let err = MenuQuery::from_arguments(&args(json!({ "store_id": {} }))).unwrap_err();
        assert_eq!(err.to_string(), "store_id must be a string");
    }
}
