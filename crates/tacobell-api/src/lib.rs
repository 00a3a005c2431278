//! Client for the public Taco Bell web services used by the store locator
//! and the online menu.
//!
//! [`TacoBellClient`] performs the HTTP calls, [`normalize`] reshapes raw
//! store objects into [`LocationRecord`]s, and [`query`] turns loosely typed
//! tool arguments into validated requests.

pub mod client;
pub mod error;
pub mod normalize;
pub mod query;
pub mod types;

pub use client::{TacoBellClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use normalize::{normalize_stores, to_location_record};
pub use query::{LocationQuery, LocationTarget, MenuQuery, DEFAULT_RADIUS_MILES};
pub use types::{Address, Coordinates, LocationRecord, TodayHours};
