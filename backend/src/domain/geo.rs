//! Geographic value objects and the great-circle distance estimator.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mean Earth radius in kilometres, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Validation errors for [`Location`] coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LocationValidationError {
    /// Latitude outside [-90, 90] or not finite.
    #[error("latitude must be a finite value between -90 and 90")]
    InvalidLatitude,
    /// Longitude outside [-180, 180] or not finite.
    #[error("longitude must be a finite value between -180 and 180")]
    InvalidLongitude,
}

/// Geographic point with an optional street address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    /// Check the coordinate ranges. Stored documents may predate this check,
    /// so readers must still treat non-finite coordinates as having no
    /// computable distance.
    pub fn validate(&self) -> Result<(), LocationValidationError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(LocationValidationError::InvalidLatitude);
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(LocationValidationError::InvalidLongitude);
        }
        Ok(())
    }
}

/// Viewer coordinates supplied when listing donations by proximity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Great-circle distance between two points in kilometres (haversine).
///
/// Returns `None` when either point carries non-finite coordinates, so
/// callers can sort such entries as infinitely far away.
///
/// # Examples
/// ```
/// use plateshare_backend::domain::geo::{distance_km, Coordinates};
///
/// let a = Coordinates { latitude: 51.5074, longitude: -0.1278 };
/// let km = distance_km(a, a).expect("finite coordinates");
/// assert!(km < 1e-6);
/// ```
pub fn distance_km(from: Coordinates, to: Coordinates) -> Option<f64> {
    if ![from.latitude, from.longitude, to.latitude, to.longitude]
        .iter()
        .all(|v| v.is_finite())
    {
        return None;
    }
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos() * to.latitude.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    Some(EARTH_RADIUS_KM * c)
}

/// Round a distance to two decimals for display, matching the wire contract.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
