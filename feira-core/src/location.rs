//! Geographic coordinates and great-circle distance.
//!
//! Distances use the Haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Inputs are not range-checked: non-finite degrees
//! propagate as `NaN` or infinity. Use [`Coordinate::try_new`] at the boundary
//! when values come from untrusted sources.

use geo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean Earth radius used by the storefront, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 position in decimal degrees.
///
/// # Examples
/// ```
/// use feira_core::Coordinate;
///
/// let loja = Coordinate::new(-23.56, -46.65);
/// let point: geo::Point<f64> = loja.into();
/// assert_eq!(point.y(), -23.56);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

/// Errors returned by [`Coordinate::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was `NaN`, infinite, or outside `-90..=90`.
    #[error("latitude {0} must be finite and within -90..=90")]
    Latitude(f64),
    /// Longitude was `NaN`, infinite, or outside `-180..=180`.
    #[error("longitude {0} must be finite and within -180..=180")]
    Longitude(f64),
}

impl Coordinate {
    /// Construct a coordinate without validation.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate and construct a coordinate.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either component is non-finite or
    /// outside its valid range.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Report whether both components are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Great-circle distance to `other` in kilometres.
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        haversine_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Self::new(value.longitude, value.latitude)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(value: Point<f64>) -> Self {
        Self::new(value.y(), value.x())
    }
}

/// Haversine distance between two latitude/longitude pairs, in kilometres.
///
/// The result is symmetric in its endpoints and zero for identical points.
///
/// # Examples
/// ```
/// use feira_core::haversine_km;
///
/// // One degree of latitude is roughly 111 km.
/// let km = haversine_km(0.0, 0.0, 1.0, 0.0);
/// assert!((km - 111.19).abs() < 0.01);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let half_chord = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_KM * angle
}

/// Haversine distance between two `geo` points (`x = longitude`).
#[must_use]
pub fn point_distance_km(a: Point<f64>, b: Point<f64>) -> f64 {
    haversine_km(a.y(), a.x(), b.y(), b.x())
}
