//! Resolution of the shopper's location from flags and configured fallbacks.

use feira_core::Coordinate;

use crate::{
    ARG_FALLBACK_LATITUDE, ARG_FALLBACK_LONGITUDE, ARG_LATITUDE, ARG_LONGITUDE, CliError,
};

/// Raw location inputs gathered from the merged configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct LocationInputs {
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
    pub(crate) fallback_latitude: Option<f64>,
    pub(crate) fallback_longitude: Option<f64>,
}

impl LocationInputs {
    /// Pick the explicit location, then the fallback, validating whichever
    /// pair is used.
    ///
    /// A pair with only one half set is rejected rather than ignored.
    pub(crate) fn resolve(self) -> Result<Option<Coordinate>, CliError> {
        let explicit = pair(
            "location",
            (self.latitude, ARG_LATITUDE),
            (self.longitude, ARG_LONGITUDE),
        )?;
        if explicit.is_some() {
            return Ok(explicit);
        }
        pair(
            "fallback location",
            (self.fallback_latitude, ARG_FALLBACK_LATITUDE),
            (self.fallback_longitude, ARG_FALLBACK_LONGITUDE),
        )
    }
}

fn pair(
    label: &'static str,
    (latitude, latitude_field): (Option<f64>, &'static str),
    (longitude, longitude_field): (Option<f64>, &'static str),
) -> Result<Option<Coordinate>, CliError> {
    match (latitude, longitude) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(CliError::PartialLocation {
            present: latitude_field,
            missing: longitude_field,
        }),
        (None, Some(_)) => Err(CliError::PartialLocation {
            present: longitude_field,
            missing: latitude_field,
        }),
        (Some(lat), Some(lng)) => Coordinate::try_new(lat, lng).map(Some).map_err(|source| {
            CliError::InvalidLocation {
                field: label,
                source,
            }
        }),
    }
}
