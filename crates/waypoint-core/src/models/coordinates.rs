//! Geographic coordinate pair.

use serde::{Deserialize, Serialize};

use crate::error::{ItineraryError, Result};

/// A `(latitude, longitude)` pair in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Rejects non-finite values and values outside the WGS84 ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ItineraryError::invalid_input(
                "latitude",
                format!(
                    "Latitude must be a number between -90 and 90, got {}",
                    self.latitude
                ),
            ));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ItineraryError::invalid_input(
                "longitude",
                format!(
                    "Longitude must be a number between -180 and 180, got {}",
                    self.longitude
                ),
            ));
        }
        Ok(())
    }

    /// Formats as `"lat,lng"`, the form directions APIs expect.
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}
