use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub const DEFAULT_LATITUDE_DEG: f64 = 16.8409;
pub const DEFAULT_LONGITUDE_DEG: f64 = 96.1735;

#[derive(Debug, Error, PartialEq)]
pub enum ObserverError {
    #[error("latitude must be within [-90, 90], got {0}")]
    Latitude(f64),
    #[error("longitude must be within [-180, 180], got {0}")]
    Longitude(f64),
}

/// Where the person looking at the map stands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Observer {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            latitude_deg: DEFAULT_LATITUDE_DEG,
            longitude_deg: DEFAULT_LONGITUDE_DEG,
        }
    }
}

impl Observer {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ObserverError> {
        // NaN fails both range checks
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(ObserverError::Latitude(latitude_deg));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(ObserverError::Longitude(longitude_deg));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Falls back to `self` for any coordinate not given.
    pub fn with_overrides(
        &self,
        latitude_deg: Option<f64>,
        longitude_deg: Option<f64>,
    ) -> Result<Self, ObserverError> {
        Self::new(
            latitude_deg.unwrap_or(self.latitude_deg),
            longitude_deg.unwrap_or(self.longitude_deg),
        )
    }
}
