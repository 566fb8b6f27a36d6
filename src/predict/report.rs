use chrono::{DateTime, Local, Utc};
use log::warn;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::SatelliteConfig;

use super::PredictError;
use super::ground_track::GroundTrack;
use super::satellite::{Satellite, SatelliteFix};

pub const CRASH_MESSAGE: &str =
    "The Satellite has crashed and the TLE data is no longer available.";

const CRASH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What one page render knows about the satellite.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SatelliteReport {
    Tracking {
        name: String,
        fix: SatelliteFix,
        track: GroundTrack,
    },
    Crashed {
        name: String,
        message: String,
        /// Local wall-clock time the failure was observed.
        at: String,
    },
}

impl SatelliteReport {
    /// Never fails: any error building or propagating the satellite is a crash.
    pub fn compute(config: &SatelliteConfig, now: DateTime<Utc>) -> Self {
        match track(config, now) {
            Ok((fix, track)) => SatelliteReport::Tracking {
                name: config.name.clone(),
                fix,
                track,
            },
            Err(e) => {
                warn!("{} reported as crashed: {}", config.name, e);
                SatelliteReport::Crashed {
                    name: config.name.clone(),
                    message: CRASH_MESSAGE.to_string(),
                    at: now.with_timezone(&Local).format(CRASH_TIME_FORMAT).to_string(),
                }
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SatelliteReport::Tracking { name, .. } | SatelliteReport::Crashed { name, .. } => name,
        }
    }
}

fn track(
    config: &SatelliteConfig,
    now: DateTime<Utc>,
) -> Result<(SatelliteFix, GroundTrack), PredictError> {
    let satellite = Satellite::from_tle(&config.name, &config.line1, &config.line2)?;
    let fix = satellite.fix_at(now)?;
    let track = satellite.ground_track(now)?;
    Ok((fix, track))
}
