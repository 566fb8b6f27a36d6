use chrono::{DateTime, Utc};
use serde::Serialize;
use sgp4::{Constants, Elements};
use utoipa::ToSchema;

use super::PredictError;
use super::geodetic::{ecef_to_geodetic, teme_to_ecef_position};

/// Subpoint, altitude and speed of a satellite at one instant.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SatelliteFix {
    pub timestamp: DateTime<Utc>,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
    pub speed_km_s: f64,
}

pub struct Satellite {
    name: String,
    elements: Elements,
    constants: Constants,
}

impl Satellite {
    pub fn from_tle(name: &str, line1: &str, line2: &str) -> Result<Self, PredictError> {
        let elements = Elements::from_tle(
            Some(name.to_string()),
            line1.trim().as_bytes(),
            line2.trim().as_bytes(),
        )?;
        let constants = Constants::from_elements(&elements)?;

        Ok(Self {
            name: name.to_string(),
            elements,
            constants,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn norad_id(&self) -> u64 {
        self.elements.norad_id
    }

    pub fn epoch(&self) -> DateTime<Utc> {
        self.elements.datetime.and_utc()
    }

    pub fn fix_at(&self, timestamp: DateTime<Utc>) -> Result<SatelliteFix, PredictError> {
        let naive = timestamp.naive_utc();
        let minutes = self
            .elements
            .datetime_to_minutes_since_epoch(&naive)
            .map_err(|e| PredictError::Propagation(e.to_string()))?;

        let prediction = self
            .constants
            .propagate(minutes)
            .map_err(|e| PredictError::Propagation(e.to_string()))?;

        let sidereal = sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(&naive));
        let geodetic = ecef_to_geodetic(teme_to_ecef_position(prediction.position, sidereal));

        let [vx, vy, vz] = prediction.velocity;
        let speed = (vx * vx + vy * vy + vz * vz).sqrt();

        Ok(SatelliteFix {
            timestamp,
            latitude_deg: geodetic.point.latitude_deg,
            longitude_deg: geodetic.point.longitude_deg,
            altitude_km: geodetic.height_km,
            speed_km_s: speed,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    pub const NAME: &str = "Kosmos 482";
    pub const LINE1: &str =
        "1 06073U 72023B   24123.65777316  .00000803  00000+0  14121-3 0  9996";
    pub const LINE2: &str =
        "2 06073  51.5533 146.5134 5188798  22.7442 354.1140  5.44340810267687";

    pub fn kosmos() -> Satellite {
        Satellite::from_tle(NAME, LINE1, LINE2).unwrap()
    }

    #[test]
    fn parses_elements() {
        let sat = kosmos();

        assert_eq!(sat.name(), NAME);
        assert_eq!(sat.norad_id(), 6073);
        assert_eq!(
            sat.epoch().format("%Y-%m-%d %H:%M").to_string(),
            "2024-05-02 15:47"
        );
    }

    #[test]
    fn rejects_truncated_line() {
        let result = Satellite::from_tle(NAME, "1 06073U 72023B   24123.65777316", LINE2);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_swapped_lines() {
        assert!(Satellite::from_tle(NAME, LINE2, LINE1).is_err());
    }

    #[test]
    fn fix_is_physically_plausible() {
        let sat = kosmos();

        for hours in [0, 1, 2, 3, 4, 5] {
            let fix = sat.fix_at(sat.epoch() + Duration::hours(hours)).unwrap();

            assert!((-90.0..=90.0).contains(&fix.latitude_deg), "{fix:?}");
            assert!((-180.0..=180.0).contains(&fix.longitude_deg), "{fix:?}");
            // elliptical orbit, perigee near 190 km and apogee near 14400 km
            assert!(fix.altitude_km > 100.0 && fix.altitude_km < 16_000.0, "{fix:?}");
            assert!(fix.speed_km_s > 2.0 && fix.speed_km_s < 11.2, "{fix:?}");
        }
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        let sat = kosmos();

        for minutes in (0..600).step_by(15) {
            let fix = sat.fix_at(sat.epoch() + Duration::minutes(minutes)).unwrap();
            assert!(fix.latitude_deg.abs() < 52.0, "{fix:?}");
        }
    }

    #[test]
    fn propagation_fails_long_after_decay() {
        let sat = kosmos();
        let far = Utc.with_ymd_and_hms(2262, 1, 1, 0, 0, 0).unwrap();

        let result = sat.fix_at(far);
        assert!(matches!(result, Err(PredictError::Propagation(_))), "{:?}", result.err());
    }
}
