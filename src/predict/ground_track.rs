use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::PredictError;
use super::geodetic::GeoPoint;
use super::satellite::Satellite;

pub const TRACK_SAMPLES: usize = 100;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Subpoints sampled evenly over one UTC calendar day, both midnights included.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GroundTrack {
    pub date: NaiveDate,
    pub points: Vec<GeoPoint>,
}

impl Satellite {
    pub fn ground_track(&self, timestamp: DateTime<Utc>) -> Result<GroundTrack, PredictError> {
        let date = timestamp.date_naive();
        let midnight = date.and_time(NaiveTime::MIN).and_utc();

        let points = sample_times(midnight)
            .map(|t| {
                self.fix_at(t)
                    .map(|fix| GeoPoint::new(fix.latitude_deg, fix.longitude_deg))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GroundTrack { date, points })
    }
}

fn sample_times(start: DateTime<Utc>) -> impl Iterator<Item = DateTime<Utc>> {
    let last = (TRACK_SAMPLES - 1) as i64;
    (0..=last).map(move |i| start + Duration::milliseconds(DAY_MILLIS * i / last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::satellite::tests::kosmos;
    use chrono::TimeZone;

    #[test]
    fn samples_span_whole_day() {
        let start = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        let times: Vec<_> = sample_times(start).collect();

        assert_eq!(times.len(), TRACK_SAMPLES);
        assert_eq!(times[0], start);
        assert_eq!(times[TRACK_SAMPLES - 1], start + Duration::days(1));
        assert!(times.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn track_covers_epoch_day() {
        let sat = kosmos();
        let track = sat.ground_track(sat.epoch()).unwrap();

        assert_eq!(track.date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(track.points.len(), TRACK_SAMPLES);
        for point in &track.points {
            assert!((-90.0..=90.0).contains(&point.latitude_deg));
            assert!((-180.0..=180.0).contains(&point.longitude_deg));
        }
    }

    #[test]
    fn track_starts_at_midnight_fix() {
        let sat = kosmos();
        let track = sat.ground_track(sat.epoch()).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        let fix = sat.fix_at(midnight).unwrap();

        assert_eq!(track.points[0].latitude_deg, fix.latitude_deg);
        assert_eq!(track.points[0].longitude_deg, fix.longitude_deg);
    }
}
