use askama::Template;
use askama_web::WebTemplate;

use crate::map::MapView;
use crate::predict::{Observer, SatelliteReport};

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub satellite_name: String,
    pub observer: Observer,
    pub summary: Option<FixSummary>,
    pub map: MapView,
}

#[derive(Template, WebTemplate)]
#[template(path = "map.svg")]
pub struct MapTemplate {
    pub map: MapView,
}

/// Fix values as shown under the map.
pub struct FixSummary {
    pub latitude: String,
    pub longitude: String,
    pub altitude: String,
    pub speed: String,
}

impl FixSummary {
    pub fn from_report(report: &SatelliteReport) -> Option<Self> {
        match report {
            SatelliteReport::Tracking { fix, .. } => Some(FixSummary {
                latitude: format!("{:.2}", fix.latitude_deg),
                longitude: format!("{:.2}", fix.longitude_deg),
                altitude: format!("{:.1}", fix.altitude_km),
                speed: format!("{:.2}", fix.speed_km_s),
            }),
            SatelliteReport::Crashed { .. } => None,
        }
    }
}
