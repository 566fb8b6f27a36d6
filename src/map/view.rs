use std::fmt::Write;

use crate::predict::{GeoPoint, Observer, SatelliteReport};

use super::outline::{Ring, WorldOutline};
use super::projection::Projection;

const PARALLEL_STEP_DEG: i32 = 30;
const MERIDIAN_STEP_DEG: i32 = 60;
const OBSERVER_MARKER_SIZE: f64 = 9.0;

/// Everything `map.svg` draws, already projected onto the canvas.
#[derive(Debug, Clone)]
pub struct MapView {
    pub width: f64,
    pub height: f64,
    pub land: Vec<String>,
    pub borders: Vec<String>,
    pub parallels: Vec<f64>,
    pub meridians: Vec<f64>,
    pub observer: ObserverMarker,
    pub satellite: Option<SatelliteMarker>,
    pub crash: Option<CrashBanner>,
}

#[derive(Debug, Clone)]
pub struct ObserverMarker {
    pub points: String,
}

#[derive(Debug, Clone)]
pub struct SatelliteMarker {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub track: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CrashBanner {
    pub at: String,
}

impl MapView {
    pub fn build(
        projection: &Projection,
        outline: &WorldOutline,
        observer: &Observer,
        report: &SatelliteReport,
    ) -> Self {
        let land = outline
            .land
            .iter()
            .map(|rings| {
                rings
                    .iter()
                    .map(|ring| ring_path(projection, ring, true))
                    .collect::<String>()
            })
            .collect();

        let borders = outline
            .borders
            .iter()
            .map(|line| ring_path(projection, line, false))
            .collect();

        let parallels = (-90..=90)
            .step_by(PARALLEL_STEP_DEG as usize)
            .map(|lat| round1(projection.y(lat as f64)))
            .collect();
        let meridians = (-180..=180)
            .step_by(MERIDIAN_STEP_DEG as usize)
            .map(|lon| round1(projection.x(lon as f64)))
            .collect();

        let (ox, oy) = projection.project(observer.latitude_deg, observer.longitude_deg);

        let (satellite, crash) = match report {
            SatelliteReport::Tracking { name, fix, track } => {
                let (x, y) = projection.project(fix.latitude_deg, fix.longitude_deg);
                let marker = SatelliteMarker {
                    name: name.clone(),
                    x: round1(x),
                    y: round1(y),
                    track: split_at_antimeridian(&track.points)
                        .iter()
                        .map(|segment| ring_path(projection, segment, false))
                        .collect(),
                };
                (Some(marker), None)
            }
            SatelliteReport::Crashed { at, .. } => (None, Some(CrashBanner { at: at.clone() })),
        };

        MapView {
            width: projection.width,
            height: projection.height,
            land,
            borders,
            parallels,
            meridians,
            observer: ObserverMarker {
                points: triangle(ox, oy, OBSERVER_MARKER_SIZE),
            },
            satellite,
            crash,
        }
    }
}

/// Breaks a track wherever consecutive samples jump across the ±180° seam.
fn split_at_antimeridian(points: &[GeoPoint]) -> Vec<Vec<GeoPoint>> {
    let mut segments: Vec<Vec<GeoPoint>> = Vec::new();
    let mut current: Vec<GeoPoint> = Vec::new();

    for point in points {
        if let Some(prev) = current.last() {
            if (point.longitude_deg - prev.longitude_deg).abs() > 180.0 {
                segments.push(std::mem::take(&mut current));
            }
        }
        current.push(*point);
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments.retain(|s| s.len() > 1);
    segments
}

fn ring_path(projection: &Projection, ring: &Ring, closed: bool) -> String {
    let mut d = String::new();
    for (i, point) in ring.iter().enumerate() {
        let (x, y) = projection.project(point.latitude_deg, point.longitude_deg);
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{:.1} {:.1} ", cmd, x, y);
    }
    if closed && !ring.is_empty() {
        d.push('Z');
    }
    d.trim_end().to_string()
}

fn triangle(x: f64, y: f64, size: f64) -> String {
    format!(
        "{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
        x,
        y - size,
        x - size,
        y + size * 0.8,
        x + size,
        y + size * 0.8
    )
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
