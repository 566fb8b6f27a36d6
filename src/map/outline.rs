use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::predict::GeoPoint;

const BUNDLED_OUTLINE: &str = include_str!("../../assets/world.geojson");

#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("outline read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("outline is not valid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("position needs longitude and latitude, got {0} values")]
    Position(usize),
}

pub type Ring = Vec<GeoPoint>;

/// Land masses and political borders drawn under the satellite.
#[derive(Debug, Clone, Default)]
pub struct WorldOutline {
    /// Each polygon is an outer ring followed by its holes.
    pub land: Vec<Vec<Ring>>,
    pub borders: Vec<Ring>,
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
}

type Position = Vec<f64>;

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    #[serde(other)]
    Unsupported,
}

impl WorldOutline {
    pub fn bundled() -> Result<Self, OutlineError> {
        Self::from_geojson(BUNDLED_OUTLINE)
    }

    pub fn from_file(path: &Path) -> Result<Self, OutlineError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_geojson(&content)
    }

    pub fn from_geojson(text: &str) -> Result<Self, OutlineError> {
        let collection: FeatureCollection = serde_json::from_str(text)?;
        let mut outline = WorldOutline::default();

        for geometry in collection.features.into_iter().filter_map(|f| f.geometry) {
            match geometry {
                Geometry::Polygon { coordinates } => {
                    outline.land.push(to_rings(coordinates)?);
                }
                Geometry::MultiPolygon { coordinates } => {
                    for polygon in coordinates {
                        outline.land.push(to_rings(polygon)?);
                    }
                }
                Geometry::LineString { coordinates } => {
                    outline.borders.push(to_ring(coordinates)?);
                }
                Geometry::MultiLineString { coordinates } => {
                    outline.borders.extend(to_rings(coordinates)?);
                }
                Geometry::Unsupported => {}
            }
        }

        Ok(outline)
    }

    /// Configured file first, then the bundled outline, then nothing.
    pub fn load_or_bundled(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::from_file(path) {
                Ok(outline) => return outline,
                Err(e) => log::warn!("Failed to load map outline {}: {}", path.display(), e),
            }
        }
        Self::bundled().unwrap_or_else(|e| {
            log::warn!("Bundled map outline unusable: {}", e);
            Self::default()
        })
    }
}

fn to_rings(rings: Vec<Vec<Position>>) -> Result<Vec<Ring>, OutlineError> {
    rings.into_iter().map(to_ring).collect()
}

fn to_ring(positions: Vec<Position>) -> Result<Ring, OutlineError> {
    positions
        .into_iter()
        .map(|p| match p.as_slice() {
            [lon, lat, ..] => Ok(GeoPoint::new(*lat, *lon)),
            _ => Err(OutlineError::Position(p.len())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_outline_has_continents_and_borders() {
        let outline = WorldOutline::bundled().unwrap();

        assert!(outline.land.len() >= 7);
        assert!(!outline.borders.is_empty());
        for ring in outline.land.iter().flatten().chain(outline.borders.iter()) {
            assert!(ring.len() >= 2);
            for point in ring {
                assert!((-90.0..=90.0).contains(&point.latitude_deg));
                assert!((-180.0..=180.0).contains(&point.longitude_deg));
            }
        }
    }

    #[test]
    fn reads_every_supported_geometry() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "square"},
                 "geometry": {"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,0]]]}},
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[20,0],[30,0],[30,10],[20,0]]],
                    [[[40,0],[50,0],[50,10],[40,0]], [[42,1],[44,1],[44,2],[42,1]]]
                 ]}},
                {"type": "Feature", "properties": null,
                 "geometry": {"type": "LineString", "coordinates": [[-123,49,0],[-95,49,0]]}},
                {"type": "Feature",
                 "geometry": {"type": "MultiLineString", "coordinates": [[[1,1],[2,2]],[[3,3],[4,4]]]}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [5,5]}},
                {"type": "Feature", "geometry": null}
            ]
        }"#;
        let outline = WorldOutline::from_geojson(text).unwrap();

        assert_eq!(outline.land.len(), 3);
        assert_eq!(outline.land[2].len(), 2);
        assert_eq!(outline.borders.len(), 3);
        assert_eq!(outline.borders[0][0], GeoPoint::new(49.0, -123.0));
    }

    #[test]
    fn rejects_short_position() {
        let text = r#"{"features": [{"geometry": {"type": "LineString", "coordinates": [[1]]}}]}"#;
        assert!(matches!(
            WorldOutline::from_geojson(text),
            Err(OutlineError::Position(1))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_bundled() {
        let outline = WorldOutline::load_or_bundled(Some(Path::new("/nonexistent/world.geojson")));
        assert!(!outline.land.is_empty());
    }
}
