use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::predict::Observer;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid observer: {0}")]
    Observer(#[from] crate::predict::ObserverError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub satellite: SatelliteConfig,
    pub observer: ObserverConfig,
    pub web: WebConfig,
    pub map: MapConfig,
}

/// The element set being tracked. Never refreshed at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct SatelliteConfig {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            name: "Kosmos 482".to_string(),
            line1: "1 06073U 72023B   24123.65777316  .00000803  00000+0  14121-3 0  9996"
                .to_string(),
            line2: "2 06073  51.5533 146.5134 5188798  22.7442 354.1140  5.44340810267687"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        let observer = Observer::default();
        Self {
            latitude: observer.latitude_deg,
            longitude: observer.longitude_deg,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapConfig {
    /// GeoJSON coastlines and borders; the bundled outline is used when unset.
    pub outline: Option<PathBuf>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.default_observer()?;
        Ok(config)
    }

    /// Built-in defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn default_observer(&self) -> Result<Observer, crate::predict::ObserverError> {
        Observer::new(self.observer.latitude, self.observer.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_track_kosmos_from_yangon() {
        let config = Config::default();

        assert_eq!(config.satellite.name, "Kosmos 482");
        assert!(config.satellite.line1.starts_with("1 06073U"));
        assert!(config.satellite.line2.starts_with("2 06073"));
        assert_eq!(config.default_observer().unwrap(), Observer::default());
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert!(config.map.outline.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_str(
            "observer:\n  latitude: 51.48\nweb:\n  bind: 127.0.0.1:3000\n",
        )
        .unwrap();

        assert_eq!(config.observer.latitude, 51.48);
        assert_eq!(config.observer.longitude, 96.1735);
        assert_eq!(config.web.bind, "127.0.0.1:3000");
        assert_eq!(config.web.static_dir, PathBuf::from("static"));
        assert_eq!(config.satellite.name, "Kosmos 482");
    }

    #[test]
    fn replaces_elements() {
        let yaml = r#"
satellite:
  name: ISS (ZARYA)
  line1: "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927"
  line2: "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537"
map:
  outline: /srv/maps/countries.geojson
"#;
        let config = Config::from_str(yaml).unwrap();

        assert_eq!(config.satellite.name, "ISS (ZARYA)");
        assert_eq!(
            config.map.outline,
            Some(PathBuf::from("/srv/maps/countries.geojson"))
        );
    }

    #[test]
    fn example_file_matches_defaults() {
        let config = Config::from_str(include_str!("../config.example.yaml")).unwrap();
        let defaults = Config::default();

        assert_eq!(config.satellite.line1, defaults.satellite.line1);
        assert_eq!(config.satellite.line2, defaults.satellite.line2);
        assert_eq!(config.observer.latitude, defaults.observer.latitude);
        assert!(config.map.outline.is_none());
    }

    #[test]
    fn rejects_observer_out_of_range() {
        let result = Config::from_str("observer:\n  latitude: 123.0\n");
        assert!(matches!(result, Err(ConfigError::Observer(_))));
    }

    #[test]
    fn rejects_incomplete_elements() {
        let result = Config::from_str("satellite:\n  name: Lonely\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }
}
