use chrono::Utc;
use std::sync::Arc;

use crate::config::Config;
use crate::map::{MapView, Projection, WorldOutline};
use crate::predict::{Observer, ObserverError, SatelliteReport};

use super::api::query::ObserverQuery;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub outline: Arc<WorldOutline>,
    pub projection: Projection,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let outline = WorldOutline::load_or_bundled(config.map.outline.as_deref());
        log::info!(
            "Map outline: {} land polygons, {} borders",
            outline.land.len(),
            outline.borders.len()
        );
        Self {
            config: Arc::new(config),
            outline: Arc::new(outline),
            projection: Projection::default(),
        }
    }

    pub fn observer(&self, query: &ObserverQuery) -> Result<Observer, ObserverError> {
        self.config
            .default_observer()?
            .with_overrides(query.lat, query.lon)
    }

    /// Recomputed on every request; nothing is cached between renders.
    pub fn report(&self) -> SatelliteReport {
        SatelliteReport::compute(&self.config.satellite, Utc::now())
    }

    pub fn map(&self, observer: &Observer, report: &SatelliteReport) -> MapView {
        MapView::build(&self.projection, &self.outline, observer, report)
    }
}
