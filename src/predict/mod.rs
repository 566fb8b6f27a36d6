mod error;
mod geodetic;
mod ground_track;
mod observer;
mod report;
mod satellite;

pub use error::PredictError;
pub use geodetic::GeoPoint;
pub use ground_track::GroundTrack;
pub use observer::{Observer, ObserverError};
pub use report::SatelliteReport;
pub use satellite::{Satellite, SatelliteFix};
