use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use crate::predict::{GeoPoint, GroundTrack, Observer, SatelliteFix, SatelliteReport};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::satellite::get_satellite,
        super::api::observer::get_observer,
    ),
    components(
        schemas(
            SatelliteReport,
            SatelliteFix,
            GroundTrack,
            GeoPoint,
            Observer,
            ErrorResponse,
        )
    ),
    info(
        title = "sat-view API",
        description = "Ground position of the tracked satellite",
        version = "0.1.0"
    ),
    tags(
        (name = "satellite", description = "Satellite fix and ground track"),
        (name = "observer", description = "Observer location")
    )
)]
pub struct ApiDoc;
