use axum::{extract::State, Json};

use crate::predict::SatelliteReport;
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/satellite",
    tag = "satellite",
    responses(
        (status = 200, description = "Current fix and same-day ground track, or the crash report", body = SatelliteReport)
    )
)]
pub async fn get_satellite(State(state): State<AppState>) -> Json<SatelliteReport> {
    Json(state.report())
}
