use axum::{
    extract::{Query, State},
    Json,
};

use crate::predict::Observer;
use crate::web::api::error::ApiResult;
use crate::web::api::query::ObserverQuery;
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/observer",
    tag = "observer",
    params(
        ("lat" = Option<f64>, Query, description = "Observer latitude in degrees, [-90, 90]"),
        ("lon" = Option<f64>, Query, description = "Observer longitude in degrees, [-180, 180]")
    ),
    responses(
        (status = 200, description = "Validated observer location", body = Observer),
        (status = 400, description = "Coordinates out of range", body = crate::web::api::error::ErrorResponse)
    )
)]
pub async fn get_observer(
    State(state): State<AppState>,
    Query(query): Query<ObserverQuery>,
) -> ApiResult<Json<Observer>> {
    Ok(Json(state.observer(&query)?))
}
