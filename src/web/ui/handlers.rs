use axum::extract::{Query, State};

use crate::web::api::error::ApiResult;
use crate::web::api::query::ObserverQuery;
use crate::web::state::AppState;

use super::templates::{FixSummary, IndexTemplate, MapTemplate};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ObserverQuery>,
) -> ApiResult<IndexTemplate> {
    let observer = state.observer(&query)?;
    let report = state.report();

    Ok(IndexTemplate {
        satellite_name: report.name().to_string(),
        summary: FixSummary::from_report(&report),
        map: state.map(&observer, &report),
        observer,
    })
}

pub async fn map_svg(
    State(state): State<AppState>,
    Query(query): Query<ObserverQuery>,
) -> ApiResult<MapTemplate> {
    let observer = state.observer(&query)?;
    let report = state.report();

    Ok(MapTemplate {
        map: state.map(&observer, &report),
    })
}
