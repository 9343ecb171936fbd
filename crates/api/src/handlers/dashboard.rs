//! Handler for the dashboard aggregates.

use axum::extract::State;
use axum::Json;
use filmoteca_db::models::dashboard::DashboardStats;
use filmoteca_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /dashboard
///
/// Totals, films per year, character status split and films per director.
/// Recomputed on every call.
pub async fn get_stats(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardStats>>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}
