//! Handler for the cross-entity search endpoint.

use axum::extract::{Query, State};
use axum::Json;
use filmoteca_core::search::normalize_query;
use filmoteca_db::models::search::SearchResults;
use filmoteca_db::repositories::SearchRepo;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /buscar?q=
///
/// Case-insensitive substring match over film titles, character names,
/// director names and trivia content. A blank query is a 422.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<SearchResults>>> {
    let term = normalize_query(&params.q)?;
    let results = SearchRepo::search(&state.pool, term).await?;
    Ok(Json(DataResponse { data: results }))
}
