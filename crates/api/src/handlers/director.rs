//! Handlers for the `/directores` resource.
//!
//! Directors are addressed by a name-or-id key (see [`EntityKey`]).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use filmoteca_core::catalog::{require_not_blank, require_not_blank_opt, validate_input};
use filmoteca_core::error::CoreError;
use filmoteca_core::key::EntityKey;
use filmoteca_db::models::director::{CreateDirector, Director, UpdateDirector};
use filmoteca_db::models::film::Film;
use filmoteca_db::repositories::{DirectorRepo, FilmRepo};

use crate::error::{AppError, AppResult};
use crate::query::ActiveParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::upload::{CreateBody, ImageKind};

/// Look up a director by raw path key, mapping absence to 404.
pub(crate) async fn resolve(pool: &sqlx::PgPool, raw_key: &str) -> AppResult<Director> {
    let key = EntityKey::parse(raw_key);
    DirectorRepo::find_by_key(pool, &key)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Director", key)))
}

/// Flip the `active` flag of the director behind `raw_key`.
pub(crate) async fn set_active(
    pool: &sqlx::PgPool,
    raw_key: &str,
    active: bool,
) -> AppResult<Director> {
    let director = resolve(pool, raw_key).await?;
    let director = DirectorRepo::set_active(pool, director.id, active)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::not_found("Director", EntityKey::Id(director.id)))
        })?;
    tracing::info!(director_id = director.id, active, "Director lifecycle changed");
    Ok(director)
}

/// GET /directores?active=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ActiveParams>,
) -> AppResult<Json<DataResponse<Vec<Director>>>> {
    let directors = DirectorRepo::list(&state.pool, params.active).await?;
    Ok(Json(DataResponse { data: directors }))
}

/// GET /directores/historico
pub async fn list_inactive(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Director>>>> {
    let directors = DirectorRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: directors }))
}

/// GET /directores/{key}
pub async fn get_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<DataResponse<Director>>> {
    let director = resolve(&state.pool, &key).await?;
    Ok(Json(DataResponse { data: director }))
}

/// GET /directores/{key}/peliculas
pub async fn list_films(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Film>>>> {
    let director = resolve(&state.pool, &key).await?;
    let films = FilmRepo::list_by_director(&state.pool, director.id).await?;
    Ok(Json(DataResponse { data: films }))
}

/// POST /directores
///
/// JSON body or multipart form (`name`, `biography`, optional `image`).
/// A duplicate name is reported by the `uq_directors_name` constraint.
pub async fn create(
    State(state): State<AppState>,
    body: CreateBody<CreateDirector>,
) -> AppResult<(StatusCode, Json<DataResponse<Director>>)> {
    let (mut input, image) = match body {
        CreateBody::Json(input) => (input, None),
        CreateBody::Form(form) => {
            let input = CreateDirector {
                name: form.required("name")?,
                biography: form.optional("biography"),
                image_url: None,
            };
            (input, form.image)
        }
    };

    validate_input(&input)?;
    require_not_blank("name", &input.name)?;

    let stored = state
        .images
        .save_optional(ImageKind::Director, image.as_ref())
        .await?;
    input.image_url = stored.as_ref().map(|s| s.url.clone());

    let result = DirectorRepo::create(&state.pool, &input).await;
    let director = state.images.discard_on_err(stored.as_ref(), result).await?;

    tracing::info!(director_id = director.id, name = %director.name, "Director created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: director })))
}

/// PUT /directores/{key}
pub async fn update(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<UpdateDirector>,
) -> AppResult<Json<DataResponse<Director>>> {
    validate_input(&input)?;
    require_not_blank_opt("name", input.name.as_deref())?;

    let existing = resolve(&state.pool, &key).await?;
    let director = DirectorRepo::update(&state.pool, existing.id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::not_found("Director", EntityKey::Id(existing.id)))
        })?;
    Ok(Json(DataResponse { data: director }))
}

/// DELETE /directores/{key}
///
/// Soft delete; deleting an inactive director is a no-op.
pub async fn delete(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<DataResponse<Director>>> {
    let director = set_active(&state.pool, &key, false).await?;
    Ok(Json(DataResponse { data: director }))
}

/// POST /directores/restaurar/{key}
pub async fn restore(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<DataResponse<Director>>> {
    let director = set_active(&state.pool, &key, true).await?;
    Ok(Json(DataResponse { data: director }))
}
