//! Handlers for the `/curiosidades` resource (film trivia).
//!
//! Trivia entries are keyed by numeric id. A film may carry several
//! entries; nothing enforces one-per-film.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use filmoteca_core::catalog::{validate_input, validate_trivia_content};
use filmoteca_core::error::CoreError;
use filmoteca_core::key::EntityKey;
use filmoteca_core::types::DbId;
use filmoteca_db::models::trivia::{CreateTrivia, Trivia, UpdateTrivia};
use filmoteca_db::repositories::{FilmRepo, TriviaRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::query::ActiveParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::upload::CreateBody;

/// Create request: the film is referenced by id or by exact title.
#[derive(Debug, Deserialize)]
pub struct CreateTriviaRequest {
    pub film_id: Option<DbId>,
    pub film_title: Option<String>,
    pub content: String,
}

pub(crate) async fn resolve(pool: &sqlx::PgPool, id: DbId) -> AppResult<Trivia> {
    TriviaRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Trivia", EntityKey::Id(id))))
}

pub(crate) async fn set_active(pool: &sqlx::PgPool, id: DbId, active: bool) -> AppResult<Trivia> {
    let trivia = TriviaRepo::set_active(pool, id, active)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Trivia", EntityKey::Id(id))))?;
    tracing::info!(trivia_id = trivia.id, active, "Trivia lifecycle changed");
    Ok(trivia)
}

/// Resolve the film reference of a create request to a film id.
///
/// `film_id` wins when both are given.
async fn resolve_film_id(pool: &sqlx::PgPool, req: &CreateTriviaRequest) -> AppResult<DbId> {
    if let Some(id) = req.film_id {
        return FilmRepo::find_by_id(pool, id)
            .await?
            .map(|film| film.id)
            .ok_or_else(|| AppError::Core(CoreError::not_found("Film", EntityKey::Id(id))));
    }

    match req.film_title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => FilmRepo::find_by_title(pool, title)
            .await?
            .map(|film| film.id)
            .ok_or_else(|| {
                AppError::Core(CoreError::not_found(
                    "Film",
                    EntityKey::Name(title.to_string()),
                ))
            }),
        _ => Err(AppError::Core(CoreError::Validation(
            "Either 'film_id' or 'film_title' is required".into(),
        ))),
    }
}

/// GET /curiosidades?active=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ActiveParams>,
) -> AppResult<Json<DataResponse<Vec<Trivia>>>> {
    let trivia = TriviaRepo::list(&state.pool, params.active).await?;
    Ok(Json(DataResponse { data: trivia }))
}

/// GET /curiosidades/historico
pub async fn list_inactive(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Trivia>>>> {
    let trivia = TriviaRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: trivia }))
}

/// GET /curiosidades/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Trivia>>> {
    let trivia = resolve(&state.pool, id).await?;
    Ok(Json(DataResponse { data: trivia }))
}

/// POST /curiosidades
///
/// JSON body or form (`film_id` or `film_title`, `content`). A file part in
/// the form is ignored.
pub async fn create(
    State(state): State<AppState>,
    body: CreateBody<CreateTriviaRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Trivia>>)> {
    let req = match body {
        CreateBody::Json(req) => req,
        CreateBody::Form(form) => CreateTriviaRequest {
            film_id: form.parse_optional("film_id")?,
            film_title: form.optional("film_title"),
            content: form.required("content")?,
        },
    };

    validate_trivia_content(&req.content)?;
    let film_id = resolve_film_id(&state.pool, &req).await?;

    let input = CreateTrivia {
        film_id,
        content: req.content,
    };
    validate_input(&input)?;

    let trivia = TriviaRepo::create(&state.pool, &input).await?;
    tracing::info!(trivia_id = trivia.id, film_id, "Trivia created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: trivia })))
}

/// PUT /curiosidades/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrivia>,
) -> AppResult<Json<DataResponse<Trivia>>> {
    if let Some(content) = input.content.as_deref() {
        validate_trivia_content(content)?;
    }
    validate_input(&input)?;

    let trivia = TriviaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Trivia", EntityKey::Id(id))))?;
    Ok(Json(DataResponse { data: trivia }))
}

/// DELETE /curiosidades/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Trivia>>> {
    let trivia = set_active(&state.pool, id, false).await?;
    Ok(Json(DataResponse { data: trivia }))
}

/// POST /curiosidades/restaurar/{id}
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Trivia>>> {
    let trivia = set_active(&state.pool, id, true).await?;
    Ok(Json(DataResponse { data: trivia }))
}
