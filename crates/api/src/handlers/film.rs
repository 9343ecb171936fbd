//! Handlers for the `/peliculas` resource and the film/character link.
//!
//! Films are addressed by numeric id. Characters inside the link routes
//! take a name-or-id key.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use filmoteca_core::catalog::{require_not_blank, require_not_blank_opt, validate_input};
use filmoteca_core::error::CoreError;
use filmoteca_core::key::EntityKey;
use filmoteca_core::types::DbId;
use filmoteca_db::models::character::Character;
use filmoteca_db::models::film::{CreateFilm, Film, FilmDetail, UpdateFilm};
use filmoteca_db::repositories::{DirectorRepo, FilmCharacterRepo, FilmRepo, TriviaRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::character;
use crate::query::ActiveParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::upload::{CreateBody, ImageKind};

/// Look up a film by id, mapping absence to 404.
pub(crate) async fn resolve(pool: &sqlx::PgPool, id: DbId) -> AppResult<Film> {
    FilmRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Film", EntityKey::Id(id))))
}

pub(crate) async fn set_active(pool: &sqlx::PgPool, id: DbId, active: bool) -> AppResult<Film> {
    let film = FilmRepo::set_active(pool, id, active)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Film", EntityKey::Id(id))))?;
    tracing::info!(film_id = film.id, active, "Film lifecycle changed");
    Ok(film)
}

/// Reject a `director_id` that does not reference an existing director.
async fn ensure_director_exists(pool: &sqlx::PgPool, director_id: Option<DbId>) -> AppResult<()> {
    if let Some(id) = director_id {
        if DirectorRepo::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::Core(CoreError::not_found(
                "Director",
                EntityKey::Id(id),
            )));
        }
    }
    Ok(())
}

/// GET /peliculas?active=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ActiveParams>,
) -> AppResult<Json<DataResponse<Vec<Film>>>> {
    let films = FilmRepo::list(&state.pool, params.active).await?;
    Ok(Json(DataResponse { data: films }))
}

/// GET /peliculas/historico
pub async fn list_inactive(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Film>>>> {
    let films = FilmRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: films }))
}

/// GET /peliculas/{id}
///
/// The film with its director, linked characters, and trivia entries.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FilmDetail>>> {
    let film = resolve(&state.pool, id).await?;

    let director = match film.director_id {
        Some(director_id) => DirectorRepo::find_by_id(&state.pool, director_id).await?,
        None => None,
    };
    let characters = FilmCharacterRepo::list_characters_for_film(&state.pool, id).await?;
    let trivia = TriviaRepo::list_by_film(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: FilmDetail {
            film,
            director,
            characters,
            trivia,
        },
    }))
}

/// POST /peliculas
///
/// JSON body or multipart form (`title`, `release_year` or `year`,
/// optional `director_id`, optional `image`).
pub async fn create(
    State(state): State<AppState>,
    body: CreateBody<CreateFilm>,
) -> AppResult<(StatusCode, Json<DataResponse<Film>>)> {
    let (mut input, image) = match body {
        CreateBody::Json(input) => (input, None),
        CreateBody::Form(form) => {
            let release_year = match form.parse_optional::<i32>("release_year")? {
                Some(year) => year,
                None => form.parse_required::<i32>("year")?,
            };
            let input = CreateFilm {
                title: form.required("title")?,
                release_year,
                director_id: form.parse_optional("director_id")?,
                image_url: None,
            };
            (input, form.image)
        }
    };

    validate_input(&input)?;
    require_not_blank("title", &input.title)?;
    ensure_director_exists(&state.pool, input.director_id).await?;

    let stored = state
        .images
        .save_optional(ImageKind::Film, image.as_ref())
        .await?;
    input.image_url = stored.as_ref().map(|s| s.url.clone());

    let result = FilmRepo::create(&state.pool, &input).await;
    let film = state.images.discard_on_err(stored.as_ref(), result).await?;

    tracing::info!(film_id = film.id, title = %film.title, "Film created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: film })))
}

/// PUT /peliculas/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFilm>,
) -> AppResult<Json<DataResponse<Film>>> {
    validate_input(&input)?;
    require_not_blank_opt("title", input.title.as_deref())?;
    ensure_director_exists(&state.pool, input.director_id.flatten()).await?;

    let film = FilmRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Film", EntityKey::Id(id))))?;
    Ok(Json(DataResponse { data: film }))
}

/// DELETE /peliculas/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Film>>> {
    let film = set_active(&state.pool, id, false).await?;
    Ok(Json(DataResponse { data: film }))
}

/// POST /peliculas/restaurar/{id}
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Film>>> {
    let film = set_active(&state.pool, id, true).await?;
    Ok(Json(DataResponse { data: film }))
}

// ---------------------------------------------------------------------------
// Film / character link
// ---------------------------------------------------------------------------

/// Result of an attach or detach call.
#[derive(Debug, Serialize)]
pub struct LinkResult {
    pub film_id: DbId,
    pub character_id: DbId,
    /// `true` if this call inserted or removed a row, `false` if it was a no-op.
    pub changed: bool,
    /// Characters linked to the film after the call.
    pub characters: Vec<Character>,
}

/// GET /peliculas/{id}/personajes
pub async fn list_characters(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Character>>>> {
    let film = resolve(&state.pool, id).await?;
    let characters = FilmCharacterRepo::list_characters_for_film(&state.pool, film.id).await?;
    Ok(Json(DataResponse { data: characters }))
}

/// POST /peliculas/{id}/personajes/{key}
///
/// Idempotent: linking an already-linked pair changes nothing.
pub async fn attach_character(
    State(state): State<AppState>,
    Path((id, key)): Path<(DbId, String)>,
) -> AppResult<Json<DataResponse<LinkResult>>> {
    let film = resolve(&state.pool, id).await?;
    let character = character::resolve(&state.pool, &key).await?;

    let changed = FilmCharacterRepo::attach(&state.pool, film.id, character.id).await?;
    if changed {
        tracing::info!(
            film_id = film.id,
            character_id = character.id,
            "Character attached to film"
        );
    }

    let characters = FilmCharacterRepo::list_characters_for_film(&state.pool, film.id).await?;
    Ok(Json(DataResponse {
        data: LinkResult {
            film_id: film.id,
            character_id: character.id,
            changed,
            characters,
        },
    }))
}

/// DELETE /peliculas/{id}/personajes/{key}
///
/// Removing a pair that is not linked is a no-op, not an error.
pub async fn detach_character(
    State(state): State<AppState>,
    Path((id, key)): Path<(DbId, String)>,
) -> AppResult<Json<DataResponse<LinkResult>>> {
    let film = resolve(&state.pool, id).await?;
    let character = character::resolve(&state.pool, &key).await?;

    let changed = FilmCharacterRepo::detach(&state.pool, film.id, character.id).await?;
    if changed {
        tracing::info!(
            film_id = film.id,
            character_id = character.id,
            "Character detached from film"
        );
    }

    let characters = FilmCharacterRepo::list_characters_for_film(&state.pool, film.id).await?;
    Ok(Json(DataResponse {
        data: LinkResult {
            film_id: film.id,
            character_id: character.id,
            changed,
            characters,
        },
    }))
}
