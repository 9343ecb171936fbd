//! Handlers for the `/personajes` resource.
//!
//! Characters are addressed by a name-or-id key; the name stays unique.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use filmoteca_core::catalog::{require_not_blank, require_not_blank_opt, validate_input};
use filmoteca_core::error::CoreError;
use filmoteca_core::key::EntityKey;
use filmoteca_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use filmoteca_db::models::film::Film;
use filmoteca_db::repositories::{CharacterRepo, FilmCharacterRepo};

use crate::error::{AppError, AppResult};
use crate::query::ActiveParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::upload::{CreateBody, ImageKind};

/// Look up a character by raw path key, mapping absence to 404.
pub(crate) async fn resolve(pool: &sqlx::PgPool, raw_key: &str) -> AppResult<Character> {
    let key = EntityKey::parse(raw_key);
    CharacterRepo::find_by_key(pool, &key)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Character", key)))
}

pub(crate) async fn set_active(
    pool: &sqlx::PgPool,
    raw_key: &str,
    active: bool,
) -> AppResult<Character> {
    let character = resolve(pool, raw_key).await?;
    let character = CharacterRepo::set_active(pool, character.id, active)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::not_found(
                "Character",
                EntityKey::Id(character.id),
            ))
        })?;
    tracing::info!(character_id = character.id, active, "Character lifecycle changed");
    Ok(character)
}

/// GET /personajes?active=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ActiveParams>,
) -> AppResult<Json<DataResponse<Vec<Character>>>> {
    let characters = CharacterRepo::list(&state.pool, params.active).await?;
    Ok(Json(DataResponse { data: characters }))
}

/// GET /personajes/historico
pub async fn list_inactive(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Character>>>> {
    let characters = CharacterRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: characters }))
}

/// GET /personajes/{key}
pub async fn get_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<DataResponse<Character>>> {
    let character = resolve(&state.pool, &key).await?;
    Ok(Json(DataResponse { data: character }))
}

/// GET /personajes/{key}/peliculas
pub async fn list_films(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Film>>>> {
    let character = resolve(&state.pool, &key).await?;
    let films = FilmCharacterRepo::list_films_for_character(&state.pool, character.id).await?;
    Ok(Json(DataResponse { data: films }))
}

/// POST /personajes
///
/// JSON body or multipart form (`name`, `power`, optional `image`).
pub async fn create(
    State(state): State<AppState>,
    body: CreateBody<CreateCharacter>,
) -> AppResult<(StatusCode, Json<DataResponse<Character>>)> {
    let (mut input, image) = match body {
        CreateBody::Json(input) => (input, None),
        CreateBody::Form(form) => {
            let input = CreateCharacter {
                name: form.required("name")?,
                power: form.required("power")?,
                image_url: None,
            };
            (input, form.image)
        }
    };

    validate_input(&input)?;
    require_not_blank("name", &input.name)?;
    require_not_blank("power", &input.power)?;

    let stored = state
        .images
        .save_optional(ImageKind::Character, image.as_ref())
        .await?;
    input.image_url = stored.as_ref().map(|s| s.url.clone());

    let result = CharacterRepo::create(&state.pool, &input).await;
    let character = state.images.discard_on_err(stored.as_ref(), result).await?;

    tracing::info!(character_id = character.id, name = %character.name, "Character created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: character })))
}

/// PUT /personajes/{key}
pub async fn update(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<DataResponse<Character>>> {
    validate_input(&input)?;
    require_not_blank_opt("name", input.name.as_deref())?;
    require_not_blank_opt("power", input.power.as_deref())?;

    let existing = resolve(&state.pool, &key).await?;
    let character = CharacterRepo::update(&state.pool, existing.id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::not_found(
                "Character",
                EntityKey::Id(existing.id),
            ))
        })?;
    Ok(Json(DataResponse { data: character }))
}

/// DELETE /personajes/{key}
pub async fn delete(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<DataResponse<Character>>> {
    let character = set_active(&state.pool, &key, false).await?;
    Ok(Json(DataResponse { data: character }))
}

/// POST /personajes/restaurar/{key}
pub async fn restore(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<DataResponse<Character>>> {
    let character = set_active(&state.pool, &key, true).await?;
    Ok(Json(DataResponse { data: character }))
}
