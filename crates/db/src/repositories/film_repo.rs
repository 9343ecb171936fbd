//! Repository for the `films` table.

use filmoteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::film::{CreateFilm, Film, UpdateFilm};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str =
    "id, title, release_year, director_id, image_url, active, created_at";

/// Provides CRUD and soft-delete operations for films.
pub struct FilmRepo;

impl FilmRepo {
    /// Insert a new film, returning the created row.
    ///
    /// A duplicate title fails on `uq_films_title`; an unknown `director_id`
    /// fails with a foreign-key violation.
    pub async fn create(pool: &PgPool, input: &CreateFilm) -> Result<Film, sqlx::Error> {
        let query = format!(
            "INSERT INTO films (title, release_year, director_id, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(input.director_id)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a film by id, regardless of `active`.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM films WHERE id = $1");
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a film by exact title, regardless of `active`.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM films WHERE title = $1");
        sqlx::query_as::<_, Film>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List films with the given `active` state, in insertion order.
    pub async fn list(pool: &PgPool, active: bool) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM films WHERE active = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Film>(&query)
            .bind(active)
            .fetch_all(pool)
            .await
    }

    /// List every film owned by a director, active or not.
    pub async fn list_by_director(
        pool: &PgPool,
        director_id: DbId,
    ) -> Result<Vec<Film>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM films WHERE director_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Film>(&query)
            .bind(director_id)
            .fetch_all(pool)
            .await
    }

    /// Update a film. Only non-`None` fields in `input` are applied;
    /// `director_id: Some(None)` clears the director.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFilm,
    ) -> Result<Option<Film>, sqlx::Error> {
        let director_provided = input.director_id.is_some();
        let director_value = input.director_id.flatten();

        let query = format!(
            "UPDATE films SET
                title = COALESCE($2, title),
                release_year = COALESCE($3, release_year),
                director_id = CASE WHEN $4 THEN $5 ELSE director_id END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(director_provided)
            .bind(director_value)
            .fetch_optional(pool)
            .await
    }

    /// Set the `active` flag. Idempotent; `None` only when the id is unknown.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        active: bool,
    ) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("UPDATE films SET active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .bind(active)
            .fetch_optional(pool)
            .await
    }
}
