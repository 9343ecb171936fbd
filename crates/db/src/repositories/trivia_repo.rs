//! Repository for the `trivia` table.

use filmoteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::trivia::{CreateTrivia, Trivia, UpdateTrivia};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, film_id, content, active, created_at";

/// Provides CRUD and soft-delete operations for trivia entries.
pub struct TriviaRepo;

impl TriviaRepo {
    /// Insert a new trivia entry for an existing film.
    pub async fn create(pool: &PgPool, input: &CreateTrivia) -> Result<Trivia, sqlx::Error> {
        let query = format!(
            "INSERT INTO trivia (film_id, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trivia>(&query)
            .bind(input.film_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a trivia entry by id, regardless of `active`.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trivia>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trivia WHERE id = $1");
        sqlx::query_as::<_, Trivia>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List trivia entries with the given `active` state, in insertion order.
    pub async fn list(pool: &PgPool, active: bool) -> Result<Vec<Trivia>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trivia WHERE active = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Trivia>(&query)
            .bind(active)
            .fetch_all(pool)
            .await
    }

    /// List every trivia entry attached to a film, active or not.
    pub async fn list_by_film(pool: &PgPool, film_id: DbId) -> Result<Vec<Trivia>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trivia WHERE film_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Trivia>(&query)
            .bind(film_id)
            .fetch_all(pool)
            .await
    }

    /// Update a trivia entry's content.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrivia,
    ) -> Result<Option<Trivia>, sqlx::Error> {
        let query = format!(
            "UPDATE trivia SET content = COALESCE($2, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trivia>(&query)
            .bind(id)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Set the `active` flag. Idempotent; `None` only when the id is unknown.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        active: bool,
    ) -> Result<Option<Trivia>, sqlx::Error> {
        let query = format!("UPDATE trivia SET active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Trivia>(&query)
            .bind(id)
            .bind(active)
            .fetch_optional(pool)
            .await
    }
}
