//! Repository for the `directors` table.

use filmoteca_core::key::EntityKey;
use filmoteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::director::{CreateDirector, Director, UpdateDirector};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, biography, image_url, active, created_at";

/// Provides CRUD and soft-delete operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    ///
    /// A duplicate name fails with a unique violation on `uq_directors_name`.
    pub async fn create(pool: &PgPool, input: &CreateDirector) -> Result<Director, sqlx::Error> {
        let query = format!(
            "INSERT INTO directors (name, biography, image_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.name)
            .bind(&input.biography)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a director by id, regardless of `active`.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE id = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a director by exact name, regardless of `active`.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE name = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a name-or-id key. Names win; an all-digit name with no
    /// matching row falls back to the id.
    pub async fn find_by_key(
        pool: &PgPool,
        key: &EntityKey,
    ) -> Result<Option<Director>, sqlx::Error> {
        if let EntityKey::Name(name) = key {
            if let Some(found) = Self::find_by_name(pool, name).await? {
                return Ok(Some(found));
            }
        }
        match key.fallback_id() {
            Some(id) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// List directors with the given `active` state, in insertion order.
    pub async fn list(pool: &PgPool, active: bool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE active = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Director>(&query)
            .bind(active)
            .fetch_all(pool)
            .await
    }

    /// Update a director. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDirector,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!(
            "UPDATE directors SET
                name = COALESCE($2, name),
                biography = COALESCE($3, biography)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.biography)
            .fetch_optional(pool)
            .await
    }

    /// Set the `active` flag (soft delete with `false`, restore with `true`).
    ///
    /// Idempotent: setting the current value again still returns the row.
    /// Returns `None` only when the id does not exist.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        active: bool,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("UPDATE directors SET active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .bind(active)
            .fetch_optional(pool)
            .await
    }
}
