//! Repository for the `characters` table.

use filmoteca_core::key::EntityKey;
use filmoteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, power, image_url, active, created_at";

/// Provides CRUD and soft-delete operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    ///
    /// A duplicate name fails with a unique violation on `uq_characters_name`.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, power, image_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.power)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a character by id, regardless of `active`.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a character by exact name, regardless of `active`.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE name = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a name-or-id key. Names win; an all-digit name with no
    /// matching row falls back to the id.
    pub async fn find_by_key(
        pool: &PgPool,
        key: &EntityKey,
    ) -> Result<Option<Character>, sqlx::Error> {
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

    /// List characters with the given `active` state, in insertion order.
    pub async fn list(pool: &PgPool, active: bool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE active = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Character>(&query)
            .bind(active)
            .fetch_all(pool)
            .await
    }

    /// Update a character. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = COALESCE($2, name),
                power = COALESCE($3, power)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.power)
            .fetch_optional(pool)
            .await
    }

    /// Set the `active` flag. Idempotent; `None` only when the id is unknown.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        active: bool,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("UPDATE characters SET active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(active)
            .fetch_optional(pool)
            .await
    }
}
