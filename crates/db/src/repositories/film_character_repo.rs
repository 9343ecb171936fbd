//! Repository for the `film_characters` link table.
//!
//! A link is just the `(film_id, character_id)` pair; the composite primary
//! key guarantees each pair exists at most once.

use filmoteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::Character;
use crate::models::film::Film;

/// Provides attach/detach and lookups across the film/character link.
pub struct FilmCharacterRepo;

impl FilmCharacterRepo {
    /// Link a character to a film.
    ///
    /// Returns `true` if a new link was inserted, `false` if the pair was
    /// already linked.
    pub async fn attach(
        pool: &PgPool,
        film_id: DbId,
        character_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO film_characters (film_id, character_id)
             VALUES ($1, $2)
             ON CONFLICT (film_id, character_id) DO NOTHING",
        )
        .bind(film_id)
        .bind(character_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a link. Returns `true` if a link was removed, `false` if the
    /// pair was not linked.
    pub async fn detach(
        pool: &PgPool,
        film_id: DbId,
        character_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM film_characters WHERE film_id = $1 AND character_id = $2")
                .bind(film_id)
                .bind(character_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Characters linked to a film, in character insertion order.
    pub async fn list_characters_for_film(
        pool: &PgPool,
        film_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        sqlx::query_as::<_, Character>(
            "SELECT c.id, c.name, c.power, c.image_url, c.active, c.created_at
             FROM characters c
             JOIN film_characters fc ON fc.character_id = c.id
             WHERE fc.film_id = $1
             ORDER BY c.id ASC",
        )
        .bind(film_id)
        .fetch_all(pool)
        .await
    }

    /// Films a character appears in, in film insertion order.
    pub async fn list_films_for_character(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<Vec<Film>, sqlx::Error> {
        sqlx::query_as::<_, Film>(
            "SELECT f.id, f.title, f.release_year, f.director_id, f.image_url, f.active, f.created_at
             FROM films f
             JOIN film_characters fc ON fc.film_id = f.id
             WHERE fc.character_id = $1
             ORDER BY f.id ASC",
        )
        .bind(character_id)
        .fetch_all(pool)
        .await
    }

    /// Number of link rows for one pair (0 or 1).
    pub async fn count_pair(
        pool: &PgPool,
        film_id: DbId,
        character_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM film_characters WHERE film_id = $1 AND character_id = $2",
        )
        .bind(film_id)
        .bind(character_id)
        .fetch_one(pool)
        .await
    }
}
