//! Cross-entity substring search.
//!
//! Four independent `ILIKE` scans (film title, character name, director
//! name, trivia content) run concurrently on the pool. No ranking, no
//! pagination, no `active` filter.

use filmoteca_core::search::like_pattern;
use sqlx::PgPool;

use crate::models::character::Character;
use crate::models::director::Director;
use crate::models::film::Film;
use crate::models::search::SearchResults;
use crate::models::trivia::Trivia;
use crate::repositories::{character_repo, director_repo, film_repo, trivia_repo};

/// Provides the unified catalog search.
pub struct SearchRepo;

impl SearchRepo {
    /// Match `term` (already trimmed and non-empty) against all four entities.
    pub async fn search(pool: &PgPool, term: &str) -> Result<SearchResults, sqlx::Error> {
        let pattern = like_pattern(term);

        let (films, characters, directors, trivia) = tokio::try_join!(
            Self::films(pool, &pattern),
            Self::characters(pool, &pattern),
            Self::directors(pool, &pattern),
            Self::trivia(pool, &pattern),
        )?;

        tracing::debug!(
            term,
            films = films.len(),
            characters = characters.len(),
            directors = directors.len(),
            trivia = trivia.len(),
            "Catalog search executed",
        );

        Ok(SearchResults::new(
            term.to_string(),
            films,
            characters,
            directors,
            trivia,
        ))
    }

    async fn films(pool: &PgPool, pattern: &str) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM films WHERE title ILIKE $1 ESCAPE '\\' ORDER BY id ASC",
            film_repo::COLUMNS
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    async fn characters(pool: &PgPool, pattern: &str) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM characters WHERE name ILIKE $1 ESCAPE '\\' ORDER BY id ASC",
            character_repo::COLUMNS
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    async fn directors(pool: &PgPool, pattern: &str) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM directors WHERE name ILIKE $1 ESCAPE '\\' ORDER BY id ASC",
            director_repo::COLUMNS
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    async fn trivia(pool: &PgPool, pattern: &str) -> Result<Vec<Trivia>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM trivia WHERE content ILIKE $1 ESCAPE '\\' ORDER BY id ASC",
            trivia_repo::COLUMNS
        );
        sqlx::query_as::<_, Trivia>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }
}
