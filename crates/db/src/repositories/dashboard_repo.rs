//! Aggregate queries for the dashboard. Read-only; counts span active and
//! inactive rows unless stated otherwise.

use sqlx::PgPool;

use crate::models::dashboard::{
    DashboardStats, DirectorFilmCount, EntityTotals, StatusCount, YearCount,
};

/// Provides the dashboard aggregates.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Row count per entity table.
    pub async fn totals(pool: &PgPool) -> Result<EntityTotals, sqlx::Error> {
        sqlx::query_as::<_, EntityTotals>(
            "SELECT
                (SELECT COUNT(*) FROM films) AS films,
                (SELECT COUNT(*) FROM characters) AS characters,
                (SELECT COUNT(*) FROM directors) AS directors,
                (SELECT COUNT(*) FROM trivia) AS trivia",
        )
        .fetch_one(pool)
        .await
    }

    /// Histogram of films per release year, oldest year first.
    pub async fn films_by_year(pool: &PgPool) -> Result<Vec<YearCount>, sqlx::Error> {
        sqlx::query_as::<_, YearCount>(
            "SELECT release_year, COUNT(*) AS films
             FROM films
             GROUP BY release_year
             ORDER BY release_year ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Active vs inactive characters.
    pub async fn character_status(pool: &PgPool) -> Result<StatusCount, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT
                COUNT(*) FILTER (WHERE active) AS active,
                COUNT(*) FILTER (WHERE NOT active) AS inactive
             FROM characters",
        )
        .fetch_one(pool)
        .await
    }

    /// Films per director, including directors with none, in director order.
    pub async fn films_by_director(pool: &PgPool) -> Result<Vec<DirectorFilmCount>, sqlx::Error> {
        sqlx::query_as::<_, DirectorFilmCount>(
            "SELECT d.id AS director_id, d.name AS director_name, COUNT(f.id) AS films
             FROM directors d
             LEFT JOIN films f ON f.director_id = d.id
             GROUP BY d.id, d.name
             ORDER BY d.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// All dashboard aggregates in one call.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let (totals, films_by_year, character_status, films_by_director) = tokio::try_join!(
            Self::totals(pool),
            Self::films_by_year(pool),
            Self::character_status(pool),
            Self::films_by_director(pool),
        )?;
        Ok(DashboardStats {
            totals,
            films_by_year,
            character_status,
            films_by_director,
        })
    }
}
