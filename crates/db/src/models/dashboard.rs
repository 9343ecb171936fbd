//! Read-only dashboard aggregates. Nothing here is persisted.

use filmoteca_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Row counts per entity, across active and inactive rows.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct EntityTotals {
    pub films: i64,
    pub characters: i64,
    pub directors: i64,
    pub trivia: i64,
}

/// One bucket of the films-per-release-year histogram.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct YearCount {
    pub release_year: i32,
    pub films: i64,
}

/// Active vs inactive character counts.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct StatusCount {
    pub active: i64,
    pub inactive: i64,
}

/// Number of films owned by one director (zero included).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DirectorFilmCount {
    pub director_id: DbId,
    pub director_name: String,
    pub films: i64,
}

/// Everything the dashboard shows, recomputed per request.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub totals: EntityTotals,
    pub films_by_year: Vec<YearCount>,
    pub character_status: StatusCount,
    pub films_by_director: Vec<DirectorFilmCount>,
}
