//! Film entity model, DTOs, and the film detail view.

use filmoteca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::character::Character;
use crate::models::director::Director;
use crate::models::trivia::Trivia;

/// A row from the `films` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Film {
    pub id: DbId,
    pub title: String,
    pub release_year: i32,
    /// A film may have no director assigned.
    pub director_id: Option<DbId>,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new film.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFilm {
    #[validate(length(min = 2, max = 100))]
    pub title: String,
    #[serde(alias = "year")]
    #[validate(range(min = 1900, max = 2100))]
    pub release_year: i32,
    pub director_id: Option<DbId>,
    /// Set by the upload path, never read from the request body.
    #[serde(skip_deserializing)]
    pub image_url: Option<String>,
}

/// DTO for updating a film. Only these fields are writable.
///
/// `director_id` is `None` when absent, `Some(None)` when sent as `null`
/// (clears the director), and `Some(Some(id))` to reassign.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFilm {
    #[validate(length(min = 2, max = 100))]
    pub title: Option<String>,
    #[serde(alias = "year")]
    #[validate(range(min = 1900, max = 2100))]
    pub release_year: Option<i32>,
    #[serde(default, deserialize_with = "present")]
    pub director_id: Option<Option<DbId>>,
}

/// Marks a present field as `Some`, keeping an explicit `null` as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A film together with its director, linked characters, and trivia.
#[derive(Debug, Clone, Serialize)]
pub struct FilmDetail {
    #[serde(flatten)]
    pub film: Film,
    pub director: Option<Director>,
    pub characters: Vec<Character>,
    pub trivia: Vec<Trivia>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn director_id_distinguishes_absent_from_null() {
        let absent: UpdateFilm = serde_json::from_str(r#"{"title": "Thor"}"#).unwrap();
        assert_eq!(absent.director_id, None);

        let cleared: UpdateFilm = serde_json::from_str(r#"{"director_id": null}"#).unwrap();
        assert_eq!(cleared.director_id, Some(None));

        let assigned: UpdateFilm = serde_json::from_str(r#"{"director_id": 4}"#).unwrap();
        assert_eq!(assigned.director_id, Some(Some(4)));
    }
}
