//! Trivia entity model and DTOs.

use filmoteca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `trivia` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Trivia {
    pub id: DbId,
    pub film_id: DbId,
    pub content: String,
    pub active: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a trivia entry once the film reference is resolved.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrivia {
    pub film_id: DbId,
    #[validate(length(min = 10, max = 300))]
    pub content: String,
}

/// DTO for updating a trivia entry. Only the content is writable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTrivia {
    #[validate(length(min = 10, max = 300))]
    pub content: Option<String>,
}
