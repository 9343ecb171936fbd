//! Character entity model and DTOs.

use filmoteca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `characters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub power: String,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCharacter {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(min = 2, max = 200))]
    pub power: String,
    /// Set by the upload path, never read from the request body.
    #[serde(skip_deserializing)]
    pub image_url: Option<String>,
}

/// DTO for updating a character. Only these fields are writable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCharacter {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 200))]
    pub power: Option<String>,
}
