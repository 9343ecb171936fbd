//! Director entity model and DTOs.

use filmoteca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `directors` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: String,
    pub biography: Option<String>,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new director.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDirector {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub biography: Option<String>,
    /// Set by the upload path, never read from the request body.
    #[serde(skip_deserializing)]
    pub image_url: Option<String>,
}

/// DTO for updating a director. Only these fields are writable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDirector {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub biography: Option<String>,
}
