//! Path keys for entities addressable by either surrogate id or unique name.

use std::fmt;

use crate::types::DbId;

/// A "name-or-id" reference to a director or character.
///
/// Path segments are always tried as the unique display name first. A
/// segment made only of ASCII digits that matches no name falls back to
/// the numeric id, so a row named "01" is never shadowed by the row with
/// id 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKey {
    Id(DbId),
    Name(String),
}

impl EntityKey {
    pub fn parse(raw: &str) -> Self {
        EntityKey::Name(raw.to_string())
    }

    /// The id to look up once the name lookup has come back empty.
    pub fn fallback_id(&self) -> Option<DbId> {
        match self {
            EntityKey::Id(id) => Some(*id),
            EntityKey::Name(name) => {
                let trimmed = name.trim();
                if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                trimmed.parse::<DbId>().ok()
            }
        }
    }
}

impl From<&str> for EntityKey {
    fn from(raw: &str) -> Self {
        EntityKey::parse(raw)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKey::Id(id) => write!(f, "with id {id}"),
            EntityKey::Name(name) => write!(f, "'{name}'"),
        }
    }
}
