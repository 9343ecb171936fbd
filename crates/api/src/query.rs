//! Shared query parameter types for API handlers.

use serde::Deserialize;

fn default_active() -> bool {
    true
}

/// `?active=` filter for list endpoints. Defaults to `true`.
///
/// `activos` is accepted as an alias for older clients.
#[derive(Debug, Deserialize)]
pub struct ActiveParams {
    #[serde(default = "default_active", alias = "activos")]
    pub active: bool,
}

/// `?q=` for search endpoints. A missing `q` is treated as empty and
/// rejected by validation.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Flash message carried back to a listing page after a form action.
#[derive(Debug, Default, Deserialize)]
pub struct FlashParams {
    pub mensaje: Option<String>,
    pub error: Option<String>,
}
