use std::sync::Arc;

use crate::config::ServerConfig;
use crate::upload::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: filmoteca_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Where uploaded images are written.
    pub images: Arc<ImageStore>,
}
