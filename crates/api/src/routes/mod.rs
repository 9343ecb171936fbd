pub mod character;
pub mod dashboard;
pub mod director;
pub mod film;
pub mod health;
pub mod search;
pub mod trivia;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree, mounted at the root.
///
/// ```text
/// /peliculas       films, film detail, character links, listing page
/// /personajes      characters and the films they appear in
/// /directores      directors and the films they own
/// /curiosidades    trivia entries
/// /buscar          cross-entity search (JSON and page)
/// /dashboard       aggregates (JSON and page)
/// ```
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .nest("/peliculas", film::router())
        .nest("/personajes", character::router())
        .nest("/directores", director::router())
        .nest("/curiosidades", trivia::router())
        .nest("/buscar", search::router())
        .nest("/dashboard", dashboard::router())
}
