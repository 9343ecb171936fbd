//! Server-rendered HTML pages and the `_method` form actions behind them.
//!
//! Listing pages show active and inactive rows side by side. Each row has a
//! form posting `_method=DELETE` or `_method=RESTORE` back to
//! `/{resource}/{key}`, which answers with a 303 to the listing page
//! carrying `mensaje` or `error`.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use filmoteca_core::error::CoreError;
use filmoteca_core::search::normalize_query;
use filmoteca_core::types::DbId;
use filmoteca_db::models::character::Character;
use filmoteca_db::models::director::Director;
use filmoteca_db::models::film::Film;
use filmoteca_db::models::trivia::Trivia;
use filmoteca_db::repositories::{
    CharacterRepo, DashboardRepo, DirectorRepo, FilmRepo, SearchRepo, TriviaRepo,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::handlers::{character, director, film, trivia};
use crate::pages::{encode, error_page, escape, flash, layout, method_button, table};
use crate::query::{FlashParams, SearchParams};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Error page
// ---------------------------------------------------------------------------

/// Error type for HTML routes: same status mapping as [`AppError`], rendered
/// as an error page instead of JSON.
#[derive(Debug)]
pub struct PageError(AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        Self(AppError::Core(err))
    }
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        Self(AppError::Database(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _code, message) = self.0.parts();
        (status, error_page(status, &message)).into_response()
    }
}

type PageResult = Result<Html<String>, PageError>;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The four catalog resources that have a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Directors,
    Films,
    Characters,
    Trivia,
}

impl Resource {
    /// Mount path of the resource.
    pub fn path(self) -> &'static str {
        match self {
            Self::Directors => "/directores",
            Self::Films => "/peliculas",
            Self::Characters => "/personajes",
            Self::Trivia => "/curiosidades",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Directors => "Directores",
            Self::Films => "Películas",
            Self::Characters => "Personajes",
            Self::Trivia => "Curiosidades",
        }
    }

    fn deleted_message(self) -> &'static str {
        match self {
            Self::Directors => "Director eliminado",
            Self::Films => "Película eliminada",
            Self::Characters => "Personaje eliminado",
            Self::Trivia => "Curiosidad eliminada",
        }
    }

    fn restored_message(self) -> &'static str {
        match self {
            Self::Directors => "Director restaurado",
            Self::Films => "Película restaurada",
            Self::Characters => "Personaje restaurado",
            Self::Trivia => "Curiosidad restaurada",
        }
    }

    fn listing_url(self) -> String {
        format!("{}/page", self.path())
    }
}

/// Flip the `active` flag of the row behind `key` in `resource`.
async fn dispatch_set_active(
    pool: &sqlx::PgPool,
    resource: Resource,
    key: &str,
    active: bool,
) -> Result<(), AppError> {
    match resource {
        Resource::Directors => director::set_active(pool, key, active).await.map(drop),
        Resource::Characters => character::set_active(pool, key, active).await.map(drop),
        Resource::Films => film::set_active(pool, parse_id(key)?, active).await.map(drop),
        Resource::Trivia => trivia::set_active(pool, parse_id(key)?, active).await.map(drop),
    }
}

fn parse_id(key: &str) -> Result<DbId, AppError> {
    key.trim()
        .parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid id '{key}'")))
}

// ---------------------------------------------------------------------------
// Form actions
// ---------------------------------------------------------------------------

/// Body of a listing-page form: `_method` selects the action.
#[derive(Debug, Deserialize)]
pub struct MethodOverride {
    #[serde(rename = "_method", default)]
    pub method: String,
}

/// Form body of an action post; a missing or malformed body is reported
/// through the listing page like any other failed action.
type ActionForm = Result<Form<MethodOverride>, FormRejection>;

async fn form_action(
    state: &AppState,
    resource: Resource,
    key: &str,
    form: ActionForm,
) -> Redirect {
    let outcome = match form {
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        Ok(Form(form)) => match form.method.to_ascii_uppercase().as_str() {
            "DELETE" => dispatch_set_active(&state.pool, resource, key, false)
                .await
                .map(|()| resource.deleted_message()),
            "RESTORE" => dispatch_set_active(&state.pool, resource, key, true)
                .await
                .map(|()| resource.restored_message()),
            other => Err(AppError::BadRequest(format!(
                "Unsupported form method '{other}'"
            ))),
        },
    };

    let location = match outcome {
        Ok(message) => format!("{}?mensaje={}", resource.listing_url(), encode(message)),
        Err(err) => {
            let (status, _code, message) = err.parts();
            tracing::warn!(
                resource = resource.path(),
                key,
                status = status.as_u16(),
                error = %message,
                "Form action failed",
            );
            format!("{}?error={}", resource.listing_url(), encode(&message))
        }
    };
    Redirect::to(&location)
}

/// POST /directores/{key}
pub async fn director_action(
    State(state): State<AppState>,
    Path(key): Path<String>,
    form: ActionForm,
) -> Redirect {
    form_action(&state, Resource::Directors, &key, form).await
}

/// POST /peliculas/{id}
pub async fn film_action(
    State(state): State<AppState>,
    Path(key): Path<String>,
    form: ActionForm,
) -> Redirect {
    form_action(&state, Resource::Films, &key, form).await
}

/// POST /personajes/{key}
pub async fn character_action(
    State(state): State<AppState>,
    Path(key): Path<String>,
    form: ActionForm,
) -> Redirect {
    form_action(&state, Resource::Characters, &key, form).await
}

/// POST /curiosidades/{id}
pub async fn trivia_action(
    State(state): State<AppState>,
    Path(key): Path<String>,
    form: ActionForm,
) -> Redirect {
    form_action(&state, Resource::Trivia, &key, form).await
}

// ---------------------------------------------------------------------------
// Listing pages
// ---------------------------------------------------------------------------

fn image_cell(url: Option<&str>) -> String {
    match url {
        Some(url) => format!(r#"<img src="{}" alt="" width="64">"#, escape(url)),
        None => String::new(),
    }
}

fn action_cell(resource: Resource, id: DbId, active: bool) -> String {
    let action = format!("{}/{id}", resource.path());
    if active {
        method_button(&action, "DELETE", "Eliminar")
    } else {
        method_button(&action, "RESTORE", "Restaurar")
    }
}

fn director_row(d: &Director) -> Vec<String> {
    vec![
        d.id.to_string(),
        escape(&d.name),
        escape(d.biography.as_deref().unwrap_or("")),
        image_cell(d.image_url.as_deref()),
        action_cell(Resource::Directors, d.id, d.active),
    ]
}

fn film_row(f: &Film) -> Vec<String> {
    vec![
        f.id.to_string(),
        escape(&f.title),
        f.release_year.to_string(),
        f.director_id.map(|id| id.to_string()).unwrap_or_default(),
        image_cell(f.image_url.as_deref()),
        action_cell(Resource::Films, f.id, f.active),
    ]
}

fn character_row(c: &Character) -> Vec<String> {
    vec![
        c.id.to_string(),
        escape(&c.name),
        escape(&c.power),
        image_cell(c.image_url.as_deref()),
        action_cell(Resource::Characters, c.id, c.active),
    ]
}

fn trivia_row(t: &Trivia) -> Vec<String> {
    vec![
        t.id.to_string(),
        t.film_id.to_string(),
        escape(&t.content),
        action_cell(Resource::Trivia, t.id, t.active),
    ]
}

fn listing_page(
    resource: Resource,
    flash_params: &FlashParams,
    headers: &[&str],
    active: Vec<Vec<String>>,
    inactive: Vec<Vec<String>>,
) -> Html<String> {
    let body = format!(
        "{flash}\n<h2>Activos</h2>\n{active}\n<h2>Histórico</h2>\n{inactive}",
        flash = flash(flash_params),
        active = table(headers, &active),
        inactive = table(headers, &inactive),
    );
    layout(resource.title(), &body)
}

/// GET /directores/page
pub async fn directors_page(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> PageResult {
    let active = DirectorRepo::list(&state.pool, true).await?;
    let inactive = DirectorRepo::list(&state.pool, false).await?;
    Ok(listing_page(
        Resource::Directors,
        &params,
        &["Id", "Nombre", "Biografía", "Imagen", ""],
        active.iter().map(director_row).collect(),
        inactive.iter().map(director_row).collect(),
    ))
}

/// GET /peliculas/page
pub async fn films_page(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> PageResult {
    let active = FilmRepo::list(&state.pool, true).await?;
    let inactive = FilmRepo::list(&state.pool, false).await?;
    Ok(listing_page(
        Resource::Films,
        &params,
        &["Id", "Título", "Año", "Director", "Imagen", ""],
        active.iter().map(film_row).collect(),
        inactive.iter().map(film_row).collect(),
    ))
}

/// GET /personajes/page
pub async fn characters_page(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> PageResult {
    let active = CharacterRepo::list(&state.pool, true).await?;
    let inactive = CharacterRepo::list(&state.pool, false).await?;
    Ok(listing_page(
        Resource::Characters,
        &params,
        &["Id", "Nombre", "Poder", "Imagen", ""],
        active.iter().map(character_row).collect(),
        inactive.iter().map(character_row).collect(),
    ))
}

/// GET /curiosidades/page
pub async fn trivia_page(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> PageResult {
    let active = TriviaRepo::list(&state.pool, true).await?;
    let inactive = TriviaRepo::list(&state.pool, false).await?;
    Ok(listing_page(
        Resource::Trivia,
        &params,
        &["Id", "Película", "Contenido", ""],
        active.iter().map(trivia_row).collect(),
        inactive.iter().map(trivia_row).collect(),
    ))
}

// ---------------------------------------------------------------------------
// Dashboard and search pages
// ---------------------------------------------------------------------------

/// GET /dashboard/page
pub async fn dashboard_page(State(state): State<AppState>) -> PageResult {
    let stats = DashboardRepo::stats(&state.pool).await?;

    let kpis = format!(
        "<ul>\n<li>Películas: {}</li>\n<li>Personajes: {}</li>\n<li>Directores: {}</li>\n<li>Curiosidades: {}</li>\n</ul>",
        stats.totals.films, stats.totals.characters, stats.totals.directors, stats.totals.trivia,
    );

    let by_year: Vec<Vec<String>> = stats
        .films_by_year
        .iter()
        .map(|y| vec![y.release_year.to_string(), y.films.to_string()])
        .collect();

    let status = vec![
        vec!["Activos".to_string(), stats.character_status.active.to_string()],
        vec!["Inactivos".to_string(), stats.character_status.inactive.to_string()],
    ];

    let by_director: Vec<Vec<String>> = stats
        .films_by_director
        .iter()
        .map(|d| vec![escape(&d.director_name), d.films.to_string()])
        .collect();

    let body = format!(
        "{kpis}\n<h2>Películas por año</h2>\n{}\n<h2>Estado de personajes</h2>\n{}\n<h2>Películas por director</h2>\n{}",
        table(&["Año", "Películas"], &by_year),
        table(&["Estado", "Personajes"], &status),
        table(&["Director", "Películas"], &by_director),
    );
    Ok(layout("Dashboard", &body))
}

/// GET /buscar/page?q=
///
/// Without `q` only the search form is shown.
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> PageResult {
    let form = format!(
        r#"<form method="get" action="/buscar/page"><input type="search" name="q" value="{}"><button type="submit">Buscar</button></form>"#,
        escape(&params.q)
    );

    if params.q.trim().is_empty() {
        return Ok(layout("Buscar", &form));
    }

    let term = normalize_query(&params.q)?;
    let results = SearchRepo::search(&state.pool, term).await?;

    let sections = if results.no_results {
        "<p>Sin resultados.</p>".to_string()
    } else {
        let films: Vec<Vec<String>> = results
            .films
            .iter()
            .map(|f| vec![escape(&f.title), f.release_year.to_string()])
            .collect();
        let characters: Vec<Vec<String>> = results
            .characters
            .iter()
            .map(|c| vec![escape(&c.name), escape(&c.power)])
            .collect();
        let directors: Vec<Vec<String>> = results
            .directors
            .iter()
            .map(|d| vec![escape(&d.name)])
            .collect();
        let trivia: Vec<Vec<String>> = results
            .trivia
            .iter()
            .map(|t| vec![t.film_id.to_string(), escape(&t.content)])
            .collect();

        format!(
            "<h2>Películas</h2>\n{}\n<h2>Personajes</h2>\n{}\n<h2>Directores</h2>\n{}\n<h2>Curiosidades</h2>\n{}",
            table(&["Título", "Año"], &films),
            table(&["Nombre", "Poder"], &characters),
            table(&["Nombre"], &directors),
            table(&["Película", "Contenido"], &trivia),
        )
    };

    let title = format!("Resultados para \"{term}\"");
    Ok(layout(&title, &format!("{form}\n{sections}")))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn resource_paths_are_spanish_mounts() {
        assert_eq!(Resource::Films.path(), "/peliculas");
        assert_eq!(Resource::Trivia.listing_url(), "/curiosidades/page");
    }

    #[test]
    fn parse_id_rejects_names() {
        assert!(parse_id("12").is_ok());
        assert!(matches!(parse_id("Alien"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn page_error_keeps_status() {
        let err = PageError::from(CoreError::not_found("Film", 3));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
