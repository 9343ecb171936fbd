//! HTTP-level integration tests for the server-rendered pages.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, body_text, build_test_app, create_character, create_director, create_film, get,
    location, post_empty, post_form,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_page_shows_active_and_inactive(pool: PgPool) {
    let app = build_test_app(pool);
    create_director(app.clone(), "Peyton Reed").await;
    create_director(app.clone(), "Scott <Derrickson>").await;
    post_form(app.clone(), "/directores/Peyton%20Reed", "_method=DELETE").await;

    let response = get(app, "/directores/page?mensaje=Hola").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<p class=\"mensaje\">Hola</p>"));
    assert!(html.contains("Peyton Reed"));
    assert!(html.contains("Scott &lt;Derrickson&gt;"));
    assert!(html.contains("Restaurar"));
    assert!(html.contains("Eliminar"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn form_delete_redirects_with_message(pool: PgPool) {
    let app = build_test_app(pool);
    let film = create_film(app.clone(), "Iron Man 2", 2010).await;

    let response = post_form(
        app.clone(),
        &format!("/peliculas/{}", film["id"]),
        "_method=DELETE",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/peliculas/page?mensaje=Pel%C3%ADcula%20eliminada"
    );

    let json = body_json(get(app.clone(), "/peliculas/historico").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = post_form(
        app,
        &format!("/peliculas/{}", film["id"]),
        "_method=RESTORE",
    )
    .await;
    assert_eq!(
        location(&response),
        "/peliculas/page?mensaje=Pel%C3%ADcula%20restaurada"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn form_action_failure_redirects_with_error(pool: PgPool) {
    let app = build_test_app(pool);
    create_character(app.clone(), "Drax").await;

    let response = post_form(app.clone(), "/personajes/Ghost", "_method=DELETE").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/personajes/page?error="));

    let response = post_form(app.clone(), "/personajes/Drax", "_method=PATCH").await;
    assert!(location(&response).starts_with("/personajes/page?error="));

    let response = post_form(app, "/curiosidades/abc", "_method=DELETE").await;
    assert!(location(&response).starts_with("/curiosidades/page?error="));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_page_renders(pool: PgPool) {
    let app = build_test_app(pool);
    create_director(app.clone(), "Jon Watts").await;

    let response = get(app, "/dashboard/page").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Películas por director"));
    assert!(html.contains("Jon Watts"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_page_without_results(pool: PgPool) {
    let app = build_test_app(pool);
    create_film(app.clone(), "Iron Man", 2008).await;

    let html = body_text(get(app.clone(), "/buscar/page?q=zzz").await).await;
    assert!(html.contains("Sin resultados."));

    let html = body_text(get(app.clone(), "/buscar/page?q=iron").await).await;
    assert!(html.contains("Iron Man"));
    assert!(!html.contains("Sin resultados."));

    let html = body_text(get(app, "/buscar/page").await).await;
    assert!(html.contains("<form"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn trivia_listing_page_renders_content(pool: PgPool) {
    let app = build_test_app(pool);
    let film = create_film(app.clone(), "Captain America", 2011).await;
    common::post_json(
        app.clone(),
        "/curiosidades",
        serde_json::json!({ "film_id": film["id"], "content": "Shield & stars forever." }),
    )
    .await;

    let html = body_text(get(app, "/curiosidades/page").await).await;
    assert!(html.contains("Shield &amp; stars forever."));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn form_action_without_form_body_redirects_with_error(pool: PgPool) {
    let app = build_test_app(pool);
    create_director(app.clone(), "James Gunn").await;

    let response = post_empty(app.clone(), "/directores/James%20Gunn").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/directores/page?error="));

    let json = body_json(get(app, "/directores/James%20Gunn").await).await;
    assert_eq!(json["data"]["active"], true);
}
