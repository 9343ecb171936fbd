//! HTTP-level integration tests for `/personajes`.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_character, delete, get, post_empty, post_json, put_json,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_fetch_by_name(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/personajes",
        json!({ "name": "Scarlet Witch", "power": "Chaos magic" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(app, "/personajes/Scarlet%20Witch").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["power"], "Chaos magic");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn power_is_required(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/personajes", json!({ "name": "Groot" })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = post_json(
        app,
        "/personajes",
        json!({ "name": "Groot", "power": " " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_name_is_conflict_even_when_inactive(pool: PgPool) {
    let app = build_test_app(pool);
    create_character(app.clone(), "Hawkeye").await;
    delete(app.clone(), "/personajes/Hawkeye").await;

    let response = post_json(
        app,
        "/personajes",
        json!({ "name": "Hawkeye", "power": "Archery" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "A character with this name already exists"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_keeps_id(pool: PgPool) {
    let app = build_test_app(pool);
    let character = create_character(app.clone(), "Quill").await;

    let response = put_json(
        app.clone(),
        &format!("/personajes/{}", character["id"]),
        json!({ "name": "Star-Lord" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/personajes/Star-Lord").await).await;
    assert_eq!(json["data"]["id"], character["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn soft_delete_restore_cycle(pool: PgPool) {
    let app = build_test_app(pool);
    let character = create_character(app.clone(), "Gamora").await;

    delete(app.clone(), "/personajes/Gamora").await;
    let inactive = body_json(get(app.clone(), "/personajes/historico").await).await;
    assert_eq!(inactive["data"][0]["name"], "Gamora");

    let active = body_json(get(app.clone(), "/personajes?activos=true").await).await;
    assert!(active["data"].as_array().unwrap().is_empty());

    let response = post_empty(app, "/personajes/restaurar/Gamora").await;
    assert_eq!(body_json(response).await["data"], character);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn digit_only_name_wins_over_id(pool: PgPool) {
    let app = build_test_app(pool);
    create_character(app.clone(), "Groot").await;
    let numeric = create_character(app.clone(), "01").await;

    let response = get(app.clone(), "/personajes/01").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], numeric["id"]);

    let response = put_json(app.clone(), "/personajes/01", json!({ "power": "Counting" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_matches!(body_json(response).await["data"]["power"].as_str(), Some("Counting"));

    let groot = body_json(get(app, "/personajes/Groot").await).await;
    assert_ne!(groot["data"]["power"], "Counting");
}
