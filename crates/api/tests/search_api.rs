//! HTTP-level integration tests for `/buscar`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_character, create_director, create_film, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn matches_are_grouped_per_entity(pool: PgPool) {
    let app = build_test_app(pool);
    create_film(app.clone(), "Iron Man", 2008).await;
    create_character(app.clone(), "Ironheart").await;
    create_director(app.clone(), "Shane Black").await;

    let response = get(app, "/buscar?q=IRON").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["query"], "IRON");
    assert_eq!(json["data"]["films"][0]["title"], "Iron Man");
    assert_eq!(json["data"]["characters"][0]["name"], "Ironheart");
    assert!(json["data"]["directors"].as_array().unwrap().is_empty());
    assert!(json["data"]["trivia"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["no_results"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn no_matches_sets_flag(pool: PgPool) {
    let app = build_test_app(pool);
    create_film(app.clone(), "Iron Man", 2008).await;

    let json = body_json(get(app, "/buscar?q=zzz").await).await;
    assert_eq!(json["data"]["no_results"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn query_is_trimmed(pool: PgPool) {
    let app = build_test_app(pool);
    create_director(app.clone(), "Jon Favreau").await;

    let json = body_json(get(app, "/buscar?q=%20%20favreau%20").await).await;
    assert_eq!(json["data"]["query"], "favreau");
    assert_eq!(json["data"]["directors"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_query_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app.clone(), "/buscar?q=%20%20").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = get(app, "/buscar").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
