//! Integration tests for catalog search and dashboard aggregates.

use filmoteca_db::models::character::CreateCharacter;
use filmoteca_db::models::director::CreateDirector;
use filmoteca_db::models::film::CreateFilm;
use filmoteca_db::models::trivia::CreateTrivia;
use filmoteca_db::repositories::{
    CharacterRepo, DashboardRepo, DirectorRepo, FilmRepo, SearchRepo, TriviaRepo,
};
use sqlx::PgPool;

fn film(title: &str, year: i32, director_id: Option<i64>) -> CreateFilm {
    CreateFilm {
        title: title.to_string(),
        release_year: year,
        director_id,
        image_url: None,
    }
}

fn character(name: &str) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
        power: "Armor".to_string(),
        image_url: None,
    }
}

fn director(name: &str) -> CreateDirector {
    CreateDirector {
        name: name.to_string(),
        biography: None,
        image_url: None,
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_film_and_character_only(pool: PgPool) {
    FilmRepo::create(&pool, &film("Iron Man", 2008, None))
        .await
        .unwrap();
    CharacterRepo::create(&pool, &character("IRONHEART"))
        .await
        .unwrap();
    DirectorRepo::create(&pool, &director("Shane Black"))
        .await
        .unwrap();

    let results = SearchRepo::search(&pool, "iron").await.unwrap();

    assert_eq!(results.films.len(), 1);
    assert_eq!(results.characters.len(), 1);
    assert!(results.directors.is_empty());
    assert!(results.trivia.is_empty());
    assert!(!results.no_results);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_includes_inactive_rows_and_trivia(pool: PgPool) {
    let f = FilmRepo::create(&pool, &film("Eternals", 2021, None))
        .await
        .unwrap();
    TriviaRepo::create(
        &pool,
        &CreateTrivia {
            film_id: f.id,
            content: "Shot largely on location in the Canary Islands.".to_string(),
        },
    )
    .await
    .unwrap();
    FilmRepo::set_active(&pool, f.id, false).await.unwrap();

    let results = SearchRepo::search(&pool, "canary").await.unwrap();
    assert_eq!(results.trivia.len(), 1);

    let results = SearchRepo::search(&pool, "eternals").await.unwrap();
    assert_eq!(results.films.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_treats_wildcards_literally(pool: PgPool) {
    FilmRepo::create(&pool, &film("Iron Man", 2008, None))
        .await
        .unwrap();

    let results = SearchRepo::search(&pool, "%").await.unwrap();
    assert!(results.no_results);

    let results = SearchRepo::search(&pool, "_").await.unwrap();
    assert!(results.no_results);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_on_empty_catalog(pool: PgPool) {
    let stats = DashboardRepo::stats(&pool).await.unwrap();

    assert_eq!(stats.totals.films, 0);
    assert_eq!(stats.totals.trivia, 0);
    assert!(stats.films_by_year.is_empty());
    assert_eq!(stats.character_status.active, 0);
    assert_eq!(stats.character_status.inactive, 0);
    assert!(stats.films_by_director.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_aggregates_span_inactive_rows(pool: PgPool) {
    let favreau = DirectorRepo::create(&pool, &director("Jon Favreau"))
        .await
        .unwrap();
    DirectorRepo::create(&pool, &director("Chloe Zhao"))
        .await
        .unwrap();

    FilmRepo::create(&pool, &film("Iron Man", 2008, Some(favreau.id)))
        .await
        .unwrap();
    let sequel = FilmRepo::create(&pool, &film("Iron Man 2", 2010, Some(favreau.id)))
        .await
        .unwrap();
    FilmRepo::create(&pool, &film("The Incredible Hulk", 2008, None))
        .await
        .unwrap();
    FilmRepo::set_active(&pool, sequel.id, false).await.unwrap();

    CharacterRepo::create(&pool, &character("Tony Stark"))
        .await
        .unwrap();
    let rhodey = CharacterRepo::create(&pool, &character("James Rhodes"))
        .await
        .unwrap();
    CharacterRepo::set_active(&pool, rhodey.id, false)
        .await
        .unwrap();

    let stats = DashboardRepo::stats(&pool).await.unwrap();

    assert_eq!(stats.totals.films, 3);
    assert_eq!(stats.totals.characters, 2);
    assert_eq!(stats.totals.directors, 2);

    let years: Vec<(i32, i64)> = stats
        .films_by_year
        .iter()
        .map(|y| (y.release_year, y.films))
        .collect();
    assert_eq!(years, vec![(2008, 2), (2010, 1)]);

    assert_eq!(stats.character_status.active, 1);
    assert_eq!(stats.character_status.inactive, 1);

    let per_director: Vec<(&str, i64)> = stats
        .films_by_director
        .iter()
        .map(|d| (d.director_name.as_str(), d.films))
        .collect();
    assert_eq!(per_director, vec![("Jon Favreau", 2), ("Chloe Zhao", 0)]);
}
