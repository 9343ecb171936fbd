//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod character_repo;
pub mod dashboard_repo;
pub mod director_repo;
pub mod film_character_repo;
pub mod film_repo;
pub mod search_repo;
pub mod trivia_repo;

pub use character_repo::CharacterRepo;
pub use dashboard_repo::DashboardRepo;
pub use director_repo::DirectorRepo;
pub use film_character_repo::FilmCharacterRepo;
pub use film_repo::FilmRepo;
pub use search_repo::SearchRepo;
pub use trivia_repo::TriviaRepo;
