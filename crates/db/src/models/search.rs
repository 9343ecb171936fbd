//! Cross-entity search results.

use serde::Serialize;

use crate::models::character::Character;
use crate::models::director::Director;
use crate::models::film::Film;
use crate::models::trivia::Trivia;

/// Four independent match lists for one query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    /// The trimmed query that was matched.
    pub query: String,
    pub films: Vec<Film>,
    pub characters: Vec<Character>,
    pub directors: Vec<Director>,
    pub trivia: Vec<Trivia>,
    /// `true` when all four lists are empty.
    pub no_results: bool,
}

impl SearchResults {
    pub fn new(
        query: String,
        films: Vec<Film>,
        characters: Vec<Character>,
        directors: Vec<Director>,
        trivia: Vec<Trivia>,
    ) -> Self {
        let no_results =
            films.is_empty() && characters.is_empty() && directors.is_empty() && trivia.is_empty();
        Self {
            query,
            films,
            characters,
            directors,
            trivia,
            no_results,
        }
    }
}
