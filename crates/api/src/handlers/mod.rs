//! Request handlers for the catalog.
//!
//! Each entity submodule provides async handler functions (list, get,
//! create, update, delete, restore) and delegates to the corresponding
//! repository in `filmoteca_db`. Errors are mapped via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod character;
pub mod dashboard;
pub mod director;
pub mod film;
pub mod pages;
pub mod search;
pub mod trivia;
