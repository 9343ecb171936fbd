//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) listing
//!   exactly the columns a client may change

pub mod character;
pub mod dashboard;
pub mod director;
pub mod film;
pub mod search;
pub mod trivia;
