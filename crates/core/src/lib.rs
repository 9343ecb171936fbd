//! Domain rules for the film catalog.
//!
//! Everything here is pure logic with no I/O so it can be shared by the
//! repository layer, the HTTP layer, and tests.

pub mod catalog;
pub mod error;
pub mod images;
pub mod key;
pub mod search;
pub mod types;
