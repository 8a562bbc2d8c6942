//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs matching table rows or joined views
//! - `Deserialize` / plain create DTOs for inserts

pub mod game;
pub mod library;
pub mod movie;
pub mod report;
pub mod user;
