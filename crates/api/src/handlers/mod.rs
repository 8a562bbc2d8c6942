//! Request handlers.
//!
//! Each submodule holds the async handler functions for one area. Handlers
//! delegate to the repositories in `mediashelf_db`, assemble page payloads and
//! map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod game_collection;
pub mod library;
pub mod movie_collection;
