//! Domain logic for the MediaShelf catalogs.
//!
//! This crate performs no I/O. Everything here operates on plain values so the
//! database and HTTP layers can share it, and so it can be unit tested without
//! a running store.

pub mod aggregation;
pub mod catalog;
pub mod detail;
pub mod error;
pub mod pagination;
pub mod search;
pub mod types;
pub mod validation;
