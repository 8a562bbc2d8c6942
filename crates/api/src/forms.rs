//! Create-forms of the game catalog.
//!
//! Browsers post every field as a string, so each form deserializes into
//! optional raw strings and [`parse`](GameForm::parse) turns them into an
//! insert DTO or a set of field errors. Whether referenced rows exist is
//! checked by the handler, which has the pool.
//!
//! The `return` field is a submit-button flag: when present the handler
//! redirects to the matching list page after saving.

use mediashelf_core::validation::{
    optional_id, optional_int, optional_text, required_id, required_text, FieldErrors,
    MAX_NAME_LEN,
};
use mediashelf_db::models::game::{CreateGame, CreateGameSystem};
use serde::Deserialize;

/// Accepted range for `release_year`.
pub const RELEASE_YEARS: std::ops::RangeInclusive<i32> = 1950..=2100;

#[derive(Debug, Default, Deserialize)]
pub struct GameForm {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub system: Option<String>,
    pub developer: Option<String>,
    pub series: Option<String>,
    pub copies: Option<String>,
    pub release_year: Option<String>,
    #[serde(rename = "return")]
    pub return_to_list: Option<String>,
}

impl GameForm {
    pub fn parse(&self) -> Result<CreateGame, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = required_text(&mut errors, "title", self.title.as_deref());
        let genre_id = required_id(&mut errors, "genre", self.genre.as_deref());
        let system_id = required_id(&mut errors, "system", self.system.as_deref());
        let developer_id = optional_id(&mut errors, "developer", self.developer.as_deref());
        let series_id = optional_id(&mut errors, "series", self.series.as_deref());
        let copies = optional_int(&mut errors, "copies", self.copies.as_deref(), 1..=i32::MAX);
        let release_year = optional_int(
            &mut errors,
            "release_year",
            self.release_year.as_deref(),
            RELEASE_YEARS,
        );

        match (title, genre_id, system_id) {
            (Some(title), Some(genre_id), Some(system_id)) if errors.is_empty() => Ok(CreateGame {
                title,
                genre_id,
                system_id,
                developer_id,
                series_id,
                copies: copies.unwrap_or(1),
                release_year,
            }),
            _ => Err(errors),
        }
    }

    pub fn wants_return(&self) -> bool {
        self.return_to_list.is_some()
    }
}

/// Form with a single `name` field (series, developer, genre).
#[derive(Debug, Default, Deserialize)]
pub struct NameForm {
    pub name: Option<String>,
    #[serde(rename = "return")]
    pub return_to_list: Option<String>,
}

impl NameForm {
    pub fn parse(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::new();
        match required_text(&mut errors, "name", self.name.as_deref()) {
            Some(name) => Ok(name),
            None => Err(errors),
        }
    }

    pub fn wants_return(&self) -> bool {
        self.return_to_list.is_some()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SystemForm {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    #[serde(rename = "return")]
    pub return_to_list: Option<String>,
}

impl SystemForm {
    pub fn parse(&self) -> Result<CreateGameSystem, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = required_text(&mut errors, "name", self.name.as_deref());
        let manufacturer = optional_text(self.manufacturer.as_deref());
        if manufacturer
            .as_ref()
            .is_some_and(|m| m.chars().count() as u64 > MAX_NAME_LEN)
        {
            errors.add(
                "manufacturer",
                format!("Ensure this value has at most {MAX_NAME_LEN} characters."),
            );
        }

        match name {
            Some(name) if errors.is_empty() => Ok(CreateGameSystem { name, manufacturer }),
            _ => Err(errors),
        }
    }

    pub fn wants_return(&self) -> bool {
        self.return_to_list.is_some()
    }
}
