use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ContactFields, Field};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid phone pattern"));

const MIN_NAME_LEN: usize = 3;

/// The first field that failed validation, with its user-facing message.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field) -> Self {
        let message = match field {
            Field::Name => "Name must be 3 or more characters long",
            Field::Email => "Please enter a valid email address",
            Field::Phone => "Please enter a valid phone number",
            Field::Image => "Please provide the link to an online image",
        };
        Self {
            field,
            message: message.to_string(),
        }
    }
}

pub fn is_valid(field: Field, value: &str) -> bool {
    match field {
        Field::Name => value.chars().count() >= MIN_NAME_LEN,
        Field::Email => EMAIL_RE.is_match(value),
        Field::Phone => PHONE_RE.is_match(value),
        Field::Image => !value.is_empty(),
    }
}

/// Checks name, email, phone, image in that order and stops at the first
/// failure.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    match Field::ALL.into_iter().find(|&f| !is_valid(f, fields.get(f))) {
        Some(field) => Err(ValidationError::new(field)),
        None => Ok(()),
    }
}

/// Field-scoped error messages shown next to the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    /// Holds exactly the one reported failure afterwards.
    pub fn report(&mut self, error: &ValidationError) {
        self.0.clear();
        self.0.insert(error.field, error.message.clone());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
