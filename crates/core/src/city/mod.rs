//! City field schema and validation rule set.
//!
//! [`CITY_FIELDS`] is the one declaration of what a city form contains and
//! which constraints apply to each field. The server validates submissions
//! with [`validate_city`], and the form model in [`form`] renders and
//! pre-validates from the same specs, so the two layers cannot drift.
//!
//! Uniqueness of `name` is the one rule that needs the full collection; it
//! is enforced by the `uq_cities_name` index and surfaced through
//! [`FieldError::taken`].

pub mod form;
pub mod index_state;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidateLength;

/// Entity name used in `NotFound` errors and log lines.
pub const ENTITY: &str = "City";

/// Base path of the city resource routes.
pub const CITIES_PATH: &str = "/cities";

/// Letters (any script), plain spaces, and `-'.,`. Tabs and line breaks
/// are not allowed inside a name.
pub const CITY_NAME_PATTERN: &str = r"^[\p{L} \-'.,]+$";

static CITY_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CITY_NAME_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Field schema
// ---------------------------------------------------------------------------

/// Static description of one form field and its constraints.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub min_length: usize,
    pub max_length: usize,
    /// Whole-value pattern the trimmed input must match.
    pub charset: &'static LazyLock<Regex>,
    /// Show a live `n / max_length` counter under the input.
    pub show_char_count: bool,
}

/// The fields a city form is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityField {
    Name,
}

impl CityField {
    pub fn spec(self) -> &'static FieldSpec {
        match self {
            CityField::Name => &CITY_NAME,
        }
    }

    pub fn value(self, values: &CityFormValues) -> &str {
        match self {
            CityField::Name => &values.name,
        }
    }

    pub fn set(self, values: &mut CityFormValues, value: String) {
        match self {
            CityField::Name => values.name = value,
        }
    }
}

/// The city `name` field.
pub static CITY_NAME: FieldSpec = FieldSpec {
    name: "name",
    label: "City Name",
    placeholder: "Enter city name",
    required: true,
    min_length: 2,
    max_length: 100,
    charset: &CITY_NAME_RE,
    show_char_count: true,
};

/// Every field of the city form, in render order.
pub const CITY_FIELDS: &[CityField] = &[CityField::Name];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Machine-readable reason a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    Required,
    TooShort,
    TooLong,
    InvalidCharacters,
    Taken,
}

/// A single rejected field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: FieldRule,
    pub message: String,
}

impl FieldError {
    fn new(spec: &FieldSpec, rule: FieldRule) -> Self {
        let message = match rule {
            FieldRule::Required => format!("{} is required", spec.label_lower()),
            FieldRule::TooShort => format!(
                "{} must be at least {} characters",
                spec.label_lower(),
                spec.min_length
            ),
            FieldRule::TooLong => format!(
                "{} must not exceed {} characters",
                spec.label_lower(),
                spec.max_length
            ),
            FieldRule::InvalidCharacters => format!(
                "{} can only contain letters, spaces, and common punctuation",
                spec.label_lower()
            ),
            FieldRule::Taken => format!("{} is already taken", spec.label_lower()),
        };
        Self {
            field: spec.name,
            rule,
            message,
        }
    }

    /// The error reported when another city already uses the submitted name.
    pub fn taken() -> Self {
        Self::new(&CITY_NAME, FieldRule::Taken)
    }
}

impl FieldSpec {
    /// "City Name" -> "City name", as used at the start of messages.
    fn label_lower(&self) -> String {
        let mut words = self.label.split(' ');
        let mut out = words.next().unwrap_or_default().to_string();
        for word in words {
            out.push(' ');
            out.push_str(&word.to_lowercase());
        }
        out
    }
}

/// Field name -> message map returned to forms.
///
/// Ordered so serialized payloads and log lines are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<FieldError> for FieldErrors {
    fn from(err: FieldError) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(err.field, err.message);
        errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rule set
// ---------------------------------------------------------------------------

/// Values submitted by the create and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityFormValues {
    /// A missing or `null` name deserializes as empty and fails as `required`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl CityFormValues {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// City input that passed every rule checkable without the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCity {
    pub name: String,
}

/// Validate a candidate city name, returning it trimmed.
///
/// Rules run in order and stop at the first failure:
/// required, minimum length, maximum length, allowed characters.
/// Lengths are counted in characters, not bytes.
pub fn validate_name(raw: &str) -> Result<String, FieldError> {
    validate_field(&CITY_NAME, raw)
}

/// Apply one field spec to a raw value.
pub fn validate_field(spec: &FieldSpec, raw: &str) -> Result<String, FieldError> {
    let value = raw.trim().to_string();

    if value.is_empty() {
        if spec.required {
            return Err(FieldError::new(spec, FieldRule::Required));
        }
        return Ok(value);
    }
    if !value.validate_length(Some(spec.min_length as u64), None, None) {
        return Err(FieldError::new(spec, FieldRule::TooShort));
    }
    if !value.validate_length(None, Some(spec.max_length as u64), None) {
        return Err(FieldError::new(spec, FieldRule::TooLong));
    }
    if !spec.charset.is_match(&value) {
        return Err(FieldError::new(spec, FieldRule::InvalidCharacters));
    }
    Ok(value)
}

/// Validate every field of a city submission.
pub fn validate_city(values: &CityFormValues) -> Result<ValidCity, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut name = String::new();

    for &field in CITY_FIELDS {
        match validate_field(field.spec(), field.value(values)) {
            Ok(clean) => match field {
                CityField::Name => name = clean,
            },
            Err(err) => errors.insert(err.field, err.message),
        }
    }

    if errors.is_empty() {
        Ok(ValidCity { name })
    } else {
        Err(errors)
    }
}
