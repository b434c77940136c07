//! City entity model and DTOs.

use cities_core::city::ValidCity;
use cities_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A city row from the `cities` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct City {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a city. Built only from validated input.
#[derive(Debug, Clone)]
pub struct CreateCity {
    pub name: String,
}

/// DTO for updating a city. Name is the only mutable column.
#[derive(Debug, Clone)]
pub struct UpdateCity {
    pub name: String,
}

impl From<ValidCity> for CreateCity {
    fn from(valid: ValidCity) -> Self {
        Self { name: valid.name }
    }
}

impl From<ValidCity> for UpdateCity {
    fn from(valid: ValidCity) -> Self {
        Self { name: valid.name }
    }
}
