//! Validated city store.
//!
//! Wraps [`CityRepo`] with the shared rule set so every write path applies
//! the same checks, and translates store outcomes into the domain taxonomy:
//! missing rows become [`CoreError::NotFound`], name collisions on the
//! unique index become a `name` field error.

use cities_core::city::{validate_city, CityFormValues, FieldError, FieldErrors, ENTITY};
use cities_core::error::CoreError;
use cities_core::types::DbId;
use cities_db::models::city::{City, CreateCity, UpdateCity};
use cities_db::repositories::CityRepo;
use cities_db::UQ_CITIES_NAME;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Stateless facade over the `cities` table.
pub struct CityService;

impl CityService {
    /// All cities, oldest first.
    pub async fn list(pool: &PgPool) -> AppResult<Vec<City>> {
        Ok(CityRepo::list(pool).await?)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<City> {
        CityRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validate and insert a new city.
    pub async fn create(pool: &PgPool, values: &CityFormValues) -> AppResult<City> {
        let input = CreateCity::from(validate_city(values).map_err(CoreError::from)?);
        CityRepo::create(pool, &input)
            .await
            .map_err(translate_write_error)
    }

    /// Validate and rename an existing city. Keeping the current name is allowed.
    pub async fn update(pool: &PgPool, id: DbId, values: &CityFormValues) -> AppResult<City> {
        let input = UpdateCity::from(validate_city(values).map_err(CoreError::from)?);
        CityRepo::update(pool, id, &input)
            .await
            .map_err(translate_write_error)?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a city. Deleting a missing (or already deleted) city is `NotFound`.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if CityRepo::delete(pool, id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// A collision on the name index is a validation failure, not a server error.
fn translate_write_error(err: sqlx::Error) -> AppError {
    if cities_db::is_unique_violation(&err, UQ_CITIES_NAME) {
        AppError::Core(CoreError::Validation(FieldErrors::from(FieldError::taken())))
    } else {
        AppError::Database(err)
    }
}
