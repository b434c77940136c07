//! Repository for the `cities` table.
//!
//! Name uniqueness is left entirely to the `uq_cities_name` index: inserts
//! and updates that collide fail with a unique violation rather than being
//! pre-checked, so concurrent writers cannot both win.

use cities_core::types::DbId;
use sqlx::PgPool;

use crate::models::city::{City, CreateCity, UpdateCity};

/// Column list for `cities` queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// Insert a new city, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        let query = format!("INSERT INTO cities (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, City>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a city by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE id = $1");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a city by exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE name = $1");
        sqlx::query_as::<_, City>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all cities in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities ORDER BY id");
        sqlx::query_as::<_, City>(&query).fetch_all(pool).await
    }

    /// Total number of cities.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cities")
            .fetch_one(pool)
            .await
    }

    /// Replace a city's name. `updated_at` is bumped by trigger.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCity,
    ) -> Result<Option<City>, sqlx::Error> {
        let query = format!("UPDATE cities SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a city by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
