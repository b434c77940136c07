//! `GET /health`: reachability and schema state of the city store.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use cities_db::repositories::CityRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the store is reachable and migrated, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreHealth,
}

#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub reachable: bool,
    /// Latest applied migration, `None` if the schema was never bootstrapped.
    pub schema_version: Option<i64>,
    pub cities: Option<i64>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = probe_store(&state.pool).await;
    let status = if store.reachable && store.schema_version.is_some() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store,
    })
}

async fn probe_store(pool: &cities_db::DbPool) -> StoreHealth {
    if let Err(e) = cities_db::health_check(pool).await {
        tracing::warn!(error = %e, "City store unreachable");
        return StoreHealth {
            reachable: false,
            schema_version: None,
            cities: None,
        };
    }

    let schema_version = cities_db::schema_version(pool).await.ok().flatten();
    let cities = CityRepo::count(pool).await.ok();
    StoreHealth {
        reachable: true,
        schema_version,
        cities,
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
