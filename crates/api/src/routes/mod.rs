pub mod cities;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /cities                 list, store
/// /cities/create          create form
/// /cities/{id}            show, update (PUT/PATCH), destroy
/// /cities/{id}/edit       edit form
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(cities::router())
}
