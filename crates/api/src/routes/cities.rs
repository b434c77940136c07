//! Route definitions for the city resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cities;
use crate::state::AppState;

/// City resource routes.
///
/// ```text
/// GET    /cities                -> index
/// POST   /cities                -> store
/// GET    /cities/create         -> create
/// GET    /cities/{id}           -> show
/// PUT    /cities/{id}           -> update
/// PATCH  /cities/{id}           -> update
/// DELETE /cities/{id}           -> destroy
/// GET    /cities/{id}/edit      -> edit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cities", get(cities::index).post(cities::store))
        .route("/cities/create", get(cities::create))
        .route(
            "/cities/{id}",
            get(cities::show)
                .put(cities::update)
                .patch(cities::update)
                .delete(cities::destroy),
        )
        .route("/cities/{id}/edit", get(cities::edit))
}
