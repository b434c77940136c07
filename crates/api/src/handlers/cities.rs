//! Resource controller for `/cities`.
//!
//! Reads render page payloads. Mutations answer with a redirect to the list
//! carrying a flash message, or re-render the submitted form with field
//! errors (422) when validation fails. Missing cities are a 404 everywhere.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cities_core::city::form::FormMode;
use cities_core::city::CITIES_PATH;
use cities_core::error::CoreError;
use cities_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::extract::CityPayload;
use crate::flash::{self, Flash, IncomingFlash};
use crate::services::city::CityService;
use crate::state::AppState;
use crate::views::cities::{self as views, CreateProps, EditProps, IndexProps, ShowProps};
use crate::views::Page;

/// GET /cities
pub async fn index(
    State(state): State<AppState>,
    IncomingFlash(flash): IncomingFlash,
) -> AppResult<Page<IndexProps>> {
    let cities = CityService::list(&state.pool).await?;
    Ok(views::index(cities, flash))
}

/// GET /cities/create
pub async fn create(IncomingFlash(flash): IncomingFlash) -> Page<CreateProps> {
    views::create(&views::blank_form(), flash)
}

/// POST /cities
pub async fn store(
    State(state): State<AppState>,
    CityPayload(values): CityPayload,
) -> AppResult<Response> {
    match CityService::create(&state.pool, &values).await {
        Ok(city) => {
            tracing::info!(city_id = city.id, name = %city.name, "City created");
            Ok(flash::redirect_with(CITIES_PATH, Flash::CityCreated))
        }
        Err(AppError::Core(CoreError::Validation(errors))) => {
            tracing::debug!(%errors, "City create rejected");
            let form = views::rejected_form(FormMode::Create, values, errors);
            Ok(views::create(&form, None)
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
                .into_response())
        }
        Err(err) => Err(err),
    }
}

/// GET /cities/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    IncomingFlash(flash): IncomingFlash,
) -> AppResult<Page<ShowProps>> {
    let city = CityService::get(&state.pool, id).await?;
    Ok(views::show(city, flash))
}

/// GET /cities/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    IncomingFlash(flash): IncomingFlash,
) -> AppResult<Page<EditProps>> {
    let city = CityService::get(&state.pool, id).await?;
    let form = views::edit_form(&city);
    Ok(views::edit(city, &form, flash))
}

/// PUT|PATCH /cities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    CityPayload(values): CityPayload,
) -> AppResult<Response> {
    // Resolve the city first: an unknown id is a 404 regardless of payload.
    let current = CityService::get(&state.pool, id).await?;

    match CityService::update(&state.pool, id, &values).await {
        Ok(city) => {
            tracing::info!(
                city_id = city.id,
                old_name = %current.name,
                name = %city.name,
                "City updated",
            );
            Ok(flash::redirect_with(CITIES_PATH, Flash::CityUpdated))
        }
        Err(AppError::Core(CoreError::Validation(errors))) => {
            tracing::debug!(city_id = id, %errors, "City update rejected");
            let form = views::rejected_form(FormMode::Edit { id }, values, errors);
            Ok(views::edit(current, &form, None)
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
                .into_response())
        }
        Err(err) => Err(err),
    }
}

/// DELETE /cities/{id}
pub async fn destroy(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    CityService::delete(&state.pool, id).await?;
    tracing::info!(city_id = id, "City deleted");
    Ok(flash::redirect_with(CITIES_PATH, Flash::CityDeleted))
}
