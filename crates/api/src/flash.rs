//! One-shot flash messages carried across a redirect.
//!
//! A mutation answers with `303 See Other` and a `flash` cookie holding a
//! [`Flash`] key. The next rendered page reads the key, shows the message,
//! and expires the cookie, so each message is displayed exactly once.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;

/// Name of the cookie that carries the pending flash key.
pub const FLASH_COOKIE: &str = "flash";

/// Success notices shown after a city mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    CityCreated,
    CityUpdated,
    CityDeleted,
}

impl Flash {
    /// Stable cookie value. Keys are plain ASCII so no encoding is needed.
    pub fn key(self) -> &'static str {
        match self {
            Flash::CityCreated => "city_created",
            Flash::CityUpdated => "city_updated",
            Flash::CityDeleted => "city_deleted",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "city_created" => Some(Flash::CityCreated),
            "city_updated" => Some(Flash::CityUpdated),
            "city_deleted" => Some(Flash::CityDeleted),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::CityCreated => "City created successfully",
            Flash::CityUpdated => "City updated successfully",
            Flash::CityDeleted => "City deleted successfully",
        }
    }

    /// Read the pending flash from the request's `Cookie` headers.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| Flash::from_key(value))
    }

    /// The payload a page renders for this flash.
    pub fn view(self) -> FlashView {
        FlashView {
            success: self.message(),
        }
    }
}

/// Flash as embedded in a page payload: `{ "success": "..." }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlashView {
    pub success: &'static str,
}

/// `Set-Cookie` value storing `flash` for the next request.
pub fn set_cookie(flash: Flash) -> String {
    format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        flash.key()
    )
}

/// `Set-Cookie` value expiring the flash cookie.
pub fn clear_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Redirect (303) to `to`, queueing `flash` for the page rendered there.
pub fn redirect_with(to: &str, flash: Flash) -> Response {
    ([(SET_COOKIE, set_cookie(flash))], Redirect::to(to)).into_response()
}

/// Extractor yielding the flash pending for this request, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomingFlash(pub Option<Flash>);

impl<S: Send + Sync> FromRequestParts<S> for IncomingFlash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(IncomingFlash(Flash::from_headers(&parts.headers)))
    }
}
