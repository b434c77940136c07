//! Page payloads returned by the resource controller.
//!
//! Every page is a JSON envelope naming the client component to render and
//! the props it receives:
//!
//! ```json
//! { "component": "Cities/Index", "url": "/cities", "props": { ... },
//!   "flash": { "success": "..." }, "errors": { "name": "..." } }
//! ```

pub mod cities;

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cities_core::city::FieldErrors;
use serde::Serialize;

use crate::flash::{self, Flash, FlashView};

/// Standard page envelope.
#[derive(Debug, Serialize)]
pub struct Page<P: Serialize> {
    #[serde(skip)]
    pub status: StatusCode,
    pub component: &'static str,
    pub url: String,
    pub props: P,
    pub flash: Option<FlashView>,
    pub errors: FieldErrors,
}

impl<P: Serialize> Page<P> {
    pub fn new(component: &'static str, url: impl Into<String>, props: P) -> Self {
        Self {
            status: StatusCode::OK,
            component,
            url: url.into(),
            props,
            flash: None,
            errors: FieldErrors::new(),
        }
    }

    /// Show (and thereby consume) a pending flash.
    pub fn with_flash(mut self, flash: Option<Flash>) -> Self {
        self.flash = flash.map(Flash::view);
        self
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl<P: Serialize> IntoResponse for Page<P> {
    fn into_response(self) -> Response {
        let status = self.status;
        if self.flash.is_some() {
            (status, [(SET_COOKIE, flash::clear_cookie())], Json(self)).into_response()
        } else {
            (status, Json(self)).into_response()
        }
    }
}
