//! Server and API error types.
//!
//! ERROR HANDLING
//! ==============
//! `ServerError` covers startup failures and is returned from `main`.
//! `ApiError` is what handlers return; it maps to a status code and a JSON
//! `{ "error": ... }` body the client shows verbatim.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use client::intake::IntakeError;
use client::net::types::ErrorBody;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("That access code was not accepted.")]
    InvalidAccessCode,
    #[error("Admin access is not configured on this server.")]
    AdminAccessDisabled,
    #[error(transparent)]
    InvalidProject(#[from] IntakeError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidAccessCode => StatusCode::UNAUTHORIZED,
            Self::AdminAccessDisabled => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidProject(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
