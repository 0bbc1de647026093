//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): calls fail with [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed sign-in or
//! submission shows a message instead of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{IntakeReceipt, SessionGrant};
use crate::intake::ProjectRequest;

pub const ADMIN_SESSION_ENDPOINT: &str = "/api/admin/session";
pub const PROJECTS_ENDPOINT: &str = "/api/projects";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not available on server")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("{}", status_message(*status, message.as_deref()))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

fn status_message(status: u16, message: Option<&str>) -> String {
    match (status, message) {
        (_, Some(message)) if !message.is_empty() => message.to_owned(),
        (401, _) => "That access code was not accepted.".to_owned(),
        (503, _) => "Admin access is not configured on this server.".to_owned(),
        (status, _) => format!("request failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .map(|body| body.error);
    ApiError::Status { status: resp.status(), message }
}

/// Exchange an admin access code for a session via `POST /api/admin/session`.
///
/// # Errors
///
/// Returns an error if the request fails, the code is rejected, or the
/// response body cannot be decoded.
pub async fn open_admin_session(code: &str) -> Result<SessionGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::AccessCodeRequest { code: code.to_owned() };
        let resp = gloo_net::http::Request::post(ADMIN_SESSION_ENDPOINT)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<SessionGrant>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
        Err(ApiError::Unavailable)
    }
}

/// Submit a validated intake request via `POST /api/projects`.
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects the project, or
/// the receipt cannot be decoded.
pub async fn submit_project(request: &ProjectRequest) -> Result<IntakeReceipt, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PROJECTS_ENDPOINT)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<IntakeReceipt>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
