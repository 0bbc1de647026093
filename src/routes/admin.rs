//! Admin sign-in: trades the shared access code for a time-limited session.
//!
//! The server does not track sessions. The grant tells the browser what to
//! store; enforcement beyond that is client-side navigation only.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use axum::Json;
use axum::extract::State;
use client::net::types::{AccessCodeRequest, SessionGrant};
use time::OffsetDateTime;

use crate::config::{digests_match, hash_access_code};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/admin/session`.
pub async fn open_session(
    State(state): State<AppState>,
    Json(req): Json<AccessCodeRequest>,
) -> Result<Json<SessionGrant>, ApiError> {
    let Some(expected) = state.config.admin_code_digest.as_deref() else {
        tracing::warn!("admin sign-in attempted but ADMIN_ACCESS_CODE is not set");
        return Err(ApiError::AdminAccessDisabled);
    };
    if !digests_match(&hash_access_code(req.code.trim()), expected) {
        tracing::warn!("admin sign-in rejected");
        return Err(ApiError::InvalidAccessCode);
    }

    let session_expiry = OffsetDateTime::now_utc() + state.config.session_ttl;
    tracing::info!(%session_expiry, "admin session granted");
    Ok(Json(SessionGrant { is_authenticated: true, session_expiry }))
}
