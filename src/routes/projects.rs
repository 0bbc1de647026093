//! Project-intake submissions.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use axum::Json;
use axum::http::StatusCode;
use client::intake::ProjectRequest;
use client::net::types::IntakeReceipt;
use uuid::Uuid;

use crate::error::ApiError;

/// `POST /api/projects`: revalidate, log and acknowledge. Nothing is stored.
pub async fn submit(Json(request): Json<ProjectRequest>) -> Result<(StatusCode, Json<IntakeReceipt>), ApiError> {
    let request = request.revalidate().inspect_err(|e| tracing::info!(error = %e, "project intake rejected"))?;
    let reference = Uuid::new_v4().to_string();
    tracing::info!(
        %reference,
        title = %request.title,
        category = request.category.as_str(),
        budget_usd = request.budget_usd,
        "project intake received"
    );
    Ok((StatusCode::ACCEPTED, Json(IntakeReceipt { reference })))
}
