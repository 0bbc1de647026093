use axum::body::Body;
use axum::http::{Request, StatusCode};
use client::intake::{IntakeError, ProjectCategory, ProjectDraft};
use client::net::types::ErrorBody;
use time::Duration;
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;
use crate::routes::api_routes;
use crate::state::AppState;

fn app() -> axum::Router {
    api_routes(AppState::new(ServerConfig { port: 0, admin_code_digest: None, session_ttl: Duration::hours(1) }))
}

fn valid_request() -> ProjectRequest {
    ProjectDraft {
        title: "Harbor office fit-out".to_owned(),
        client_name: "Dana Whitfield".to_owned(),
        client_email: "dana@harbor.example".to_owned(),
        category: ProjectCategory::Commercial.as_str().to_owned(),
        location: "Portland, ME".to_owned(),
        budget: "$480,000".to_owned(),
        start_date: "2027-03-01".to_owned(),
        description: "Two floors, open plan.".to_owned(),
    }
    .validate()
    .unwrap()
}

fn post(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(client::net::api::PROJECTS_ENDPOINT)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

#[tokio::test]
async fn valid_project_is_accepted_with_reference() {
    let body = serde_json::to_string(&valid_request()).unwrap();
    let response = app().oneshot(post(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let receipt: IntakeReceipt = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(Uuid::parse_str(&receipt.reference).is_ok());
}

#[tokio::test]
async fn server_revalidates_blank_title() {
    let mut request = valid_request();
    request.title = "   ".to_owned();
    let response = app().oneshot(post(serde_json::to_string(&request).unwrap())).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.error, IntakeError::MissingTitle.to_string());
}

#[tokio::test]
async fn server_rejects_zero_budget() {
    let mut request = valid_request();
    request.budget_usd = Some(0);
    let response = app().oneshot(post(serde_json::to_string(&request).unwrap())).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_category_is_rejected_by_decoding() {
    let mut json = serde_json::to_value(valid_request()).unwrap();
    json["category"] = serde_json::Value::String("spaceport".to_owned());
    let response = app().oneshot(post(json.to_string())).await.unwrap();
    assert!(response.status().is_client_error());
}
