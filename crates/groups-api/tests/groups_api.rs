//! Integration tests for the group endpoints.
//!
//! The router runs against the in-memory repository, so no database is needed.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use groups_api::{build_router, AppState};
use groups_infrastructure::InMemoryGroupRepository;

fn test_app() -> Router {
    let state = AppState::new(Arc::new(InMemoryGroupRepository::new()));
    build_router(state, &["http://localhost:3000".to_string()])
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, name: &str) -> Value {
    let (status, body) = send(app, Method::POST, "/api/groups", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED, "body: {}", body);
    body["data"].clone()
}

#[tokio::test]
async fn test_create_group_returns_201_envelope() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/groups",
        Some(json!({ "name": "  Team Alpha  " })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Group created successfully");
    assert_eq!(body["data"]["name"], "Team Alpha");
    assert_eq!(body["data"]["is_active"], true);
    assert!(body["data"]["id"].is_i64());
    assert!(body["error"].is_null());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_duplicate_name_returns_409() {
    let app = test_app();
    create(&app, "Team Alpha").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/groups",
        Some(json!({ "name": "Team Alpha " })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "ALREADY_EXISTS");
    assert_eq!(body["message"], "Group with name 'Team Alpha' already exists");
}

#[tokio::test]
async fn test_validation_errors_are_reported_per_field() {
    let app = test_app();

    for payload in [json!({}), json!({ "name": "   " }), json!({ "name": null })] {
        let (status, body) = send(&app, Method::POST, "/api/groups", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
        assert_eq!(body["error"]["fields"]["name"], "Group name is required");
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/groups",
        Some(json!({ "name": "n".repeat(256) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["fields"]["name"],
        "Group name must not exceed 255 characters"
    );

    // nothing reached the store
    let (_, body) = send(&app, Method::GET, "/api/groups", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_malformed_body_and_path_are_invalid_input() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/groups")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/api/groups/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_unknown_id_returns_404_for_every_route() {
    let app = test_app();
    let requests = [
        (Method::GET, "/api/groups/999", None),
        (Method::PUT, "/api/groups/999", Some(json!({ "name": "Ghost" }))),
        (Method::DELETE, "/api/groups/999", None),
        (Method::PATCH, "/api/groups/999/toggle-status", None),
    ];

    for (method, uri, payload) in requests {
        let (status, body) = send(&app, method, uri, payload).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri: {}", uri);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Group not found with ID: 999");
    }
}

#[tokio::test]
async fn test_update_rules() {
    let app = test_app();
    let alpha = create(&app, "Team Alpha").await;
    create(&app, "Team Beta").await;
    let uri = format!("/api/groups/{}", alpha["id"]);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "name": "Team Beta" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "ALREADY_EXISTS");

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "name": "Team Alpha" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Group updated successfully");

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "name": " Team Gamma " }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Team Gamma");
    assert_eq!(body["data"]["created_at"], alpha["created_at"]);
}

#[tokio::test]
async fn test_group_lifecycle_over_http() {
    let app = test_app();

    let group = create(&app, "Team Alpha").await;
    let id = group["id"].as_i64().unwrap();

    let (status, _) = send(&app, Method::POST, "/api/groups", Some(json!({ "name": "Team Alpha" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/groups/{}", id),
        Some(json!({ "name": "Team Beta" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Team Beta");

    let (status, body) = send(&app, Method::DELETE, &format!("/api/groups/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Group deleted successfully");
    assert!(body["data"].is_null());

    let (_, body) = send(&app, Method::GET, &format!("/api/groups/{}", id), None).await;
    assert_eq!(body["data"]["is_active"], false);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/groups/{}", id), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "ALREADY_INACTIVE");
    assert_eq!(body["message"], "Group 'Team Beta' is already inactive");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/groups/{}/toggle-status", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Group status updated successfully");
    assert_eq!(body["data"]["is_active"], true);
}

#[tokio::test]
async fn test_list_returns_all_groups_in_creation_order() {
    let app = test_app();
    let first = create(&app, "First").await;
    create(&app, "Second").await;
    send(&app, Method::DELETE, &format!("/api/groups/{}", first["id"]), None).await;

    let (status, body) = send(&app, Method::GET, "/api/groups", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Groups retrieved successfully");

    let groups = body["data"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["name"], "First");
    assert_eq!(groups[0]["is_active"], false);
    assert_eq!(groups[1]["name"], "Second");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
