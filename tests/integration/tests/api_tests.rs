//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! The server applies the schema on startup.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

fn user_not_found() -> StatusCode {
    StatusCode::from_u16(450).unwrap()
}

async fn create_user(server: &TestServer, request: &UserRequest) -> UserResponse {
    let response = server.post("/api/v1/users", request).await.unwrap();
    let body: UserEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.user
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = UserRequest::unique();
    let created = create_user(&server, &request).await;

    assert!(created.id > 0);
    assert_eq!(created.username, request.username);
    assert_eq!(created.status, "active");

    let response = server.get(&format!("/api/v1/users/{}", created.id)).await.unwrap();
    let body: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.user.id, created.id);
    assert_eq!(body.user.email, request.email);
    assert_eq!(body.user.created_at, created.created_at);
}

#[tokio::test]
async fn test_create_duplicate_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = UserRequest::unique();
    create_user(&server, &request).await;

    let mut duplicate = UserRequest::unique();
    duplicate.email = request.email.clone();
    let response = server.post("/api/v1/users", &duplicate).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(err.code, "50200000002");
}

#[tokio::test]
async fn test_create_invalid_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = UserRequest::unique().with_status("suspended");
    request.username = "ab".to_string();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(err.code, "40000000001");
    assert!(err.error.starts_with("bad request"));
}

#[tokio::test]
async fn test_get_invalid_user_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    for id in ["-1", "abc", "0"] {
        let response = server.get(&format!("/api/v1/users/{id}")).await.unwrap();
        let err: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
            .await
            .unwrap();
        assert_eq!(err.code, "40000000002");
    }
}

#[tokio::test]
async fn test_get_missing_user_localized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let path = format!("/api/v1/users/{}", i64::MAX);

    let response = server.get(&path).await.unwrap();
    let err: ErrorResponse = assert_json(response, user_not_found()).await.unwrap();
    assert_eq!(err.code, "40400000002");
    assert_eq!(err.error, format!("user not found, user ID: {}", i64::MAX));

    let response = server.get_lang(&path, "zh-CN").await.unwrap();
    let err: ErrorResponse = assert_json(response, user_not_found()).await.unwrap();
    assert_eq!(err.error, format!("用户不存在，用户ID：{}", i64::MAX));
}

#[tokio::test]
async fn test_list_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = create_user(&server, &UserRequest::unique()).await;
    let b = create_user(&server, &UserRequest::unique()).await;

    let response = server.get("/api/v1/users?page=&page_size=").await.unwrap();
    let page: ListUsersResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 10);
    assert!(page.total >= 2);
    assert!(page.users.len() <= 10);

    let response = server.get("/api/v1/users?page=1&page_size=100").await.unwrap();
    let page: ListUsersResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.page_size, 100);
    assert!(page.users.windows(2).all(|w| w[0].id < w[1].id));
    if page.total <= 100 {
        assert!(page.users.iter().any(|u| u.id == a.id));
        assert!(page.users.iter().any(|u| u.id == b.id));
    }
}

#[tokio::test]
async fn test_update_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_user(&server, &UserRequest::unique()).await;

    let mut changes = UserRequest::unique().with_status("inactive");
    changes.name = "Renamed".to_string();
    let response = server
        .put(&format!("/api/v1/users/{}", created.id), &changes)
        .await
        .unwrap();
    let body: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.user.id, created.id);
    assert_eq!(body.user.username, changes.username);
    assert_eq!(body.user.name, "Renamed");
    assert_eq!(body.user.status, "inactive");
}

#[tokio::test]
async fn test_delete_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = UserRequest::unique();
    let created = create_user(&server, &request).await;
    let path = format!("/api/v1/users/{}", created.id);

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, user_not_found()).await.unwrap();

    let response = server.delete(&path).await.unwrap();
    assert_status(response, user_not_found()).await.unwrap();

    // Soft-deleted rows release their username and email
    let recreated = create_user(&server, &request).await;
    assert!(recreated.id > created.id);
}
