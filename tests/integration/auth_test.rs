//! Integration tests for user and client login, and token handling.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("Test User", "testuser", "password123")
        .await;

    let response = app
        .request(
            "POST",
            "/auth/users/login",
            Some(serde_json::json!({
                "account": "testuser",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["access_token"].as_str().is_some());
    assert_eq!(response.body["token_type"], "Bearer");
    assert_eq!(response.body["expires_in"], 900);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("Test User", "testuser2", "password123")
        .await;

    let response = app
        .request(
            "POST",
            "/auth/users/login",
            Some(serde_json::json!({
                "account": "testuser2",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "LOGIN_FAILURE");
}

#[tokio::test]
async fn test_login_unknown_account_matches_bad_password() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("Test User", "known", "password123").await;

    let unknown = app
        .request(
            "POST",
            "/auth/users/login",
            Some(serde_json::json!({
                "account": "nobody",
                "password": "password123",
            })),
            None,
        )
        .await;
    let wrong = app
        .request(
            "POST",
            "/auth/users/login",
            Some(serde_json::json!({
                "account": "known",
                "password": "nope",
            })),
            None,
        )
        .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body, wrong.body);
}

#[tokio::test]
async fn test_login_rejects_missing_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/users/login",
            Some(serde_json::json!({ "account": "someone" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_DATA");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/clients", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_protected_route_rejects_garbage_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/clients", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_from_other_deployment_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("Test User", "crossuser", "password123")
        .await;
    let token = app.login("crossuser", "password123").await;

    let mut config = helpers::test_config();
    config.auth.jwt_secret = "some-other-secret".to_string();
    let other = authgate_api::AppState::new(
        config,
        std::sync::Arc::new(authgate_database::MemoryUserStore::default()),
        std::sync::Arc::new(authgate_database::MemoryClientStore::default()),
        None,
    )
    .expect("Failed to build app state");

    let err = other.token_verifier.verify(&token).unwrap_err();
    assert_eq!(err.kind, authgate_core::ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn test_client_login_success() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("Owner", "owner", "password123").await;
    let token = app.login("owner", "password123").await;
    let (id, secret) = app.create_client(&token, &["resource:create"]).await;

    let response = app
        .request(
            "POST",
            "/clients/login",
            Some(serde_json::json!({ "id": id, "secret": secret })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["access_token"].as_str().is_some());
}

#[tokio::test]
async fn test_client_login_failures_are_uniform() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("Owner", "owner2", "password123").await;
    let token = app.login("owner2", "password123").await;
    let (id, _secret) = app.create_client(&token, &["resource:create"]).await;

    let cases = [
        serde_json::json!({ "id": id, "secret": "wrong-secret" }),
        serde_json::json!({ "id": uuid::Uuid::new_v4().to_string(), "secret": "whatever" }),
        serde_json::json!({ "id": "not-a-uuid", "secret": "whatever" }),
    ];

    for body in cases {
        let response = app.request("POST", "/clients/login", Some(body), None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "LOGIN_FAILURE");
    }
}

#[tokio::test]
async fn test_health_without_database() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "not_configured");
}
