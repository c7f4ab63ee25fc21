//! Integration tests for permission-gated resource creation.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_user_can_create_resource() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("Owner", "owner", "password123").await;
    let token = app.login("owner", "password123").await;

    let response = app.request("POST", "/resources", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["id"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
}

#[tokio::test]
async fn test_scoped_client_can_create_resource() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("Owner", "owner", "password123").await;
    let token = app.login("owner", "password123").await;
    let (id, secret) = app.create_client(&token, &["resource:create"]).await;
    let client_token = app.login_client(&id, &secret).await;

    let first = app
        .request("POST", "/resources", None, Some(&client_token))
        .await;
    let second = app
        .request("POST", "/resources", None, Some(&client_token))
        .await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::CREATED);
    assert_ne!(first.body["id"], second.body["id"]);
}

#[tokio::test]
async fn test_resource_requires_authentication() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/resources", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
