//! Integration tests for client management.

mod helpers;

use axum::http::StatusCode;

async fn user_token(app: &helpers::TestApp, account: &str) -> String {
    app.create_test_user(account, account, "password123").await;
    app.login(account, "password123").await
}

#[tokio::test]
async fn test_create_client_returns_secret_once() {
    let app = helpers::TestApp::new().await;
    let token = user_token(&app, "owner").await;

    let created = app
        .request(
            "POST",
            "/clients",
            Some(serde_json::json!({ "scope": ["resource:create"] })),
            Some(&token),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["secret"].as_str().unwrap().len(), 32);
    assert_eq!(created.body["scope"], serde_json::json!(["resource:create"]));

    let id = created.body["id"].as_str().unwrap();
    let fetched = app
        .request("GET", &format!("/clients/{id}"), None, Some(&token))
        .await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert!(fetched.body.get("secret").is_none());
    assert!(fetched.body.get("secret_hash").is_none());
}

#[tokio::test]
async fn test_create_client_rejects_bad_scope() {
    let app = helpers::TestApp::new().await;
    let token = user_token(&app, "owner").await;

    for scope in [serde_json::json!([]), serde_json::json!(["files:delete"])] {
        let response = app
            .request(
                "POST",
                "/clients",
                Some(serde_json::json!({ "scope": scope })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_list_only_own_clients() {
    let app = helpers::TestApp::new().await;
    let alice = user_token(&app, "alice").await;
    let bob = user_token(&app, "bob").await;

    app.create_client(&alice, &["resource:create"]).await;
    app.create_client(&alice, &["*"]).await;
    app.create_client(&bob, &["resource:create"]).await;

    let response = app.request("GET", "/clients", None, Some(&alice)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["clients"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_other_users_client_is_not_found() {
    let app = helpers::TestApp::new().await;
    let alice = user_token(&app, "alice").await;
    let mallory = user_token(&app, "mallory").await;
    let (id, _) = app.create_client(&alice, &["resource:create"]).await;
    let path = format!("/clients/{id}");

    let get = app.request("GET", &path, None, Some(&mallory)).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);

    let patch = app
        .request(
            "PATCH",
            &path,
            Some(serde_json::json!({ "scope": ["*"] })),
            Some(&mallory),
        )
        .await;
    assert_eq!(patch.status, StatusCode::NOT_FOUND);

    let rotate = app
        .request("POST", &format!("{path}/secret"), None, Some(&mallory))
        .await;
    assert_eq!(rotate.status, StatusCode::NOT_FOUND);

    let delete = app.request("DELETE", &path, None, Some(&mallory)).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);

    // Still there for the owner.
    let owner_get = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(owner_get.status, StatusCode::OK);
}

#[tokio::test]
async fn test_rotate_secret_invalidates_old_secret() {
    let app = helpers::TestApp::new().await;
    let token = user_token(&app, "owner").await;
    let (id, old_secret) = app.create_client(&token, &["resource:create"]).await;

    let rotated = app
        .request("POST", &format!("/clients/{id}/secret"), None, Some(&token))
        .await;
    assert_eq!(rotated.status, StatusCode::OK);
    let new_secret = rotated.body["secret"].as_str().unwrap().to_string();
    assert_ne!(new_secret, old_secret);

    let old_login = app
        .request(
            "POST",
            "/clients/login",
            Some(serde_json::json!({ "id": id, "secret": old_secret })),
            None,
        )
        .await;
    assert_eq!(old_login.status, StatusCode::UNAUTHORIZED);

    app.login_client(&id, &new_secret).await;
}

#[tokio::test]
async fn test_update_scope() {
    let app = helpers::TestApp::new().await;
    let token = user_token(&app, "owner").await;
    let (id, _) = app.create_client(&token, &["resource:create"]).await;

    let response = app
        .request(
            "PATCH",
            &format!("/clients/{id}"),
            Some(serde_json::json!({ "scope": ["*"] })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["scope"], serde_json::json!(["*"]));
}

#[tokio::test]
async fn test_delete_client_blocks_login() {
    let app = helpers::TestApp::new().await;
    let token = user_token(&app, "owner").await;
    let (id, secret) = app.create_client(&token, &["resource:create"]).await;

    let deleted = app
        .request("DELETE", &format!("/clients/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let login = app
        .request(
            "POST",
            "/clients/login",
            Some(serde_json::json!({ "id": id, "secret": secret })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_client_principal_cannot_manage_clients() {
    let app = helpers::TestApp::new().await;
    let token = user_token(&app, "owner").await;
    let (id, secret) = app.create_client(&token, &["*"]).await;
    let client_token = app.login_client(&id, &secret).await;

    let response = app
        .request(
            "POST",
            "/clients",
            Some(serde_json::json!({ "scope": ["*"] })),
            Some(&client_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_client_principal_rejected_before_body() {
    let app = helpers::TestApp::new().await;
    let token = user_token(&app, "owner").await;
    let (id, secret) = app.create_client(&token, &["*"]).await;
    let client_token = app.login_client(&id, &secret).await;

    let created = app
        .request(
            "POST",
            "/clients",
            Some(serde_json::json!({ "scope": ["not:a-permission"] })),
            Some(&client_token),
        )
        .await;
    assert_eq!(created.status, StatusCode::FORBIDDEN);

    let updated = app
        .request(
            "PATCH",
            &format!("/clients/{id}"),
            Some(serde_json::json!({ "scope": [] })),
            Some(&client_token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::FORBIDDEN);
}
