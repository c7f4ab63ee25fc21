//! Integration tests for user administration.

mod helpers;

use axum::http::StatusCode;

async fn admin_token(app: &helpers::TestApp) -> String {
    app.create_test_user("Admin", "admin", "admin-password").await;
    app.login("admin", "admin-password").await
}

#[tokio::test]
async fn test_create_and_get_user() {
    let app = helpers::TestApp::new().await;
    let token = admin_token(&app).await;

    let created = app
        .request(
            "POST",
            "/admin/users",
            Some(serde_json::json!({
                "name": "Alice",
                "account": "alice",
                "password": "alice-password",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["name"], "Alice");
    assert_eq!(created.body["account"], "alice");
    assert!(created.body.get("password_hash").is_none());

    let id = created.body["id"].as_str().unwrap();
    let fetched = app
        .request("GET", &format!("/admin/users/{id}"), None, Some(&token))
        .await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["account"], "alice");

    // New user can log in with the password set by the admin.
    app.login("alice", "alice-password").await;
}

#[tokio::test]
async fn test_duplicate_account_rejected() {
    let app = helpers::TestApp::new().await;
    let token = admin_token(&app).await;

    let response = app
        .request(
            "POST",
            "/admin/users",
            Some(serde_json::json!({
                "name": "Second Admin",
                "account": "admin",
                "password": "password",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn test_list_users() {
    let app = helpers::TestApp::new().await;
    let token = admin_token(&app).await;
    app.create_test_user("Bob", "bob", "bob-password").await;

    let response = app.request("GET", "/admin/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let accounts: Vec<&str> = response.body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["account"].as_str().unwrap())
        .collect();
    assert_eq!(accounts, vec!["admin", "bob"]);
}

#[tokio::test]
async fn test_update_user_password() {
    let app = helpers::TestApp::new().await;
    let token = admin_token(&app).await;
    let carol = app.create_test_user("Carol", "carol", "old-password").await;

    let response = app
        .request(
            "PATCH",
            &format!("/admin/users/{}", carol.id),
            Some(serde_json::json!({ "password": "new-password" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Carol");

    let old = app
        .request(
            "POST",
            "/auth/users/login",
            Some(serde_json::json!({ "account": "carol", "password": "old-password" })),
            None,
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);
    app.login("carol", "new-password").await;
}

#[tokio::test]
async fn test_empty_update_rejected() {
    let app = helpers::TestApp::new().await;
    let token = admin_token(&app).await;
    let dave = app.create_test_user("Dave", "dave", "password").await;

    let response = app
        .request(
            "PATCH",
            &format!("/admin/users/{}", dave.id),
            Some(serde_json::json!({})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_user() {
    let app = helpers::TestApp::new().await;
    let token = admin_token(&app).await;
    let erin = app.create_test_user("Erin", "erin", "password").await;
    let path = format!("/admin/users/{}", erin.id);

    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let fetched = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_requires_authentication() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/admin/users", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_client_without_wildcard_cannot_administer() {
    let app = helpers::TestApp::new().await;
    let token = admin_token(&app).await;
    let (id, secret) = app.create_client(&token, &["resource:create"]).await;
    let client_token = app.login_client(&id, &secret).await;

    let response = app
        .request("GET", "/admin/users", None, Some(&client_token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "PERMISSION_DENIED");
}

#[tokio::test]
async fn test_permission_checked_before_body() {
    let app = helpers::TestApp::new().await;
    let token = admin_token(&app).await;
    let (id, secret) = app.create_client(&token, &["resource:create"]).await;
    let client_token = app.login_client(&id, &secret).await;
    let erin = app.create_test_user("Erin", "erin", "password").await;

    let created = app
        .request(
            "POST",
            "/admin/users",
            Some(serde_json::json!({ "name": 42 })),
            Some(&client_token),
        )
        .await;
    assert_eq!(created.status, StatusCode::FORBIDDEN);
    assert_eq!(created.body["error"], "PERMISSION_DENIED");

    let updated = app
        .request(
            "PATCH",
            &format!("/admin/users/{}", erin.id),
            Some(serde_json::json!({ "password": "" })),
            Some(&client_token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_user_removes_their_clients() {
    let app = helpers::TestApp::new().await;
    let token = admin_token(&app).await;
    let erin = app.create_test_user("Erin", "erin", "password").await;
    let erin_token = app.login("erin", "password").await;
    let (id, secret) = app.create_client(&erin_token, &["resource:create"]).await;

    let deleted = app
        .request("DELETE", &format!("/admin/users/{}", erin.id), None, Some(&token))
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
