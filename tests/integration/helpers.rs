//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use authgate_api::AppState;
use authgate_core::config::AppConfig;
use authgate_database::{MemoryClientStore, MemoryUserStore};
use authgate_entity::user::User;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for reaching services directly
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application over in-memory stores
    pub async fn new() -> Self {
        let clients = Arc::new(MemoryClientStore::default());
        let state = AppState::new(
            test_config(),
            Arc::new(MemoryUserStore::with_clients(clients.clone())),
            clients,
            None,
        )
        .expect("Failed to build app state");

        let router = authgate_api::build_app(state.clone());

        Self { router, state }
    }

    /// Create a user directly through the admin service
    pub async fn create_test_user(&self, name: &str, account: &str, password: &str) -> User {
        self.state
            .admin_user_service
            .create_user(name, account, password)
            .await
            .expect("Failed to create test user")
    }

    /// Log in as a user and return the access token
    pub async fn login(&self, account: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/auth/users/login",
                Some(serde_json::json!({
                    "account": account,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.body["access_token"]
            .as_str()
            .expect("No access token in login response")
            .to_string()
    }

    /// Create a client for the given user token; returns `(id, secret)`
    pub async fn create_client(&self, token: &str, scope: &[&str]) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/clients",
                Some(serde_json::json!({ "scope": scope })),
                Some(token),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "create failed: {:?}", response.body);
        (
            response.body["id"].as_str().expect("No client id").to_string(),
            response.body["secret"].as_str().expect("No client secret").to_string(),
        )
    }

    /// Log in as a client and return the access token
    pub async fn login_client(&self, id: &str, secret: &str) -> String {
        let response = self
            .request(
                "POST",
                "/clients/login",
                Some(serde_json::json!({ "id": id, "secret": secret })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "client login failed: {:?}", response.body);
        response.body["access_token"]
            .as_str()
            .expect("No access token in client login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Config with a fixed signing secret and cheap hashing
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.issuer = "authgate-test".to_string();
    config.auth.user_pepper = "user-pepper".to_string();
    config.auth.client_pepper = "client-pepper".to_string();
    config.auth.hash_memory_kib = 64;
    config.auth.hash_iterations = 1;
    config.auth.hash_parallelism = 1;
    config
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
