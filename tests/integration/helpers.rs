//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use roster_api::{AppState, build_app};
use roster_core::config::AppConfig;
use roster_database::StoreHandle;
use roster_entity::student::Student;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the router, for direct inspection
    pub store: StoreHandle,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub async fn new() -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let store = StoreHandle::open(&config.database)
            .await
            .expect("Failed to open test store");

        let router = build_app(AppState::new(config, store.clone()));

        Self { router, store }
    }

    /// Create a student through the API and return the stored record
    pub async fn create_student(&self, name: &str, email: &str, dob: &str) -> Student {
        let response = self
            .request(
                "POST",
                "/api/v1/student",
                Some(serde_json::json!({ "name": name, "email": email, "dob": dob })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Create failed: {:?}",
            response.body
        );

        self.list_students()
            .await
            .into_iter()
            .find(|s| s.email == email)
            .expect("Created student missing from listing")
    }

    /// Fetch and decode the student listing
    pub async fn list_students(&self) -> Vec<Student> {
        let response = self.request("GET", "/api/v1/student", None).await;
        assert_eq!(response.status, StatusCode::OK);
        serde_json::from_value(response.body).expect("Listing is not a student array")
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
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

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when empty
    pub body: Value,
}
