//! Integration tests for the student endpoints.

use axum::http::StatusCode;
use chrono::NaiveDate;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_starts_empty() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/v1/student", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!([]));
}

#[tokio::test]
async fn test_create_returns_empty_ok_and_lists_student() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/student",
            Some(serde_json::json!({
                "name": "Mariam",
                "email": "mariam.jamal@gmail.com",
                "dob": "2000-01-05",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::Value::Null);

    let listing = app.request("GET", "/api/v1/student", None).await;
    assert_eq!(
        listing.body,
        serde_json::json!([{
            "id": 1,
            "name": "Mariam",
            "email": "mariam.jamal@gmail.com",
            "dob": "2000-01-05",
        }])
    );
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/student",
            Some(serde_json::json!({
                "id": 500,
                "name": "Alex",
                "email": "alex@example.com",
                "dob": "2004-02-29",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let students = app.list_students().await;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, 1);
}

#[tokio::test]
async fn test_create_with_taken_email_conflicts() {
    let app = TestApp::new().await;
    app.create_student("Mariam", "mariam@example.com", "2000-01-05")
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/student",
            Some(serde_json::json!({
                "name": "Impostor",
                "email": "mariam@example.com",
                "dob": "1999-09-09",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(response.body["message"], "email taken");
    assert_eq!(app.list_students().await.len(), 1);
}

#[tokio::test]
async fn test_get_student_by_id() {
    let app = TestApp::new().await;
    let created = app
        .create_student("Alex", "alex@example.com", "2004-02-29")
        .await;

    let response = app
        .request("GET", &format!("/api/v1/student/{}", created.id), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "alex@example.com");
    assert_eq!(response.body["dob"], "2004-02-29");
}

#[tokio::test]
async fn test_get_missing_student_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/v1/student/42", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Student with 42 does not exist");
}

#[tokio::test]
async fn test_update_name_via_query() {
    let app = TestApp::new().await;
    let created = app
        .create_student("Alice", "alice@example.com", "2000-01-05")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/student/{}?name=Bob", created.id),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let students = app.list_students().await;
    assert_eq!(students[0].name, "Bob");
    assert_eq!(students[0].email, created.email);
    assert_eq!(students[0].dob, created.dob);
}

#[tokio::test]
async fn test_update_with_empty_query_values_applies_remaining_fields() {
    let app = TestApp::new().await;
    let created = app
        .create_student("Alice", "alice@example.com", "2000-01-05")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/student/{}?name=Bob&email=&dob=", created.id),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let students = app.list_students().await;
    assert_eq!(students[0].name, "Bob");
    assert_eq!(students[0].email, created.email);
    assert_eq!(students[0].dob, created.dob);
}

#[tokio::test]
async fn test_update_dob_respects_cutoff() {
    let app = TestApp::new().await;
    let created = app
        .create_student("Alice", "alice@example.com", "2000-01-05")
        .await;

    let too_young = app
        .request(
            "PUT",
            &format!("/api/v1/student/{}?dob=2010-01-01", created.id),
            None,
        )
        .await;
    assert_eq!(too_young.status, StatusCode::OK);
    assert_eq!(app.list_students().await[0].dob, created.dob);

    let valid = app
        .request(
            "PUT",
            &format!("/api/v1/student/{}?dob=1950-05-05", created.id),
            None,
        )
        .await;
    assert_eq!(valid.status, StatusCode::OK);
    assert_eq!(
        app.list_students().await[0].dob,
        NaiveDate::from_ymd_opt(1950, 5, 5).unwrap()
    );
}

#[tokio::test]
async fn test_update_email_to_taken_address_conflicts() {
    let app = TestApp::new().await;
    app.create_student("Alice", "alice@example.com", "2000-01-05")
        .await;
    let bob = app
        .create_student("Bob", "bob@example.com", "2001-01-05")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/student/{}?email=alice@example.com", bob.id),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    let students = app.list_students().await;
    assert_eq!(students[1].email, "bob@example.com");
}

#[tokio::test]
async fn test_update_missing_student_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request("PUT", "/api/v1/student/9?name=Ghost", None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_with_malformed_dob_is_rejected() {
    let app = TestApp::new().await;
    let created = app
        .create_student("Alice", "alice@example.com", "2000-01-05")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/student/{}?dob=yesterday", created.id),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.list_students().await[0], created);
}

#[tokio::test]
async fn test_delete_student() {
    let app = TestApp::new().await;
    let created = app
        .create_student("Alice", "alice@example.com", "2000-01-05")
        .await;

    let response = app
        .request("DELETE", &format!("/api/v1/student/{}", created.id), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!app.store.students().exists_by_id(created.id).await.unwrap());
    assert!(app.list_students().await.is_empty());
}

#[tokio::test]
async fn test_delete_missing_student_is_not_found() {
    let app = TestApp::new().await;
    let kept = app
        .create_student("Alice", "alice@example.com", "2000-01-05")
        .await;

    let response = app.request("DELETE", "/api/v1/student/77", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.list_students().await, vec![kept]);
}
