use std::sync::Arc;

use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

use crate::db;
use crate::portal::store::PlacementStore;

#[tokio::test]
async fn student_login_route_returns_the_roster_row() {
    let store = store().await;
    let student = seed_student(&store, "Ananya", "9876501234", Some(8.4)).await;
    let router = portal_router(&store);

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/student")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "student_id": student.student_id,
                        "first_name": "Ananya",
                        "phone": "9876501234",
                    }))
                    .expect("serialize login"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("student_id"), Some(&json!(student.student_id)));
    assert_eq!(payload.get("first_name"), Some(&json!("Ananya")));
}

#[tokio::test]
async fn failed_logins_map_to_unauthorized() {
    let store = store().await;
    seed_student(&store, "Ananya", "9876501234", Some(8.4)).await;
    let router = portal_router(&store);

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/officer")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "email": "tpo@college.example",
                        "password": "wrong",
                    }))
                    .expect("serialize login"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("error"), Some(&json!("invalid credentials")));
}

#[tokio::test]
async fn apply_route_returns_created_with_a_receipt() {
    let store = store().await;
    let student = seed_student(&store, "Ananya", "9876501234", Some(8.4)).await;
    let weak = seed_student(&store, "Rohan", "9876505678", Some(6.1)).await;
    let company = seed_company(&store).await;
    let job = seed_job(&store, company.company_id, 7.5).await;
    let router = portal_router(&store);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!(
                    "/api/v1/students/{}/applications",
                    student.student_id
                ))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "job_id": job.job_id }))
                        .expect("serialize application"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("eligible"), Some(&json!(true)));
    assert!(payload.get("warning").is_none());
    assert_eq!(
        payload
            .get("application")
            .and_then(|application| application.get("application_status")),
        Some(&json!("Under Review"))
    );

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/students/{}/applications", weak.student_id))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "job_id": job.job_id }))
                        .expect("serialize application"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("eligible"), Some(&json!(false)));
    assert!(payload
        .get("warning")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("minimum CGPA"));
}

#[tokio::test]
async fn status_override_route_returns_no_content() {
    let store = store().await;
    let student = seed_student(&store, "Ananya", "9876501234", Some(8.4)).await;
    let company = seed_company(&store).await;
    let job = seed_job(&store, company.company_id, 7.5).await;
    let application = seed_application(&store, student.student_id, job.job_id).await;
    let router = portal_router(&store);

    let response = router
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!(
                    "/api/v1/office/applications/{}/status",
                    application.application_id
                ))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "status": "Shortlisted" }))
                        .expect("serialize update"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let stored = store
        .application(application.application_id)
        .await
        .expect("fetch succeeds")
        .expect("application present");
    assert_eq!(stored.application_status, "Shortlisted");
}

#[tokio::test]
async fn unknown_ids_map_to_not_found() {
    let store = store().await;
    let router = portal_router(&store);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/v1/office/applications/9004/status")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "status": "Selected" })).expect("serialize update"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error"),
        Some(&json!("application 9004 not found"))
    );

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/students/55/profile")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("error"), Some(&json!("student 55 not found")));
}

#[tokio::test]
async fn schedule_route_creates_the_interview_and_moves_the_application() {
    let store = store().await;
    let student = seed_student(&store, "Ananya", "9876501234", Some(8.4)).await;
    let company = seed_company(&store).await;
    let job = seed_job(&store, company.company_id, 7.5).await;
    let application = seed_application(&store, student.student_id, job.job_id).await;
    let router = portal_router(&store);

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/office/interviews")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "application_id": application.application_id,
                        "interview_date": "2026-02-20",
                        "interview_round": "Technical Round 1",
                        "result": "Pending",
                    }))
                    .expect("serialize schedule"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("result"), Some(&json!("Pending")));

    let stored = store
        .application(application.application_id)
        .await
        .expect("fetch succeeds")
        .expect("application present");
    assert_eq!(stored.application_status, "Interview Scheduled");
}

#[tokio::test]
async fn placement_route_returns_the_full_receipt() {
    let store = store().await;
    let student = seed_student(&store, "Ananya", "9876501234", Some(8.4)).await;
    let company = seed_company(&store).await;
    let job = seed_job(&store, company.company_id, 7.5).await;
    let application = seed_application(&store, student.student_id, job.job_id).await;
    let interview = store
        .schedule_interview(
            application.application_id,
            date(2026, 2, 20),
            "Final Round",
            "Pending",
            "Interview Scheduled",
        )
        .await
        .expect("interview scheduled")
        .expect("application present");
    let router = portal_router(&store);

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!(
                    "/api/v1/office/students/{}/placement",
                    student.student_id
                ))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "interview_id": interview.interview_id,
                        "result": "Not Placed",
                    }))
                    .expect("serialize placement"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("interview_result"), Some(&json!("Not Placed")));
    assert_eq!(
        payload.get("application_status"),
        Some(&json!("Not Selected"))
    );
    assert_eq!(payload.get("placement_status"), Some(&json!("Not Placed")));
}

#[tokio::test]
async fn database_failures_map_to_masked_internal_errors() {
    let pool = db::connect_in_memory().await.expect("in-memory database");
    let store = PlacementStore::new(pool.clone());
    let router = portal_router(&store);
    pool.close().await;

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/office/students")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("error"), Some(&json!("database unavailable")));
}

#[tokio::test]
async fn profile_handler_serves_the_roster_row() {
    let store = store().await;
    let student = seed_student(&store, "Ananya", "9876501234", Some(8.4)).await;

    let Json(body) = crate::portal::router::student_profile(
        State(Arc::new(student_portal(&store))),
        Path(student.student_id),
    )
    .await
    .expect("profile loads");

    assert_eq!(body.first_name, "Ananya");
    assert_eq!(body.cgpa, Some(8.4));
}
