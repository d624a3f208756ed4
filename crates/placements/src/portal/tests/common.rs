use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::db;
use crate::portal::domain::{
    Application, Company, JobPosting, NewCompany, NewJobPosting, NewOfficer, NewStudent, Student,
};
use crate::portal::router::{officer_router, student_router};
use crate::portal::service::{OfficerDesk, StudentPortal};
use crate::portal::store::PlacementStore;

pub(super) async fn store() -> PlacementStore {
    let pool = db::connect_in_memory().await.expect("in-memory database");
    PlacementStore::new(pool)
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn enrollment(first_name: &str, phone: &str, cgpa: Option<f64>) -> NewStudent {
    NewStudent {
        first_name: first_name.to_string(),
        last_name: Some("Sharma".to_string()),
        email: Some(format!("{}@college.example", first_name.to_lowercase())),
        phone: Some(phone.to_string()),
        cgpa,
    }
}

pub(super) async fn seed_student(
    store: &PlacementStore,
    first_name: &str,
    phone: &str,
    cgpa: Option<f64>,
) -> Student {
    store
        .insert_student(&enrollment(first_name, phone, cgpa))
        .await
        .expect("student inserted")
}

pub(super) fn officer_account() -> NewOfficer {
    NewOfficer {
        email: "tpo@college.example".to_string(),
        password: "placement@123".to_string(),
        officer_name: Some("Prof. Menon".to_string()),
    }
}

pub(super) async fn seed_officer(store: &PlacementStore) {
    store
        .insert_officer(&officer_account())
        .await
        .expect("officer inserted");
}

pub(super) async fn seed_company(store: &PlacementStore) -> Company {
    store
        .insert_company(&NewCompany {
            company_name: "Brightstack Software".to_string(),
            company_type: Some("Private".to_string()),
            phone: Some("080-4455-9900".to_string()),
            industry_type: Some("IT Services".to_string()),
            email: Some("campus@brightstack.example".to_string()),
            website: Some("https://brightstack.example".to_string()),
            address: Some("12 Residency Road, Bengaluru".to_string()),
        })
        .await
        .expect("company inserted")
}

pub(super) fn posting(company_id: i64, minimum_cgpa: f64) -> NewJobPosting {
    NewJobPosting {
        company_id,
        job_title: "Graduate Software Engineer".to_string(),
        job_description: Some("Backend work on the billing platform.".to_string()),
        salary_package: 8.5,
        location: Some("Bengaluru".to_string()),
        minimum_cgpa,
        application_deadline: date(2026, 3, 31),
        number_of_positions: 4,
    }
}

pub(super) async fn seed_job(
    store: &PlacementStore,
    company_id: i64,
    minimum_cgpa: f64,
) -> JobPosting {
    store
        .insert_job(&posting(company_id, minimum_cgpa))
        .await
        .expect("job inserted")
}

pub(super) async fn seed_application(
    store: &PlacementStore,
    student_id: i64,
    job_id: i64,
) -> Application {
    store
        .insert_application(student_id, job_id, date(2026, 2, 10), "Under Review", None)
        .await
        .expect("application inserted")
}

pub(super) fn student_portal(store: &PlacementStore) -> StudentPortal {
    StudentPortal::new(store.clone())
}

pub(super) fn officer_desk(store: &PlacementStore) -> OfficerDesk {
    OfficerDesk::new(store.clone())
}

pub(super) fn portal_router(store: &PlacementStore) -> axum::Router {
    student_router(Arc::new(student_portal(store)))
        .merge(officer_router(Arc::new(officer_desk(store))))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
