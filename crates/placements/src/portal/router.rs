use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;

use super::domain::{
    ApplicationOverviewRow, ApplicationReceipt, Company, Interview, InterviewDigest,
    InterviewOverviewRow, InterviewSchedule, JobApplication, JobOpening, JobPosting,
    JobPostingRow, NewCompany, NewJobPosting, OfficerLogin, OfficerProfile, PlacementReceipt,
    PlacementUpdate, ProfileUpdate, ResultUpdate, StatusUpdate, Student, StudentApplicationRow,
    StudentInterviewRow, StudentLogin,
};
use super::service::{OfficerDesk, PortalError, StudentPortal};

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PortalError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            PortalError::StudentNotFound(_)
            | PortalError::CompanyNotFound(_)
            | PortalError::JobNotFound(_)
            | PortalError::ApplicationNotFound(_)
            | PortalError::InterviewNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            PortalError::Database(error) => {
                tracing::error!("portal query failed: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

/// Router builder exposing the student-facing endpoints.
pub fn student_router(portal: Arc<StudentPortal>) -> Router {
    Router::new()
        .route("/api/v1/auth/student", post(student_login))
        .route(
            "/api/v1/students/:student_id/profile",
            get(student_profile).put(update_student_profile),
        )
        .route("/api/v1/students/:student_id/jobs", get(student_job_board))
        .route(
            "/api/v1/students/:student_id/applications",
            get(student_applications).post(submit_application),
        )
        .route(
            "/api/v1/students/:student_id/interviews",
            get(student_interviews),
        )
        .with_state(portal)
}

/// Router builder exposing the placement office endpoints.
pub fn officer_router(desk: Arc<OfficerDesk>) -> Router {
    Router::new()
        .route("/api/v1/auth/officer", post(officer_login))
        .route(
            "/api/v1/office/companies",
            get(list_companies).post(add_company),
        )
        .route("/api/v1/office/jobs", get(list_job_postings).post(post_job))
        .route("/api/v1/office/applications", get(list_applications))
        .route(
            "/api/v1/office/applications/:application_id/status",
            put(update_application_status),
        )
        .route(
            "/api/v1/office/interviews",
            get(list_interviews).post(schedule_interview),
        )
        .route(
            "/api/v1/office/interviews/:interview_id/result",
            put(update_interview_result),
        )
        .route("/api/v1/office/students", get(list_students))
        .route("/api/v1/office/students/:student_id", get(student_record))
        .route(
            "/api/v1/office/students/:student_id/interviews",
            get(student_interview_history),
        )
        .route(
            "/api/v1/office/students/:student_id/placement",
            post(record_placement),
        )
        .with_state(desk)
}

pub(crate) async fn student_login(
    State(portal): State<Arc<StudentPortal>>,
    Json(login): Json<StudentLogin>,
) -> Result<Json<Student>, PortalError> {
    let student = portal.login(&login).await?;
    Ok(Json(student))
}

pub(crate) async fn student_profile(
    State(portal): State<Arc<StudentPortal>>,
    Path(student_id): Path<i64>,
) -> Result<Json<Student>, PortalError> {
    let student = portal.profile(student_id).await?;
    Ok(Json(student))
}

pub(crate) async fn update_student_profile(
    State(portal): State<Arc<StudentPortal>>,
    Path(student_id): Path<i64>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<Student>, PortalError> {
    let student = portal.update_profile(student_id, &update).await?;
    Ok(Json(student))
}

pub(crate) async fn student_job_board(
    State(portal): State<Arc<StudentPortal>>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<JobOpening>>, PortalError> {
    let openings = portal.job_board(student_id).await?;
    Ok(Json(openings))
}

pub(crate) async fn student_applications(
    State(portal): State<Arc<StudentPortal>>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<StudentApplicationRow>>, PortalError> {
    let applications = portal.applications(student_id).await?;
    Ok(Json(applications))
}

pub(crate) async fn submit_application(
    State(portal): State<Arc<StudentPortal>>,
    Path(student_id): Path<i64>,
    Json(request): Json<JobApplication>,
) -> Result<(StatusCode, Json<ApplicationReceipt>), PortalError> {
    let receipt = portal.apply(student_id, &request).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

pub(crate) async fn student_interviews(
    State(portal): State<Arc<StudentPortal>>,
    Path(student_id): Path<i64>,
) -> Result<Json<InterviewDigest>, PortalError> {
    let digest = portal.interviews(student_id).await?;
    Ok(Json(digest))
}

pub(crate) async fn officer_login(
    State(desk): State<Arc<OfficerDesk>>,
    Json(login): Json<OfficerLogin>,
) -> Result<Json<OfficerProfile>, PortalError> {
    let officer = desk.login(&login).await?;
    Ok(Json(officer))
}

pub(crate) async fn list_companies(
    State(desk): State<Arc<OfficerDesk>>,
) -> Result<Json<Vec<Company>>, PortalError> {
    let companies = desk.companies().await?;
    Ok(Json(companies))
}

pub(crate) async fn add_company(
    State(desk): State<Arc<OfficerDesk>>,
    Json(company): Json<NewCompany>,
) -> Result<(StatusCode, Json<Company>), PortalError> {
    let company = desk.add_company(&company).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

pub(crate) async fn list_job_postings(
    State(desk): State<Arc<OfficerDesk>>,
) -> Result<Json<Vec<JobPostingRow>>, PortalError> {
    let postings = desk.job_postings().await?;
    Ok(Json(postings))
}

pub(crate) async fn post_job(
    State(desk): State<Arc<OfficerDesk>>,
    Json(posting): Json<NewJobPosting>,
) -> Result<(StatusCode, Json<JobPosting>), PortalError> {
    let posting = desk.post_job(&posting).await?;
    Ok((StatusCode::CREATED, Json(posting)))
}

pub(crate) async fn list_applications(
    State(desk): State<Arc<OfficerDesk>>,
) -> Result<Json<Vec<ApplicationOverviewRow>>, PortalError> {
    let applications = desk.applications().await?;
    Ok(Json(applications))
}

pub(crate) async fn update_application_status(
    State(desk): State<Arc<OfficerDesk>>,
    Path(application_id): Path<i64>,
    Json(update): Json<StatusUpdate>,
) -> Result<StatusCode, PortalError> {
    desk.update_application_status(application_id, &update).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn list_interviews(
    State(desk): State<Arc<OfficerDesk>>,
) -> Result<Json<Vec<InterviewOverviewRow>>, PortalError> {
    let interviews = desk.interviews().await?;
    Ok(Json(interviews))
}

pub(crate) async fn schedule_interview(
    State(desk): State<Arc<OfficerDesk>>,
    Json(request): Json<InterviewSchedule>,
) -> Result<(StatusCode, Json<Interview>), PortalError> {
    let interview = desk.schedule_interview(&request).await?;
    Ok((StatusCode::CREATED, Json(interview)))
}

pub(crate) async fn update_interview_result(
    State(desk): State<Arc<OfficerDesk>>,
    Path(interview_id): Path<i64>,
    Json(update): Json<ResultUpdate>,
) -> Result<Json<Interview>, PortalError> {
    let interview = desk.update_interview_result(interview_id, update.result).await?;
    Ok(Json(interview))
}

pub(crate) async fn list_students(
    State(desk): State<Arc<OfficerDesk>>,
) -> Result<Json<Vec<Student>>, PortalError> {
    let students = desk.students().await?;
    Ok(Json(students))
}

pub(crate) async fn student_record(
    State(desk): State<Arc<OfficerDesk>>,
    Path(student_id): Path<i64>,
) -> Result<Json<Student>, PortalError> {
    let student = desk.student_profile(student_id).await?;
    Ok(Json(student))
}

pub(crate) async fn student_interview_history(
    State(desk): State<Arc<OfficerDesk>>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<StudentInterviewRow>>, PortalError> {
    let interviews = desk.student_interviews(student_id).await?;
    Ok(Json(interviews))
}

pub(crate) async fn record_placement(
    State(desk): State<Arc<OfficerDesk>>,
    Path(student_id): Path<i64>,
    Json(update): Json<PlacementUpdate>,
) -> Result<Json<PlacementReceipt>, PortalError> {
    let receipt = desk.record_placement(student_id, &update).await?;
    Ok(Json(receipt))
}
