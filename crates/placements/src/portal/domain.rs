use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::FinalStatus;

/// Roster entry for an enrolled student. `placement_status` mirrors the most
/// recent final placement decision recorded for them, if any.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Student {
    pub student_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cgpa: Option<f64>,
    pub placement_status: Option<String>,
}

/// Officer identity as exposed to callers; credentials stay in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct OfficerProfile {
    pub email: String,
    pub officer_name: Option<String>,
}

/// Recruiting company registered by the placement office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Company {
    pub company_id: i64,
    pub company_name: String,
    pub company_type: Option<String>,
    pub phone: Option<String>,
    pub industry_type: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
}

/// A job advertised by a company. Postings are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct JobPosting {
    pub job_id: i64,
    pub company_id: i64,
    pub job_title: String,
    pub job_description: Option<String>,
    pub salary_package: Option<f64>,
    pub location: Option<String>,
    pub minimum_cgpa: Option<f64>,
    pub application_deadline: Option<NaiveDate>,
    pub number_of_positions: Option<i64>,
}

/// One submission of a student against a posting. Status holds label text so
/// interview-driven propagation can write values outside the review menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Application {
    pub application_id: i64,
    pub student_id: i64,
    pub job_id: i64,
    pub application_date: NaiveDate,
    pub application_status: String,
    pub cover_letter: Option<String>,
}

/// A scheduled interview round for an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Interview {
    pub interview_id: i64,
    pub application_id: i64,
    pub interview_date: NaiveDate,
    pub interview_round: Option<String>,
    pub result: String,
}

/// Job board row for the student dashboard, highest package first.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct JobBoardRow {
    pub job_id: i64,
    pub job_title: String,
    pub salary_package: Option<f64>,
    pub minimum_cgpa: Option<f64>,
    pub location: Option<String>,
    pub company_name: String,
}

/// Board row decorated with the viewing student's eligibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobOpening {
    pub job_id: i64,
    pub job_title: String,
    pub company_name: String,
    pub salary_package: Option<f64>,
    pub minimum_cgpa: Option<f64>,
    pub location: Option<String>,
    pub eligible: bool,
}

impl JobOpening {
    pub fn from_row(row: JobBoardRow, eligible: bool) -> Self {
        Self {
            job_id: row.job_id,
            job_title: row.job_title,
            company_name: row.company_name,
            salary_package: row.salary_package,
            minimum_cgpa: row.minimum_cgpa,
            location: row.location,
            eligible,
        }
    }
}

/// Posting listing for the officer desk, newest posting first.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct JobPostingRow {
    pub job_id: i64,
    pub job_title: String,
    pub company_name: String,
    pub salary_package: Option<f64>,
    pub location: Option<String>,
    pub minimum_cgpa: Option<f64>,
    pub application_deadline: Option<NaiveDate>,
}

/// A student's own application joined to posting and company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct StudentApplicationRow {
    pub application_id: i64,
    pub job_title: String,
    pub company_name: String,
    pub application_date: NaiveDate,
    pub application_status: String,
}

/// Application listing for the officer desk, joined through to the student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ApplicationOverviewRow {
    pub application_id: i64,
    pub student_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub job_title: String,
    pub company_name: String,
    pub application_date: NaiveDate,
    pub application_status: String,
}

/// Interview rounds as a student sees them, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct StudentInterviewRow {
    pub interview_id: i64,
    pub job_title: String,
    pub company_name: String,
    pub interview_date: NaiveDate,
    pub interview_round: Option<String>,
    pub result: String,
}

/// Interview listing for the officer desk with full join context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct InterviewOverviewRow {
    pub interview_id: i64,
    pub application_id: i64,
    pub student_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub job_title: String,
    pub company_name: String,
    pub interview_date: NaiveDate,
    pub interview_round: Option<String>,
    pub result: String,
}

/// Student login: ID, first name, and phone must all match the roster row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentLogin {
    pub student_id: i64,
    pub first_name: String,
    pub phone: String,
}

/// Officer login; passwords are stored and compared as plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficerLogin {
    pub email: String,
    pub password: String,
}

/// Profile edits a student may make. A missing CGPA writes 0.0, matching the
/// profile form's empty-field default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub cgpa: f64,
}

/// Student request to apply for a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub job_id: i64,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

/// Enrollment record for seeding the roster. Enrollment itself happens
/// outside the portal; demos and tests insert through this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cgpa: Option<f64>,
}

/// Officer account record, seeded alongside the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOfficer {
    pub email: String,
    pub password: String,
    pub officer_name: Option<String>,
}

/// Officer request to register a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub company_name: String,
    pub company_type: Option<String>,
    pub phone: Option<String>,
    pub industry_type: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
}

fn one_position() -> i64 {
    1
}

/// Officer request to advertise a job. Numeric fields default the way the
/// posting form did: zero for money and CGPA, one vacancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJobPosting {
    pub company_id: i64,
    pub job_title: String,
    pub job_description: Option<String>,
    #[serde(default)]
    pub salary_package: f64,
    pub location: Option<String>,
    #[serde(default)]
    pub minimum_cgpa: f64,
    pub application_deadline: NaiveDate,
    #[serde(default = "one_position")]
    pub number_of_positions: i64,
}

/// Officer request to schedule an interview round for an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSchedule {
    pub application_id: i64,
    pub interview_date: NaiveDate,
    pub interview_round: String,
    pub result: super::status::InterviewResult,
}

/// Officer request to override an application's review status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: super::status::StatusOverride,
}

/// Officer request to revise an interview's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultUpdate {
    pub result: super::status::InterviewResult,
}

/// Officer request to record a student's final placement decision against one
/// of their interviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementUpdate {
    pub interview_id: i64,
    pub result: super::status::FinalResult,
}

/// Response to a submitted application. The warning is present only when the
/// student fell short of the posting's CGPA floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationReceipt {
    pub application: Application,
    pub eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Everything a recorded placement decision touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementReceipt {
    pub student_id: i64,
    pub interview_id: i64,
    pub interview_result: String,
    pub application_status: String,
    pub placement_status: String,
}

/// A student's interview history plus the derived dashboard banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewDigest {
    pub interviews: Vec<StudentInterviewRow>,
    pub final_status: FinalStatus,
    pub message: String,
}
