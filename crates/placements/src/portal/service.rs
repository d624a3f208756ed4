use chrono::Local;

use super::domain::{
    ApplicationOverviewRow, ApplicationReceipt, Company, Interview, InterviewDigest,
    InterviewOverviewRow, InterviewSchedule, JobApplication, JobOpening, JobPosting,
    JobPostingRow, NewCompany, NewJobPosting, OfficerLogin, OfficerProfile, PlacementReceipt,
    PlacementUpdate, ProfileUpdate, StatusUpdate, Student, StudentApplicationRow,
    StudentInterviewRow, StudentLogin,
};
use super::eligibility::is_eligible;
use super::status::{classify_final_result, ApplicationStatus, InterviewResult};
use super::store::PlacementStore;

const CGPA_WARNING: &str =
    "You do not meet the minimum CGPA. The placement officer may still review your application.";

/// Error raised by the portal services.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("student {0} not found")]
    StudentNotFound(i64),
    #[error("company {0} not found")]
    CompanyNotFound(i64),
    #[error("job posting {0} not found")]
    JobNotFound(i64),
    #[error("application {0} not found")]
    ApplicationNotFound(i64),
    #[error("interview {0} not found")]
    InterviewNotFound(i64),
    #[error("database unavailable: {0}")]
    Database(#[from] sqlx::Error),
}

/// Student-facing operations: profile, job board, applying, and tracking
/// interview outcomes.
pub struct StudentPortal {
    store: PlacementStore,
}

impl StudentPortal {
    pub fn new(store: PlacementStore) -> Self {
        Self { store }
    }

    /// Roster lookup by the exact ID, first name, and phone triple.
    pub async fn login(&self, login: &StudentLogin) -> Result<Student, PortalError> {
        self.store
            .student_by_login(login.student_id, &login.first_name, &login.phone)
            .await?
            .ok_or(PortalError::InvalidCredentials)
    }

    pub async fn profile(&self, student_id: i64) -> Result<Student, PortalError> {
        self.store
            .student(student_id)
            .await?
            .ok_or(PortalError::StudentNotFound(student_id))
    }

    pub async fn update_profile(
        &self,
        student_id: i64,
        update: &ProfileUpdate,
    ) -> Result<Student, PortalError> {
        let touched = self.store.update_student_profile(student_id, update).await?;
        if touched == 0 {
            return Err(PortalError::StudentNotFound(student_id));
        }
        self.profile(student_id).await
    }

    /// Openings with this student's eligibility computed per posting.
    pub async fn job_board(&self, student_id: i64) -> Result<Vec<JobOpening>, PortalError> {
        let student = self.profile(student_id).await?;
        let rows = self.store.job_board().await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let eligible = is_eligible(student.cgpa, row.minimum_cgpa);
                JobOpening::from_row(row, eligible)
            })
            .collect())
    }

    /// Submit an application dated today with status "Under Review".
    ///
    /// Falling short of the posting's CGPA floor does not block the
    /// submission; the receipt carries a warning instead.
    pub async fn apply(
        &self,
        student_id: i64,
        request: &JobApplication,
    ) -> Result<ApplicationReceipt, PortalError> {
        let student = self.profile(student_id).await?;
        let job = self
            .store
            .job(request.job_id)
            .await?
            .ok_or(PortalError::JobNotFound(request.job_id))?;

        let eligible = is_eligible(student.cgpa, job.minimum_cgpa);
        let application = self
            .store
            .insert_application(
                student_id,
                request.job_id,
                Local::now().date_naive(),
                ApplicationStatus::UnderReview.label(),
                request.cover_letter.as_deref(),
            )
            .await?;

        let warning = (!eligible).then(|| CGPA_WARNING.to_string());
        Ok(ApplicationReceipt {
            application,
            eligible,
            warning,
        })
    }

    pub async fn applications(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentApplicationRow>, PortalError> {
        Ok(self.store.applications_for_student(student_id).await?)
    }

    /// Interview history plus the dashboard banner derived from the most
    /// recent round's result.
    pub async fn interviews(&self, student_id: i64) -> Result<InterviewDigest, PortalError> {
        let interviews = self.store.interviews_for_student(student_id).await?;
        let final_status = classify_final_result(
            interviews.first().map(|row| row.result.as_str()),
        );
        let message = final_status.message();
        Ok(InterviewDigest {
            interviews,
            final_status,
            message,
        })
    }
}

/// Officer-facing operations: company and posting management, application
/// oversight, interview scheduling, and placement results.
pub struct OfficerDesk {
    store: PlacementStore,
}

impl OfficerDesk {
    pub fn new(store: PlacementStore) -> Self {
        Self { store }
    }

    /// Plaintext credential match against the officer table.
    pub async fn login(&self, login: &OfficerLogin) -> Result<OfficerProfile, PortalError> {
        self.store
            .officer_by_login(&login.email, &login.password)
            .await?
            .ok_or(PortalError::InvalidCredentials)
    }

    pub async fn companies(&self) -> Result<Vec<Company>, PortalError> {
        Ok(self.store.companies().await?)
    }

    pub async fn add_company(&self, company: &NewCompany) -> Result<Company, PortalError> {
        Ok(self.store.insert_company(company).await?)
    }

    pub async fn job_postings(&self) -> Result<Vec<JobPostingRow>, PortalError> {
        Ok(self.store.job_postings().await?)
    }

    pub async fn post_job(&self, posting: &NewJobPosting) -> Result<JobPosting, PortalError> {
        if self.store.company(posting.company_id).await?.is_none() {
            return Err(PortalError::CompanyNotFound(posting.company_id));
        }
        Ok(self.store.insert_job(posting).await?)
    }

    pub async fn applications(&self) -> Result<Vec<ApplicationOverviewRow>, PortalError> {
        Ok(self.store.applications_overview().await?)
    }

    /// Direct status override. Nothing propagates to interviews or the
    /// student roster.
    pub async fn update_application_status(
        &self,
        application_id: i64,
        update: &StatusUpdate,
    ) -> Result<(), PortalError> {
        let touched = self
            .store
            .set_application_status(application_id, update.status.application_status().label())
            .await?;
        if touched == 0 {
            return Err(PortalError::ApplicationNotFound(application_id));
        }
        Ok(())
    }

    pub async fn interviews(&self) -> Result<Vec<InterviewOverviewRow>, PortalError> {
        Ok(self.store.interviews_overview().await?)
    }

    /// Schedule a round. The parent application always moves to
    /// "Interview Scheduled", whatever initial result the officer picked.
    pub async fn schedule_interview(
        &self,
        request: &InterviewSchedule,
    ) -> Result<Interview, PortalError> {
        self.store
            .schedule_interview(
                request.application_id,
                request.interview_date,
                &request.interview_round,
                request.result.label(),
                ApplicationStatus::InterviewScheduled.label(),
            )
            .await?
            .ok_or(PortalError::ApplicationNotFound(request.application_id))
    }

    /// Revise a round's result. The chosen label is copied onto the parent
    /// application verbatim, with no remapping.
    pub async fn update_interview_result(
        &self,
        interview_id: i64,
        result: InterviewResult,
    ) -> Result<Interview, PortalError> {
        let label = result.label();
        self.store
            .apply_interview_result(interview_id, label, label)
            .await?
            .ok_or(PortalError::InterviewNotFound(interview_id))
    }

    pub async fn students(&self) -> Result<Vec<Student>, PortalError> {
        Ok(self.store.students().await?)
    }

    pub async fn student_profile(&self, student_id: i64) -> Result<Student, PortalError> {
        self.store
            .student(student_id)
            .await?
            .ok_or(PortalError::StudentNotFound(student_id))
    }

    /// Interview history for one student, the picker for placement results.
    pub async fn student_interviews(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentInterviewRow>, PortalError> {
        Ok(self.store.interviews_for_student(student_id).await?)
    }

    /// Record a final placement decision against one of the student's
    /// interviews.
    ///
    /// The decision label lands on the interview and the roster verbatim
    /// while the application takes the remapped status. Result revisions in
    /// [`Self::update_interview_result`] copy their label through unchanged;
    /// the two paths write different application statuses for the same label
    /// and stay separate.
    pub async fn record_placement(
        &self,
        student_id: i64,
        update: &PlacementUpdate,
    ) -> Result<PlacementReceipt, PortalError> {
        let result_label = update.result.label();
        let application_status = update.result.application_status().label();

        let applied = self
            .store
            .apply_placement_result(
                student_id,
                update.interview_id,
                result_label,
                application_status,
                result_label,
            )
            .await?;
        if !applied {
            return Err(PortalError::InterviewNotFound(update.interview_id));
        }

        Ok(PlacementReceipt {
            student_id,
            interview_id: update.interview_id,
            interview_result: result_label.to_string(),
            application_status: application_status.to_string(),
            placement_status: result_label.to_string(),
        })
    }
}
