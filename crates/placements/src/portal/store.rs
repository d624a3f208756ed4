use chrono::NaiveDate;
use sqlx::SqlitePool;

use super::domain::{
    Application, ApplicationOverviewRow, Company, Interview, InterviewOverviewRow, JobBoardRow,
    JobPosting, JobPostingRow, NewCompany, NewJobPosting, NewOfficer, NewStudent, OfficerProfile,
    ProfileUpdate, Student, StudentApplicationRow, StudentInterviewRow,
};

/// Parameterized SQL over the placement schema.
///
/// The store carries no business rules. Every status label is decided by the
/// caller and bound as a plain parameter; methods here only execute
/// statements, each multi-statement operation inside one transaction.
#[derive(Clone)]
pub struct PlacementStore {
    pool: SqlitePool,
}

impl PlacementStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn student_by_login(
        &self,
        student_id: i64,
        first_name: &str,
        phone: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as(
            r"SELECT * FROM students WHERE student_id = ?1 AND first_name = ?2 AND phone = ?3",
        )
        .bind(student_id)
        .bind(first_name)
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn officer_by_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<OfficerProfile>, sqlx::Error> {
        sqlx::query_as(
            r"SELECT email, officer_name FROM placement_officers
              WHERE email = ?1 AND password = ?2",
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn student(&self, student_id: i64) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as(r"SELECT * FROM students WHERE student_id = ?1")
            .bind(student_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn students(&self) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as(
            r"SELECT student_id, first_name, last_name, email, phone, cgpa, placement_status
              FROM students ORDER BY student_id",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Returns the number of rows touched; zero means no such student.
    pub async fn update_student_profile(
        &self,
        student_id: i64,
        update: &ProfileUpdate,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"UPDATE students
              SET first_name = ?1, last_name = ?2, email = ?3, phone = ?4, cgpa = ?5
              WHERE student_id = ?6",
        )
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.email)
        .bind(&update.phone)
        .bind(update.cgpa)
        .bind(student_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn insert_student(&self, student: &NewStudent) -> Result<Student, sqlx::Error> {
        sqlx::query_as(
            r"INSERT INTO students (first_name, last_name, email, phone, cgpa)
              VALUES (?1, ?2, ?3, ?4, ?5)
              RETURNING *",
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(student.cgpa)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn insert_officer(
        &self,
        officer: &NewOfficer,
    ) -> Result<OfficerProfile, sqlx::Error> {
        sqlx::query_as(
            r"INSERT INTO placement_officers (email, password, officer_name)
              VALUES (?1, ?2, ?3)
              RETURNING email, officer_name",
        )
        .bind(&officer.email)
        .bind(&officer.password)
        .bind(&officer.officer_name)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn companies(&self) -> Result<Vec<Company>, sqlx::Error> {
        sqlx::query_as(r"SELECT * FROM companies ORDER BY company_id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn company(&self, company_id: i64) -> Result<Option<Company>, sqlx::Error> {
        sqlx::query_as(r"SELECT * FROM companies WHERE company_id = ?1")
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn insert_company(&self, company: &NewCompany) -> Result<Company, sqlx::Error> {
        sqlx::query_as(
            r"INSERT INTO companies
                  (company_name, company_type, phone, industry_type, email, website, address)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
              RETURNING *",
        )
        .bind(&company.company_name)
        .bind(&company.company_type)
        .bind(&company.phone)
        .bind(&company.industry_type)
        .bind(&company.email)
        .bind(&company.website)
        .bind(&company.address)
        .fetch_one(&self.pool)
        .await
    }

    /// Student-facing board: openings with company names, best package first.
    pub async fn job_board(&self) -> Result<Vec<JobBoardRow>, sqlx::Error> {
        sqlx::query_as(
            r"SELECT j.job_id, j.job_title, j.salary_package, j.minimum_cgpa, j.location,
                     c.company_name
              FROM job_postings j
              JOIN companies c ON j.company_id = c.company_id
              ORDER BY j.salary_package DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Officer-facing listing, newest posting first.
    pub async fn job_postings(&self) -> Result<Vec<JobPostingRow>, sqlx::Error> {
        sqlx::query_as(
            r"SELECT j.job_id, j.job_title, c.company_name, j.salary_package, j.location,
                     j.minimum_cgpa, j.application_deadline
              FROM job_postings j
              JOIN companies c ON j.company_id = c.company_id
              ORDER BY j.job_id DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn job(&self, job_id: i64) -> Result<Option<JobPosting>, sqlx::Error> {
        sqlx::query_as(r"SELECT * FROM job_postings WHERE job_id = ?1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn insert_job(&self, posting: &NewJobPosting) -> Result<JobPosting, sqlx::Error> {
        sqlx::query_as(
            r"INSERT INTO job_postings
                  (company_id, job_title, job_description, salary_package, location,
                   minimum_cgpa, application_deadline, number_of_positions)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
              RETURNING *",
        )
        .bind(posting.company_id)
        .bind(&posting.job_title)
        .bind(&posting.job_description)
        .bind(posting.salary_package)
        .bind(&posting.location)
        .bind(posting.minimum_cgpa)
        .bind(posting.application_deadline)
        .bind(posting.number_of_positions)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn insert_application(
        &self,
        student_id: i64,
        job_id: i64,
        application_date: NaiveDate,
        status: &str,
        cover_letter: Option<&str>,
    ) -> Result<Application, sqlx::Error> {
        sqlx::query_as(
            r"INSERT INTO applications
                  (student_id, job_id, application_date, application_status, cover_letter)
              VALUES (?1, ?2, ?3, ?4, ?5)
              RETURNING *",
        )
        .bind(student_id)
        .bind(job_id)
        .bind(application_date)
        .bind(status)
        .bind(cover_letter)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn application(
        &self,
        application_id: i64,
    ) -> Result<Option<Application>, sqlx::Error> {
        sqlx::query_as(r"SELECT * FROM applications WHERE application_id = ?1")
            .bind(application_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn applications_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentApplicationRow>, sqlx::Error> {
        sqlx::query_as(
            r"SELECT a.application_id, j.job_title, c.company_name,
                     a.application_date, a.application_status
              FROM applications a
              JOIN job_postings j ON a.job_id = j.job_id
              JOIN companies c ON j.company_id = c.company_id
              WHERE a.student_id = ?1
              ORDER BY a.application_date DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn applications_overview(
        &self,
    ) -> Result<Vec<ApplicationOverviewRow>, sqlx::Error> {
        sqlx::query_as(
            r"SELECT a.application_id, s.student_id, s.first_name, s.last_name, j.job_title,
                     c.company_name, a.application_date, a.application_status
              FROM applications a
              JOIN students s ON a.student_id = s.student_id
              JOIN job_postings j ON a.job_id = j.job_id
              JOIN companies c ON j.company_id = c.company_id
              ORDER BY a.application_date DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Returns the number of rows touched; zero means no such application.
    pub async fn set_application_status(
        &self,
        application_id: i64,
        status: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"UPDATE applications SET application_status = ?1 WHERE application_id = ?2",
        )
        .bind(status)
        .bind(application_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn interviews_overview(&self) -> Result<Vec<InterviewOverviewRow>, sqlx::Error> {
        sqlx::query_as(
            r"SELECT i.interview_id, a.application_id, s.student_id, s.first_name, s.last_name,
                     j.job_title, c.company_name, i.interview_date, i.interview_round, i.result
              FROM interviews i
              JOIN applications a ON i.application_id = a.application_id
              JOIN students s ON a.student_id = s.student_id
              JOIN job_postings j ON a.job_id = j.job_id
              JOIN companies c ON j.company_id = c.company_id
              ORDER BY i.interview_date DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Newest round first; ties on the date break toward the later insert so
    /// "latest interview" is deterministic.
    pub async fn interviews_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentInterviewRow>, sqlx::Error> {
        sqlx::query_as(
            r"SELECT i.interview_id, j.job_title, c.company_name,
                     i.interview_date, i.interview_round, i.result
              FROM interviews i
              JOIN applications a ON i.application_id = a.application_id
              JOIN job_postings j ON a.job_id = j.job_id
              JOIN companies c ON j.company_id = c.company_id
              WHERE a.student_id = ?1
              ORDER BY i.interview_date DESC, i.interview_id DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Insert an interview and move its application to the given status, as
    /// one transaction. `None` when the application does not exist.
    pub async fn schedule_interview(
        &self,
        application_id: i64,
        interview_date: NaiveDate,
        interview_round: &str,
        result: &str,
        application_status: &str,
    ) -> Result<Option<Interview>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<(i64,)> =
            sqlx::query_as(r"SELECT application_id FROM applications WHERE application_id = ?1")
                .bind(application_id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let interview: Interview = sqlx::query_as(
            r"INSERT INTO interviews (application_id, interview_date, interview_round, result)
              VALUES (?1, ?2, ?3, ?4)
              RETURNING *",
        )
        .bind(application_id)
        .bind(interview_date)
        .bind(interview_round)
        .bind(result)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(r"UPDATE applications SET application_status = ?1 WHERE application_id = ?2")
            .bind(application_status)
            .bind(application_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(interview))
    }

    /// Write a result to an interview and the paired status to its
    /// application, as one transaction. `None` when the interview is missing.
    pub async fn apply_interview_result(
        &self,
        interview_id: i64,
        result: &str,
        application_status: &str,
    ) -> Result<Option<Interview>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let interview: Option<Interview> = sqlx::query_as(
            r"UPDATE interviews SET result = ?1 WHERE interview_id = ?2 RETURNING *",
        )
        .bind(result)
        .bind(interview_id)
        .fetch_optional(&mut *tx)
        .await?;

        let interview = match interview {
            Some(interview) => interview,
            None => return Ok(None),
        };

        sqlx::query(r"UPDATE applications SET application_status = ?1 WHERE application_id = ?2")
            .bind(application_status)
            .bind(interview.application_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(interview))
    }

    /// Record a placement decision across interview, application, and roster
    /// in one transaction. `false` when the interview does not exist or does
    /// not belong to the student; nothing is written in that case.
    pub async fn apply_placement_result(
        &self,
        student_id: i64,
        interview_id: i64,
        result: &str,
        application_status: &str,
        placement_status: &str,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let linked: Option<(i64,)> = sqlx::query_as(
            r"SELECT i.application_id
              FROM interviews i
              JOIN applications a ON i.application_id = a.application_id
              WHERE i.interview_id = ?1 AND a.student_id = ?2",
        )
        .bind(interview_id)
        .bind(student_id)
        .fetch_optional(&mut *tx)
        .await?;

        let (application_id,) = match linked {
            Some(row) => row,
            None => return Ok(false),
        };

        sqlx::query(r"UPDATE interviews SET result = ?1 WHERE interview_id = ?2")
            .bind(result)
            .bind(interview_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(r"UPDATE applications SET application_status = ?1 WHERE application_id = ?2")
            .bind(application_status)
            .bind(application_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(r"UPDATE students SET placement_status = ?1 WHERE student_id = ?2")
            .bind(placement_status)
            .bind(student_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
