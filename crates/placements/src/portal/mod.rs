//! Role-based placement portal: student and officer services over the
//! placement schema, plus the status propagation rules that tie applications,
//! interviews, and the student roster together.

pub mod domain;
pub mod eligibility;
pub mod router;
pub mod service;
pub mod status;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationOverviewRow, ApplicationReceipt, Company, Interview, InterviewDigest,
    InterviewOverviewRow, InterviewSchedule, JobApplication, JobBoardRow, JobOpening, JobPosting,
    JobPostingRow, NewCompany, NewJobPosting, NewOfficer, NewStudent, OfficerLogin,
    OfficerProfile, PlacementReceipt, PlacementUpdate, ProfileUpdate, ResultUpdate, StatusUpdate,
    Student, StudentApplicationRow, StudentInterviewRow, StudentLogin,
};
pub use eligibility::{is_eligible, is_eligible_raw, parse_cgpa};
pub use router::{officer_router, student_router};
pub use service::{OfficerDesk, PortalError, StudentPortal};
pub use status::{
    classify_final_result, ApplicationStatus, FinalResult, FinalStatus, InterviewResult,
    StatusOverride,
};
pub use store::PlacementStore;
