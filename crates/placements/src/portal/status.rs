use serde::{Deserialize, Serialize};

/// Review states an application moves through. Status columns store the label
/// text, so values outside this set can appear once interview results start
/// propagating (rule: result updates copy their label verbatim).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[serde(rename = "Under Review")]
    UnderReview,
    Shortlisted,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    Selected,
    Rejected,
    Placed,
    #[serde(rename = "Not Selected")]
    NotSelected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
            ApplicationStatus::Selected => "Selected",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Placed => "Placed",
            ApplicationStatus::NotSelected => "Not Selected",
        }
    }
}

/// Result values an officer can pick when scheduling an interview or revising
/// its outcome. Placement decisions use [`FinalResult`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewResult {
    Pending,
    Shortlisted,
    Selected,
    Rejected,
}

impl InterviewResult {
    pub const fn label(self) -> &'static str {
        match self {
            InterviewResult::Pending => "Pending",
            InterviewResult::Shortlisted => "Shortlisted",
            InterviewResult::Selected => "Selected",
            InterviewResult::Rejected => "Rejected",
        }
    }
}

/// The five statuses available to a direct officer override. The override
/// touches the application row only; interviews and the student roster are
/// left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusOverride {
    #[serde(rename = "Under Review")]
    UnderReview,
    Shortlisted,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    Selected,
    Rejected,
}

impl StatusOverride {
    pub const fn application_status(self) -> ApplicationStatus {
        match self {
            StatusOverride::UnderReview => ApplicationStatus::UnderReview,
            StatusOverride::Shortlisted => ApplicationStatus::Shortlisted,
            StatusOverride::InterviewScheduled => ApplicationStatus::InterviewScheduled,
            StatusOverride::Selected => ApplicationStatus::Selected,
            StatusOverride::Rejected => ApplicationStatus::Rejected,
        }
    }
}

/// Final placement decision recorded against a chosen interview.
///
/// Unlike a plain result update, the decision fans out three ways: the label
/// lands on the interview verbatim, the application gets the remapped status
/// from [`FinalResult::application_status`], and the student's roster entry
/// records the label verbatim again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalResult {
    Placed,
    #[serde(rename = "Not Placed")]
    NotPlaced,
    Pending,
}

impl FinalResult {
    pub const fn label(self) -> &'static str {
        match self {
            FinalResult::Placed => "Placed",
            FinalResult::NotPlaced => "Not Placed",
            FinalResult::Pending => "Pending",
        }
    }

    pub const fn application_status(self) -> ApplicationStatus {
        match self {
            FinalResult::Placed => ApplicationStatus::Placed,
            FinalResult::NotPlaced => ApplicationStatus::NotSelected,
            FinalResult::Pending => ApplicationStatus::UnderReview,
        }
    }
}

/// Bucketed reading of a student's most recent interview result, for the
/// dashboard banner. Never written back to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "bucket", content = "status", rename_all = "snake_case")]
pub enum FinalStatus {
    ShortlistedOrPlaced,
    NotSelected,
    Pending,
    Other(String),
}

impl FinalStatus {
    pub fn message(&self) -> String {
        match self {
            FinalStatus::ShortlistedOrPlaced => {
                "You have been shortlisted or placed! Congratulations!".to_string()
            }
            FinalStatus::NotSelected => {
                "You were not selected in the latest interview round.".to_string()
            }
            FinalStatus::Pending => "Your interview result is still pending.".to_string(),
            FinalStatus::Other(raw) => format!("Current status: {raw}"),
        }
    }
}

/// Classify the latest interview result into a dashboard bucket.
///
/// Matching is case-insensitive on the trimmed text; anything unrecognized is
/// passed through with its original spelling.
pub fn classify_final_result(latest: Option<&str>) -> FinalStatus {
    let raw = match latest {
        Some(value) => value,
        None => return FinalStatus::Pending,
    };

    match raw.trim().to_lowercase().as_str() {
        "selected" | "passed" | "shortlisted" | "placed" => FinalStatus::ShortlistedOrPlaced,
        "not placed" | "rejected" | "failed" => FinalStatus::NotSelected,
        "pending" | "" => FinalStatus::Pending,
        _ => FinalStatus::Other(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_stored_text() {
        assert_eq!(ApplicationStatus::UnderReview.label(), "Under Review");
        assert_eq!(
            ApplicationStatus::InterviewScheduled.label(),
            "Interview Scheduled"
        );
        assert_eq!(ApplicationStatus::NotSelected.label(), "Not Selected");
        assert_eq!(FinalResult::NotPlaced.label(), "Not Placed");
        assert_eq!(InterviewResult::Pending.label(), "Pending");
    }

    #[test]
    fn final_result_remaps_application_status() {
        assert_eq!(
            FinalResult::Placed.application_status(),
            ApplicationStatus::Placed
        );
        assert_eq!(
            FinalResult::NotPlaced.application_status(),
            ApplicationStatus::NotSelected
        );
        assert_eq!(
            FinalResult::Pending.application_status(),
            ApplicationStatus::UnderReview
        );
    }

    #[test]
    fn celebratory_results_classify_together() {
        for result in ["Selected", "passed", "Shortlisted", "placed", " PLACED "] {
            assert_eq!(
                classify_final_result(Some(result)),
                FinalStatus::ShortlistedOrPlaced,
                "result {result:?} should be celebratory"
            );
        }
    }

    #[test]
    fn negative_results_classify_together() {
        for result in ["Not Placed", "rejected", "Failed", "not placed"] {
            assert_eq!(
                classify_final_result(Some(result)),
                FinalStatus::NotSelected,
                "result {result:?} should be a rejection"
            );
        }
    }

    #[test]
    fn missing_or_blank_results_stay_pending() {
        assert_eq!(classify_final_result(None), FinalStatus::Pending);
        assert_eq!(classify_final_result(Some("")), FinalStatus::Pending);
        assert_eq!(classify_final_result(Some("   ")), FinalStatus::Pending);
        assert_eq!(classify_final_result(Some("Pending")), FinalStatus::Pending);
    }

    #[test]
    fn unknown_results_pass_through_verbatim() {
        assert_eq!(
            classify_final_result(Some("Waitlisted")),
            FinalStatus::Other("Waitlisted".to_string())
        );
        assert_eq!(
            classify_final_result(Some("Waitlisted")).message(),
            "Current status: Waitlisted"
        );
    }

    #[test]
    fn status_override_covers_the_review_menu() {
        let labels: Vec<&str> = [
            StatusOverride::UnderReview,
            StatusOverride::Shortlisted,
            StatusOverride::InterviewScheduled,
            StatusOverride::Selected,
            StatusOverride::Rejected,
        ]
        .into_iter()
        .map(|choice| choice.application_status().label())
        .collect();
        assert_eq!(
            labels,
            vec![
                "Under Review",
                "Shortlisted",
                "Interview Scheduled",
                "Selected",
                "Rejected"
            ]
        );
    }

    #[test]
    fn command_enums_deserialize_from_menu_labels() {
        let status: StatusOverride =
            serde_json::from_str(r#""Interview Scheduled""#).expect("label parses");
        assert_eq!(status, StatusOverride::InterviewScheduled);

        let result: FinalResult = serde_json::from_str(r#""Not Placed""#).expect("label parses");
        assert_eq!(result, FinalResult::NotPlaced);

        let initial: InterviewResult = serde_json::from_str(r#""Pending""#).expect("label parses");
        assert_eq!(initial, InterviewResult::Pending);
    }
}
