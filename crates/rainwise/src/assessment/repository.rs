use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, AssessmentInput, AssessmentStatus};
use super::engine::{FeasibilityCategory, ReportOutput};

/// Repository record pairing the submitted site data with its latest report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub input: AssessmentInput,
    pub status: AssessmentStatus,
    pub report: Option<ReportOutput>,
}

impl AssessmentRecord {
    pub fn summary_view(&self) -> AssessmentSummaryView {
        AssessmentSummaryView {
            assessment_id: self.id.clone(),
            name: self.input.name.clone(),
            status: self.status.label(),
            feasibility_score: self.report.as_ref().map(|report| report.feasibility_score),
            category: self.report.as_ref().map(|report| report.category),
            generated_at: self
                .report
                .as_ref()
                .map(|report| report.generated_at_iso.clone()),
        }
    }
}

/// Storage abstraction so the service can run against any persistence layer.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// Submitted assessments still waiting for a report, oldest first where the store can tell.
    fn pending(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook telling the front end a fresh report can be displayed.
pub trait ReportNotifier: Send + Sync {
    fn notify(&self, notification: ReportNotification) -> Result<(), NotificationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportNotification {
    pub assessment_id: AssessmentId,
    pub feasibility_score: u8,
    pub category: FeasibilityCategory,
    pub generated_at: String,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Compact status payload for listings and polling clients.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummaryView {
    pub assessment_id: AssessmentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feasibility_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FeasibilityCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}
