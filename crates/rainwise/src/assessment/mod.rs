//! Rooftop rainwater-harvesting assessments: intake, feasibility scoring, and reports.
//!
//! [`engine`] holds the pure feasibility computation. The service, repository, and
//! router modules wrap it for callers that store assessments and serve reports.

pub mod domain;
pub mod engine;
pub mod input;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AssessmentId, AssessmentInput, AssessmentStatus, Location, RoofMaterial};
pub use engine::{
    compute_feasibility, CostBenefit, EnvironmentalImpact, FeasibilityCategory, FeasibilityEngine,
    PitDimensions, RecommendedDimensions, ReportOutput, ScoreBreakdown, StructureKind,
    StructureRecommendation, SustainabilityRating, TrenchDimensions,
};
pub use repository::{
    AssessmentRecord, AssessmentRepository, AssessmentSummaryView, NotificationError,
    ReportNotification, ReportNotifier, RepositoryError,
};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
