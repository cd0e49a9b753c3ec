//! Rainwater-harvesting feasibility engine and the service plumbing around it.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

pub use assessment::{compute_feasibility, AssessmentInput, FeasibilityEngine, ReportOutput};
