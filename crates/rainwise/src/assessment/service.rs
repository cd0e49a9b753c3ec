use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{AssessmentId, AssessmentInput, AssessmentStatus};
use super::engine::{FeasibilityEngine, ReportOutput};
use super::repository::{
    AssessmentRecord, AssessmentRepository, NotificationError, RepositoryError,
    ReportNotification, ReportNotifier,
};
use crate::config::EngineParameters;

/// Service composing the repository, the feasibility engine, and report notifications.
pub struct AssessmentService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    engine: Arc<FeasibilityEngine>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asmt-{id:06}"))
}

impl<R, N> AssessmentService<R, N>
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, params: EngineParameters) -> Self {
        Self {
            repository,
            notifier,
            engine: Arc::new(FeasibilityEngine::new(params)),
        }
    }

    pub fn engine(&self) -> &FeasibilityEngine {
        &self.engine
    }

    /// Store a new assessment. Inputs without an id are assigned one.
    pub fn submit(
        &self,
        mut input: AssessmentInput,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let id = match input.id.clone() {
            Some(id) => id,
            None => {
                let id = next_assessment_id();
                input.id = Some(id.clone());
                id
            }
        };

        let record = AssessmentRecord {
            id,
            input,
            status: AssessmentStatus::Submitted,
            report: None,
        };

        let stored = self.repository.insert(record)?;
        debug!(assessment_id = %stored.id, "assessment submitted");
        Ok(stored)
    }

    /// Run the engine for a stored assessment, persist the report, and mark it completed.
    ///
    /// Re-evaluating an already completed assessment recomputes the whole report.
    pub fn evaluate(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<ReportOutput, AssessmentServiceError> {
        let mut record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;

        let report = self.engine.compute(&record.input);

        record.status = AssessmentStatus::Completed;
        record.report = Some(report.clone());
        self.repository.update(record)?;

        info!(
            assessment_id = %assessment_id,
            score = report.feasibility_score,
            category = report.category.label(),
            "feasibility report generated"
        );

        self.notifier.notify(ReportNotification {
            assessment_id: assessment_id.clone(),
            feasibility_score: report.feasibility_score,
            category: report.category,
            generated_at: report.generated_at_iso.clone(),
        })?;

        Ok(report)
    }

    /// Evaluate up to `limit` submitted assessments. Individual failures are logged and skipped.
    pub fn evaluate_pending(
        &self,
        limit: usize,
    ) -> Result<Vec<AssessmentId>, AssessmentServiceError> {
        let pending = self.repository.pending(limit)?;
        let mut completed = Vec::with_capacity(pending.len());

        for record in pending {
            match self.evaluate(&record.id) {
                Ok(_) => completed.push(record.id),
                Err(err) => {
                    warn!(assessment_id = %record.id, error = %err, "pending assessment skipped")
                }
            }
        }

        Ok(completed)
    }

    pub fn get(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Latest persisted report for an assessment.
    pub fn report(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<ReportOutput, AssessmentServiceError> {
        self.get(assessment_id)?
            .report
            .ok_or_else(|| AssessmentServiceError::ReportPending(assessment_id.clone()))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("no report generated yet for assessment {0}")]
    ReportPending(AssessmentId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
