use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::domain::{AssessmentId, AssessmentInput, AssessmentStatus};
use crate::assessment::repository::{
    AssessmentRecord, AssessmentRepository, NotificationError, RepositoryError,
    ReportNotification, ReportNotifier,
};
use crate::assessment::{assessment_router, AssessmentService};
use crate::config::EngineParameters;

/// The 120 m² concrete-roof household used throughout the engine tests.
pub(super) fn scenario_input() -> AssessmentInput {
    AssessmentInput {
        id: Some(AssessmentId("asmt-scenario".to_string())),
        name: Some("Lakeview Residence".to_string()),
        dwellers: Some(4),
        roof_area_m2: Some(120.0),
        open_space_m2: Some(15.0),
        roof_material: Some("concrete".to_string()),
        avg_rainfall_mm: Some(1200.0),
        gw_depth_m: Some(10.0),
        soil_perm: Some(50.0),
        ..AssessmentInput::default()
    }
}

pub(super) fn dense_urban_input() -> AssessmentInput {
    AssessmentInput {
        id: None,
        name: Some("Apartment block".to_string()),
        dwellers: Some(24),
        roof_area_m2: Some(180.0),
        open_space_m2: Some(2.0),
        roof_material: Some("RCC".to_string()),
        avg_rainfall_mm: Some(900.0),
        gw_depth_m: Some(12.0),
        soil_perm: Some(30.0),
        ..AssessmentInput::default()
    }
}

pub(super) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = AssessmentService::new(
        repository.clone(),
        notifier.clone(),
        EngineParameters::default(),
    );
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == AssessmentStatus::Submitted)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<ReportNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<ReportNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl ReportNotifier for MemoryNotifier {
    fn notify(&self, notification: ReportNotification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct OfflineNotifier;

impl ReportNotifier for OfflineNotifier {
    fn notify(&self, _notification: ReportNotification) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("socket closed".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(
    service: AssessmentService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}
