use std::sync::Arc;

use tracing::{debug, info};

use crate::clock::Clock;
use crate::db::DeadlineStore;
use crate::error::AppError;
use crate::models::{DeadlineRequest, EnrichedDeadline};
use crate::services::schedule::compute_derived_fields;
use crate::services::validation::validate_request;
use crate::state::AppState;

/// Validates writes before they reach the store and enriches every record
/// it returns against a single reading of the clock.
pub struct DeadlineService {
    store: Arc<dyn DeadlineStore>,
    clock: Arc<dyn Clock>,
}

impl DeadlineService {
    pub fn new(store: Arc<dyn DeadlineStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.store.clone(), state.clock.clone())
    }

    pub async fn list(&self) -> Result<Vec<EnrichedDeadline>, AppError> {
        let deadlines = self.store.find_all().await?;
        let today = self.clock.today();
        debug!("listing {} deadlines as of {}", deadlines.len(), today);

        Ok(deadlines
            .into_iter()
            .map(|d| compute_derived_fields(d, today))
            .collect())
    }

    pub async fn create(&self, req: DeadlineRequest) -> Result<EnrichedDeadline, AppError> {
        let fields = validate_request(req)?;
        let deadline = self.store.create(fields).await?;
        info!("created deadline {} ({}, due {})", deadline.id, deadline.kind, deadline.due_date);

        Ok(compute_derived_fields(deadline, self.clock.today()))
    }

    pub async fn update(&self, id: &str, req: DeadlineRequest) -> Result<EnrichedDeadline, AppError> {
        let fields = validate_request(req)?;
        let deadline = self
            .store
            .update_by_id(id, fields)
            .await?
            .ok_or(AppError::NotFound)?;
        info!("updated deadline {}", deadline.id);

        Ok(compute_derived_fields(deadline, self.clock.today()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if self.store.delete_by_id(id).await? {
            info!("deleted deadline {}", id);
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
