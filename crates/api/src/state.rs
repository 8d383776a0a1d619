use std::sync::Arc;

use infra::Store;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    club_id: Option<Uuid>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, club_id: Option<Uuid>) -> Self {
        Self { store, club_id }
    }

    /// The deployment's club. `NotFound` when none was seeded or configured.
    pub fn club_id(&self) -> Result<Uuid, AppError> {
        self.club_id
            .ok_or_else(|| AppError::NotFound("Club not found".to_string()))
    }
}
