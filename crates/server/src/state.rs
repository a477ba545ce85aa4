use axum::extract::FromRef;
use shared_types::DashboardSettings;
use std::sync::Arc;

use crate::dataset::DatasetCache;
use crate::notes::NoteStore;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract just the part they need.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub datasets: Arc<DatasetCache>,
    pub notes: Arc<dyn NoteStore>,
    pub settings: Arc<DashboardSettings>,
}

impl AppState {
    pub fn new(
        datasets: DatasetCache,
        notes: impl NoteStore + 'static,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            datasets: Arc::new(datasets),
            notes: Arc::new(notes),
            settings: Arc::new(settings),
        }
    }
}
