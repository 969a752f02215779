use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ItineraryModel;
use crate::storage::ItineraryStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model collaborator. None when no credential is configured; the
    /// generation endpoint reports a configuration error in that case.
    pub model: Option<Arc<dyn ItineraryModel>>,
    pub store: Arc<dyn ItineraryStore>,
    /// Kept for handlers that need runtime settings later.
    #[allow(dead_code)]
    pub config: Config,
}
