use crate::security::session::{LocalSessionStore, SessionStore};
use crate::services::content::ContentService;
use std::sync::Arc;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Content service for public pages
    pub content_service: Arc<dyn ContentService>,
    /// Admin session store
    pub session_store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("content_service", &"Arc<dyn ContentService>")
            .field("session_store", &"Arc<dyn SessionStore>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        content_service: Box<dyn ContentService>,
        session_store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            content_service: Arc::from(content_service),
            session_store,
        }
    }

    /// Create development application state with an in-memory session store
    pub fn development(content_service: Box<dyn ContentService>) -> Self {
        Self::new(content_service, Arc::new(LocalSessionStore::development()))
    }
}
