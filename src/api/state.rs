//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::{Database, PersonaStore};
use crate::services::{PersonaManager, PersonaService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub personas: Arc<dyn PersonaService>,
    pub db: Arc<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(db: Arc<Database>, personas: Arc<dyn PersonaService>) -> Self {
        Self { personas, db }
    }

    /// Wire the full production stack from a database connection:
    /// store (repository adapter) -> use cases -> service façade.
    pub fn from_database(db: Arc<Database>) -> Self {
        let repository = Arc::new(PersonaStore::new(db.get_connection()));
        let personas = Arc::new(PersonaManager::new(repository));
        Self { personas, db }
    }
}
