//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::store::{DatabaseConfig, InMemoryPostStore};

#[cfg(feature = "postgres")]
use quill_infra::store::PostgresPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    /// Build state around an explicit store.
    ///
    /// The integration suite uses this to keep a handle on the same
    /// store the running server talks to.
    pub fn with_store(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Build the application state with the appropriate store backend.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let store: Arc<dyn PostStore> = {
            if let Some(config) = db_config {
                match quill_infra::store::connect(config).await {
                    Ok(db) => Arc::new(PostgresPostStore::new(db)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostStore::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
                Arc::new(InMemoryPostStore::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let store: Arc<dyn PostStore> = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using the in-memory store");
            Arc::new(InMemoryPostStore::new())
        };

        tracing::info!("Application state initialized");

        Self { store }
    }
}
