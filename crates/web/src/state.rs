use std::sync::Arc;

use anyhow::Context;
use storage::{Database, MemoryStore, Store};

use crate::config::Config;

/// Shared router state. The store is built once at startup and handed to every
/// handler from here.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: impl Store + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Open the store named by the configuration, running migrations for PostgreSQL.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        if config.uses_memory_store() {
            tracing::warn!("Using the in-memory store; data is lost on shutdown");
            return Ok(Self::new(MemoryStore::new()));
        }

        tracing::info!("Connecting to database at: {}", config.database_location());
        let db = Database::connect(&config.database_url, config.max_connections)
            .await
            .context("Failed to initialize database")?;
        tracing::info!("Database connection established");

        tracing::info!("Running database migrations");
        db.run_migrations()
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(db))
    }
}
