use std::sync::Arc;

use anyhow::Context;

use crate::auth::repo::{CredentialStore, MemoryCredentialStore, PgCredentialStore};
use crate::config::{AppConfig, StoreKind};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CredentialStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Connects the configured store, migrates it and seeds the bootstrap
    /// account. Runs once per process.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn CredentialStore> = match config.store {
            StoreKind::Postgres => {
                let url = config
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL is required for the postgres store")?;
                let pg = PgCredentialStore::connect(url).await?;
                pg.migrate().await?;
                Arc::new(pg)
            }
            StoreKind::Memory => {
                tracing::warn!("using in-memory credential store; data is lost on exit");
                Arc::new(MemoryCredentialStore::new())
            }
        };

        let seeded = store.seed(&config.seed).await.context("seed credential store")?;
        tracing::info!(seeded, store = ?config.store, "credential store ready");

        Ok(Self::from_parts(store, Arc::new(config)))
    }

    pub fn from_parts(store: Arc<dyn CredentialStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    /// Seeded in-memory state for tests.
    pub async fn memory() -> anyhow::Result<Self> {
        Self::init(AppConfig::memory()).await
    }
}
