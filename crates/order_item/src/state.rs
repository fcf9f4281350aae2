use crate::{
    config::myconfig::Config,
    di::{Collaborators, DependenciesInject, DependenciesInjectDeps},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::config::{ConnectionManager, ConnectionPool};
use std::{fmt, sync::Arc};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub pool: ConnectionPool,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppState {
    pub async fn new(config: Config, collaborators: Collaborators) -> Result<Self> {
        let pool =
            ConnectionManager::new_pool(&config.database_url, config.db_min_conn, config.db_max_conn)
                .await
                .context("Failed to initialize database pool")?;

        if config.run_migrations {
            run_migrations(&pool)
                .await
                .context("failed to migration database")?;
        }

        let mut registry = Registry::default();

        let deps = DependenciesInjectDeps {
            pool: pool.clone(),
            collaborators,
        };

        let di_container = DependenciesInject::new(deps, &mut registry)
            .context("Failed to initialize dependency injection container")?;

        info!("✅ Order item state initialized");

        Ok(Self {
            di_container,
            registry: Arc::new(registry),
            pool,
        })
    }
}

pub async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}
