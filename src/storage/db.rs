use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::config::DatabaseConfig;
use crate::entities::thing;
use crate::repositories::{RepositoryError, Result};

/// Local storage manager for things
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the database described by `config` and make sure the schema exists
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .min_connections(config.min_connections.min(config.max_connections))
            .max_connections(config.max_connections)
            .connect_timeout(config.connect_timeout())
            .sqlx_logging(config.sqlx_logging)
            .sqlx_logging_level(log::LevelFilter::Debug);

        // A second connection to an in-memory database would see an empty one
        if config.is_in_memory() {
            options.min_connections(1).max_connections(1);
        }

        let conn = Database::connect(options).await.map_err(|source| RepositoryError::Connect {
            url: config.url.clone(),
            source,
        })?;
        info!("Connected to {}", config.url);

        let storage = LocalStorage { conn };
        storage.init_schema().await?;

        Ok(storage)
    }

    /// Private in-memory database, handy for tests and throwaway runs
    pub async fn in_memory() -> Result<Self> {
        Self::new(&DatabaseConfig::in_memory()).await
    }

    /// Create the things table if missing
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut things = schema.create_table_from_entity(thing::Entity);
        things.if_not_exists();
        self.conn.execute(backend.build(&things)).await?;

        info!("Schema ready");
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}
