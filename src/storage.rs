use anyhow::{Context, Result};
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::entities::{snippet, user};

/// Owner of the database connection backing the snippet actions
pub struct LocalStorage {
    pub conn: DatabaseConnection,
    _anchor: Option<DatabaseConnection>,
}

impl LocalStorage {
    /// Connect to the configured database and make sure the schema exists
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(1)
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", config.url))?;

        let storage = LocalStorage { conn, _anchor: None };
        storage.init_schema().await?;
        info!("Connected to database {}", config.url);

        Ok(storage)
    }

    /// Open a private in-memory `SQLite` database with the schema applied
    pub async fn in_memory() -> Result<Self> {
        let database_url = format!("sqlite:file:snipshare_{}?mode=memory&cache=shared", Uuid::new_v4().simple());

        let mut options = ConnectOptions::new(database_url.clone());
        options.max_connections(1).min_connections(1).sqlx_logging(false);
        let conn = Database::connect(options).await?;

        // Anchor connection outside the pool keeps the memory database alive
        let mut anchor_options = ConnectOptions::new(database_url);
        anchor_options.max_connections(1).min_connections(1).sqlx_logging(false);
        let anchor = Database::connect(anchor_options).await?;

        let storage = LocalStorage {
            conn,
            _anchor: Some(anchor),
        };
        storage.init_schema().await?;

        Ok(storage)
    }

    /// Create tables from the entity definitions; authors first so the
    /// snippet foreign key has a target
    async fn init_schema(&self) -> Result<()> {
        self.create_table(user::Entity).await.context("Failed to create users table")?;
        self.create_table(snippet::Entity).await.context("Failed to create snippets table")?;
        Ok(())
    }

    async fn create_table<E>(&self, entity: E) -> Result<()>
    where
        E: EntityTrait,
    {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut statement = schema.create_table_from_entity(entity);
        statement.if_not_exists();

        self.conn.execute(backend.build(&statement)).await?;
        Ok(())
    }
}
