use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseBackend as DbBackend, Statement};
use wishlist_api::{
    config::AppConfig,
    db::{self, DbConfig},
    events, AppState,
};

/// Helper harness for spinning up application state backed by a scratch
/// SQLite database.
pub struct TestApp {
    pub state: AppState,
    db_file: String,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Construct a new test application with fresh database state. Each
    /// harness gets its own scratch file so tests can run in parallel.
    pub async fn new() -> Self {
        let db_file = format!("wishlist_test_{}.db", uuid::Uuid::new_v4().simple());
        let _ = std::fs::remove_file(&db_file);

        let db_config = DbConfig {
            url: format!("sqlite://{db_file}?mode=rwc"),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };

        let pool = db::establish_connection_with_config(&db_config)
            .await
            .expect("failed to create test database");

        // Fresh schema for every run; the host platform owns migrations, so
        // tests create the tables directly.
        let schema_sql = [
            "DROP TABLE IF EXISTS wishlist_shares;",
            "DROP TABLE IF EXISTS wishlist_items;",
            "DROP TABLE IF EXISTS wishlists;",
            r#"CREATE TABLE wishlists (
                id TEXT PRIMARY KEY NOT NULL,
                customer_id TEXT,
                session_id TEXT,
                name TEXT NOT NULL,
                description TEXT,
                visibility TEXT NOT NULL,
                is_default INTEGER NOT NULL DEFAULT 0,
                expires_at TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );"#,
            r#"CREATE TABLE wishlist_items (
                id TEXT PRIMARY KEY NOT NULL,
                wishlist_id TEXT NOT NULL,
                product_id TEXT NOT NULL,
                variant_id TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                note TEXT,
                price_alert_threshold REAL,
                added_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE (wishlist_id, product_id, variant_id)
            );"#,
            r#"CREATE TABLE wishlist_shares (
                id TEXT PRIMARY KEY NOT NULL,
                wishlist_id TEXT NOT NULL,
                customer_id TEXT NOT NULL,
                role TEXT NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE (wishlist_id, customer_id)
            );"#,
        ];

        for sql in schema_sql {
            pool.execute(Statement::from_string(DbBackend::Sqlite, sql.to_string()))
                .await
                .expect("failed to set up test schema");
        }

        let config = AppConfig {
            database_url: db_config.url.clone(),
            db_max_connections: 1,
            db_min_connections: 1,
            environment: "test".to_string(),
            ..AppConfig::default()
        };

        let (state, event_rx) = AppState::new(Arc::new(pool), config, 256);
        let event_task = tokio::spawn(events::process_events(event_rx));

        Self {
            state,
            db_file,
            _event_task: event_task,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self._event_task.abort();
        let _ = std::fs::remove_file(&self.db_file);
    }
}
