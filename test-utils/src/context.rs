use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Per-test database and session.
///
/// Both live in one in-memory Sqlite database, created on first use and dropped with
/// the context. Session data is never saved to the store because no session layer
/// runs, but reads and writes through the `Session` handle behave as in a request.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the database, connecting on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - In-memory connection
    /// - `Err(TestError::Database)` - Could not open the database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db.as_ref().ok_or_else(not_initialized)
    }

    /// Runs the given CREATE TABLE statements in order.
    ///
    /// Usually reached through `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the session, creating the session table and an empty session on first call.
    ///
    /// Sessions expire after seven days of inactivity, matching the server.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = SqliteStore::new(self.database().await?.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        self.session.as_ref().ok_or_else(not_initialized)
    }

    /// Returns both handles at once, which separate calls can't do under one borrow.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(not_initialized()),
        }
    }
}

fn not_initialized() -> TestError {
    TestError::Database(sea_orm::DbErr::Custom(
        "test context was not initialized".to_string(),
    ))
}
