use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Database connection and session shared by a single test.
///
/// Both are created lazily. The session store lives in the same in-memory database as the
/// application tables, so one connection serves both.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the in-memory connection, connecting on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&mut self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating the session table on first use.
    ///
    /// Sessions expire after 7 days of inactivity, matching the server configuration.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                Ok(&*self.session.insert(session))
            }
        }
    }

    /// Returns both the connection and the session.
    ///
    /// Avoids holding two mutable borrows when a test needs both.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}
