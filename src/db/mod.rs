//! Database layer - per-request connections and repositories
//!
//! # Design Principles
//!
//! - One request = one dedicated connection, opened in the handler and
//!   dropped when it returns, on every exit path - no pool, no caching
//! - The connection string is resolved from the environment at connection
//!   time, never at startup
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod repos;

use sqlx::{Connection, PgConnection};

pub use repos::*;

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
}

/// Open a connection for the current request.
///
/// The connection string is read from the environment on every call.
/// An absent `DATABASE_URL` is a fatal configuration error here rather
/// than at startup.
pub async fn connect() -> Result<PgConnection, DbError> {
    let url = std::env::var(DATABASE_URL_VAR).map_err(|_| DbError::MissingDatabaseUrl)?;
    let conn = PgConnection::connect(&url).await?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connect_executes_query() {
        let mut conn = connect().await.expect("connection failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&mut conn)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
