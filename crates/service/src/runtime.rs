//! Startup checks the server runs before opening the pool.

/// Create the directory holding a file-backed SQLite database, if any.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    common::env::ensure_env(database_url).await
}
