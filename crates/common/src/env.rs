//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is opened.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Extract the on-disk file of a SQLite URL, if it has one.
///
/// `sqlite::memory:` and non-SQLite URLs yield `None`.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the parent directory of a file-backed SQLite database exists.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else {
        return Ok(());
    };
    let parent = file.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    if tokio::fs::metadata(parent).await.is_err() {
        warn!(dir = %parent.display(), "database directory missing; creating it");
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }
    info!(file = %file.display(), "using sqlite database file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_paths() {
        assert_eq!(sqlite_file_path("sqlite://events.db?mode=rwc"), Some(PathBuf::from("events.db")));
        assert_eq!(sqlite_file_path("sqlite:data/events.db"), Some(PathBuf::from("data/events.db")));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/events"), None);
    }

    #[tokio::test]
    async fn ensure_env_creates_parent_dir() -> anyhow::Result<()> {
        let base = std::env::temp_dir().join(format!("days-since-env-{}", std::process::id()));
        let url = format!("sqlite://{}/nested/events.db?mode=rwc", base.display());
        ensure_env(&url).await?;
        assert!(tokio::fs::metadata(base.join("nested")).await?.is_dir());
        tokio::fs::remove_dir_all(&base).await?;
        Ok(())
    }

    #[tokio::test]
    async fn ensure_env_ignores_postgres() -> anyhow::Result<()> {
        ensure_env("postgres://postgres@localhost/events").await
    }
}
