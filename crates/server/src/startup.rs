use axum::http::HeaderValue;
use axum::Router;
use configs::{AppConfig, CorsConfig, ServerConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::{runtime, EventService};

/// All origins, methods and headers unless `cors.allow_origins` narrows it.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    if cfg.is_permissive() {
        return Ok(CorsLayer::very_permissive());
    }
    let origins = cfg
        .allow_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o.trim())
                .map_err(|e| StartupError::InvalidConfig(format!("cors origin {o:?}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Bind `host:port`; `host` may be an IP literal or a resolvable name.
pub async fn bind_listener(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    TcpListener::bind((cfg.host.as_str(), cfg.port))
        .await
        .map_err(|e| anyhow::anyhow!("cannot bind {}:{}: {e}", cfg.host, cfg.port))
}

/// Open the pool and make sure the schema exists. Runs once per process.
pub async fn init_database(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    runtime::ensure_env(&cfg.database.url).await?;
    let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
    let db = models::db::connect_with_config(&db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    info!(event = "schema_ready", "event table ensured");
    Ok(db)
}

/// Wire storage, state and router from configuration.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = init_database(cfg).await?;
    let state = ServerState { events: EventService::with_sea_orm(db) };
    let cors = build_cors(&cfg.cors)?;
    Ok(routes::build_router(state, cors))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Build the app and run the HTTP server until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let listener = bind_listener(&cfg.server).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting event log server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_origin_list_is_permissive() {
        assert!(build_cors(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let cfg = CorsConfig { allow_origins: vec!["https://ok.example".into(), "bad\norigin".into()] };
        assert!(matches!(build_cors(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn binds_hostname() -> anyhow::Result<()> {
        let cfg = ServerConfig { host: "localhost".into(), port: 0, worker_threads: None };
        let listener = bind_listener(&cfg).await?;
        assert!(listener.local_addr()?.ip().is_loopback());
        Ok(())
    }

    #[tokio::test]
    async fn binds_ip_literal() -> anyhow::Result<()> {
        let cfg = ServerConfig { host: "127.0.0.1".into(), port: 0, worker_threads: None };
        let listener = bind_listener(&cfg).await?;
        assert_ne!(listener.local_addr()?.port(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn build_app_on_in_memory_db() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite::memory:".into();
        assert!(build_app(&cfg).await.is_ok());
    }
}
