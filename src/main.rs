//! Attendance engine server binary.

use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::EngineConfig;
use attendance_engine::store::{AttendanceStore, HttpSink, MemoryStore, SyncedStore};

/// Reads configuration from the file named by `ATTENDANCE_CONFIG`, falling
/// back to defaults when the variable is unset.
fn load_config() -> io::Result<EngineConfig> {
    match env::var("ATTENDANCE_CONFIG") {
        Ok(path) => EngineConfig::load(&path).map_err(io::Error::other),
        Err(_) => Ok(EngineConfig::default()),
    }
}

/// Assembles the record store, wrapping it with remote sync when configured.
fn build_store(config: &EngineConfig) -> Arc<dyn AttendanceStore> {
    let primary = Arc::new(MemoryStore::new());

    match &config.sync {
        Some(sync) => {
            match HttpSink::new(sync.base_url.as_str(), Duration::from_secs(sync.timeout_secs)) {
                Ok(sink) => {
                    info!(base_url = %sync.base_url, "Remote sync enabled");
                    Arc::new(SyncedStore::new(primary, Arc::new(sink)))
                }
                Err(error) => {
                    warn!(%error, "Failed to build remote sink; running without sync");
                    primary
                }
            }
        }
        None => primary,
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let store = build_store(&config);

    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr).await?;
    info!(addr = %config.server.listen_addr, "Attendance engine listening");

    axum::serve(listener, create_router(AppState::new(store))).await
}
