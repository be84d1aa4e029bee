//! userbase entry point
//!
//! Loads configuration, selects the storage backend, wires the service,
//! and starts the HTTP server. MySQL mode requires a reachable database;
//! there is no silent fallback to the in-memory store.

use std::process;
use std::sync::Arc;

use tracing::info;

use userbase::config::{Config, StorageBackend};
use userbase::http_server::{HttpServer, UserState};
use userbase::storage::{MemoryStore, MySqlStore, UserStore};
use userbase::users::UserService;

#[tokio::main]
async fn main() {
    setup_tracing();

    let config = Config::from_env();

    let store: Arc<dyn UserStore> = match config.backend {
        StorageBackend::Memory => {
            info!("using in-memory storage");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::MySql => {
            info!(
                host = %config.database.host,
                database = %config.database.name,
                "connecting to MySQL"
            );
            match MySqlStore::connect(&config.database.url()).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    eprintln!("failed to connect to MySQL: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    let state = Arc::new(UserState::new(UserService::new(store)));
    let server = HttpServer::new(config, state);

    if let Err(e) = server.start().await {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}
