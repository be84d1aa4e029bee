//! # HTTP Server
//!
//! Binds the listener and combines the route modules with CORS and
//! request-trace middleware.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::user_routes::{user_routes, UserState};
use crate::config::Config;

/// HTTP server for the users API
pub struct HttpServer {
    config: Config,
    router: Router,
}

impl HttpServer {
    /// Build the server from configuration and shared user state
    pub fn new(config: Config, state: Arc<UserState>) -> Self {
        let router = build_router(&config, state);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(%addr, "users API listening");
        info!("health check: http://{}/health", addr);
        info!("user endpoints: http://{}/api/v1/users", addr);

        axum::serve(listener, self.router).await
    }
}

/// Build the router with all endpoints and middleware
pub fn build_router(config: &Config, state: Arc<UserState>) -> Router {
    // Configured origins for production, permissive when none are set
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        // Health check at root level
        .route("/health", get(health_handler))
        // User routes under the API prefix
        .nest("/api/v1", user_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check handler
async fn health_handler() -> &'static str {
    "OK"
}
