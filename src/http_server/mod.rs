//! # HTTP Server
//!
//! axum router, middleware, and request handlers for the users API.

pub mod server;
pub mod user_routes;

pub use server::{build_router, HttpServer};
pub use user_routes::UserState;
