//! userbase - A layered CRUD HTTP service for user records
//!
//! Request pipeline: HTTP handler -> validation service -> storage backend.
//! The backend (in-memory map or MySQL table) is selected once at process
//! startup and injected into the service behind the `UserStore` trait.

pub mod config;
pub mod http_server;
pub mod storage;
pub mod users;
