//! # User Storage
//!
//! Backend contract for persisting user records, with two implementations:
//! an in-memory map ([`MemoryStore`]) and a MySQL table ([`MySqlStore`]).
//! The backend is chosen once at process startup and injected into the
//! service behind `Arc<dyn UserStore>`; call sites never branch on it.

pub mod errors;
pub mod memory;
pub mod mysql;

use async_trait::async_trait;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mysql::MySqlStore;

use crate::users::model::User;

/// Storage contract shared by all backends.
///
/// Records are keyed by the user id. `get_all` returns records newest
/// first by creation time.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new record keyed by its id
    async fn create(&self, user: &User) -> StoreResult<()>;

    /// Fetch one record, failing with `NotFound` if the id is absent
    async fn get_by_id(&self, id: &str) -> StoreResult<User>;

    /// Fetch all records, newest first
    async fn get_all(&self) -> StoreResult<Vec<User>>;

    /// Replace the fields of an existing record, failing with `NotFound`
    /// if the id is absent
    async fn update(&self, id: &str, user: &User) -> StoreResult<()>;

    /// Remove a record, failing with `NotFound` if the id is absent
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
