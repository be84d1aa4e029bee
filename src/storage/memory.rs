//! # In-Memory Storage
//!
//! HashMap-backed store guarded by one coarse reader/writer lock covering
//! the whole map. Reads share the lock; every mutation takes it
//! exclusively. Nothing survives process exit.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::errors::{StoreError, StoreResult};
use super::UserStore;
use crate::users::model::User;

/// A stored record plus the bookkeeping for the newest-first contract
#[derive(Debug, Clone)]
struct Entry {
    user: User,
    created_at: DateTime<Utc>,
    seq: u64,
}

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<String, Entry>,
    next_seq: u64,
}

/// In-memory user store
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Database("lock poisoned".to_string())
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, user: &User) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.users.insert(
            user.id.clone(),
            Entry {
                user: user.clone(),
                created_at: Utc::now(),
                seq,
            },
        );
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<User> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        inner
            .users
            .get(id)
            .map(|entry| entry.user.clone())
            .ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> StoreResult<Vec<User>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        let mut entries: Vec<&Entry> = inner.users.values().collect();
        // Newest first; the insertion sequence breaks creation-time ties
        entries.sort_by(|a, b| (b.created_at, b.seq).cmp(&(a.created_at, a.seq)));
        Ok(entries.into_iter().map(|entry| entry.user.clone()).collect())
    }

    async fn update(&self, id: &str, user: &User) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        match inner.users.get_mut(id) {
            // Creation bookkeeping is kept so updates do not reorder the list
            Some(entry) => {
                entry.user = user.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if inner.users.remove(id).is_none() {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("user {}", id),
            email: format!("{}@example.com", id),
            age: 30,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = MemoryStore::new();

        store.create(&user("u1")).await.unwrap();

        let found = store.get_by_id("u1").await.unwrap();
        assert_eq!(found, user("u1"));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = MemoryStore::new();
        assert_eq!(
            store.get_by_id("missing").await.unwrap_err(),
            StoreError::NotFound
        );
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let store = MemoryStore::new();
        store.create(&user("u1")).await.unwrap();

        let mut changed = user("u1");
        changed.age = 42;
        store.update("u1", &changed).await.unwrap();

        assert_eq!(store.get_by_id("u1").await.unwrap().age, 42);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();
        assert_eq!(
            store.update("missing", &user("missing")).await.unwrap_err(),
            StoreError::NotFound
        );
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = MemoryStore::new();
        store.create(&user("u1")).await.unwrap();

        store.delete("u1").await.unwrap();

        assert_eq!(
            store.get_by_id("u1").await.unwrap_err(),
            StoreError::NotFound
        );
        assert_eq!(store.delete("u1").await.unwrap_err(), StoreError::NotFound);
    }

    #[tokio::test]
    async fn test_get_all_is_newest_first() {
        let store = MemoryStore::new();
        for id in ["u1", "u2", "u3"] {
            store.create(&user(id)).await.unwrap();
        }

        let ids: Vec<_> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();

        assert_eq!(ids, ["u3", "u2", "u1"]);
    }

    #[tokio::test]
    async fn test_update_does_not_reorder_get_all() {
        let store = MemoryStore::new();
        for id in ["u1", "u2"] {
            store.create(&user(id)).await.unwrap();
        }

        let mut changed = user("u1");
        changed.name = "renamed".to_string();
        store.update("u1", &changed).await.unwrap();

        let ids: Vec<_> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, ["u2", "u1"]);
    }

    #[tokio::test]
    async fn test_get_all_on_empty_store() {
        let store = MemoryStore::new();
        assert!(store.get_all().await.unwrap().is_empty());
    }
}
