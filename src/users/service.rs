//! # User Service
//!
//! Business layer between the HTTP handlers and the storage backend.
//! Validates requests, generates ids, applies partial updates, and
//! translates storage errors into domain errors. Holds no state beyond
//! the injected backend; storage is the sole owner of persisted records.

use std::sync::Arc;

use super::errors::{UserError, UserResult};
use super::model::{CreateUserRequest, UpdateUserRequest, User};
use crate::storage::{StoreError, UserStore};

/// User service operating on an injected storage backend
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a new service around the given backend
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Create a user after validating every field.
    ///
    /// Fields are checked in order name, email, age; the first violation
    /// wins. On success a fresh id is generated and the record persisted.
    pub async fn create_user(&self, req: CreateUserRequest) -> UserResult<User> {
        validate_name(&req.name)?;
        validate_email(&req.email)?;
        validate_age(req.age)?;

        let user = User::new(req);
        self.store
            .create(&user)
            .await
            .map_err(|e| storage_error("failed to create user", e))?;

        Ok(user)
    }

    /// Fetch one user by id
    pub async fn get_user_by_id(&self, id: &str) -> UserResult<User> {
        self.store
            .get_by_id(id)
            .await
            .map_err(|e| storage_error("failed to load user", e))
    }

    /// Fetch all users, newest first
    pub async fn get_all_users(&self) -> UserResult<Vec<User>> {
        self.store
            .get_all()
            .await
            .map_err(|e| storage_error("failed to list users", e))
    }

    /// Apply a partial update to an existing user.
    ///
    /// Only present fields are validated and overwritten, each
    /// independently; absent fields keep their stored value. A request
    /// with no fields present returns the record unchanged.
    pub async fn update_user(&self, id: &str, req: UpdateUserRequest) -> UserResult<User> {
        let mut user = self
            .store
            .get_by_id(id)
            .await
            .map_err(|e| storage_error("failed to load user", e))?;

        if let Some(name) = req.name {
            validate_name(&name)?;
            user.name = name;
        }
        if let Some(email) = req.email {
            validate_email(&email)?;
            user.email = email;
        }
        if let Some(age) = req.age {
            validate_age(age)?;
            user.age = age;
        }

        self.store
            .update(id, &user)
            .await
            .map_err(|e| storage_error("failed to update user", e))?;

        Ok(user)
    }

    /// Delete a user by id
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        self.store
            .delete(id)
            .await
            .map_err(|e| storage_error("failed to delete user", e))
    }
}

fn validate_name(name: &str) -> UserResult<()> {
    if name.is_empty() {
        return Err(UserError::InvalidName);
    }
    Ok(())
}

fn validate_email(email: &str) -> UserResult<()> {
    if email.is_empty() || !email.contains('@') {
        return Err(UserError::InvalidEmail);
    }
    Ok(())
}

fn validate_age(age: i32) -> UserResult<()> {
    if age <= 0 {
        return Err(UserError::InvalidAge);
    }
    Ok(())
}

/// Map a storage failure to a domain error, keeping not-found distinguishable
fn storage_error(context: &str, err: StoreError) -> UserError {
    match err {
        StoreError::NotFound => UserError::NotFound,
        other => UserError::Storage(format!("{}: {}", context, other)),
    }
}
