//! # User Model
//!
//! Domain model and request types for the users API.
//!
//! Update requests distinguish "field absent" from "field empty": absent
//! fields deserialize to `None` and leave the stored value untouched.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, generated at creation, immutable
    pub id: String,

    /// Display name (never empty)
    pub name: String,

    /// Email address (always contains '@')
    pub email: String,

    /// Age in years (always > 0)
    pub age: i32,
}

impl User {
    /// Build a new record from a validated creation request, generating the id
    pub fn new(req: CreateUserRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            email: req.email,
            age: req.age,
        }
    }
}

/// User creation request; every field is required
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Partial update request; only present fields overwrite the record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl UpdateUserRequest {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_copies_request_fields() {
        let user = User::new(CreateUserRequest {
            name: "Juan Pérez".to_string(),
            email: "juan@example.com".to_string(),
            age: 30,
        });

        assert!(!user.id.is_empty());
        assert_eq!(user.name, "Juan Pérez");
        assert_eq!(user.email, "juan@example.com");
        assert_eq!(user.age, 30);
    }

    #[test]
    fn test_new_user_generates_distinct_ids() {
        let req = CreateUserRequest {
            name: "a".to_string(),
            email: "a@b".to_string(),
            age: 1,
        };

        let first = User::new(req.clone());
        let second = User::new(req);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_user_json_field_names() {
        let user = User {
            id: "u1".to_string(),
            name: "n".to_string(),
            email: "n@x".to_string(),
            age: 7,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "u1");
        assert_eq!(json["name"], "n");
        assert_eq!(json["email"], "n@x");
        assert_eq!(json["age"], 7);
    }

    #[test]
    fn test_update_request_absent_fields_are_none() {
        let req: UpdateUserRequest = serde_json::from_str(r#"{"age": 31}"#).unwrap();

        assert!(req.name.is_none());
        assert!(req.email.is_none());
        assert_eq!(req.age, Some(31));
        assert!(!req.is_empty());
    }

    #[test]
    fn test_update_request_empty_body_is_empty() {
        let req: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.is_empty());
    }

    #[test]
    fn test_update_request_null_counts_as_absent() {
        let req: UpdateUserRequest = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(req.name.is_none());
        assert!(req.is_empty());
    }

    #[test]
    fn test_create_request_requires_all_fields() {
        let result: Result<CreateUserRequest, _> =
            serde_json::from_str(r#"{"name": "x", "email": "x@y"}"#);
        assert!(result.is_err());
    }
}
