//! # Users Domain
//!
//! Model, validation service, and domain errors for the user resource.

pub mod errors;
pub mod model;
pub mod service;

pub use errors::{UserError, UserResult};
pub use model::{CreateUserRequest, UpdateUserRequest, User};
pub use service::UserService;
