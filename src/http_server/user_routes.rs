//! User HTTP Routes
//!
//! Endpoints for creating, reading, updating, and deleting users. This
//! layer owns the error-kind to status-code translation; the service and
//! storage layers never see HTTP.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::users::{CreateUserRequest, UpdateUserRequest, User, UserError, UserService};

// ==================
// Shared State
// ==================

/// User state shared across handlers
pub struct UserState {
    pub service: UserService,
}

impl UserState {
    pub fn new(service: UserService) -> Self {
        Self { service }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// User Routes
// ==================

/// Create user routes
pub fn user_routes(state: Arc<UserState>) -> Router {
    Router::new()
        .route("/users", post(create_user_handler))
        .route("/users", get(get_all_users_handler))
        .route("/users/{id}", get(get_user_handler))
        .route("/users/{id}", put(update_user_handler))
        .route("/users/{id}", delete(delete_user_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn error_response(err: UserError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code,
        }),
    )
}

// axum rejects undecodable bodies with 415/422 depending on the cause;
// the API contract is a plain 400 for anything the decoder refuses
fn bad_request(_rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "invalid request body".to_string(),
            code: 400,
        }),
    )
}

// ==================
// User Handlers
// ==================

async fn create_user_handler(
    State(state): State<Arc<UserState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(bad_request)?;

    let user = state
        .service
        .create_user(request)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_all_users_handler(
    State(state): State<Arc<UserState>>,
) -> Result<Json<Vec<User>>, (StatusCode, Json<ErrorResponse>)> {
    let users = state
        .service
        .get_all_users()
        .await
        .map_err(error_response)?;

    Ok(Json(users))
}

async fn get_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    let user = state
        .service
        .get_user_by_id(&id)
        .await
        .map_err(error_response)?;

    Ok(Json(user))
}

async fn update_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(bad_request)?;

    let user = state
        .service
        .update_user(&id, request)
        .await
        .map_err(error_response)?;

    Ok(Json(user))
}

async fn delete_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .service
        .delete_user(&id)
        .await
        .map_err(error_response)?;

    Ok(Json(MessageResponse {
        message: "user deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_carries_status_and_message() {
        let (status, Json(body)) = error_response(UserError::NotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, 404);
        assert_eq!(body.error, "user not found");

        let (status, Json(body)) = error_response(UserError::InvalidEmail);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, 400);
    }
}
