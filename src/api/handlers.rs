use crate::{
    api::models::*,
    domain::{errors::RosterError, models::user::User, services::RosterService},
};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
};
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, warn};

pub const CREATE_USER_FAILED: &str = "Failed to create user";
pub const LIST_USERS_FAILED: &str = "Failed to fetch users";

// Define API routes
pub fn user_routes(service: Arc<RosterService>) -> Router {
    Router::new()
        .route("/", axum::routing::get(list_users).post(create_user))
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All stored users", body = [User]),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
pub async fn list_users(State(service): State<Arc<RosterService>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = service.list_users().await.map_err(|err| {
        error!("Listing users failed: {}", err);
        ApiError::internal(LIST_USERS_FAILED, err)
    })?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "User could not be created", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(service): State<Arc<RosterService>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    // Every failure, whatever its cause, is reported to the caller the same way.
    let reject = |err: RosterError| {
        warn!("Creating user failed: {}", err);
        ApiError::bad_request(CREATE_USER_FAILED, err)
    };
    let Json(req) = payload.map_err(|rejection| reject(RosterError::InvalidInput(rejection.body_text())))?;
    let user = service.create_user(req.into()).await.map_err(reject)?;
    Ok((StatusCode::CREATED, Json(user)))
}
