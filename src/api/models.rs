use axum::{Json, response::IntoResponse};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::models::user::NewUser;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    // Absent fields become empty and are rejected as missing by the service.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

/// An error already classified for the client: status plus message, with the cause as details.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
    details: String,
}

impl ApiError {
    pub fn bad_request(message: &'static str, details: impl ToString) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message,
            details: details.to_string(),
        }
    }

    pub fn internal(message: &'static str, details: impl ToString) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
            details: details.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorResponse {
            error: self.message.to_string(),
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}
