pub mod handlers;
pub mod models;
pub mod openapi;

use crate::domain::services::RosterService;
use axum::{Router, extract::DefaultBodyLimit};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Largest JSON request body accepted, in bytes.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Mount point of the user routes.
pub const USERS_PATH: &str = "/api/users";

/// Assembles the full HTTP application around an already connected service.
pub fn app(service: Arc<RosterService>) -> Router {
    Router::new()
        .nest(USERS_PATH, handlers::user_routes(service))
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
