use utoipa::OpenApi;

use crate::{
    api::models::{CreateUserRequest, ErrorResponse},
    domain::models::user::User,
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::list_users, super::handlers::create_user),
    components(schemas(CreateUserRequest, ErrorResponse, User)),
    info(
        title = "Roster API",
        description = "API for listing and registering users",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
