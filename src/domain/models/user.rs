use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored user as exposed over HTTP. `id` is the store-assigned identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Fields supplied by a caller before the store assigns an identifier.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}
