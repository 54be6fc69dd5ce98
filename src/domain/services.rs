use crate::domain::errors::RosterError;
use crate::domain::models::user::{NewUser, User};
use crate::infrastructure::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info};

pub struct RosterService {
    storage: Arc<dyn Storage>,
}

impl RosterService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        RosterService { storage }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, RosterError> {
        let users = self.storage.list_users().await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    /// Stores a new user. Both fields are required; uniqueness of `email` is left to the store.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, RosterError> {
        if new_user.name.is_empty() {
            return Err(RosterError::MissingField("name".to_string()));
        }
        if new_user.email.is_empty() {
            return Err(RosterError::MissingField("email".to_string()));
        }
        let user = self.storage.insert_user(new_user).await?;
        info!("Created user {} <{}>", user.id, user.email);
        Ok(user)
    }
}
