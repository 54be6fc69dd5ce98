
use crate::domain::errors::RosterError;
use crate::domain::models::user::{NewUser, User};
use crate::domain::services::RosterService;
use crate::infrastructure::storage::Storage;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use async_trait::async_trait;
use std::sync::Arc;

pub fn create_test_service() -> Arc<RosterService> {
    let storage = InMemoryStorage::new();
    Arc::new(RosterService::new(Arc::new(storage)))
}

pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
    }
}

/// A store whose every call fails, for exercising error paths.
pub struct UnavailableStorage;

#[async_trait]
impl Storage for UnavailableStorage {
    async fn list_users(&self) -> Result<Vec<User>, RosterError> {
        Err(RosterError::DatabaseError("connection reset".to_string()))
    }

    async fn insert_user(&self, _user: NewUser) -> Result<User, RosterError> {
        Err(RosterError::DatabaseError("connection reset".to_string()))
    }
}
