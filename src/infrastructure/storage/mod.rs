use crate::domain::errors::RosterError;
use crate::domain::models::user::{NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Every stored user in the store's natural order.
    async fn list_users(&self) -> Result<Vec<User>, RosterError>;
    /// Persists a new user. Fails with `EmailAlreadyRegistered` rather than overwriting.
    async fn insert_user(&self, user: NewUser) -> Result<User, RosterError>;
}

pub mod in_memory;
pub mod mongo;
