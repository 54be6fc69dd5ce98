use crate::domain::errors::RosterError;
use crate::domain::models::user::{NewUser, User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<Vec<User>>>,
    users_by_email: Arc<RwLock<HashMap<String, String>>>, // email -> id
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(Vec::new())),
            users_by_email: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_users(&self) -> Result<Vec<User>, RosterError> {
        Ok(self.users.read().await.clone())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, RosterError> {
        // Held across the insert so two concurrent creates cannot share an email.
        let mut users_by_email = self.users_by_email.write().await;
        if users_by_email.contains_key(&user.email) {
            return Err(RosterError::EmailAlreadyRegistered(user.email));
        }
        let stored = User {
            id: ObjectId::new().to_hex(),
            name: user.name,
            email: user.email,
        };
        users_by_email.insert(stored.email.clone(), stored.id.clone());
        self.users.write().await.push(stored.clone());
        Ok(stored)
    }
}
