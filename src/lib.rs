pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::api::app;
pub use crate::domain::errors::RosterError;
pub use crate::domain::services::RosterService;
pub use crate::infrastructure::storage::{in_memory::InMemoryStorage, mongo::MongoStorage};

#[cfg(test)]
mod tests; // Include integration tests
