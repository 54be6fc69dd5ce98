use crate::domain::errors::RosterError;
use crate::domain::models::user::{NewUser, User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteError, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Database used when the connection URI does not name one.
pub const DEFAULT_DATABASE: &str = "roster";
pub const USERS_COLLECTION: &str = "users";

/// MongoDB server code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Shape of a user as stored in the `users` collection.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        User {
            id: document.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: document.name,
            email: document.email,
        }
    }
}

#[derive(Clone)]
pub struct MongoStorage {
    users: Collection<UserDocument>,
}

/// Opens the store, checks it answers a `ping` and declares the unique email index.
pub async fn connect(uri: &str) -> Result<MongoStorage, RosterError> {
    let client = Client::with_uri_str(uri).await?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    // The driver connects lazily; this is the first real round trip.
    database.run_command(doc! { "ping": 1 }).await?;

    let users = database.collection::<UserDocument>(USERS_COLLECTION);
    let email_index = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    users.create_index(email_index).await?;

    info!("Connected to MongoDB database `{}`", database.name());
    Ok(MongoStorage { users })
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(WriteError {
            code: DUPLICATE_KEY_CODE,
            ..
        }))
    )
}

#[async_trait]
impl Storage for MongoStorage {
    async fn list_users(&self) -> Result<Vec<User>, RosterError> {
        let documents: Vec<UserDocument> = self.users.find(doc! {}).await?.try_collect().await?;
        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, RosterError> {
        let mut document = UserDocument {
            id: None,
            name: user.name,
            email: user.email,
        };
        let result = self.users.insert_one(&document).await.map_err(|err| {
            if is_duplicate_key(&err) {
                RosterError::EmailAlreadyRegistered(document.email.clone())
            } else {
                RosterError::from(err)
            }
        })?;
        document.id = result.inserted_id.as_object_id();
        Ok(document.into())
    }
}
