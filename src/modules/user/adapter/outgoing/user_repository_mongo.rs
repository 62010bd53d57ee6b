use std::time::Duration;

use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::shared::database::{bounded, null_as_default};
use crate::user::application::domain::entities::User;
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

pub const USER_COLLECTION: &str = "users";

/// Stored shape of the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl UserDocument {
    pub fn to_user(self) -> User {
        User {
            id: self.id.to_hex(),
            name: self.name,
            email: self.email,
        }
    }
}

#[derive(Clone)]
pub struct UserRepositoryMongo {
    collection: Collection<UserDocument>,
    operation_timeout: Duration,
}

impl UserRepositoryMongo {
    pub fn new(db: &Database, operation_timeout: Duration) -> Self {
        Self {
            collection: db.collection::<UserDocument>(USER_COLLECTION),
            operation_timeout,
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryMongo {
    async fn get_user_by_id(&self, id: String) -> Result<User, UserRepositoryError> {
        // A malformed id cannot match any stored document.
        let object_id = ObjectId::parse_str(&id).map_err(|_| UserRepositoryError::NotFound)?;

        bounded(
            self.operation_timeout,
            self.collection.find_one(doc! { "_id": object_id }),
        )
        .await
        .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
        .map(UserDocument::to_user)
        .ok_or(UserRepositoryError::NotFound)
    }
}
