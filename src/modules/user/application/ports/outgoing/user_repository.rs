use async_trait::async_trait;

use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// No document with that id, or the id is not a valid ObjectId.
    #[error("user not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user_by_id(&self, id: String) -> Result<User, UserRepositoryError>;
}
