use async_trait::async_trait;

use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserError {
    #[error("user not found")]
    NotFound,

    #[error("Failed to fetch user: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, user_id: String) -> Result<User, GetUserError>;
}
